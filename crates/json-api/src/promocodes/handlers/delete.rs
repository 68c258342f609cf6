//! Delete Promo Code Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    promocodes::errors::into_status_error,
    responses::{ErrorResponse, SuccessResponse},
};

/// Delete Promo Code Handler
#[endpoint(
    tags("promocodes"),
    summary = "Delete Promo Code",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Promo code deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Promo code not found", body = ErrorResponse),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized", body = ErrorResponse),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<SuccessResponse>, StatusError> {
    let app = depot.app_context()?;

    app.promocodes
        .delete_promocode(id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(SuccessResponse::ok()))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use medovik_app::domain::promocodes::{MockPromocodesService, PromocodesServiceError};

    use crate::test_helpers::promocodes_service;

    use super::*;

    #[tokio::test]
    async fn test_delete_missing_promocode_returns_404() -> TestResult {
        let mut promocodes = MockPromocodesService::new();

        promocodes
            .expect_delete_promocode()
            .once()
            .withf(|id| id.as_str() == "gone")
            .return_once(|_| Err(PromocodesServiceError::NotFound));

        let service = promocodes_service(
            promocodes,
            Router::with_path("promocodes/{id}").delete(handler),
        );

        let res = TestClient::delete("http://example.com/promocodes/gone")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
