//! Create Promo Code Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use medovik_app::domain::promocodes::data::NewPromocode;

use crate::{
    extensions::*,
    promocodes::{
        errors::into_status_error,
        models::{DiscountKind, PromocodeResponse},
    },
    responses::ErrorResponse,
};

/// Create Promo Code Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreatePromocodeRequest {
    pub code: String,
    pub discount_type: DiscountKind,
    pub discount_value: f64,
    pub max_uses: i32,
}

impl From<CreatePromocodeRequest> for NewPromocode {
    fn from(request: CreatePromocodeRequest) -> Self {
        NewPromocode {
            code: request.code,
            discount_type: request.discount_type.into(),
            discount_value: request.discount_value,
            max_uses: request.max_uses,
        }
    }
}

/// Create Promo Code Handler
///
/// New codes start active with no recorded uses.
#[endpoint(
    tags("promocodes"),
    summary = "Create Promo Code",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Promo code created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request", body = ErrorResponse),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized", body = ErrorResponse),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePromocodeRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PromocodeResponse>, StatusError> {
    let app = depot.app_context()?;

    let promocode = app.promocodes
        .create_promocode(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(promocode.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use medovik_app::domain::promocodes::{
        MockPromocodesService,
        records::{DiscountType, PromocodeRecord},
    };

    use crate::test_helpers::promocodes_service;

    use super::*;

    fn make_service(promocodes: MockPromocodesService) -> Service {
        promocodes_service(promocodes, Router::with_path("promocodes").post(handler))
    }

    #[tokio::test]
    async fn test_create_promocode_returns_fresh_record() -> TestResult {
        let mut promocodes = MockPromocodesService::new();

        promocodes
            .expect_create_promocode()
            .once()
            .withf(|promocode| {
                promocode.code == "SUMMER"
                    && promocode.discount_type == DiscountType::Fixed
                    && promocode.max_uses == 5
            })
            .return_once(|promocode| {
                Ok(PromocodeRecord {
                    id: "pc1".into(),
                    code: promocode.code,
                    discount_type: promocode.discount_type,
                    discount_value: promocode.discount_value,
                    max_uses: promocode.max_uses,
                    current_uses: 0,
                    is_active: true,
                })
            });

        let mut res = TestClient::post("http://example.com/promocodes")
            .json(&json!({
                "code": "SUMMER",
                "discount_type": "fixed",
                "discount_value": 500,
                "max_uses": 5,
            }))
            .send(&make_service(promocodes))
            .await;

        let response: PromocodeResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(response.current_uses, 0);
        assert!(response.is_active);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_promocode_with_unknown_type_returns_400() -> TestResult {
        let mut promocodes = MockPromocodesService::new();

        promocodes.expect_create_promocode().never();

        let res = TestClient::post("http://example.com/promocodes")
            .json(&json!({
                "code": "SUMMER",
                "discount_type": "bogo",
                "discount_value": 1,
                "max_uses": 5,
            }))
            .send(&make_service(promocodes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
