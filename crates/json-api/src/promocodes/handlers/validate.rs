//! Validate Promo Code Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use medovik_app::domain::promocodes::{PromocodesServiceError, data::PromocodeValidation};

use crate::{
    extensions::*,
    observability::{PromocodeOutcome, record_promocode_check},
    promocodes::{errors::into_status_error, models::DiscountKind},
    responses::ErrorResponse,
};

/// Validate Promo Code Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ValidatePromocodeRequest {
    pub code: String,

    /// Cart subtotal the discount is computed against
    pub subtotal: f64,
}

/// Validate Promo Code Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromocodeValidResponse {
    pub valid: bool,

    /// The code as stored
    pub code: String,
    pub discount_type: DiscountKind,
    pub discount_value: f64,

    /// Amount to take off the subtotal, rounded to two decimals
    pub discount: f64,
}

impl From<PromocodeValidation> for PromocodeValidResponse {
    fn from(validation: PromocodeValidation) -> Self {
        PromocodeValidResponse {
            valid: true,
            code: validation.code,
            discount_type: validation.discount_type.into(),
            discount_value: validation.discount_value,
            discount: validation.discount,
        }
    }
}

/// Validate Promo Code Handler
///
/// Checks a code against a subtotal without recording a use.
#[endpoint(
    tags("promocodes"),
    summary = "Validate Promo Code",
    responses(
        (status_code = StatusCode::OK, description = "Code is usable"),
        (status_code = StatusCode::NOT_FOUND, description = "Promo code not found", body = ErrorResponse),
        (status_code = StatusCode::BAD_REQUEST, description = "Code inactive or used up", body = ErrorResponse),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ValidatePromocodeRequest>,
    depot: &mut Depot,
) -> Result<Json<PromocodeValidResponse>, StatusError> {
    let app = depot.app_context()?;
    let request = json.into_inner();

    let result = app
        .promocodes
        .validate_promocode(request.code, request.subtotal)
        .await;

    if let Some(outcome) = outcome_of(&result) {
        record_promocode_check(outcome);
    }

    Ok(Json(result.map_err(into_status_error)?.into()))
}

/// Storage failures say nothing about the code and are not counted.
fn outcome_of(
    result: &Result<PromocodeValidation, PromocodesServiceError>,
) -> Option<PromocodeOutcome> {
    match result {
        Ok(_) => Some(PromocodeOutcome::Valid),
        Err(PromocodesServiceError::NotFound) => Some(PromocodeOutcome::Unknown),
        Err(PromocodesServiceError::Inactive) => Some(PromocodeOutcome::Inactive),
        Err(PromocodesServiceError::Exhausted) => Some(PromocodeOutcome::Exhausted),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::ACCEPT,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use medovik_app::domain::promocodes::{
        MockPromocodesService, PromocodesServiceError, records::DiscountType,
    };

    use crate::test_helpers::{promocodes_service, storage_error};

    use super::*;

    fn make_service(promocodes: MockPromocodesService) -> Service {
        promocodes_service(
            promocodes,
            Router::with_path("promocodes/validate").post(handler),
        )
    }

    #[tokio::test]
    async fn test_validate_returns_discount() -> TestResult {
        let mut promocodes = MockPromocodesService::new();

        promocodes
            .expect_validate_promocode()
            .once()
            .withf(|code, subtotal| code == "honey10" && (*subtotal - 1000.0).abs() < f64::EPSILON)
            .return_once(|_, _| {
                Ok(PromocodeValidation {
                    code: "HONEY10".to_string(),
                    discount_type: DiscountType::Percent,
                    discount_value: 10.0,
                    discount: 100.0,
                })
            });

        let response: PromocodeValidResponse =
            TestClient::post("http://example.com/promocodes/validate")
                .json(&json!({ "code": "honey10", "subtotal": 1000 }))
                .send(&make_service(promocodes))
                .await
                .take_json()
                .await?;

        assert!(response.valid);
        assert_eq!(response.code, "HONEY10");
        assert_eq!(response.discount_type, DiscountKind::Percent);
        assert!((response.discount - 100.0).abs() < f64::EPSILON);

        Ok(())
    }

    #[tokio::test]
    async fn test_validate_unknown_code_returns_404() -> TestResult {
        let mut promocodes = MockPromocodesService::new();

        promocodes
            .expect_validate_promocode()
            .once()
            .return_once(|_, _| Err(PromocodesServiceError::NotFound));

        let mut res = TestClient::post("http://example.com/promocodes/validate")
            .add_header(ACCEPT, "application/json", true)
            .json(&json!({ "code": "NOPE", "subtotal": 1000 }))
            .send(&make_service(promocodes))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.error.code, 404);
        assert_eq!(body.error.brief, "Promo code not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_validate_exhausted_code_returns_400() -> TestResult {
        let mut promocodes = MockPromocodesService::new();

        promocodes
            .expect_validate_promocode()
            .once()
            .return_once(|_, _| Err(PromocodesServiceError::Exhausted));

        let res = TestClient::post("http://example.com/promocodes/validate")
            .json(&json!({ "code": "HONEY10", "subtotal": 1000 }))
            .send(&make_service(promocodes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[test]
    fn outcomes_skip_storage_failures() {
        assert_eq!(
            outcome_of(&Err(PromocodesServiceError::Inactive)),
            Some(PromocodeOutcome::Inactive)
        );
        assert_eq!(
            outcome_of(&Err(PromocodesServiceError::NotFound)),
            Some(PromocodeOutcome::Unknown)
        );
        assert_eq!(
            outcome_of(&Err(PromocodesServiceError::Sql(storage_error()))),
            None
        );
    }
}
