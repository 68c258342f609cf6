//! Errors

use salvo::http::StatusError;
use tracing::error;

use medovik_app::domain::promocodes::PromocodesServiceError;

pub(crate) fn into_status_error(error: PromocodesServiceError) -> StatusError {
    match error {
        PromocodesServiceError::NotFound => {
            StatusError::not_found().brief("Promo code not found")
        }
        PromocodesServiceError::Inactive => {
            StatusError::bad_request().brief("Promo code is not active")
        }
        PromocodesServiceError::Exhausted => {
            StatusError::bad_request().brief("Promo code usage limit reached")
        }
        PromocodesServiceError::MissingRequiredData | PromocodesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid promo code payload")
        }
        PromocodesServiceError::Sql(source) => {
            error!("promo code storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn unusable_codes_are_bad_requests() {
        for error in [
            PromocodesServiceError::Inactive,
            PromocodesServiceError::Exhausted,
        ] {
            assert_eq!(into_status_error(error).code, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn unknown_code_is_not_found() {
        let error = into_status_error(PromocodesServiceError::NotFound);

        assert_eq!(error.code, StatusCode::NOT_FOUND);
        assert_eq!(error.brief, "Promo code not found");
    }
}
