//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::{error, warn};

/// Map any error to an HTTP error, logging it on the way.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &str) -> Result<T, StatusError>;

    fn or_400(self, brief: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }

    fn or_400(self, brief: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            warn!("{brief}: {error}");

            StatusError::bad_request().brief(brief)
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn or_400_keeps_the_brief() {
        let result: Result<(), &str> = Err("boom");

        let Err(error) = result.or_400("Unknown collection") else {
            panic!("expected an error");
        };

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(error.brief, "Unknown collection");
    }

    #[test]
    fn or_500_hides_the_cause() {
        let result: Result<(), &str> = Err("connection refused");

        let Err(error) = result.or_500("failed to list orders") else {
            panic!("expected an error");
        };

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            !error.brief.contains("connection refused"),
            "storage detail leaked: {}",
            error.brief
        );
    }
}
