//! Errors

use salvo::http::StatusError;
use tracing::error;

use medovik_app::domain::about::AboutServiceError;

pub(crate) fn into_status_error(error: AboutServiceError) -> StatusError {
    match error {
        AboutServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Invalid about payload")
        }
        AboutServiceError::Sql(source) => {
            error!("about storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
