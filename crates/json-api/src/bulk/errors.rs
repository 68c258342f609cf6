//! Errors

use salvo::http::StatusError;
use tracing::error;

use medovik_app::domain::bulk::BulkServiceError;

pub(crate) fn into_status_error(error: BulkServiceError) -> StatusError {
    match error {
        BulkServiceError::Sql(source) => {
            error!("bulk operation failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
