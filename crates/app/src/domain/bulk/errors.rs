//! Bulk service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BulkServiceError {
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
