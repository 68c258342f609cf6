//! Auth service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("incorrect credentials")]
    InvalidCredentials,
}
