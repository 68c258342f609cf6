//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use tracing::warn;

use crate::auth::{AdminCredentials, AuthServiceError};

/// Checks admin credentials against the configured pair.
///
/// Holds no session state: every call re-evaluates the supplied pair.
#[derive(Debug, Clone)]
pub struct ConfiguredAuthService {
    credentials: AdminCredentials,
}

impl ConfiguredAuthService {
    #[must_use]
    pub fn new(credentials: AdminCredentials) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl AuthService for ConfiguredAuthService {
    async fn authenticate_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(), AuthServiceError> {
        if self.credentials.matches(username, password) {
            return Ok(());
        }

        warn!("rejected admin credentials");

        Err(AuthServiceError::InvalidCredentials)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Succeeds when the pair matches the configured admin credentials.
    async fn authenticate_admin(&self, username: &str, password: &str)
    -> Result<(), AuthServiceError>;
}
