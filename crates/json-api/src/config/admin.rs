//! Admin Config

use clap::Args;
use medovik_app::auth::AdminCredentials;

/// The single admin credential pair accepted by HTTP Basic auth.
#[derive(Args)]
pub struct AdminConfig {
    /// Admin username
    #[arg(long = "admin-username", env = "ADMIN_USERNAME", hide_env_values = true)]
    pub username: String,

    /// Admin password
    #[arg(long = "admin-password", env = "ADMIN_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl AdminConfig {
    /// Move the configured pair into zeroizing storage.
    #[must_use]
    pub fn into_credentials(self) -> AdminCredentials {
        AdminCredentials::new(self.username, self.password)
    }
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("username", &"<redacted>")
            .field("password", &"<redacted>")
            .finish()
    }
}
