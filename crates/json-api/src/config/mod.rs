//! Server configuration module

use clap::Parser;

use crate::config::{
    admin::AdminConfig, db::DatabaseConfig, observability::LoggingConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod admin;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Medovik JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "medovik-json", about = "Medovik storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Admin credential settings.
    #[command(flatten)]
    pub admin: AdminConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const REQUIRED: [&str; 7] = [
        "medovik-json",
        "--database-url",
        "postgres://localhost/medovik",
        "--admin-username",
        "admin",
        "--admin-password",
        "hunter2",
    ];

    #[test]
    fn defaults_bind_all_interfaces_on_8001() -> TestResult {
        let config = ServerConfig::try_parse_from(REQUIRED)?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8001");
        assert_eq!(config.server.cors_origins, vec!["*".to_string()]);
        assert_eq!(config.logging.slow_request_threshold_ms, 1_000);

        Ok(())
    }

    #[test]
    fn cors_origins_split_on_commas() -> TestResult {
        let args = REQUIRED.into_iter().chain([
            "--cors-origins",
            "https://medovik.kz,http://localhost:3000",
        ]);

        let config = ServerConfig::try_parse_from(args)?;

        assert_eq!(
            config.server.cors_origins,
            vec![
                "https://medovik.kz".to_string(),
                "http://localhost:3000".to_string()
            ]
        );

        Ok(())
    }

    #[test]
    fn admin_credentials_are_required() {
        let result = ServerConfig::try_parse_from(REQUIRED.into_iter().take(3));

        assert!(result.is_err(), "missing admin credentials must fail");
    }
}
