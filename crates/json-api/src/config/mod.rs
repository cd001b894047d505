//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig, db::DatabaseConfig, observability::LoggingConfig,
    payments::PaymentsConfig, server::ServerRuntimeConfig,
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod payments;
pub(crate) mod server;

/// `UrbanAura` JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "urbanaura-json", about = "UrbanAura JSON API Server", long_about = None)]
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

    /// Access token settings.
    #[command(flatten)]
    pub auth: AuthConfig,

    /// Payment gateway settings.
    #[command(flatten)]
    pub payments: PaymentsConfig,
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
        "urbanaura-json",
        "--database-url",
        "postgres://localhost/urbanaura",
        "--access-token-secret",
        "secret",
        "--stripe-secret-key",
        "sk_test_123",
    ];

    #[test]
    fn defaults_apply_when_only_required_values_given() -> TestResult {
        let config = ServerConfig::try_parse_from(REQUIRED)?;

        assert_eq!(config.socket_addr(), "0.0.0.0:5000");
        assert_eq!(config.auth.access_token_ttl_days, 30);
        assert!(config.auth.admin_emails.is_empty(), "no admins by default");
        assert_eq!(config.payments.stripe_api_base, "https://api.stripe.com");
        assert_eq!(config.payments.stripe_currency, "usd");
        assert_eq!(config.logging.slow_request_threshold_ms, 1_000);

        Ok(())
    }

    #[test]
    fn admin_emails_split_on_commas() -> TestResult {
        let args = REQUIRED
            .into_iter()
            .chain(["--admin-emails", "root@example.com,ops@example.com"]);

        let config = ServerConfig::try_parse_from(args)?;

        assert_eq!(
            config.auth.admin_emails,
            vec!["root@example.com".to_string(), "ops@example.com".to_string()]
        );

        Ok(())
    }

    #[test]
    fn missing_secret_is_an_error() {
        let result = ServerConfig::try_parse_from([
            "urbanaura-json",
            "--database-url",
            "postgres://localhost/urbanaura",
            "--stripe-secret-key",
            "sk_test_123",
        ]);

        assert!(result.is_err(), "access token secret is required");
    }
}
