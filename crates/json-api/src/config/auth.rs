//! Auth Config

use clap::Args;
use urbanaura_app::auth::DEFAULT_TOKEN_TTL_DAYS;

/// Access token settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Shared secret used to sign access tokens
    #[arg(long, env = "ACCESS_TOKEN_SECRET", hide_env_values = true)]
    pub access_token_secret: String,

    /// Access token lifetime in days
    #[arg(long, env = "ACCESS_TOKEN_TTL_DAYS", default_value_t = DEFAULT_TOKEN_TTL_DAYS)]
    pub access_token_ttl_days: u32,

    /// Comma separated emails granted the admin role
    #[arg(long, env = "ADMIN_EMAILS", value_delimiter = ',')]
    pub admin_emails: Vec<String>,
}

impl From<AuthConfig> for urbanaura_app::auth::AuthConfig {
    fn from(config: AuthConfig) -> Self {
        Self {
            secret: config.access_token_secret,
            ttl_days: config.access_token_ttl_days,
            admin_emails: config.admin_emails,
        }
    }
}
