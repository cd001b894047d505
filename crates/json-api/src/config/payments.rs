//! Payments Config

use clap::Args;
use urbanaura_app::payments::{DEFAULT_STRIPE_API_BASE, StripeConfig};

/// `Stripe` settings.
#[derive(Debug, Args)]
pub struct PaymentsConfig {
    /// `Stripe` secret API key
    #[arg(long, env = "STRIPE_SECRET_KEY", hide_env_values = true)]
    pub stripe_secret_key: String,

    /// `Stripe` API base URL
    #[arg(long, env = "STRIPE_API_BASE", default_value = DEFAULT_STRIPE_API_BASE)]
    pub stripe_api_base: String,

    /// Currency charged for payment intents
    #[arg(long, env = "STRIPE_CURRENCY", default_value = "usd")]
    pub stripe_currency: String,
}

impl From<PaymentsConfig> for StripeConfig {
    fn from(config: PaymentsConfig) -> Self {
        Self {
            api_base: config.stripe_api_base,
            secret_key: config.stripe_secret_key,
            currency: config.stripe_currency.to_ascii_lowercase(),
        }
    }
}
