//! Stripe REST client for payment intents.

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::payments::{PaymentGateway, PaymentIntent};

/// Default Stripe API endpoint.
pub const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";

/// Configuration for talking to Stripe.
#[derive(Clone)]
pub struct StripeConfig {
    /// API base URL, e.g. `"https://api.stripe.com"`.
    pub api_base: String,

    /// Secret API key.
    pub secret_key: String,

    /// Three-letter ISO currency code, lowercase.
    pub currency: String,
}

impl fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripeConfig")
            .field("api_base", &self.api_base)
            .field("secret_key", &"**redacted**")
            .field("currency", &self.currency)
            .finish()
    }
}

/// HTTP client for the Stripe payment intents API.
#[derive(Debug, Clone)]
pub struct StripeClient {
    config: StripeConfig,
    http: Client,
}

impl StripeClient {
    #[must_use]
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeClient {
    async fn create_payment_intent(&self, amount: u64) -> Result<PaymentIntent, StripeError> {
        let url = format!(
            "{}/v1/payment_intents",
            self.config.api_base.trim_end_matches('/')
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.secret_key)
            .form(&payment_intent_form(amount, &self.config.currency))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.map_err(StripeError::Http)?;

            return Err(StripeError::UnexpectedResponse(format!(
                "payment intent request failed with status {status}: {text}"
            )));
        }

        let parsed: PaymentIntentResponse = response.json().await?;

        debug!(payment_intent = %parsed.id, amount, "created payment intent");

        Ok(PaymentIntent {
            id: parsed.id,
            client_secret: parsed.client_secret,
        })
    }
}

/// Form fields for `POST /v1/payment_intents`.
fn payment_intent_form(amount: u64, currency: &str) -> Vec<(&'static str, String)> {
    vec![
        ("amount", amount.to_string()),
        ("currency", currency.to_string()),
        ("payment_method_types[]", "card".to_string()),
    ]
}

#[derive(Debug, Deserialize)]
struct PaymentIntentResponse {
    id: String,
    client_secret: String,
}

/// Errors that can occur when communicating with Stripe.
#[derive(Debug, Error)]
pub enum StripeError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Stripe returned a non-2xx response.
    #[error("unexpected response from Stripe: {0}")]
    UnexpectedResponse(String),
}
