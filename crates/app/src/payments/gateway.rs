//! Payment gateway seam.

use async_trait::async_trait;
use mockall::automock;

use crate::payments::StripeError;

/// A payment intent created with the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntent {
    pub id: String,

    /// Secret handed to the browser to confirm the payment.
    pub client_secret: String,
}

#[automock]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Start a card payment for `amount` minor units.
    async fn create_payment_intent(&self, amount: u64) -> Result<PaymentIntent, StripeError>;
}
