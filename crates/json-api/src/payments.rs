//! Create Payment Intent Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{extensions::*, state::State};

/// Create Payment Intent Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentIntentRequest {
    /// Amount to charge in pence/cents
    pub price: u64,
}

/// Create Payment Intent Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentIntentResponse {
    /// Secret the browser uses to confirm the card payment
    pub client_secret: String,
}

/// Create Payment Intent Handler
///
/// Starts a card payment with `Stripe` for the given amount.
#[endpoint(
    tags("payments"),
    summary = "Create Payment Intent",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Payment intent created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Payment gateway failure"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<PaymentIntentRequest>,
    depot: &mut Depot,
) -> Result<Json<PaymentIntentResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let amount = json.into_inner().price;

    if amount == 0 {
        return Err(StatusError::bad_request().brief("Price must be greater than zero"));
    }

    let intent = state
        .app
        .payments
        .create_payment_intent(amount)
        .await
        .map_err(|source| {
            error!("failed to create payment intent: {source}");

            StatusError::bad_gateway().brief("Payment provider unavailable")
        })?;

    info!(payment_intent = %intent.id, amount, "payment intent created");

    Ok(Json(PaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use urbanaura_app::payments::{MockPaymentGateway, PaymentIntent, StripeError};

    use crate::test_helpers::Mocks;

    use super::*;

    fn make_service(payments: MockPaymentGateway) -> Service {
        Mocks {
            payments,
            ..Mocks::default()
        }
        .user_service(Router::with_path("create-payment-intent").post(handler))
    }

    #[tokio::test]
    async fn test_returns_client_secret() -> TestResult {
        let mut payments = MockPaymentGateway::new();

        payments
            .expect_create_payment_intent()
            .once()
            .withf(|amount| *amount == 2599)
            .return_once(|_| {
                Ok(PaymentIntent {
                    id: "pi_123".to_string(),
                    client_secret: "pi_123_secret_456".to_string(),
                })
            });

        let mut res = TestClient::post("http://example.com/create-payment-intent")
            .json(&json!({ "price": 2599 }))
            .send(&make_service(payments))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: PaymentIntentResponse = res.take_json().await?;

        assert_eq!(body.client_secret, "pi_123_secret_456");

        Ok(())
    }

    #[tokio::test]
    async fn test_zero_price_returns_400() -> TestResult {
        let mut payments = MockPaymentGateway::new();

        payments.expect_create_payment_intent().never();

        let res = TestClient::post("http://example.com/create-payment-intent")
            .json(&json!({ "price": 0 }))
            .send(&make_service(payments))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_gateway_failure_returns_502() -> TestResult {
        let mut payments = MockPaymentGateway::new();

        payments
            .expect_create_payment_intent()
            .once()
            .return_once(|_| Err(StripeError::UnexpectedResponse("card_error".to_string())));

        let res = TestClient::post("http://example.com/create-payment-intent")
            .json(&json!({ "price": 100 }))
            .send(&make_service(payments))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_GATEWAY));

        Ok(())
    }
}
