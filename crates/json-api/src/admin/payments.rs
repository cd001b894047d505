//! All Payments Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use urbanaura_app::domain::orders::models::Order;

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// A payment as recorded on its order
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentResponse {
    /// The order the payment belongs to
    pub uuid: Uuid,
    pub email: String,
    pub transaction_id: Option<String>,

    /// Amount charged in pence/cents
    pub price: u64,
    pub date: String,
}

impl From<Order> for PaymentResponse {
    fn from(order: Order) -> Self {
        PaymentResponse {
            uuid: order.uuid.into(),
            email: order.email,
            transaction_id: order.transaction_id,
            price: order.price,
            date: order.date.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentsResponse {
    pub payments: Vec<PaymentResponse>,
}

/// All Payments Handler
///
/// Every payment, newest first.
#[endpoint(
    tags("admin"),
    summary = "List All Payments",
    security(("bearer_auth" = [])),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<PaymentsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let orders = state
        .app
        .orders
        .list_orders()
        .await
        .map_err(into_status_error)?;

    Ok(Json(PaymentsResponse {
        payments: orders.into_iter().map(Into::into).collect(),
    }))
}
