//! Place Order Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use urbanaura_app::domain::orders::models::{NewOrder, OrderUuid};

use crate::{
    extensions::*,
    orders::{
        errors::into_status_error,
        models::{OrderItemBody, parse_status},
    },
    state::State,
};

/// Place Order Request
///
/// Sent once the customer has paid.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PlaceOrderRequest {
    pub email: String,

    #[serde(default)]
    pub transaction_id: Option<String>,

    /// Amount charged in pence/cents
    pub price: u64,

    #[serde(default)]
    pub items: Vec<OrderItemBody>,

    /// Defaults to `pending`
    #[serde(default)]
    pub status: Option<String>,

    /// RFC 3339 timestamp, defaults to now
    #[serde(default)]
    pub date: Option<String>,
}

impl PlaceOrderRequest {
    fn into_new_order(self) -> Result<NewOrder, StatusError> {
        let status = self
            .status
            .as_deref()
            .map(parse_status)
            .transpose()?
            .unwrap_or_default();

        let date = self
            .date
            .as_deref()
            .map(str::parse::<Timestamp>)
            .transpose()
            .or_400("Invalid order date")?;

        Ok(NewOrder {
            uuid: OrderUuid::new(),
            email: self.email,
            transaction_id: self.transaction_id,
            price: self.price,
            items: self.items.into_iter().map(Into::into).collect(),
            status,
            date,
        })
    }
}

/// Order Placed Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderPlacedResponse {
    pub uuid: Uuid,

    /// Cart rows removed from the customer's cart
    pub deleted_cart_items: u64,
}

/// Place Order Handler
///
/// Stores the order and empties the customer's cart.
#[endpoint(
    tags("orders"),
    summary = "Place Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Not your order"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<PlaceOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderPlacedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let mut request = json.into_inner();

    if request.email.trim().is_empty() {
        return Err(StatusError::bad_request().brief("invalid email"));
    }

    request.email = depot.identity_or_401()?.owner_or_403(&request.email)?;

    let placed = state
        .app
        .orders
        .place_order(request.into_new_order()?)
        .await
        .map_err(into_status_error)?;

    info!(
        order = %placed.order.uuid,
        status = %placed.order.status,
        deleted_cart_items = placed.deleted_cart_items,
        "order placed"
    );

    res.status_code(StatusCode::CREATED);

    Ok(Json(OrderPlacedResponse {
        uuid: placed.order.uuid.into(),
        deleted_cart_items: placed.deleted_cart_items,
    }))
}
