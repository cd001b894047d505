//! Order History Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrdersResponse},
    state::State,
};

/// Order History Handler
///
/// Returns the orders (payments) of the user with the given email.
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Orders, newest first"),
        (status_code = StatusCode::BAD_REQUEST, description = "invalid email"),
        (status_code = StatusCode::FORBIDDEN, description = "Not your orders"),
    ),
)]
pub(crate) async fn handler(
    email: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let email = email.into_inner();

    if email.trim().is_empty() {
        return Err(StatusError::bad_request().brief("invalid email"));
    }

    let email = depot.identity_or_401()?.owner_or_403(&email)?;

    let orders = state
        .app
        .orders
        .list_orders_for(&email)
        .await
        .map_err(into_status_error)?;

    Ok(Json(orders.into()))
}
