//! Cart Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Cart Index Handler
///
/// Returns the cart of the user with the given email.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart rows"),
        (status_code = StatusCode::FORBIDDEN, description = "Not your cart"),
    ),
)]
pub(crate) async fn handler(
    email: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let email = depot.identity_or_401()?.owner_or_403(&email.into_inner())?;

    let items = state
        .app
        .carts
        .list_items(&email)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse {
        items: items.into_iter().map(Into::into).collect(),
    }))
}
