//! Add To Cart Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use urbanaura_app::domain::carts::models::{CartItemUuid, NewCartItem};

use crate::{
    carts::{errors::into_status_error, models::CartItemResponse},
    extensions::*,
    state::State,
};

fn default_quantity() -> u32 {
    1
}

/// Add To Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddToCartRequest {
    pub product_uuid: Uuid,
    pub user_email: String,

    /// Defaults to 1
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Add To Cart Handler
///
/// Adding a product already in the cart increases the existing row's
/// quantity. The response carries the stored row.
#[endpoint(
    tags("carts"),
    summary = "Add To Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Cart row stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Not your cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddToCartRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();
    let user_email = depot.identity_or_401()?.owner_or_403(&request.user_email)?;

    if request.quantity == 0 {
        return Err(StatusError::bad_request().brief("Quantity must be at least 1"));
    }

    let item = state
        .app
        .carts
        .add_item(NewCartItem {
            uuid: CartItemUuid::new(),
            product_uuid: request.product_uuid.into(),
            user_email,
            quantity: request.quantity,
        })
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/cart/{}", item.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(item.into()))
}
