//! Cart HTTP Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use urbanaura_app::domain::carts::models::CartItem;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    pub uuid: Uuid,
    pub product_uuid: Uuid,
    pub user_email: String,
    pub quantity: u32,

    /// The date and time the product was first added
    pub created_at: String,
    pub updated_at: String,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        CartItemResponse {
            uuid: item.uuid.into(),
            product_uuid: item.product_uuid.into(),
            user_email: item.user_email,
            quantity: item.quantity,
            created_at: item.created_at.to_string(),
            updated_at: item.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Cart rows, oldest first
    pub items: Vec<CartItemResponse>,
}
