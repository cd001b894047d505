//! Favourite Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use urbanaura_app::domain::favourites::models::Favourite;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FavouriteResponse {
    pub uuid: Uuid,
    pub product_uuid: Uuid,
    pub user_email: String,
    pub created_at: String,
}

impl From<Favourite> for FavouriteResponse {
    fn from(favourite: Favourite) -> Self {
        FavouriteResponse {
            uuid: favourite.uuid.into(),
            product_uuid: favourite.product_uuid.into(),
            user_email: favourite.user_email,
            created_at: favourite.created_at.to_string(),
        }
    }
}
