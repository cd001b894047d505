//! Favourite Models

use jiff::Timestamp;

use crate::{domain::products::models::ProductUuid, uuids::TypedUuid};

/// Favourite UUID
pub type FavouriteUuid = TypedUuid<Favourite>;

/// A product a user has bookmarked.
#[derive(Debug, Clone, PartialEq)]
pub struct Favourite {
    pub uuid: FavouriteUuid,
    pub product_uuid: ProductUuid,
    pub user_email: String,
    pub created_at: Timestamp,
}

/// New Favourite
#[derive(Debug, Clone, PartialEq)]
pub struct NewFavourite {
    pub uuid: FavouriteUuid,
    pub product_uuid: ProductUuid,
    pub user_email: String,
}
