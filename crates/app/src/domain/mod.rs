//! UrbanAura Domain Concerns

pub mod carts;
pub mod favourites;
pub mod orders;
pub mod products;
pub mod reviews;
