//! Review Models

use jiff::Timestamp;

use crate::{domain::products::models::ProductUuid, uuids::TypedUuid};

/// Review UUID
pub type ReviewUuid = TypedUuid<Review>;

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;

/// Highest accepted rating.
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub uuid: ReviewUuid,
    pub product_uuid: ProductUuid,
    pub email: String,
    pub rating: u8,
    pub comment: String,
    pub date: Timestamp,
}

/// New Review
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub uuid: ReviewUuid,
    pub product_uuid: ProductUuid,
    pub email: String,
    pub rating: u8,
    pub comment: String,
}

impl NewReview {
    #[must_use]
    pub fn has_valid_rating(&self) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&self.rating)
    }
}
