//! Review Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use urbanaura_app::domain::reviews::models::Review;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewResponse {
    pub uuid: Uuid,
    pub product_uuid: Uuid,

    /// Reviewer
    pub email: String,

    /// 1 to 5
    pub rating: u8,
    pub comment: String,
    pub date: String,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        ReviewResponse {
            uuid: review.uuid.into(),
            product_uuid: review.product_uuid.into(),
            email: review.email,
            rating: review.rating,
            comment: review.comment,
            date: review.date.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use urbanaura_app::domain::{
        products::models::ProductUuid,
        reviews::models::{Review, ReviewUuid},
    };

    pub(crate) fn make_review(product_uuid: ProductUuid, email: &str, rating: u8) -> Review {
        Review {
            uuid: ReviewUuid::new(),
            product_uuid,
            email: email.to_string(),
            rating,
            comment: "Fits well".to_string(),
            date: Timestamp::UNIX_EPOCH,
        }
    }
}

#[cfg(test)]
pub(crate) use tests::make_review;
