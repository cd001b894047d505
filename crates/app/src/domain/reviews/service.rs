//! Reviews service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        products::models::ProductUuid,
        reviews::{
            errors::ReviewsServiceError,
            models::{NewReview, Review, ReviewUuid},
            repository::PgReviewsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgReviewsService {
    db: Db,
    repository: PgReviewsRepository,
}

impl PgReviewsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgReviewsRepository::new(),
        }
    }
}

#[async_trait]
impl ReviewsService for PgReviewsService {
    async fn list_reviews(
        &self,
        product: Option<ProductUuid>,
    ) -> Result<Vec<Review>, ReviewsServiceError> {
        Ok(self
            .repository
            .list_reviews(self.db.pool(), product)
            .await?)
    }

    async fn create_review(&self, review: NewReview) -> Result<Review, ReviewsServiceError> {
        if !review.has_valid_rating() {
            return Err(ReviewsServiceError::InvalidRating);
        }

        Ok(self
            .repository
            .create_review(self.db.pool(), &review)
            .await?)
    }

    async fn delete_review(
        &self,
        review: ReviewUuid,
        author: Option<String>,
    ) -> Result<(), ReviewsServiceError> {
        let rows_affected = self
            .repository
            .delete_review(self.db.pool(), review, author.as_deref())
            .await?;

        if rows_affected == 0 {
            return Err(ReviewsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// Reviews newest first, optionally only those of one product.
    async fn list_reviews(
        &self,
        product: Option<ProductUuid>,
    ) -> Result<Vec<Review>, ReviewsServiceError>;

    async fn create_review(&self, review: NewReview) -> Result<Review, ReviewsServiceError>;

    /// Delete a review. When `author` is given the review must belong to
    /// them; `None` deletes regardless of author.
    async fn delete_review(
        &self,
        review: ReviewUuid,
        author: Option<String>,
    ) -> Result<(), ReviewsServiceError>;
}
