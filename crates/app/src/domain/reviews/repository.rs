//! Reviews Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgExecutor, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::{
    products::models::ProductUuid,
    reviews::models::{NewReview, Review, ReviewUuid},
};

const LIST_REVIEWS_SQL: &str = include_str!("sql/list_reviews.sql");
const CREATE_REVIEW_SQL: &str = include_str!("sql/create_review.sql");
const DELETE_REVIEW_SQL: &str = include_str!("sql/delete_review.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgReviewsRepository;

impl PgReviewsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_reviews(
        &self,
        db: impl PgExecutor<'_>,
        product: Option<ProductUuid>,
    ) -> Result<Vec<Review>, sqlx::Error> {
        query_as::<Postgres, Review>(LIST_REVIEWS_SQL)
            .bind(product.map(ProductUuid::into_uuid))
            .fetch_all(db)
            .await
    }

    pub(crate) async fn create_review(
        &self,
        db: impl PgExecutor<'_>,
        review: &NewReview,
    ) -> Result<Review, sqlx::Error> {
        query_as::<Postgres, Review>(CREATE_REVIEW_SQL)
            .bind(review.uuid.into_uuid())
            .bind(review.product_uuid.into_uuid())
            .bind(&review.email)
            .bind(i16::from(review.rating))
            .bind(&review.comment)
            .fetch_one(db)
            .await
    }

    /// Delete a review. With an `author`, only that author's review matches.
    pub(crate) async fn delete_review(
        &self,
        db: impl PgExecutor<'_>,
        review: ReviewUuid,
        author: Option<&str>,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_REVIEW_SQL)
            .bind(review.into_uuid())
            .bind(author)
            .execute(db)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Review {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let rating: i16 = row.try_get("rating")?;
        let rating = u8::try_from(rating).map_err(|e| sqlx::Error::ColumnDecode {
            index: "rating".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: ReviewUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            email: row.try_get("email")?,
            rating,
            comment: row.try_get("comment")?,
            date: row.try_get::<SqlxTimestamp, _>("date")?.to_jiff(),
        })
    }
}
