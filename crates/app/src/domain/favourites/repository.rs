//! Favourites Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgExecutor, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::{
    favourites::models::{Favourite, FavouriteUuid, NewFavourite},
    products::models::ProductUuid,
};

const LIST_FAVOURITES_SQL: &str = include_str!("sql/list_favourites.sql");
const CREATE_FAVOURITE_SQL: &str = include_str!("sql/create_favourite.sql");
const DELETE_FAVOURITE_SQL: &str = include_str!("sql/delete_favourite.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgFavouritesRepository;

impl PgFavouritesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_favourites(
        &self,
        db: impl PgExecutor<'_>,
        user_email: &str,
    ) -> Result<Vec<Favourite>, sqlx::Error> {
        query_as::<Postgres, Favourite>(LIST_FAVOURITES_SQL)
            .bind(user_email)
            .fetch_all(db)
            .await
    }

    /// Insert a favourite. Returns `None` when the user already has this
    /// product in their favourites.
    pub(crate) async fn create_favourite(
        &self,
        db: impl PgExecutor<'_>,
        favourite: &NewFavourite,
    ) -> Result<Option<Favourite>, sqlx::Error> {
        query_as::<Postgres, Favourite>(CREATE_FAVOURITE_SQL)
            .bind(favourite.uuid.into_uuid())
            .bind(favourite.product_uuid.into_uuid())
            .bind(&favourite.user_email)
            .fetch_optional(db)
            .await
    }

    pub(crate) async fn delete_favourite(
        &self,
        db: impl PgExecutor<'_>,
        favourite: FavouriteUuid,
        user_email: &str,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_FAVOURITE_SQL)
            .bind(favourite.into_uuid())
            .bind(user_email)
            .execute(db)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Favourite {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: FavouriteUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            user_email: row.try_get("user_email")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
