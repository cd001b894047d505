//! Cart Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgExecutor, Postgres, Row, postgres::PgRow, query, query_as};

use crate::{
    database::try_get_count,
    domain::{
        carts::models::{CartItem, CartItemUuid, NewCartItem},
        products::models::ProductUuid,
    },
};

const LIST_CART_ITEMS_SQL: &str = include_str!("sql/list_cart_items.sql");
const MERGE_CART_ITEM_SQL: &str = include_str!("sql/merge_cart_item.sql");
const UPDATE_CART_ITEM_QUANTITY_SQL: &str = include_str!("sql/update_cart_item_quantity.sql");
const DELETE_CART_ITEM_SQL: &str = include_str!("sql/delete_cart_item.sql");
const DELETE_USER_CART_ITEMS_SQL: &str = include_str!("sql/delete_user_cart_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartItemsRepository;

impl PgCartItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_cart_items(
        &self,
        db: impl PgExecutor<'_>,
        user_email: &str,
    ) -> Result<Vec<CartItem>, sqlx::Error> {
        query_as::<Postgres, CartItem>(LIST_CART_ITEMS_SQL)
            .bind(user_email)
            .fetch_all(db)
            .await
    }

    /// Insert a cart row, or add to the quantity of the user's existing row
    /// for the same product.
    pub(crate) async fn merge_cart_item(
        &self,
        db: impl PgExecutor<'_>,
        item: &NewCartItem,
        quantity: i32,
    ) -> Result<CartItem, sqlx::Error> {
        query_as::<Postgres, CartItem>(MERGE_CART_ITEM_SQL)
            .bind(item.uuid.into_uuid())
            .bind(item.product_uuid.into_uuid())
            .bind(&item.user_email)
            .bind(quantity)
            .fetch_one(db)
            .await
    }

    pub(crate) async fn update_quantity(
        &self,
        db: impl PgExecutor<'_>,
        item: CartItemUuid,
        user_email: &str,
        quantity: i32,
    ) -> Result<CartItem, sqlx::Error> {
        query_as::<Postgres, CartItem>(UPDATE_CART_ITEM_QUANTITY_SQL)
            .bind(item.into_uuid())
            .bind(user_email)
            .bind(quantity)
            .fetch_one(db)
            .await
    }

    pub(crate) async fn delete_cart_item(
        &self,
        db: impl PgExecutor<'_>,
        item: CartItemUuid,
        user_email: &str,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_ITEM_SQL)
            .bind(item.into_uuid())
            .bind(user_email)
            .execute(db)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_user_cart_items(
        &self,
        db: impl PgExecutor<'_>,
        user_email: &str,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_USER_CART_ITEMS_SQL)
            .bind(user_email)
            .execute(db)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CartItemUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            user_email: row.try_get("user_email")?,
            quantity: try_get_count(row, "quantity")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
