//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgExecutor, Postgres, Row, postgres::PgRow, query, query_as, types::Json};

use crate::{
    database::try_get_amount,
    domain::products::models::{
        NewProduct, Product, ProductDetails, ProductFilter, ProductSort, ProductUuid,
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const SEARCH_PRODUCTS_SQL: &str = include_str!("sql/search_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

/// Column values for a partial update, already converted to storage types.
#[derive(Debug)]
pub(crate) struct ProductChanges<'a> {
    pub title: Option<&'a str>,
    pub sub_title: Option<&'a str>,
    pub category: Option<&'a str>,
    pub price: Option<i64>,
    pub details: &'a ProductDetails,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        db: impl PgExecutor<'_>,
        filter: &ProductFilter,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .bind(filter.category.as_deref())
            .bind(filter.sort.map(ProductSort::as_sql))
            .fetch_all(db)
            .await
    }

    pub(crate) async fn search_products(
        &self,
        db: impl PgExecutor<'_>,
        pattern: &str,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(SEARCH_PRODUCTS_SQL)
            .bind(pattern)
            .fetch_all(db)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        db: impl PgExecutor<'_>,
        product: ProductUuid,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(db)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        db: impl PgExecutor<'_>,
        product: &NewProduct,
        price: i64,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(&product.title)
            .bind(product.sub_title.as_deref())
            .bind(&product.category)
            .bind(price)
            .bind(Json(&product.details))
            .fetch_one(db)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        db: impl PgExecutor<'_>,
        product: ProductUuid,
        changes: ProductChanges<'_>,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(changes.title)
            .bind(changes.sub_title)
            .bind(changes.category)
            .bind(changes.price)
            .bind(Json(changes.details))
            .fetch_one(db)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        db: impl PgExecutor<'_>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(db)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            title: row.try_get("title")?,
            sub_title: row.try_get("sub_title")?,
            category: row.try_get("category")?,
            price: try_get_amount(row, "price")?,
            details: row.try_get::<Json<ProductDetails>, _>("details")?.0,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
