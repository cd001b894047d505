//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgExecutor, Postgres, Row, postgres::PgRow, query_as, types::Json};

use crate::{
    database::try_get_amount,
    domain::orders::models::{NewOrder, Order, OrderItem, OrderStatus, OrderUuid},
};

const LIST_USER_ORDERS_SQL: &str = include_str!("sql/list_user_orders.sql");
const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const UPDATE_ORDER_STATUS_SQL: &str = include_str!("sql/update_order_status.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_user_orders(
        &self,
        db: impl PgExecutor<'_>,
        email: &str,
    ) -> Result<Vec<Order>, sqlx::Error> {
        query_as::<Postgres, Order>(LIST_USER_ORDERS_SQL)
            .bind(email)
            .fetch_all(db)
            .await
    }

    pub(crate) async fn list_orders(
        &self,
        db: impl PgExecutor<'_>,
    ) -> Result<Vec<Order>, sqlx::Error> {
        query_as::<Postgres, Order>(LIST_ORDERS_SQL).fetch_all(db).await
    }

    pub(crate) async fn create_order(
        &self,
        db: impl PgExecutor<'_>,
        order: &NewOrder,
        price: i64,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(CREATE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(&order.email)
            .bind(order.transaction_id.as_deref())
            .bind(price)
            .bind(Json(&order.items))
            .bind(order.status.as_str())
            .bind(order.date.map(SqlxTimestamp::from))
            .fetch_one(db)
            .await
    }

    pub(crate) async fn update_status(
        &self,
        db: impl PgExecutor<'_>,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(UPDATE_ORDER_STATUS_SQL)
            .bind(order.into_uuid())
            .bind(status.as_str())
            .fetch_one(db)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;
        let status = status
            .parse::<OrderStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            email: row.try_get("email")?,
            transaction_id: row.try_get("transaction_id")?,
            price: try_get_amount(row, "price")?,
            items: row.try_get::<Json<Vec<OrderItem>>, _>("items")?.0,
            status,
            date: row.try_get::<SqlxTimestamp, _>("date")?.to_jiff(),
        })
    }
}
