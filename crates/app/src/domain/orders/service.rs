//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        carts::repository::PgCartItemsRepository,
        orders::{
            errors::OrdersServiceError,
            models::{NewOrder, Order, OrderStatus, OrderUuid, PlacedOrder},
            repository::PgOrdersRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
    cart_items: PgCartItemsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
            cart_items: PgCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn list_orders_for(&self, email: &str) -> Result<Vec<Order>, OrdersServiceError> {
        Ok(self
            .repository
            .list_user_orders(self.db.pool(), email)
            .await?)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        Ok(self.repository.list_orders(self.db.pool()).await?)
    }

    async fn place_order(&self, order: NewOrder) -> Result<PlacedOrder, OrdersServiceError> {
        let price = i64::try_from(order.price)?;

        let mut tx = self.db.begin().await?;

        let order = self.repository.create_order(&mut *tx, &order, price).await?;

        let deleted_cart_items = self
            .cart_items
            .delete_user_cart_items(&mut *tx, &order.email)
            .await?;

        tx.commit().await?;

        debug!(
            order = %order.uuid,
            deleted_cart_items,
            "order placed and cart cleared"
        );

        Ok(PlacedOrder {
            order,
            deleted_cart_items,
        })
    }

    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        Ok(self
            .repository
            .update_status(self.db.pool(), order, status)
            .await?)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// A customer's orders, newest first.
    async fn list_orders_for(&self, email: &str) -> Result<Vec<Order>, OrdersServiceError>;

    /// Every order, newest first.
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;

    /// Store a paid order and empty the customer's cart.
    ///
    /// Both happen in one transaction: either the order exists and the cart
    /// is empty, or neither change is visible.
    async fn place_order(&self, order: NewOrder) -> Result<PlacedOrder, OrdersServiceError>;

    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError>;
}
