//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::carts::{
        errors::CartsServiceError,
        models::{CartItem, CartItemUuid, NewCartItem},
        repository::PgCartItemsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    repository: PgCartItemsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn list_items(&self, user_email: &str) -> Result<Vec<CartItem>, CartsServiceError> {
        Ok(self
            .repository
            .list_cart_items(self.db.pool(), user_email)
            .await?)
    }

    async fn add_item(&self, item: NewCartItem) -> Result<CartItem, CartsServiceError> {
        if item.quantity == 0 {
            return Err(CartsServiceError::InvalidData);
        }

        let quantity = i32::try_from(item.quantity)?;

        Ok(self
            .repository
            .merge_cart_item(self.db.pool(), &item, quantity)
            .await?)
    }

    async fn update_quantity(
        &self,
        user_email: &str,
        item: CartItemUuid,
        quantity: u32,
    ) -> Result<CartItem, CartsServiceError> {
        if quantity == 0 {
            return Err(CartsServiceError::InvalidData);
        }

        let quantity = i32::try_from(quantity)?;

        Ok(self
            .repository
            .update_quantity(self.db.pool(), item, user_email, quantity)
            .await?)
    }

    async fn remove_item(
        &self,
        user_email: &str,
        item: CartItemUuid,
    ) -> Result<(), CartsServiceError> {
        let rows_affected = self
            .repository
            .delete_cart_item(self.db.pool(), item, user_email)
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// The user's cart rows, oldest first.
    async fn list_items(&self, user_email: &str) -> Result<Vec<CartItem>, CartsServiceError>;

    /// Add a product to the user's cart. Adding a product that is already in
    /// the cart increases that row's quantity instead of adding a new row.
    async fn add_item(&self, item: NewCartItem) -> Result<CartItem, CartsServiceError>;

    /// Replace the quantity of one of the user's cart rows.
    async fn update_quantity(
        &self,
        user_email: &str,
        item: CartItemUuid,
        quantity: u32,
    ) -> Result<CartItem, CartsServiceError>;

    /// Remove one of the user's cart rows.
    async fn remove_item(&self, user_email: &str, item: CartItemUuid)
    -> Result<(), CartsServiceError>;
}
