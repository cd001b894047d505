//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        errors::ProductsServiceError,
        models::{NewProduct, Product, ProductFilter, ProductUpdate, ProductUuid},
        repository::{PgProductsRepository, ProductChanges},
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        Ok(self
            .repository
            .list_products(self.db.pool(), &filter)
            .await?)
    }

    async fn search_products(&self, pattern: &str) -> Result<Vec<Product>, ProductsServiceError> {
        Ok(self
            .repository
            .search_products(self.db.pool(), pattern)
            .await?)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        Ok(self.repository.get_product(self.db.pool(), product).await?)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let price = i64::try_from(product.price)?;

        Ok(self
            .repository
            .create_product(self.db.pool(), &product, price)
            .await?)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        let price = update.price.map(i64::try_from).transpose()?;

        let changes = ProductChanges {
            title: update.title.as_deref(),
            sub_title: update.sub_title.as_deref(),
            category: update.category.as_deref(),
            price,
            details: &update.details,
        };

        Ok(self
            .repository
            .update_product(self.db.pool(), product, changes)
            .await?)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let rows_affected = self
            .repository
            .delete_product(self.db.pool(), product)
            .await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Lists products, optionally narrowed to one category and sorted by identifier.
    async fn list_products(&self, filter: ProductFilter)
    -> Result<Vec<Product>, ProductsServiceError>;

    /// Case-insensitive regular-expression search over category, title and sub-title.
    async fn search_products(&self, pattern: &str) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;

    /// Creates a new product.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Applies a partial update to a product.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Deletes a product with the given UUID.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}
