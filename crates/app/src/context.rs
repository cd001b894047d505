//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthConfig, AuthService, JwtAuthService},
    database::{self, Db},
    domain::{
        carts::{CartsService, PgCartsService},
        favourites::{FavouritesService, PgFavouritesService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
        reviews::{PgReviewsService, ReviewsService},
    },
    payments::{PaymentGateway, StripeClient, StripeConfig},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub favourites: Arc<dyn FavouritesService>,
    pub orders: Arc<dyn OrdersService>,
    pub reviews: Arc<dyn ReviewsService>,
    pub auth: Arc<dyn AuthService>,
    pub payments: Arc<dyn PaymentGateway>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        auth: AuthConfig,
        stripe: StripeConfig,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            favourites: Arc::new(PgFavouritesService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            reviews: Arc::new(PgReviewsService::new(db)),
            auth: Arc::new(JwtAuthService::new(auth)),
            payments: Arc::new(StripeClient::new(stripe)),
        })
    }
}
