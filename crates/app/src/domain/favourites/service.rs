//! Favourites service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::favourites::{
        errors::FavouritesServiceError,
        models::{Favourite, FavouriteUuid, NewFavourite},
        repository::PgFavouritesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgFavouritesService {
    db: Db,
    repository: PgFavouritesRepository,
}

impl PgFavouritesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgFavouritesRepository::new(),
        }
    }
}

#[async_trait]
impl FavouritesService for PgFavouritesService {
    async fn list_favourites(
        &self,
        user_email: &str,
    ) -> Result<Vec<Favourite>, FavouritesServiceError> {
        Ok(self
            .repository
            .list_favourites(self.db.pool(), user_email)
            .await?)
    }

    async fn add_favourite(
        &self,
        favourite: NewFavourite,
    ) -> Result<Favourite, FavouritesServiceError> {
        self.repository
            .create_favourite(self.db.pool(), &favourite)
            .await?
            .ok_or(FavouritesServiceError::AlreadyExists)
    }

    async fn remove_favourite(
        &self,
        user_email: &str,
        favourite: FavouriteUuid,
    ) -> Result<(), FavouritesServiceError> {
        let rows_affected = self
            .repository
            .delete_favourite(self.db.pool(), favourite, user_email)
            .await?;

        if rows_affected == 0 {
            return Err(FavouritesServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait FavouritesService: Send + Sync {
    async fn list_favourites(
        &self,
        user_email: &str,
    ) -> Result<Vec<Favourite>, FavouritesServiceError>;

    /// Bookmark a product. Each product can only be bookmarked once per user.
    async fn add_favourite(
        &self,
        favourite: NewFavourite,
    ) -> Result<Favourite, FavouritesServiceError>;

    async fn remove_favourite(
        &self,
        user_email: &str,
        favourite: FavouriteUuid,
    ) -> Result<(), FavouritesServiceError>;
}
