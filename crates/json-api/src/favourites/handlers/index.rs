//! Favourites Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    favourites::{FavouriteResponse, errors::into_status_error},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FavouritesResponse {
    pub favourites: Vec<FavouriteResponse>,
}

/// Favourites Index Handler
#[endpoint(
    tags("favourites"),
    summary = "List Favourites",
    security(("bearer_auth" = [])),
)]
pub(crate) async fn handler(
    email: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<FavouritesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let email = depot.identity_or_401()?.owner_or_403(&email.into_inner())?;

    let favourites = state
        .app
        .favourites
        .list_favourites(&email)
        .await
        .map_err(into_status_error)?;

    Ok(Json(FavouritesResponse {
        favourites: favourites.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use urbanaura_app::domain::{
        favourites::{
            FavouritesServiceError, MockFavouritesService,
            models::{Favourite, FavouriteUuid},
        },
        products::models::ProductUuid,
    };

    use crate::test_helpers::{Mocks, OTHER_EMAIL, TEST_EMAIL, storage_error};

    use super::*;

    fn route() -> Router {
        Router::with_path("favourite/{email}").get(handler)
    }

    #[tokio::test]
    async fn test_lists_own_favourites() -> TestResult {
        let mut favourites = MockFavouritesService::new();

        favourites
            .expect_list_favourites()
            .once()
            .withf(|email| email == TEST_EMAIL)
            .return_once(|_| {
                Ok(vec![Favourite {
                    uuid: FavouriteUuid::new(),
                    product_uuid: ProductUuid::new(),
                    user_email: TEST_EMAIL.to_string(),
                    created_at: Timestamp::UNIX_EPOCH,
                }])
            });

        let service = Mocks {
            favourites,
            ..Mocks::default()
        }
        .user_service(route());

        let response: FavouritesResponse =
            TestClient::get(format!("http://example.com/favourite/{TEST_EMAIL}"))
                .send(&service)
                .await
                .take_json()
                .await?;

        assert_eq!(response.favourites.len(), 1, "expected one favourite");

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_may_read_any_list() -> TestResult {
        let mut favourites = MockFavouritesService::new();

        favourites
            .expect_list_favourites()
            .once()
            .withf(|email| email == OTHER_EMAIL)
            .return_once(|_| Ok(vec![]));

        let service = Mocks {
            favourites,
            ..Mocks::default()
        }
        .admin_service(route());

        let res = TestClient::get(format!("http://example.com/favourite/{OTHER_EMAIL}"))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_storage_error_returns_500() -> TestResult {
        let mut favourites = MockFavouritesService::new();

        favourites
            .expect_list_favourites()
            .once()
            .return_once(|_| Err(FavouritesServiceError::Sql(storage_error())));

        let service = Mocks {
            favourites,
            ..Mocks::default()
        }
        .user_service(route());

        let res = TestClient::get(format!("http://example.com/favourite/{TEST_EMAIL}"))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
