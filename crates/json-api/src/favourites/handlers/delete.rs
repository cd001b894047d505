//! Remove Favourite Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, favourites::errors::into_status_error, state::State};

/// Remove Favourite Handler
#[endpoint(
    tags("favourites"),
    summary = "Remove Favourite",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Favourite removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Favourite not found"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    state
        .app
        .favourites
        .remove_favourite(&identity.email, uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use urbanaura_app::domain::favourites::{
        FavouritesServiceError, MockFavouritesService, models::FavouriteUuid,
    };

    use crate::test_helpers::{Mocks, TEST_EMAIL};

    use super::*;

    fn make_service(favourites: MockFavouritesService) -> Service {
        Mocks {
            favourites,
            ..Mocks::default()
        }
        .user_service(Router::with_path("favourite/{uuid}").delete(handler))
    }

    #[tokio::test]
    async fn test_remove_favourite_success() -> TestResult {
        let uuid = FavouriteUuid::new();

        let mut favourites = MockFavouritesService::new();

        favourites
            .expect_remove_favourite()
            .once()
            .withf(move |email, favourite| email == TEST_EMAIL && *favourite == uuid)
            .return_once(|_, _| Ok(()));

        let res = TestClient::delete(format!("http://example.com/favourite/{uuid}"))
            .send(&make_service(favourites))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_foreign_favourite_returns_404() -> TestResult {
        let mut favourites = MockFavouritesService::new();

        favourites
            .expect_remove_favourite()
            .once()
            .return_once(|_, _| Err(FavouritesServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/favourite/{}", FavouriteUuid::new()))
            .send(&make_service(favourites))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
