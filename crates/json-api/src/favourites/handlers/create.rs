//! Add Favourite Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use urbanaura_app::domain::favourites::models::{FavouriteUuid, NewFavourite};

use crate::{
    extensions::*,
    favourites::{FavouriteResponse, errors::into_status_error},
    state::State,
};

/// Add Favourite Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddFavouriteRequest {
    pub product_uuid: Uuid,
    pub user_email: String,
}

/// Add Favourite Handler
#[endpoint(
    tags("favourites"),
    summary = "Add Favourite",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Favourite stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Not your favourites"),
        (status_code = StatusCode::CONFLICT, description = "Already in favourites"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddFavouriteRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<FavouriteResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();
    let user_email = depot.identity_or_401()?.owner_or_403(&request.user_email)?;

    let favourite = state
        .app
        .favourites
        .add_favourite(NewFavourite {
            uuid: FavouriteUuid::new(),
            product_uuid: request.product_uuid.into(),
            user_email,
        })
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/favourite/{}", favourite.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(favourite.into()))
}
