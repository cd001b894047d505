//! Issue Token Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{auth::into_status_error, extensions::*, state::State};

/// Issue Token Request
///
/// Any other fields in the body are ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TokenRequest {
    /// Email the token is issued to
    pub email: String,
}

/// Issued Token Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TokenResponse {
    /// Signed access token
    pub token: String,
}

/// Issue Token Handler
///
/// Signs an access token for the given email.
#[endpoint(
    tags("auth"),
    summary = "Issue Access Token",
    responses(
        (status_code = StatusCode::OK, description = "Token issued"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<TokenRequest>,
    depot: &mut Depot,
) -> Result<Json<TokenResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let issued = state
        .app
        .auth
        .issue_token(&request.email)
        .map_err(into_status_error)?;

    info!(expires_at = %issued.expires_at, "issued access token");

    Ok(Json(TokenResponse {
        token: issued.token,
    }))
}
