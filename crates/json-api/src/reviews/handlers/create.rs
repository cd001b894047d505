//! Create Review Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use urbanaura_app::domain::reviews::models::{NewReview, ReviewUuid};

use crate::{
    extensions::*,
    reviews::{ReviewResponse, errors::into_status_error},
    state::State,
};

/// Create Review Request
///
/// The reviewer is the authenticated caller.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateReviewRequest {
    pub product_uuid: Uuid,

    /// 1 to 5
    pub rating: u8,

    #[serde(default)]
    pub comment: String,
}

/// Create Review Handler
#[endpoint(
    tags("reviews"),
    summary = "Create Review",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Review stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateReviewRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ReviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let request = json.into_inner();

    let review = NewReview {
        uuid: ReviewUuid::new(),
        product_uuid: request.product_uuid.into(),
        email: identity.email.clone(),
        rating: request.rating,
        comment: request.comment,
    };

    if !review.has_valid_rating() {
        return Err(StatusError::bad_request().brief("Rating must be between 1 and 5"));
    }

    let review = state
        .app
        .reviews
        .create_review(review)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(review.into()))
}
