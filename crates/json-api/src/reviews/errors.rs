//! Review Errors

use salvo::http::StatusError;
use tracing::error;

use urbanaura_app::domain::reviews::ReviewsServiceError;

pub(crate) fn into_status_error(error: ReviewsServiceError) -> StatusError {
    match error {
        ReviewsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Review already exists")
        }
        ReviewsServiceError::NotFound => StatusError::not_found().brief("Review not found"),
        ReviewsServiceError::InvalidReference => {
            StatusError::bad_request().brief("Unknown product")
        }
        ReviewsServiceError::InvalidRating => {
            StatusError::bad_request().brief("Rating must be between 1 and 5")
        }
        ReviewsServiceError::MissingRequiredData | ReviewsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid review")
        }
        ReviewsServiceError::Sql(source) => {
            error!("review storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
