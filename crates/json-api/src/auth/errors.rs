//! Auth Errors

use salvo::http::StatusError;
use tracing::{debug, error};

use urbanaura_app::auth::AuthServiceError;

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::MissingEmail => StatusError::bad_request().brief("Email is required"),
        AuthServiceError::InvalidToken(source) => {
            debug!("rejected access token: {source}");

            StatusError::unauthorized().brief("Unauthorized access")
        }
        AuthServiceError::Signing(source) => {
            error!("failed to sign access token: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::InvalidLifetime => {
            error!("configured access token lifetime is out of range");

            StatusError::internal_server_error()
        }
    }
}
