//! Favourite Errors

use salvo::http::StatusError;
use tracing::error;

use urbanaura_app::domain::favourites::FavouritesServiceError;

pub(crate) fn into_status_error(error: FavouritesServiceError) -> StatusError {
    match error {
        FavouritesServiceError::AlreadyExists => {
            StatusError::conflict().brief("Already in favourites")
        }
        FavouritesServiceError::NotFound => StatusError::not_found().brief("Favourite not found"),
        FavouritesServiceError::InvalidReference => {
            StatusError::bad_request().brief("Unknown product")
        }
        FavouritesServiceError::MissingRequiredData | FavouritesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid favourite")
        }
        FavouritesServiceError::Sql(source) => {
            error!("favourite storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
