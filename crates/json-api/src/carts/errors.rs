//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use urbanaura_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart item not found"),
        CartsServiceError::InvalidReference => StatusError::bad_request().brief("Unknown product"),
        CartsServiceError::MissingRequiredData
        | CartsServiceError::InvalidData
        | CartsServiceError::InvalidQuantity(_) => {
            StatusError::bad_request().brief("Invalid cart item")
        }
        CartsServiceError::Sql(source) => {
            error!("cart storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
