//! Auth service errors.

use thiserror::Error;

use crate::auth::TokenError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("email is required")]
    MissingEmail,

    #[error("token is invalid or expired")]
    InvalidToken(#[source] TokenError),

    #[error("failed to sign token")]
    Signing(#[source] TokenError),

    #[error("token lifetime is out of range")]
    InvalidLifetime,
}
