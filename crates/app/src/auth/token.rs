//! HS256 access token encoding and decoding.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,

    /// Issued at, seconds since the Unix epoch.
    pub iat: i64,

    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

#[derive(Debug, Error)]
#[error(transparent)]
pub struct TokenError(#[from] jsonwebtoken::errors::Error);

/// Sign `claims` with the shared `secret`.
///
/// # Errors
///
/// Returns an error if the claims cannot be serialized or signed.
pub fn encode_token(claims: &Claims, secret: &[u8]) -> Result<String, TokenError> {
    Ok(encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )?)
}

/// Verify the signature and expiry of `token` and return its claims.
///
/// # Errors
///
/// Returns an error if the token is malformed, signed with another key or
/// algorithm, or expired.
pub fn decode_token(token: &str, secret: &[u8]) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.set_required_spec_claims(&["exp"]);

    Ok(decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)?.claims)
}
