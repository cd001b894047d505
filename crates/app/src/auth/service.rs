//! Auth service.

use std::{collections::HashSet, fmt};

use jiff::{SignedDuration, Timestamp};
use mockall::automock;

use crate::auth::{
    AuthServiceError, Claims, Identity, IssuedToken, decode_token, encode_token, normalize_email,
};

/// Default access token lifetime.
pub const DEFAULT_TOKEN_TTL_DAYS: u32 = 30;

/// Settings for issuing and verifying access tokens.
#[derive(Clone)]
pub struct AuthConfig {
    /// Shared HS256 signing secret.
    pub secret: String,

    /// Token lifetime in days.
    pub ttl_days: u32,

    /// Emails granted the admin role.
    pub admin_emails: Vec<String>,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"**redacted**")
            .field("ttl_days", &self.ttl_days)
            .field("admin_emails", &self.admin_emails)
            .finish()
    }
}

/// Issues and verifies HS256 JWTs carrying the caller's email.
#[derive(Debug, Clone)]
pub struct JwtAuthService {
    config: AuthConfig,
    admins: HashSet<String>,
}

impl JwtAuthService {
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        let admins = config
            .admin_emails
            .iter()
            .map(String::as_str)
            .map(normalize_email)
            .filter(|email| !email.is_empty())
            .collect();

        Self { config, admins }
    }
}

impl AuthService for JwtAuthService {
    fn issue_token(&self, email: &str) -> Result<IssuedToken, AuthServiceError> {
        let email = normalize_email(email);

        if email.is_empty() {
            return Err(AuthServiceError::MissingEmail);
        }

        let now = Timestamp::now();
        let ttl = SignedDuration::from_hours(i64::from(self.config.ttl_days) * 24);
        let expires_at = now
            .checked_add(ttl)
            .map_err(|_| AuthServiceError::InvalidLifetime)?;

        let claims = Claims {
            email,
            iat: now.as_second(),
            exp: expires_at.as_second(),
        };

        let token = encode_token(&claims, self.config.secret.as_bytes())
            .map_err(AuthServiceError::Signing)?;

        Ok(IssuedToken { token, expires_at })
    }

    fn authenticate_bearer(&self, token: &str) -> Result<Identity, AuthServiceError> {
        let claims = decode_token(token, self.config.secret.as_bytes())
            .map_err(AuthServiceError::InvalidToken)?;

        let email = normalize_email(&claims.email);

        if email.is_empty() {
            return Err(AuthServiceError::MissingEmail);
        }

        let admin = self.admins.contains(&email);

        Ok(Identity { email, admin })
    }
}

#[automock]
pub trait AuthService: Send + Sync {
    /// Sign an access token for `email`.
    fn issue_token(&self, email: &str) -> Result<IssuedToken, AuthServiceError>;

    /// Verify a bearer token and resolve the caller's identity.
    fn authenticate_bearer(&self, token: &str) -> Result<Identity, AuthServiceError>;
}
