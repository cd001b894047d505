//! Auth data models.

use jiff::Timestamp;

/// The authenticated caller, as established from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub admin: bool,
}

/// Canonical form of an email used as a storage key: trimmed, ASCII lowercase.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

impl Identity {
    /// Whether this identity may act on rows belonging to `email`.
    ///
    /// Admins may act on anyone's rows.
    #[must_use]
    pub fn owns(&self, email: &str) -> bool {
        self.owner_key(email).is_some()
    }

    /// The storage key for rows belonging to `email`, when this identity may
    /// act on them.
    #[must_use]
    pub fn owner_key(&self, email: &str) -> Option<String> {
        let key = normalize_email(email);

        (self.admin || normalize_email(&self.email) == key).then_some(key)
    }
}

/// A freshly signed access token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: Timestamp,
}
