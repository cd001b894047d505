//! Ownership checks for the authenticated caller.

use salvo::prelude::StatusError;
use urbanaura_app::auth::Identity;

pub(crate) trait IdentityExt {
    /// The storage key for rows belonging to `email`, or 403 unless the
    /// caller owns them.
    fn owner_or_403(&self, email: &str) -> Result<String, StatusError>;
}

impl IdentityExt for Identity {
    fn owner_or_403(&self, email: &str) -> Result<String, StatusError> {
        self.owner_key(email)
            .ok_or_else(|| StatusError::forbidden().brief("Forbidden access"))
    }
}
