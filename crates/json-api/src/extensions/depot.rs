//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use urbanaura_app::auth::Identity;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Store the authenticated caller for downstream handlers.
    fn insert_identity(&mut self, identity: Identity);

    /// The authenticated caller, or 401 when the auth middleware did not run.
    fn identity_or_401(&self) -> Result<&Identity, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_identity(&mut self, identity: Identity) {
        self.inject(identity);
    }

    fn identity_or_401(&self) -> Result<&Identity, StatusError> {
        self.obtain::<Identity>()
            .map_err(|_ignored| StatusError::unauthorized().brief("Unauthorized access"))
    }
}
