//! Admin Handlers
//!
//! Every route here sits behind the admin role check.

pub(crate) mod orders;
pub(crate) mod payments;
pub(crate) mod status;
