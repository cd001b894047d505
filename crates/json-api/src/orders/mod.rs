//! Orders
//!
//! Orders double as payment records, so the same handlers also serve the
//! `/payments` routes.

pub(crate) mod errors;
pub(crate) mod handlers;
pub(crate) mod models;

pub(crate) use handlers::*;
