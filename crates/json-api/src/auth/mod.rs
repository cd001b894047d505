//! Authentication

pub(crate) mod admin;
mod errors;
pub(crate) mod middleware;
pub(crate) mod token;

pub(crate) use errors::into_status_error;
