//! UrbanAura domain services, persistence, and external clients.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod payments;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;
