//! Payments

mod gateway;
mod stripe;

pub use gateway::*;
pub use stripe::{DEFAULT_STRIPE_API_BASE, StripeClient, StripeConfig, StripeError};
