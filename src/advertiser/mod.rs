//! Advertiser onboarding: role-gated profile upsert and status check.

pub mod error;
mod routes;
pub mod schema;
pub mod service;

pub use routes::router;
