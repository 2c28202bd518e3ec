//! Sign-up: identity-provider account plus `users` row, with rollback.

pub mod error;
mod routes;
pub mod schema;
pub mod service;

pub use routes::router;
