//! Current-user queries.

mod routes;
pub mod service;

pub use routes::{router, UserRoleResponse};
