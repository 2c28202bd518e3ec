//! Influencer onboarding: profile anchor plus full channel-set replacement.

mod routes;
pub mod schema;
pub mod service;

pub use routes::router;
