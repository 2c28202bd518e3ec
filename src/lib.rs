pub mod advertiser;
pub mod auth;
pub mod configuration;
pub mod core;
pub mod database;
pub mod http;
pub mod identity;
pub mod influencer;
pub mod saga;
pub mod users;
pub mod validation;

#[cfg(test)]
mod testing;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config Error:{0}")]
    ConfigError(String),

    #[error("Service error")]
    ServiceError,
}
