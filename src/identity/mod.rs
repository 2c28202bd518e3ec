use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

mod supabase;

pub use supabase::SupabaseAuth;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Email already registered")]
    EmailAlreadyRegistered,
    #[error("Invalid or expired access token")]
    InvalidToken,
    #[error("Identity provider request error: {0}")]
    RequestError(String),
    #[error("Identity provider error ({status}): {message}")]
    ApiError { status: u16, message: String },
}

/// Account held by the external identity provider.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// External identity provider: account admin plus bearer-token verification.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Creates an account that is already email-confirmed.
    async fn create_user(&self, email: &str, password: &str) -> Result<AuthUser, IdentityError>;

    async fn delete_user(&self, auth_id: &str) -> Result<(), IdentityError>;

    /// Resolves an access token to the account it was issued for.
    async fn verify_token(&self, token: &str) -> Result<AuthUser, IdentityError>;
}
