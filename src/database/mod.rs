use async_trait::async_trait;

mod errors;
mod services;
pub mod types;

pub use errors::{DatabaseError, StoreError, UNIQUE_VIOLATION};
pub use services::DatabaseService;
pub use types::{AdvertiserProfile, Channel, ChannelType, NewUser, User, UserRole};

pub const USERS_TABLE: &str = "users";
pub const ADVERTISER_PROFILES_TABLE: &str = "advertiser_profiles";
pub const INFLUENCER_PROFILES_TABLE: &str = "influencer_profiles";

pub const USERS_EMAIL_KEY: &str = "users_email_key";
pub const USERS_PHONE_KEY: &str = "users_phone_key";
pub const BUSINESS_NUMBER_KEY: &str = "advertiser_profiles_business_number_key";

/// Everything the request handlers need from the relational store.
///
/// Handlers receive this as an injected `Arc<dyn ProfileStore>`; the live
/// implementation is [`DatabaseService`] over PostgREST. Uniqueness is enforced
/// by the store, so implementations must report violations as
/// [`DatabaseError::Store`] with the violated constraint name.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Inserts a user row and reads it back. `Ok(None)` means the insert went
    /// through but the row could not be returned.
    async fn insert_user(&self, user: &NewUser) -> Result<Option<User>, DatabaseError>;

    async fn find_user_id_by_auth_id(&self, auth_id: &str) -> Result<Option<i64>, DatabaseError>;

    async fn find_user_role(&self, user_id: i64) -> Result<Option<UserRole>, DatabaseError>;

    async fn find_advertiser_profile_id(&self, user_id: i64)
        -> Result<Option<i64>, DatabaseError>;

    /// Insert-or-replace keyed on `user_id`, returning the profile id.
    async fn upsert_advertiser_profile(
        &self,
        profile: &AdvertiserProfile,
    ) -> Result<i64, DatabaseError>;

    async fn find_influencer_profile_id(&self, user_id: i64)
        -> Result<Option<i64>, DatabaseError>;

    async fn create_influencer_profile(&self, user_id: i64) -> Result<i64, DatabaseError>;

    /// Replaces the whole channel set of a profile in one atomic step.
    async fn replace_channels(
        &self,
        influencer_id: i64,
        channels: &[Channel],
    ) -> Result<(), DatabaseError>;
}
