use super::errors::{DatabaseError, PostgrestErrorBody};
use super::types::{AdvertiserProfile, Channel, NewUser, User, UserRole};
use super::ProfileStore;
use crate::configuration::SupabaseSettings;
use async_trait::async_trait;
use postgrest::Postgrest;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt::Display;

mod advertiser;
mod influencer;
mod user;

pub struct DatabaseService {
    pub client: Postgrest,
}

impl DatabaseService {
    pub fn new(settings: &SupabaseSettings) -> Self {
        let rest_url = format!("{}/rest/v1", settings.url.trim_end_matches('/'));
        let client = Postgrest::new(rest_url)
            .insert_header("apikey", &settings.service_role_key)
            .insert_header(
                "Authorization",
                format!("Bearer {}", settings.service_role_key),
            );

        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct IdRow {
    id: i64,
}

fn query_error<E: Display>(e: E) -> DatabaseError {
    DatabaseError::QueryError(e.to_string())
}

// Maps a non-2xx PostgREST response onto a typed store error
fn failed_response(status: u16, body: &str) -> DatabaseError {
    match serde_json::from_str::<PostgrestErrorBody>(body) {
        Ok(err) => DatabaseError::Store(err.into_store_error()),
        Err(_) => DatabaseError::QueryError(format!(
            "Request failed with status {}: {}",
            status, body
        )),
    }
}

fn decode_rows<T: DeserializeOwned>(status: u16, body: &str) -> Result<Vec<T>, DatabaseError> {
    if !(200..300).contains(&status) {
        return Err(failed_response(status, body));
    }
    serde_json::from_str(body).map_err(|e| DatabaseError::DecodeError(e.to_string()))
}

fn ensure_success(status: u16, body: &str) -> Result<(), DatabaseError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(failed_response(status, body))
    }
}

#[async_trait]
impl ProfileStore for DatabaseService {
    async fn insert_user(&self, user: &NewUser) -> Result<Option<User>, DatabaseError> {
        self.insert_user_row(user).await
    }

    async fn find_user_id_by_auth_id(&self, auth_id: &str) -> Result<Option<i64>, DatabaseError> {
        self.get_user_id_by_auth_id(auth_id).await
    }

    async fn find_user_role(&self, user_id: i64) -> Result<Option<UserRole>, DatabaseError> {
        self.get_user_role(user_id).await
    }

    async fn find_advertiser_profile_id(
        &self,
        user_id: i64,
    ) -> Result<Option<i64>, DatabaseError> {
        self.get_advertiser_profile_id(user_id).await
    }

    async fn upsert_advertiser_profile(
        &self,
        profile: &AdvertiserProfile,
    ) -> Result<i64, DatabaseError> {
        self.upsert_advertiser_profile_row(profile).await
    }

    async fn find_influencer_profile_id(
        &self,
        user_id: i64,
    ) -> Result<Option<i64>, DatabaseError> {
        self.get_influencer_profile_id(user_id).await
    }

    async fn create_influencer_profile(&self, user_id: i64) -> Result<i64, DatabaseError> {
        self.insert_influencer_profile(user_id).await
    }

    async fn replace_channels(
        &self,
        influencer_id: i64,
        channels: &[Channel],
    ) -> Result<(), DatabaseError> {
        self.replace_influencer_channels(influencer_id, channels)
            .await
    }
}
