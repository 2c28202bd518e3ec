//! In-memory stand-ins for the store and the identity provider.

use crate::database::{
    AdvertiserProfile, Channel, DatabaseError, NewUser, ProfileStore, StoreError, User, UserRole,
    BUSINESS_NUMBER_KEY, USERS_EMAIL_KEY, USERS_PHONE_KEY,
};
use crate::identity::{AuthUser, IdentityError, IdentityProvider};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    InsertUser,
    FindUserRole,
    FindAdvertiserProfile,
    UpsertAdvertiserProfile,
    FindInfluencerProfile,
    CreateInfluencerProfile,
    ReplaceChannels,
}

#[derive(Default)]
struct StoreState {
    users: Vec<User>,
    advertiser_profiles: Vec<(i64, AdvertiserProfile)>,
    influencer_profiles: Vec<(i64, i64)>,
    channels: Vec<(i64, Channel)>,
    next_id: i64,
    failing: HashSet<StoreOp>,
    insert_returns_nothing: bool,
    insert_returns_unassigned: bool,
    insert_returns_bad_email: bool,
}

impl StoreState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn check(&self, op: StoreOp) -> Result<(), DatabaseError> {
        if self.failing.contains(&op) {
            Err(DatabaseError::QueryError(format!("{:?} unavailable", op)))
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&self, op: StoreOp) {
        self.state.lock().unwrap().failing.insert(op);
    }

    /// The insert succeeds but the row is not returned.
    pub fn lose_inserted_rows(&self) {
        self.state.lock().unwrap().insert_returns_nothing = true;
    }

    /// The insert succeeds but the row comes back with an unassigned role.
    pub fn corrupt_inserted_rows(&self) {
        self.state.lock().unwrap().insert_returns_unassigned = true;
    }

    /// The insert succeeds but the row comes back with a malformed email.
    pub fn mangle_inserted_emails(&self) {
        self.state.lock().unwrap().insert_returns_bad_email = true;
    }

    pub fn user_count(&self) -> usize {
        self.state.lock().unwrap().users.len()
    }

    pub fn user_by_email(&self, email: &str) -> Option<User> {
        self.state
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    pub fn advertiser_profiles(&self) -> Vec<(i64, AdvertiserProfile)> {
        self.state.lock().unwrap().advertiser_profiles.clone()
    }

    pub fn channels_of(&self, influencer_id: i64) -> Vec<Channel> {
        self.state
            .lock()
            .unwrap()
            .channels
            .iter()
            .filter(|(owner, _)| *owner == influencer_id)
            .map(|(_, channel)| channel.clone())
            .collect()
    }

    pub fn influencer_profile_count(&self) -> usize {
        self.state.lock().unwrap().influencer_profiles.len()
    }

    /// Creates an account plus user row and returns `(user_id, access token)`.
    pub async fn seed_signed_in_user(
        &self,
        identity: &FakeIdentity,
        email: &str,
        role: UserRole,
    ) -> (i64, String) {
        let account = identity.create_user(email, "12345678").await.unwrap();
        let phone = {
            let state = self.state.lock().unwrap();
            format!("010-0000-{:04}", state.users.len())
        };
        let user = self
            .insert_user(&NewUser {
                auth_id: account.id.clone(),
                name: "Seed".to_string(),
                phone,
                email: email.to_string(),
                birthdate: None,
                role,
            })
            .await
            .unwrap()
            .unwrap();
        (user.id, identity.issue_token(&account.id))
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn insert_user(&self, user: &NewUser) -> Result<Option<User>, DatabaseError> {
        let mut state = self.state.lock().unwrap();
        state.check(StoreOp::InsertUser)?;

        if state.users.iter().any(|u| u.phone == user.phone) {
            return Err(DatabaseError::Store(StoreError::unique_violation(
                USERS_PHONE_KEY,
            )));
        }
        if state.users.iter().any(|u| u.email == user.email) {
            return Err(DatabaseError::Store(StoreError::unique_violation(
                USERS_EMAIL_KEY,
            )));
        }

        let now = Utc::now();
        let row = User {
            id: state.next_id(),
            auth_id: user.auth_id.clone(),
            name: user.name.clone(),
            phone: user.phone.clone(),
            email: user.email.clone(),
            birthdate: user.birthdate,
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        state.users.push(row.clone());

        if state.insert_returns_nothing {
            return Ok(None);
        }
        if state.insert_returns_unassigned {
            return Ok(Some(User {
                role: UserRole::Unassigned,
                ..row
            }));
        }
        if state.insert_returns_bad_email {
            return Ok(Some(User {
                email: "not-an-email".to_string(),
                ..row
            }));
        }
        Ok(Some(row))
    }

    async fn find_user_id_by_auth_id(&self, auth_id: &str) -> Result<Option<i64>, DatabaseError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|u| u.auth_id == auth_id)
            .map(|u| u.id))
    }

    async fn find_user_role(&self, user_id: i64) -> Result<Option<UserRole>, DatabaseError> {
        let state = self.state.lock().unwrap();
        state.check(StoreOp::FindUserRole)?;
        Ok(state
            .users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.role))
    }

    async fn find_advertiser_profile_id(
        &self,
        user_id: i64,
    ) -> Result<Option<i64>, DatabaseError> {
        let state = self.state.lock().unwrap();
        state.check(StoreOp::FindAdvertiserProfile)?;
        Ok(state
            .advertiser_profiles
            .iter()
            .find(|(_, p)| p.user_id == user_id)
            .map(|(id, _)| *id))
    }

    async fn upsert_advertiser_profile(
        &self,
        profile: &AdvertiserProfile,
    ) -> Result<i64, DatabaseError> {
        let mut state = self.state.lock().unwrap();
        state.check(StoreOp::UpsertAdvertiserProfile)?;

        if state.advertiser_profiles.iter().any(|(_, p)| {
            p.business_number == profile.business_number && p.user_id != profile.user_id
        }) {
            return Err(DatabaseError::Store(StoreError::unique_violation(
                BUSINESS_NUMBER_KEY,
            )));
        }

        if let Some((id, existing)) = state
            .advertiser_profiles
            .iter_mut()
            .find(|(_, p)| p.user_id == profile.user_id)
        {
            *existing = profile.clone();
            return Ok(*id);
        }

        let id = state.next_id();
        state.advertiser_profiles.push((id, profile.clone()));
        Ok(id)
    }

    async fn find_influencer_profile_id(
        &self,
        user_id: i64,
    ) -> Result<Option<i64>, DatabaseError> {
        let state = self.state.lock().unwrap();
        state.check(StoreOp::FindInfluencerProfile)?;
        Ok(state
            .influencer_profiles
            .iter()
            .find(|(_, owner)| *owner == user_id)
            .map(|(id, _)| *id))
    }

    async fn create_influencer_profile(&self, user_id: i64) -> Result<i64, DatabaseError> {
        let mut state = self.state.lock().unwrap();
        state.check(StoreOp::CreateInfluencerProfile)?;
        let id = state.next_id();
        state.influencer_profiles.push((id, user_id));
        Ok(id)
    }

    async fn replace_channels(
        &self,
        influencer_id: i64,
        channels: &[Channel],
    ) -> Result<(), DatabaseError> {
        let mut state = self.state.lock().unwrap();
        state.check(StoreOp::ReplaceChannels)?;
        state.channels.retain(|(owner, _)| *owner != influencer_id);
        state
            .channels
            .extend(channels.iter().cloned().map(|c| (influencer_id, c)));
        Ok(())
    }
}

#[derive(Default)]
struct IdentityState {
    accounts: HashMap<String, String>,
    tokens: HashMap<String, String>,
    deleted: Vec<String>,
    fail_create: bool,
    fail_delete: bool,
}

#[derive(Default)]
pub struct FakeIdentity {
    state: Mutex<IdentityState>,
}

impl FakeIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue_token(&self, auth_id: &str) -> String {
        let token = format!("token-{}", auth_id);
        self.state
            .lock()
            .unwrap()
            .tokens
            .insert(token.clone(), auth_id.to_string());
        token
    }

    pub fn fail_create(&self) {
        self.state.lock().unwrap().fail_create = true;
    }

    pub fn fail_delete(&self) {
        self.state.lock().unwrap().fail_delete = true;
    }

    pub fn account_count(&self) -> usize {
        self.state.lock().unwrap().accounts.len()
    }

    pub fn has_account(&self, email: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .accounts
            .values()
            .any(|e| e == email)
    }

    pub fn deleted(&self) -> Vec<String> {
        self.state.lock().unwrap().deleted.clone()
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentity {
    async fn create_user(&self, email: &str, _password: &str) -> Result<AuthUser, IdentityError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_create {
            return Err(IdentityError::ApiError {
                status: 500,
                message: "identity provider down".to_string(),
            });
        }
        if state.accounts.values().any(|e| e == email) {
            return Err(IdentityError::EmailAlreadyRegistered);
        }
        let id = Uuid::new_v4().to_string();
        state.accounts.insert(id.clone(), email.to_string());
        Ok(AuthUser {
            id,
            email: Some(email.to_string()),
        })
    }

    async fn delete_user(&self, auth_id: &str) -> Result<(), IdentityError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_delete {
            return Err(IdentityError::ApiError {
                status: 503,
                message: "delete unavailable".to_string(),
            });
        }
        state.accounts.remove(auth_id);
        state.deleted.push(auth_id.to_string());
        Ok(())
    }

    async fn verify_token(&self, token: &str) -> Result<AuthUser, IdentityError> {
        let state = self.state.lock().unwrap();
        let id = state
            .tokens
            .get(token)
            .filter(|id| state.accounts.contains_key(*id))
            .ok_or(IdentityError::InvalidToken)?;
        Ok(AuthUser {
            id: id.clone(),
            email: state.accounts.get(id).cloned(),
        })
    }
}
