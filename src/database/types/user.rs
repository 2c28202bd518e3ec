use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Advertiser,
    Influencer,
    Unassigned,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Advertiser => "advertiser",
            UserRole::Influencer => "influencer",
            UserRole::Unassigned => "unassigned",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Row written to `users` at sign-up
#[derive(Debug, Serialize, Clone)]
pub struct NewUser {
    pub auth_id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub birthdate: Option<NaiveDate>,
    pub role: UserRole,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: i64,
    pub auth_id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub birthdate: Option<NaiveDate>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
