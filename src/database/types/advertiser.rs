use serde::{Deserialize, Serialize};

// Upsert body for `advertiser_profiles`, conflict target is `user_id`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AdvertiserProfile {
    pub user_id: i64,
    pub company_name: String,
    pub location: String,
    pub company_phone: String,
    pub business_number: String,
    pub owner_name: String,
}
