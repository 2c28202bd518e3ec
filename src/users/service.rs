use crate::database::{DatabaseError, ProfileStore, UserRole};

/// Derives the caller's role from which onboarding profile exists.
pub async fn get_user_role(
    database: &dyn ProfileStore,
    user_id: i64,
) -> Result<UserRole, DatabaseError> {
    if database.find_advertiser_profile_id(user_id).await?.is_some() {
        return Ok(UserRole::Advertiser);
    }
    if database.find_influencer_profile_id(user_id).await?.is_some() {
        return Ok(UserRole::Influencer);
    }
    Ok(UserRole::Unassigned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::AdvertiserProfile;
    use crate::testing::{FakeIdentity, MemoryStore, StoreOp};

    #[tokio::test]
    async fn test_role_follows_profiles() {
        let store = MemoryStore::new();
        let identity = FakeIdentity::new();
        let (advertiser, _) = store
            .seed_signed_in_user(&identity, "ad@x.com", UserRole::Advertiser)
            .await;
        let (influencer, _) = store
            .seed_signed_in_user(&identity, "in@x.com", UserRole::Influencer)
            .await;

        assert_eq!(get_user_role(&store, advertiser).await.unwrap(), UserRole::Unassigned);

        store
            .upsert_advertiser_profile(&AdvertiserProfile {
                user_id: advertiser,
                company_name: "c".to_string(),
                location: "l".to_string(),
                company_phone: "02-123-4567".to_string(),
                business_number: "123-45-67890".to_string(),
                owner_name: "o".to_string(),
            })
            .await
            .unwrap();
        store.create_influencer_profile(influencer).await.unwrap();

        assert_eq!(get_user_role(&store, advertiser).await.unwrap(), UserRole::Advertiser);
        assert_eq!(get_user_role(&store, influencer).await.unwrap(), UserRole::Influencer);
    }

    #[tokio::test]
    async fn test_lookup_failure_propagates() {
        let store = MemoryStore::new();
        store.fail(StoreOp::FindInfluencerProfile);
        assert!(get_user_role(&store, 1).await.is_err());
    }
}
