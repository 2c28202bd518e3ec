use super::schema::{InfluencerProfileSaved, InfluencerProfileStatus};
use crate::database::{Channel, DatabaseError, ProfileStore, UserRole};

/// Finds or creates the caller's influencer profile, then replaces its whole
/// channel set with `channels`. An empty list clears every channel.
pub async fn update_influencer_profile(
    database: &dyn ProfileStore,
    user_id: i64,
    channels: &[Channel],
) -> Result<InfluencerProfileSaved, DatabaseError> {
    let influencer_id = match database.find_influencer_profile_id(user_id).await? {
        Some(id) => id,
        None => database.create_influencer_profile(user_id).await?,
    };

    database.replace_channels(influencer_id, channels).await?;

    Ok(InfluencerProfileSaved { influencer_id })
}

/// Returns `None` when the user row does not exist.
pub async fn check_profile_status(
    database: &dyn ProfileStore,
    user_id: i64,
) -> Result<Option<InfluencerProfileStatus>, DatabaseError> {
    let Some(role) = database.find_user_role(user_id).await? else {
        return Ok(None);
    };

    if role != UserRole::Influencer {
        return Ok(Some(InfluencerProfileStatus {
            is_influencer: false,
            has_profile: false,
            needs_onboarding: false,
        }));
    }

    let has_profile = database
        .find_influencer_profile_id(user_id)
        .await?
        .is_some();

    Ok(Some(InfluencerProfileStatus {
        is_influencer: true,
        has_profile,
        needs_onboarding: !has_profile,
    }))
}
