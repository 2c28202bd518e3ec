use super::super::types::AdvertiserProfile;
use super::super::ADVERTISER_PROFILES_TABLE;
use super::{decode_rows, query_error, DatabaseError, DatabaseService, IdRow};

impl DatabaseService {
    pub async fn get_advertiser_profile_id(
        &self,
        user_id: i64,
    ) -> Result<Option<i64>, DatabaseError> {
        let response = self
            .client
            .from(ADVERTISER_PROFILES_TABLE)
            .select("id")
            .eq("user_id", user_id.to_string())
            .limit(1)
            .execute()
            .await
            .map_err(query_error)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(query_error)?;
        let rows: Vec<IdRow> = decode_rows(status, &text)?;

        Ok(rows.into_iter().next().map(|row| row.id))
    }

    // Single insert-or-update call, PostgREST merges on the user_id constraint
    pub async fn upsert_advertiser_profile_row(
        &self,
        profile: &AdvertiserProfile,
    ) -> Result<i64, DatabaseError> {
        let body = serde_json::to_string(profile).map_err(query_error)?;
        let response = self
            .client
            .from(ADVERTISER_PROFILES_TABLE)
            .upsert(body)
            .on_conflict("user_id")
            .select("id")
            .execute()
            .await
            .map_err(query_error)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(query_error)?;
        let rows: Vec<IdRow> = decode_rows(status, &text)?;

        rows.into_iter()
            .next()
            .map(|row| row.id)
            .ok_or_else(|| DatabaseError::DecodeError("No profile ID returned".to_string()))
    }
}
