use super::super::types::Channel;
use super::super::INFLUENCER_PROFILES_TABLE;
use super::{decode_rows, ensure_success, query_error, DatabaseError, DatabaseService, IdRow};

// Postgres function doing delete + insert of the channel set in one transaction,
// see migrations/0001_init.sql
const REPLACE_CHANNELS_FN: &str = "replace_influencer_channels";

impl DatabaseService {
    pub async fn get_influencer_profile_id(
        &self,
        user_id: i64,
    ) -> Result<Option<i64>, DatabaseError> {
        let response = self
            .client
            .from(INFLUENCER_PROFILES_TABLE)
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

    pub async fn insert_influencer_profile(&self, user_id: i64) -> Result<i64, DatabaseError> {
        let body = serde_json::json!({ "user_id": user_id });
        let response = self
            .client
            .from(INFLUENCER_PROFILES_TABLE)
            .insert(body.to_string())
            .select("id")
            .execute()
            .await
            .map_err(query_error)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(query_error)?;
        let rows: Vec<IdRow> = decode_rows(status, &text)?;

        rows.into_iter().next().map(|row| row.id).ok_or_else(|| {
            DatabaseError::DecodeError("No influencer profile ID returned".to_string())
        })
    }

    pub async fn replace_influencer_channels(
        &self,
        influencer_id: i64,
        channels: &[Channel],
    ) -> Result<(), DatabaseError> {
        let params = serde_json::json!({
            "p_influencer_id": influencer_id,
            "p_channels": channels,
        });

        let response = self
            .client
            .rpc(REPLACE_CHANNELS_FN, params.to_string())
            .execute()
            .await
            .map_err(query_error)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(query_error)?;

        ensure_success(status, &text)
    }
}
