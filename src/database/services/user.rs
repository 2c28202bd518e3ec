use super::super::types::{NewUser, User, UserRole};
use super::super::USERS_TABLE;
use super::{decode_rows, query_error, DatabaseError, DatabaseService, IdRow};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RoleRow {
    role: UserRole,
}

impl DatabaseService {
    // Insert the sign-up row and return it as stored
    pub async fn insert_user_row(&self, user: &NewUser) -> Result<Option<User>, DatabaseError> {
        let body = serde_json::to_string(user).map_err(query_error)?;
        let response = self
            .client
            .from(USERS_TABLE)
            .insert(body)
            .select("*")
            .execute()
            .await
            .map_err(query_error)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(query_error)?;
        let users: Vec<User> = decode_rows(status, &text)?;

        Ok(users.into_iter().next())
    }

    // Resolve the internal user id from the identity provider's id
    pub async fn get_user_id_by_auth_id(
        &self,
        auth_id: &str,
    ) -> Result<Option<i64>, DatabaseError> {
        let response = self
            .client
            .from(USERS_TABLE)
            .select("id")
            .eq("auth_id", auth_id)
            .limit(1)
            .execute()
            .await
            .map_err(query_error)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(query_error)?;
        let rows: Vec<IdRow> = decode_rows(status, &text)?;

        Ok(rows.into_iter().next().map(|row| row.id))
    }

    pub async fn get_user_role(&self, user_id: i64) -> Result<Option<UserRole>, DatabaseError> {
        let response = self
            .client
            .from(USERS_TABLE)
            .select("role")
            .eq("id", user_id.to_string())
            .limit(1)
            .execute()
            .await
            .map_err(query_error)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(query_error)?;
        let rows: Vec<RoleRow> = decode_rows(status, &text)?;

        Ok(rows.into_iter().next().map(|row| row.role))
    }
}
