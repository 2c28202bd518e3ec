use super::{AuthUser, IdentityError, IdentityProvider};
use crate::configuration::SupabaseSettings;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

const EMAIL_EXISTS_CODE: &str = "email_exists";

// GoTrue error bodies differ between versions: `msg` or `message`, and
// `error_code` only on newer releases
#[derive(Debug, Deserialize, Default)]
struct GoTrueErrorBody {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl GoTrueErrorBody {
    fn text(&self) -> String {
        self.msg
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "Unknown error".to_string())
    }

    fn is_email_taken(&self) -> bool {
        if self.error_code.as_deref() == Some(EMAIL_EXISTS_CODE) {
            return true;
        }
        let text = self.text().to_lowercase();
        text.contains("already") && text.contains("registered")
    }
}

/// Supabase GoTrue client using the admin API with the service role key.
pub struct SupabaseAuth {
    http_client: Client,
    auth_url: String,
    service_role_key: String,
}

impl SupabaseAuth {
    pub fn new(settings: &SupabaseSettings) -> Self {
        Self {
            http_client: Client::new(),
            auth_url: format!("{}/auth/v1", settings.url.trim_end_matches('/')),
            service_role_key: settings.service_role_key.clone(),
        }
    }

    fn admin_request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http_client
            .request(method, format!("{}{}", self.auth_url, path))
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
    }

    async fn error_body(response: reqwest::Response) -> (StatusCode, GoTrueErrorBody) {
        let status = response.status();
        let body = response
            .json::<GoTrueErrorBody>()
            .await
            .unwrap_or_default();
        (status, body)
    }
}

#[async_trait]
impl IdentityProvider for SupabaseAuth {
    async fn create_user(&self, email: &str, password: &str) -> Result<AuthUser, IdentityError> {
        let response = self
            .admin_request(reqwest::Method::POST, "/admin/users")
            .json(&json!({
                "email": email,
                "password": password,
                "email_confirm": true,
            }))
            .send()
            .await
            .map_err(|e| IdentityError::RequestError(e.to_string()))?;

        if !response.status().is_success() {
            let (status, body) = Self::error_body(response).await;
            debug!(status = %status, "Auth user creation rejected");
            if body.is_email_taken() {
                return Err(IdentityError::EmailAlreadyRegistered);
            }
            return Err(IdentityError::ApiError {
                status: status.as_u16(),
                message: body.text(),
            });
        }

        response
            .json::<AuthUser>()
            .await
            .map_err(|e| IdentityError::RequestError(e.to_string()))
    }

    async fn delete_user(&self, auth_id: &str) -> Result<(), IdentityError> {
        let response = self
            .admin_request(reqwest::Method::DELETE, &format!("/admin/users/{}", auth_id))
            .send()
            .await
            .map_err(|e| IdentityError::RequestError(e.to_string()))?;

        if !response.status().is_success() {
            let (status, body) = Self::error_body(response).await;
            return Err(IdentityError::ApiError {
                status: status.as_u16(),
                message: body.text(),
            });
        }

        Ok(())
    }

    async fn verify_token(&self, token: &str) -> Result<AuthUser, IdentityError> {
        let response = self
            .http_client
            .get(format!("{}/user", self.auth_url))
            .header("apikey", &self.service_role_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| IdentityError::RequestError(e.to_string()))?;

        match response.status() {
            status if status.is_success() => response
                .json::<AuthUser>()
                .await
                .map_err(|e| IdentityError::RequestError(e.to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(IdentityError::InvalidToken),
            _ => {
                let (status, body) = Self::error_body(response).await;
                Err(IdentityError::ApiError {
                    status: status.as_u16(),
                    message: body.text(),
                })
            }
        }
    }
}
