use super::response::{failure, ErrorKind, Failure};
use crate::core::AppState;
use crate::database::ProfileStore;
use crate::identity::{IdentityError, IdentityProvider};
use axum::extract::FromRequestParts;
use axum::http::{header::AUTHORIZATION, request::Parts};
use tracing::{error, warn};

pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
pub const USER_NOT_FOUND: &str = "USER_NOT_FOUND";

/// Caller resolved from `Authorization: Bearer <token>` to an internal user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub auth_id: String,
}

pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    header
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub async fn authenticate(
    identity: &dyn IdentityProvider,
    database: &dyn ProfileStore,
    authorization: Option<&str>,
) -> Result<AuthenticatedUser, Failure> {
    let token = bearer_token(authorization)
        .ok_or_else(|| failure(ErrorKind::Unauthorized, UNAUTHORIZED, "인증이 필요합니다."))?;

    let auth_user = identity.verify_token(token).await.map_err(|e| {
        match &e {
            IdentityError::InvalidToken => warn!("Authentication failed: {}", e),
            _ => error!("Authentication failed: {}", e),
        }
        failure(
            ErrorKind::Unauthorized,
            UNAUTHORIZED,
            "유효하지 않은 인증 정보입니다.",
        )
    })?;

    let not_found = || failure(ErrorKind::NotFound, USER_NOT_FOUND, "사용자를 찾을 수 없습니다.");
    let user_id = match database.find_user_id_by_auth_id(&auth_user.id).await {
        Ok(Some(user_id)) => user_id,
        Ok(None) => {
            warn!(auth_id = %auth_user.id, "User not found");
            return Err(not_found());
        }
        Err(e) => {
            error!(auth_id = %auth_user.id, "User lookup failed: {}", e);
            return Err(not_found());
        }
    };

    Ok(AuthenticatedUser {
        user_id,
        auth_id: auth_user.id,
    })
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = Failure;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Failure> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        authenticate(state.identity.as_ref(), state.database.as_ref(), header).await
    }
}
