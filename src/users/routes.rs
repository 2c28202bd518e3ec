use super::service::get_user_role;
use crate::configuration::RoleEndpointMode;
use crate::core::AppState;
use crate::database::UserRole;
use crate::http::{failure, success, AuthenticatedUser, ErrorKind, Failure, HandlerResult};
use axum::{extract::State, http::StatusCode, routing::get, Router};
use serde::Serialize;
use tracing::error;

const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
const NOT_IMPLEMENTED: &str = "NOT_IMPLEMENTED";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct UserRoleResponse {
    pub role: UserRole,
}

pub fn router(mode: RoleEndpointMode) -> Router<AppState> {
    match mode {
        RoleEndpointMode::Enabled => Router::new().route("/users/me/role", get(role_handler)),
        RoleEndpointMode::Stub => Router::new().route("/users/me/role", get(role_stub_handler)),
    }
}

async fn role_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> HandlerResult<UserRoleResponse> {
    let role = get_user_role(state.database.as_ref(), user.user_id)
        .await
        .map_err(|e| {
            error!("Failed to resolve user role: {}", e);
            failure(
                ErrorKind::InternalError,
                INTERNAL_ERROR,
                format!("사용자 역할을 확인하지 못했습니다: {}", e),
            )
        })?;
    success(UserRoleResponse { role }, StatusCode::OK)
}

async fn role_stub_handler() -> Failure {
    failure(
        ErrorKind::NotImplemented,
        NOT_IMPLEMENTED,
        "아직 지원되지 않는 기능입니다.",
    )
}
