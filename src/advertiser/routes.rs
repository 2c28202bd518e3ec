use super::error::INVALID_REQUEST;
use super::schema::{AdvertiserProfilePayload, AdvertiserProfileResponse, AdvertiserProfileStatus};
use super::service::{authorize, check_profile_status, save_profile};
use crate::core::AppState;
use crate::http::{failure, parse_json, success, AuthenticatedUser, ErrorKind, HandlerResult};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tracing::{error, info};

const SAVED_MESSAGE: &str = "광고주 정보가 성공적으로 등록되었습니다.";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/advertiser/profile", post(save_profile_handler))
        .route("/advertiser/profile/status", get(profile_status_handler))
}

async fn profile_status_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> HandlerResult<AdvertiserProfileStatus> {
    let status = check_profile_status(state.database.as_ref(), user.user_id)
        .await
        .inspect_err(|e| error!("Failed to check advertiser profile status: {}", e))?;
    success(status, StatusCode::OK)
}

// Role is checked before the body so that non-advertisers are always refused
async fn save_profile_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    body: Bytes,
) -> HandlerResult<AdvertiserProfileResponse> {
    let database = state.database.as_ref();
    let access = authorize(database, user.user_id).await?;

    let payload: AdvertiserProfilePayload =
        parse_json(&body, INVALID_REQUEST, "요청 본문을 처리할 수 없습니다.")?;
    let request = payload.validate().map_err(|errors| {
        failure(
            ErrorKind::InvalidRequest,
            INVALID_REQUEST,
            "요청 데이터가 올바르지 않습니다.",
        )
        .with_details(errors.to_details())
    })?;

    let saved = save_profile(database, access, request)
        .await
        .inspect_err(|e| error!("Failed to update advertiser profile: {}", e))?;

    info!(auth_id = %user.auth_id, "Advertiser profile saved for user {}", user.user_id);

    Ok(saved.map(|saved| AdvertiserProfileResponse {
        message: SAVED_MESSAGE.to_string(),
        profile_id: saved.profile_id,
        is_new_profile: saved.is_new_profile,
    }))
}
