use super::schema::{InfluencerProfilePayload, InfluencerProfileResponse, InfluencerProfileStatus};
use super::service::{check_profile_status, update_influencer_profile};
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

const INVALID_REQUEST: &str = "INVALID_REQUEST";
const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
const NOT_FOUND: &str = "NOT_FOUND";
const SAVED_MESSAGE: &str = "인플루언서 정보가 성공적으로 등록되었습니다.";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/influencer/profile", post(update_profile_handler))
        .route("/influencer/profile/status", get(profile_status_handler))
}

async fn profile_status_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> HandlerResult<InfluencerProfileStatus> {
    match check_profile_status(state.database.as_ref(), user.user_id).await {
        Ok(Some(status)) => success(status, StatusCode::OK),
        Ok(None) => Err(failure(
            ErrorKind::NotFound,
            NOT_FOUND,
            "사용자를 찾을 수 없습니다.",
        )),
        Err(e) => {
            error!("Failed to check influencer profile status: {}", e);
            Err(failure(
                ErrorKind::InternalError,
                INTERNAL_ERROR,
                format!("프로필 상태 확인에 실패했습니다: {}", e),
            ))
        }
    }
}

async fn update_profile_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    body: Bytes,
) -> HandlerResult<InfluencerProfileResponse> {
    let invalid = "요청 데이터가 올바르지 않습니다.";
    let payload: InfluencerProfilePayload = parse_json(&body, INVALID_REQUEST, invalid)?;
    let channels = payload.validate().map_err(|errors| {
        failure(ErrorKind::InvalidRequest, INVALID_REQUEST, invalid)
            .with_details(errors.to_details())
    })?;

    match update_influencer_profile(state.database.as_ref(), user.user_id, &channels).await {
        Ok(saved) => {
            info!(
                auth_id = %user.auth_id,
                "Influencer profile updated successfully for user {}",
                user.user_id
            );
            success(
                InfluencerProfileResponse {
                    message: SAVED_MESSAGE.to_string(),
                    influencer_id: saved.influencer_id,
                },
                StatusCode::OK,
            )
        }
        Err(e) => {
            error!("Failed to update influencer profile: {}", e);
            Err(failure(
                ErrorKind::InternalError,
                INTERNAL_ERROR,
                format!("인플루언서 정보 등록에 실패했습니다: {}", e),
            ))
        }
    }
}
