use super::error::INVALID_SIGNUP_REQUEST;
use super::schema::{SignUpPayload, SignUpResponse};
use super::service::sign_up;
use crate::core::AppState;
use crate::http::{failure, parse_json, ErrorKind, HandlerResult};
use axum::{body::Bytes, extract::State, routing::post, Router};
use tracing::{error, info};

const INVALID_MESSAGE: &str = "회원가입 정보가 올바르지 않습니다.";

pub fn router() -> Router<AppState> {
    Router::new().route("/auth/signup", post(sign_up_handler))
}

async fn sign_up_handler(State(state): State<AppState>, body: Bytes) -> HandlerResult<SignUpResponse> {
    let payload: SignUpPayload = parse_json(&body, INVALID_SIGNUP_REQUEST, INVALID_MESSAGE)?;
    let request = payload.validate().map_err(|errors| {
        failure(ErrorKind::InvalidRequest, INVALID_SIGNUP_REQUEST, INVALID_MESSAGE)
            .with_details(errors.to_details())
    })?;

    let result = sign_up(state.database.as_ref(), state.identity.clone(), request).await;
    match &result {
        Ok(created) => info!("User signed up successfully: {}", created.data.email),
        Err(e) if e.is_server_error() => error!("Signup failed: {}", e),
        Err(_) => {}
    }
    result
}
