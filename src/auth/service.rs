use super::error::{
    CREATE_AUTH_USER_FAILED, CREATE_PROFILE_FAILED, EMAIL_ALREADY_EXISTS, PHONE_ALREADY_EXISTS,
    VALIDATION_ERROR,
};
use super::schema::{validate_user_row, SignUpRequest, SignUpResponse};
use crate::database::{DatabaseError, NewUser, ProfileStore, User, USERS_EMAIL_KEY, USERS_PHONE_KEY};
use crate::http::{failure, success, ErrorKind, Failure, HandlerResult};
use crate::identity::{IdentityError, IdentityProvider};
use crate::saga::Saga;
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::error;

/// Creates the identity-provider account and the matching `users` row.
///
/// The account is created first; from then on every failure deletes it again
/// before the error is returned, so either both records exist or neither does.
/// A response that fails its own shape check is reported but not compensated,
/// since the row is already stored validly at that point.
pub async fn sign_up(
    database: &dyn ProfileStore,
    identity: Arc<dyn IdentityProvider>,
    request: SignUpRequest,
) -> HandlerResult<SignUpResponse> {
    let account = identity
        .create_user(&request.email, &request.password)
        .await
        .map_err(create_account_failure)?;

    let mut saga = Saga::new("sign-up");
    let auth_id = account.id.clone();
    saga.on_rollback(format!("delete auth user {}", auth_id), move || async move {
        identity.delete_user(&auth_id).await
    });

    let user = saga
        .guard(insert_user_row(database, &request, &account.id))
        .await?;

    let response = SignUpResponse::from(user);
    if let Err(errors) = response.validate() {
        error!(auth_id = %account.id, "Sign-up response failed validation");
        return Err(failure(
            ErrorKind::InternalError,
            VALIDATION_ERROR,
            "응답 데이터 검증에 실패했습니다.",
        )
        .with_details(errors.to_details()));
    }

    success(response, StatusCode::CREATED)
}

fn create_account_failure(e: IdentityError) -> Failure {
    match e {
        IdentityError::EmailAlreadyRegistered => failure(
            ErrorKind::Conflict,
            EMAIL_ALREADY_EXISTS,
            "이미 가입된 이메일입니다.",
        ),
        other => failure(
            ErrorKind::InternalError,
            CREATE_AUTH_USER_FAILED,
            format!("Auth 사용자 생성에 실패했습니다: {}", other),
        ),
    }
}

async fn insert_user_row(
    database: &dyn ProfileStore,
    request: &SignUpRequest,
    auth_id: &str,
) -> Result<User, Failure> {
    let new_user = NewUser {
        auth_id: auth_id.to_string(),
        name: request.name.clone(),
        phone: request.phone.clone(),
        email: request.email.clone(),
        birthdate: request.birthdate,
        role: request.role,
    };

    let user = database
        .insert_user(&new_user)
        .await
        .map_err(insert_failure)?
        .ok_or_else(|| {
            failure(
                ErrorKind::InternalError,
                CREATE_PROFILE_FAILED,
                "사용자 프로필 생성 후 정보를 가져올 수 없습니다.",
            )
        })?;

    validate_user_row(&user, auth_id).map_err(|errors| {
        failure(
            ErrorKind::InternalError,
            VALIDATION_ERROR,
            "생성된 사용자 정보의 검증에 실패했습니다.",
        )
        .with_details(errors.to_details())
    })?;

    Ok(user)
}

fn insert_failure(e: DatabaseError) -> Failure {
    match e.violated_unique_constraint() {
        Some(USERS_PHONE_KEY) => failure(
            ErrorKind::Conflict,
            PHONE_ALREADY_EXISTS,
            "이미 등록된 휴대폰 번호입니다.",
        ),
        Some(USERS_EMAIL_KEY) => failure(
            ErrorKind::Conflict,
            EMAIL_ALREADY_EXISTS,
            "이미 등록된 이메일입니다.",
        ),
        _ => failure(
            ErrorKind::InternalError,
            CREATE_PROFILE_FAILED,
            format!("사용자 프로필 생성에 실패했습니다: {}", e),
        ),
    }
}
