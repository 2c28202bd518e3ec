use super::error::{CONFLICT, FORBIDDEN_ROLE, INTERNAL_ERROR, NOT_FOUND, UPDATE_FAILED};
use super::schema::{AdvertiserProfileRequest, AdvertiserProfileSaved, AdvertiserProfileStatus};
use crate::database::{AdvertiserProfile, DatabaseError, ProfileStore, UserRole, BUSINESS_NUMBER_KEY};
use crate::http::{failure, success, ErrorKind, Failure, HandlerResult};
use axum::http::StatusCode;

/// Proof that a user was checked to hold the advertiser role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvertiserAccess {
    user_id: i64,
}

impl AdvertiserAccess {
    pub fn user_id(&self) -> i64 {
        self.user_id
    }
}

pub async fn authorize(
    database: &dyn ProfileStore,
    user_id: i64,
) -> Result<AdvertiserAccess, Failure> {
    let role = database.find_user_role(user_id).await.map_err(|e| {
        failure(
            ErrorKind::InternalError,
            UPDATE_FAILED,
            format!("사용자 정보를 확인하지 못했습니다: {}", e),
        )
    })?;

    match role {
        None => Err(failure(
            ErrorKind::NotFound,
            NOT_FOUND,
            "사용자를 찾을 수 없습니다.",
        )),
        Some(UserRole::Advertiser) => Ok(AdvertiserAccess { user_id }),
        Some(_) => Err(failure(
            ErrorKind::ForbiddenRole,
            FORBIDDEN_ROLE,
            "광고주만 접근할 수 있는 기능입니다.",
        )),
    }
}

/// Upserts the caller's profile. Whether it is new is decided from a lookup
/// made before the write: 201 for a new profile, 200 for a replacement.
pub async fn save_profile(
    database: &dyn ProfileStore,
    access: AdvertiserAccess,
    request: AdvertiserProfileRequest,
) -> HandlerResult<AdvertiserProfileSaved> {
    let existing = database
        .find_advertiser_profile_id(access.user_id)
        .await
        .map_err(|e| {
            failure(
                ErrorKind::InternalError,
                UPDATE_FAILED,
                format!("기존 프로필을 확인하지 못했습니다: {}", e),
            )
        })?;

    let profile = AdvertiserProfile {
        user_id: access.user_id,
        company_name: request.company_name,
        location: request.location,
        company_phone: request.company_phone,
        business_number: request.business_number,
        owner_name: request.owner_name,
    };

    let profile_id = database
        .upsert_advertiser_profile(&profile)
        .await
        .map_err(upsert_failure)?;

    let is_new_profile = existing.is_none();
    let status = if is_new_profile {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    success(
        AdvertiserProfileSaved {
            profile_id,
            is_new_profile,
        },
        status,
    )
}

pub async fn update_advertiser_profile(
    database: &dyn ProfileStore,
    user_id: i64,
    request: AdvertiserProfileRequest,
) -> HandlerResult<AdvertiserProfileSaved> {
    let access = authorize(database, user_id).await?;
    save_profile(database, access, request).await
}

fn upsert_failure(e: DatabaseError) -> Failure {
    match e.violated_unique_constraint() {
        Some(BUSINESS_NUMBER_KEY) => failure(
            ErrorKind::Conflict,
            CONFLICT,
            "이미 등록된 사업자등록번호입니다.",
        ),
        _ => failure(
            ErrorKind::InternalError,
            UPDATE_FAILED,
            format!("광고주 정보를 저장하지 못했습니다: {}", e),
        ),
    }
}

pub async fn check_profile_status(
    database: &dyn ProfileStore,
    user_id: i64,
) -> Result<AdvertiserProfileStatus, Failure> {
    let status_failure = |e: DatabaseError| {
        failure(
            ErrorKind::InternalError,
            INTERNAL_ERROR,
            format!("프로필 상태 확인에 실패했습니다: {}", e),
        )
    };

    let role = database
        .find_user_role(user_id)
        .await
        .map_err(status_failure)?
        .ok_or_else(|| failure(ErrorKind::NotFound, NOT_FOUND, "사용자를 찾을 수 없습니다."))?;

    if role != UserRole::Advertiser {
        return Ok(AdvertiserProfileStatus {
            is_advertiser: false,
            has_profile: false,
            needs_onboarding: false,
        });
    }

    let has_profile = database
        .find_advertiser_profile_id(user_id)
        .await
        .map_err(status_failure)?
        .is_some();

    Ok(AdvertiserProfileStatus {
        is_advertiser: true,
        has_profile,
        needs_onboarding: !has_profile,
    })
}
