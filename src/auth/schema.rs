use crate::database::{User, UserRole};
use crate::validation::{self, FieldErrors};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MIN_PASSWORD_LEN: usize = 8;
const MAX_NAME_LEN: usize = 100;

// Body as sent by the sign-up form, before validation
#[derive(Debug, Deserialize, Default)]
pub struct SignUpPayload {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub birthdate: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub birthdate: Option<NaiveDate>,
    pub role: UserRole,
}

impl SignUpPayload {
    pub fn validate(self) -> Result<SignUpRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.check(
            validation::is_valid_email(&self.email),
            "email",
            "유효한 이메일 주소를 입력해주세요.",
        );
        errors.check(
            self.password.chars().count() >= MIN_PASSWORD_LEN,
            "password",
            "비밀번호는 최소 8자 이상이어야 합니다.",
        );

        let name_len = self.name.chars().count();
        errors.check(name_len >= 1, "name", "이름을 입력해주세요.");
        errors.check(
            name_len <= MAX_NAME_LEN,
            "name",
            "이름은 최대 100자까지 입력 가능합니다.",
        );
        errors.check(
            validation::is_valid_mobile_phone(&self.phone),
            "phone",
            "유효한 휴대폰 번호를 입력해주세요. (예: 010-1234-5678)",
        );

        // The form sends an empty string when the field is left blank
        let birthdate = match self.birthdate.as_deref().filter(|d| !d.is_empty()) {
            None => None,
            Some(raw) => {
                let parsed = validation::parse_iso_date(raw);
                errors.check(
                    parsed.is_some(),
                    "birthdate",
                    "생년월일은 YYYY-MM-DD 형식이어야 합니다.",
                );
                parsed
            }
        };

        let role = match self.role.as_deref() {
            Some("advertiser") => Some(UserRole::Advertiser),
            Some("influencer") => Some(UserRole::Influencer),
            Some(_) => {
                errors.add("role", "역할은 광고주 또는 인플루언서여야 합니다.");
                None
            }
            None => {
                errors.add("role", "역할을 선택해주세요.");
                None
            }
        };

        match role {
            Some(role) => errors.finish(SignUpRequest {
                email: self.email,
                password: self.password,
                name: self.name,
                phone: self.phone,
                birthdate,
                role,
            }),
            None => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

impl From<User> for SignUpResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.auth_id,
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}

impl SignUpResponse {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(Uuid::parse_str(&self.user_id).is_ok(), "userId", "invalid uuid");
        errors.check(validation::is_valid_email(&self.email), "email", "invalid email");
        errors.check(self.role != UserRole::Unassigned, "role", "invalid role");
        errors.finish(())
    }
}

/// Checks the row read back after the sign-up insert.
pub fn validate_user_row(row: &User, auth_id: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.check(Uuid::parse_str(&row.auth_id).is_ok(), "auth_id", "invalid uuid");
    errors.check(row.auth_id == auth_id, "auth_id", "does not match created account");
    errors.check(
        matches!(row.role, UserRole::Advertiser | UserRole::Influencer),
        "role",
        "invalid role",
    );
    errors.check(!row.name.is_empty(), "name", "required");
    errors.check(!row.phone.is_empty(), "phone", "required");
    errors.check(!row.email.is_empty(), "email", "required");
    errors.finish(())
}
