use crate::validation::{self, FieldErrors};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Default)]
pub struct AdvertiserProfilePayload {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub company_phone: String,
    #[serde(default)]
    pub business_number: String,
    #[serde(default)]
    pub owner_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertiserProfileRequest {
    pub company_name: String,
    pub location: String,
    pub company_phone: String,
    pub business_number: String,
    pub owner_name: String,
}

impl AdvertiserProfilePayload {
    pub fn validate(self) -> Result<AdvertiserProfileRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            !self.company_name.is_empty(),
            "company_name",
            "업체명을 입력해주세요.",
        );
        errors.check(
            !self.location.is_empty(),
            "location",
            "업체 주소를 입력해주세요.",
        );
        errors.check(
            validation::is_valid_business_phone(&self.company_phone),
            "company_phone",
            "전화번호 형식이 올바르지 않습니다.",
        );
        errors.check(
            validation::is_valid_business_number(&self.business_number),
            "business_number",
            "사업자등록번호 형식이 올바르지 않습니다.",
        );
        errors.check(
            !self.owner_name.is_empty(),
            "owner_name",
            "대표자명을 입력해주세요.",
        );

        errors.finish(AdvertiserProfileRequest {
            company_name: self.company_name,
            location: self.location,
            company_phone: self.company_phone,
            business_number: self.business_number,
            owner_name: self.owner_name,
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdvertiserProfileSaved {
    pub profile_id: i64,
    pub is_new_profile: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdvertiserProfileResponse {
    pub message: String,
    pub profile_id: i64,
    pub is_new_profile: bool,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdvertiserProfileStatus {
    pub is_advertiser: bool,
    pub has_profile: bool,
    pub needs_onboarding: bool,
}
