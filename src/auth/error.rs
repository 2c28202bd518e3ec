pub const INVALID_SIGNUP_REQUEST: &str = "INVALID_SIGNUP_REQUEST";
pub const EMAIL_ALREADY_EXISTS: &str = "AUTH_EMAIL_ALREADY_EXISTS";
pub const PHONE_ALREADY_EXISTS: &str = "AUTH_PHONE_ALREADY_EXISTS";
pub const CREATE_AUTH_USER_FAILED: &str = "AUTH_CREATE_USER_FAILED";
pub const CREATE_PROFILE_FAILED: &str = "AUTH_CREATE_PROFILE_FAILED";
pub const VALIDATION_ERROR: &str = "AUTH_VALIDATION_ERROR";
