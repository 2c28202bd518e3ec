pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
pub const FORBIDDEN_ROLE: &str = "FORBIDDEN_ROLE";
pub const CONFLICT: &str = "CONFLICT";
pub const UPDATE_FAILED: &str = "UPDATE_FAILED";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
