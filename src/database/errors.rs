use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

// Postgres SQLSTATE for unique_violation
pub const UNIQUE_VIOLATION: &str = "23505";

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Query error: {0}")]
    QueryError(String),
    #[error("Decode error: {0}")]
    DecodeError(String),
    #[error("{0}")]
    Store(StoreError),
}

impl DatabaseError {
    pub fn store(&self) -> Option<&StoreError> {
        match self {
            DatabaseError::Store(err) => Some(err),
            _ => None,
        }
    }

    /// Name of the unique constraint this error violated, if any.
    pub fn violated_unique_constraint(&self) -> Option<&str> {
        self.store()
            .filter(|err| err.code == UNIQUE_VIOLATION)
            .and_then(|err| err.constraint.as_deref())
    }
}

/// Error reported by the relational store itself, with the constraint name
/// already pulled out of the Postgres message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    pub code: String,
    pub constraint: Option<String>,
    pub message: String,
}

impl StoreError {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            constraint: extract_constraint(message),
            message: message.to_string(),
        }
    }

    pub fn unique_violation(constraint: &str) -> Self {
        Self {
            code: UNIQUE_VIOLATION.to_string(),
            constraint: Some(constraint.to_string()),
            message: format!(
                "duplicate key value violates unique constraint \"{}\"",
                constraint
            ),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

// Body PostgREST sends back on a failed request
#[derive(Debug, Deserialize)]
pub(crate) struct PostgrestErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl PostgrestErrorBody {
    pub(crate) fn into_store_error(self) -> StoreError {
        let message = self.message.unwrap_or_default();
        let mut error = StoreError::new(self.code.as_deref().unwrap_or("UNKNOWN"), &message);
        // Some PostgREST versions only name the constraint in `details`
        if error.constraint.is_none() {
            error.constraint = self.details.as_deref().and_then(extract_constraint);
        }
        error
    }
}

fn constraint_regex() -> &'static Regex {
    static CONSTRAINT_RE: OnceLock<Regex> = OnceLock::new();
    CONSTRAINT_RE.get_or_init(|| {
        Regex::new(r#"constraint "([^"]+)""#).expect("constraint pattern is valid")
    })
}

pub(crate) fn extract_constraint(message: &str) -> Option<String> {
    constraint_regex()
        .captures(message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_constraint_from_postgres_message() {
        let message = "duplicate key value violates unique constraint \"users_phone_key\"";
        assert_eq!(extract_constraint(message), Some("users_phone_key".to_string()));
        assert_eq!(extract_constraint("permission denied for table users"), None);
    }

    #[test]
    fn test_postgrest_body_into_store_error() {
        let body: PostgrestErrorBody = serde_json::from_str(
            r#"{"code":"23505","details":"Key (business_number)=(123-45-67890) already exists.","hint":null,"message":"duplicate key value violates unique constraint \"advertiser_profiles_business_number_key\""}"#,
        )
        .unwrap();
        let error = DatabaseError::Store(body.into_store_error());

        assert_eq!(
            error.violated_unique_constraint(),
            Some("advertiser_profiles_business_number_key")
        );
    }

    #[test]
    fn test_non_unique_errors_have_no_violated_constraint() {
        let error = DatabaseError::Store(StoreError::new(
            "23503",
            "insert or update on table \"influencer_channels\" violates foreign key constraint \"influencer_channels_influencer_id_fkey\"",
        ));
        assert_eq!(error.violated_unique_constraint(), None);
        assert_eq!(
            DatabaseError::QueryError("timeout".to_string()).violated_unique_constraint(),
            None
        );
    }
}
