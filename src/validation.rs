//! Field-level request validation shared by the feature schemas.

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use url::Url;

/// Messages collected per field, reported to clients as
/// `{"<field>": ["message", ...]}`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn finish<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    pub fn to_details(&self) -> Value {
        serde_json::to_value(&self.0).unwrap_or(Value::Null)
    }
}

fn cached(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("validation pattern is valid"))
}

pub fn is_valid_email(value: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    cached(
        &EMAIL_RE,
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$",
    )
    .is_match(value)
}

/// Korean mobile number, dashes optional: `010-1234-5678`, `01012345678`.
pub fn is_valid_mobile_phone(value: &str) -> bool {
    static MOBILE_RE: OnceLock<Regex> = OnceLock::new();
    cached(&MOBILE_RE, r"^01[0-9]-?[0-9]{3,4}-?[0-9]{4}$").is_match(value)
}

/// Landline or mobile with area code and dashes: `02-123-4567`.
pub fn is_valid_business_phone(value: &str) -> bool {
    static PHONE_RE: OnceLock<Regex> = OnceLock::new();
    cached(&PHONE_RE, r"^0\d{1,2}-\d{3,4}-\d{4}$").is_match(value)
}

/// Business registration number: `123-45-67890`.
pub fn is_valid_business_number(value: &str) -> bool {
    static BUSINESS_NUMBER_RE: OnceLock<Regex> = OnceLock::new();
    cached(&BUSINESS_NUMBER_RE, r"^\d{3}-\d{2}-\d{5}$").is_match(value)
}

/// Strict `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    static DATE_RE: OnceLock<Regex> = OnceLock::new();
    if !cached(&DATE_RE, r"^\d{4}-\d{2}-\d{2}$").is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Absolute URL with a host.
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| url.has_host())
        .unwrap_or(false)
}
