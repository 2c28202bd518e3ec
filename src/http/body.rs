use super::response::{failure, ErrorKind, Failure};
use axum::body::Bytes;
use serde::de::DeserializeOwned;
use serde_json::json;

/// Parses a JSON request body, mapping syntax and type errors onto a 400
/// failure carrying the given code and message.
pub fn parse_json<T: DeserializeOwned>(
    body: &Bytes,
    code: &'static str,
    message: &str,
) -> Result<T, Failure> {
    serde_json::from_slice(body).map_err(|e| {
        failure(ErrorKind::InvalidRequest, code, message).with_details(json!({
            "body": [e.to_string()],
        }))
    })
}
