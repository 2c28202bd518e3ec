//! Uniform success/failure envelope returned by every endpoint.
//!
//! Success: `{"ok": true, "status": 201, "data": {...}}`
//! Failure: `{"ok": false, "status": 409, "error": {"code", "message", "details"?}}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;

/// Failure taxonomy. The kind alone decides the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidRequest,
    Unauthorized,
    ForbiddenRole,
    NotFound,
    Conflict,
    InternalError,
    NotImplemented,
}

impl ErrorKind {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorKind::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::ForbiddenRole => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::NotImplemented => StatusCode::NOT_IMPLEMENTED,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Success<T> {
    pub data: T,
    pub status: StatusCode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub kind: ErrorKind,
    pub code: &'static str,
    pub message: String,
    pub details: Option<Value>,
}

pub type HandlerResult<T> = Result<Success<T>, Failure>;

pub fn success<T>(data: T, status: StatusCode) -> HandlerResult<T> {
    Ok(Success { data, status })
}

pub fn failure(kind: ErrorKind, code: &'static str, message: impl Into<String>) -> Failure {
    Failure {
        kind,
        code,
        message: message.into(),
        details: None,
    }
}

impl Failure {
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }

    pub fn is_server_error(&self) -> bool {
        self.status().is_server_error()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.status(), self.code, self.message)
    }
}

impl<T> Success<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Success<U> {
        Success {
            data: f(self.data),
            status: self.status,
        }
    }
}

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> Response {
        let body = json!({
            "ok": true,
            "status": self.status.as_u16(),
            "data": self.data,
        });
        (self.status, Json(body)).into_response()
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut error = json!({
            "code": self.code,
            "message": self.message,
        });
        if let Some(details) = self.details {
            error["details"] = details;
        }
        let body = json!({
            "ok": false,
            "status": status.as_u16(),
            "error": error,
        });
        (status, Json(body)).into_response()
    }
}
