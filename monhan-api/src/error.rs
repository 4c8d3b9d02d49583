//! Error types and HTTP response conversion
//!
//! Three wire shapes, matching the API contract:
//! `{message}` for single-entity 404s, `{error, message}` for uncaught
//! failures, and `{error, message, path}` for unmatched routes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using the service error
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset failed to load or parse at startup
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Record not found; the message names the missing key
    #[error("{0}")]
    NotFound(String),
}

/// `{message}` body used by single-entity 404s.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{error, message[, path]}` body used for uncaught failures and
/// unmatched routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse::new(message)),
            )
                .into_response(),

            other => {
                tracing::error!("request failed: {other}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Internal Server Error", other.to_string())),
                )
                    .into_response()
            }
        }
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_message_body() {
        let response = Error::NotFound("Quest not found with id: abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn dataset_failure_maps_to_500() {
        let response = Error::Dataset("corrupt corpus".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn message_body_shape() {
        let body = MessageResponse::new("Monster not found: X");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Monster not found: X"}));
    }

    #[test]
    fn error_body_omits_absent_path() {
        let body = ErrorResponse::new("Internal Server Error", "boom");
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("path").is_none());

        let body = ErrorResponse::new("Not Found", "no route").with_path("/nope");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["path"], "/nope");
    }
}
