//! Request handlers
//!
//! One module per resource family. Handlers clone out of the shared
//! stores; the stores themselves are never mutated after startup.

pub mod endemic_life;
pub mod games;
pub mod health;
pub mod monsters;
pub mod quests;

use axum::{extract::OriginalUri, http::StatusCode, Json};

use crate::error::ErrorResponse;

/// `GET /`
pub async fn welcome() -> &'static str {
    "Welcome to Monster Hunter API"
}

/// Fallback for unmatched routes: 404 `{error, message, path}`.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(
            ErrorResponse::new("Not Found", "The requested resource does not exist")
                .with_path(uri.path().to_string()),
        ),
    )
}
