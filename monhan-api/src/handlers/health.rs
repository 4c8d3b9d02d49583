//! Health check handlers

use std::collections::HashMap;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service name
    pub service: String,

    /// Version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Readiness check response with dataset status
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Overall readiness status
    pub ready: bool,

    /// Service name
    pub service: String,

    /// Per-dataset record counts
    pub datasets: HashMap<String, usize>,
}

/// Simple health check (liveness probe)
///
/// Always returns 200 OK if the service is running.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: state.config().service.name.clone(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check (readiness probe)
///
/// Datasets load before the listener binds, so readiness only reports
/// their sizes; an empty collection is a valid state, not a failure.
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let mut datasets = HashMap::new();
    datasets.insert("monsters".to_string(), state.monsters().len());
    datasets.insert("quests".to_string(), state.quests().len());
    datasets.insert("endemic_life".to_string(), state.endemic_life().len());

    let response = ReadinessResponse {
        ready: true,
        service: state.config().service.name.clone(),
        datasets,
    };

    (StatusCode::OK, Json(response))
}
