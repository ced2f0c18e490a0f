use crate::startup::AppState;
use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use std::time::{SystemTime, UNIX_EPOCH};

/// Health check endpoint for liveness probes.
///
/// `ts` is the current Unix epoch time in seconds, as a float.
pub async fn healthz(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics.record_request("/healthz");

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default();

    Json(json!({
        "status": "ok",
        "ts": ts
    }))
}
