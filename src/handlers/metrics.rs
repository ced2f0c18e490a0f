use crate::error::AppError;
use crate::services::metrics::METRICS_CONTENT_TYPE;
use crate::startup::AppState;
use axum::{extract::State, http::header, response::IntoResponse};

/// Metrics endpoint. Reports a snapshot of the registry in the Prometheus
/// text exposition format. Does not count itself.
pub async fn metrics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = state.metrics.render()?;

    Ok(([(header::CONTENT_TYPE, METRICS_CONTENT_TYPE)], body))
}
