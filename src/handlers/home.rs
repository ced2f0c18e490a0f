use crate::startup::AppState;
use axum::{extract::State, response::Html};

/// Greeting endpoint. Counts the request and returns a fixed body.
pub async fn home(State(state): State<AppState>) -> Html<&'static str> {
    state.metrics.record_request("/");
    Html("Hello from Dockerized Flask App with Metrics!")
}
