//! Application startup and lifecycle management.
//!
//! Builds the route table once, binds the listener, and serves until the
//! process exits. Port 0 binds an ephemeral port, which the integration
//! tests rely on.

use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::AppMetrics;
use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state. The request counter registry is the only
/// shared mutable resource.
#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<AppMetrics>,
}

/// Route table: every (method, path) pair this service answers.
fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/healthz", get(handlers::healthz))
        .route("/metrics", get(handlers::metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: &ServiceConfig) -> Result<Self, AppError> {
        let metrics = AppMetrics::new()?;
        let state = AppState {
            metrics: Arc::new(metrics),
        };

        let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "invalid listen address {}:{}: {}",
                    config.server.host,
                    config.server.port,
                    e
                ))
            })?;

        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> Result<(), AppError> {
        tracing::info!("Listening on port {}", self.port);

        axum::serve(self.listener, router(self.state))
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}
