//! Launcher liveness endpoint.
//!
//! Answers independently of the n8n child: a 200 here means the
//! supervisor is alive, not that n8n is.

use crate::error::{LauncherError, Result as LauncherResult};

use std::panic::Location;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use launcher_config::HealthEndpointConfig;
use log::info;
use serde_json::json;
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct HealthState {
    started_at: Instant,
    service: Arc<str>,
    path: Arc<str>,
}

impl HealthState {
    /// `started_at` is the reference point for the reported uptime.
    pub fn new(started_at: Instant, service: &str, path: &str) -> Self {
        Self {
            started_at,
            service: Arc::from(service),
            path: Arc::from(path),
        }
    }

    pub fn from_config(started_at: Instant, config: &HealthEndpointConfig) -> Self {
        Self::new(started_at, &config.service_name, &config.path)
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// GET /render-health - supervisor liveness
pub async fn launcher_health(State(state): State<HealthState>) -> Response {
    let health = json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime": state.started_at.elapsed().as_secs_f64(),
        "service": &*state.service,
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// Everything else, including other methods on the health path
pub async fn not_found(State(state): State<HealthState>, method: Method, uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        format!(
            "Not found: {method} {}. This listener only serves GET {}",
            uri.path(),
            state.path
        ),
    )
        .into_response()
}

/// Bind the health listener.
pub async fn bind(config: &HealthEndpointConfig) -> LauncherResult<TcpListener> {
    let addr = config.bind_addr();
    let location = ErrorLocation::from(Location::caller());

    TcpListener::bind(&addr)
        .await
        .map_err(|source| LauncherError::Bind {
            addr,
            source,
            location,
        })
}

/// Serve the health router until the listener fails.
pub async fn serve(listener: TcpListener, router: Router) -> LauncherResult<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Health endpoint listening on {addr}");
    }

    axum::serve(listener, router)
        .await
        .map_err(|source| LauncherError::Serve {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
}
