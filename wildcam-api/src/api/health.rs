//! Liveness endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Name reported by the liveness endpoints
pub const SERVICE_NAME: &str = "core-api-service";

/// Root liveness response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub service: String,
}

/// Health check response, adds the build version
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// GET /
pub async fn root_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build liveness routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_status))
        .route("/health", get(health_check))
}
