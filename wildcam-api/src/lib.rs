//! Core API service library
//!
//! Serves paginated, filterable listings of wildlife-camera images and their
//! species attributions from a read-only image store.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod listing;
pub mod pagination;
pub mod species;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (read-only in production)
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/images", get(api::list_images))
        .route("/images/:id", get(api::get_image))
        .route("/images/:id/attributions", get(api::get_image_attributions))
        .route("/species", get(api::list_species))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
