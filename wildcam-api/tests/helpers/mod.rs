//! Shared fixtures for API integration tests

#![allow(dead_code)]

use axum::{
    body::Body,
    http::Request,
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use wildcam_api::{build_router, AppState};

/// Test helper: single-connection in-memory store with the schema applied
pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Should open in-memory database");

    wildcam_api::db::schema::create_schema(&pool)
        .await
        .expect("Should create schema");

    pool
}

/// Test helper: router over the given pool
pub fn setup_app(db: SqlitePool) -> axum::Router {
    build_router(AppState::new(db))
}

pub async fn insert_image(pool: &SqlitePool, id: &str, captured_at: DateTime<Utc>) {
    sqlx::query(
        "INSERT INTO images (id, captured_at, stored_at, file_name, environment, tags)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(captured_at)
    .bind(captured_at)
    .bind(format!("{}.jpg", id))
    .bind(r#"{"temperature_c": 12}"#)
    .bind(r#"["trail"]"#)
    .execute(pool)
    .await
    .expect("Should insert image");
}

pub async fn insert_attribution(
    pool: &SqlitePool,
    image_id: &str,
    species: Option<&str>,
    confidence: f64,
    model_version: &str,
) {
    sqlx::query(
        "INSERT INTO attributions (image_id, model_version, species, confidence, extra)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(image_id)
    .bind(model_version)
    .bind(species)
    .bind(confidence)
    .bind(r#"{"bbox": [0, 0, 10, 10]}"#)
    .execute(pool)
    .await
    .expect("Should insert attribution");
}

/// Test helper: GET request
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: Extract JSON body from response
pub async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

/// Ids of the images in a listing response, in order
pub fn image_ids(body: &Value) -> Vec<String> {
    body["images"]
        .as_array()
        .expect("images should be an array")
        .iter()
        .map(|image| image["id"].as_str().unwrap().to_string())
        .collect()
}
