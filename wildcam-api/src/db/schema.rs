//! Table definitions for the image store
//!
//! Timestamps are text in any form SQLite's `julianday()` understands
//! (ISO 8601 / RFC 3339, `T` or space separator, optional offset).

use sqlx::SqlitePool;

/// Create the `images` and `attributions` tables if they do not exist
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS images (
            id TEXT PRIMARY KEY,
            captured_at TEXT NOT NULL,
            stored_at TEXT,
            file_name TEXT,
            file_path TEXT,
            latitude REAL,
            longitude REAL,
            is_video INTEGER NOT NULL DEFAULT 0,
            owner_id TEXT,
            is_favorite INTEGER NOT NULL DEFAULT 0,
            environment TEXT,
            tags TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attributions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            image_id TEXT NOT NULL REFERENCES images(id) ON DELETE CASCADE,
            model_version TEXT NOT NULL,
            species TEXT,
            confidence REAL NOT NULL CHECK (confidence >= 0.0 AND confidence <= 1.0),
            extra TEXT,
            UNIQUE (image_id, species, model_version)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_attributions_image_id ON attributions(image_id)")
        .execute(pool)
        .await?;

    Ok(())
}
