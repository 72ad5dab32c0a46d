//! Database access layer for the core API service
//!
//! All connections opened by the service are read-only; the image and
//! attribution tables are populated by the ingestion pipeline.

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

pub mod attributions;
pub mod images;
pub mod schema;

pub use attributions::{fetch_image_attributions, load_attributions, load_species_labels};
pub use images::{count_images, fetch_image, fetch_image_page};

/// Connect to the store in read-only mode
///
/// The database must already exist; it is never created here.
pub async fn connect_readonly(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid database URL: {}", database_url))?
        .read_only(true)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await
        .context("Failed to connect to database in read-only mode")?;

    // Verify read-only by attempting a write (should fail)
    #[cfg(debug_assertions)]
    {
        let write_test = sqlx::query("CREATE TABLE _test_write (id INTEGER)")
            .execute(&pool)
            .await;
        if write_test.is_ok() {
            anyhow::bail!("Database connection is not read-only");
        }
    }

    Ok(pool)
}

/// Decode a nullable JSON text column, mapping NULL to `Value::Null`
pub(crate) fn json_column(
    row: &sqlx::sqlite::SqliteRow,
    column: &str,
) -> Result<serde_json::Value, sqlx::Error> {
    use sqlx::Row;

    let raw: Option<String> = row.try_get(column)?;
    match raw {
        Some(text) => serde_json::from_str(&text).map_err(|e| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: Box::new(e),
        }),
        None => Ok(serde_json::Value::Null),
    }
}
