//! Image queries
//!
//! Capture times are compared through `julianday()` rather than as text, so
//! rows written as `2025-05-31 23:00:00`, `...T23:00:00Z` or
//! `...T23:00:00.000+00:00` all window and order by the instant they name.
//!
//! The windowed count and the windowed page are deliberately independent:
//! the count only reflects the capture-time window, never the attribution
//! filters applied after the page is fetched.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use wildcam_common::db::Image;

use super::json_column;

const IMAGE_COLUMNS: &str = "id, captured_at, stored_at, file_name, file_path, latitude, longitude, \
     is_video, owner_id, is_favorite, environment, tags";

/// Lower bound as bound into window queries
fn window_bound(since: Option<DateTime<Utc>>) -> Option<String> {
    since.map(|t| t.to_rfc3339_opts(SecondsFormat::Micros, true))
}

/// Count images captured at or after `since` (all images when `None`)
pub async fn count_images(
    pool: &SqlitePool,
    since: Option<DateTime<Utc>>,
) -> Result<i64, sqlx::Error> {
    let since = window_bound(since);

    sqlx::query_scalar(
        "SELECT COUNT(*) FROM images
         WHERE (? IS NULL OR julianday(captured_at) >= julianday(?))",
    )
    .bind(since.as_deref())
    .bind(since.as_deref())
    .fetch_one(pool)
    .await
}

/// Fetch one window of images captured at or after `since`, newest first
///
/// Ties on capture time are broken by id so paging is stable. An offset past
/// the end yields an empty page.
pub async fn fetch_image_page(
    pool: &SqlitePool,
    since: Option<DateTime<Utc>>,
    offset: i64,
    limit: i64,
) -> Result<Vec<Image>, sqlx::Error> {
    let since = window_bound(since);
    let sql = format!(
        "SELECT {} FROM images
         WHERE (? IS NULL OR julianday(captured_at) >= julianday(?))
         ORDER BY julianday(captured_at) DESC, id DESC
         LIMIT ? OFFSET ?",
        IMAGE_COLUMNS
    );

    let rows = sqlx::query(&sql)
        .bind(since.as_deref())
        .bind(since.as_deref())
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

    rows.iter().map(image_from_row).collect()
}

/// Load a single image by id
pub async fn fetch_image(pool: &SqlitePool, id: &str) -> Result<Option<Image>, sqlx::Error> {
    let sql = format!("SELECT {} FROM images WHERE id = ?", IMAGE_COLUMNS);

    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;
    row.as_ref().map(image_from_row).transpose()
}

fn image_from_row(row: &SqliteRow) -> Result<Image, sqlx::Error> {
    let tags = match json_column(row, "tags")? {
        serde_json::Value::Null => Vec::new(),
        value => serde_json::from_value(value).map_err(|e| sqlx::Error::ColumnDecode {
            index: "tags".to_string(),
            source: Box::new(e),
        })?,
    };

    Ok(Image {
        id: row.try_get("id")?,
        captured_at: row.try_get("captured_at")?,
        stored_at: row.try_get("stored_at")?,
        file_name: row.try_get("file_name")?,
        file_path: row.try_get("file_path")?,
        latitude: row.try_get("latitude")?,
        longitude: row.try_get("longitude")?,
        is_video: row.try_get("is_video")?,
        owner_id: row.try_get("owner_id")?,
        is_favorite: row.try_get("is_favorite")?,
        environment: json_column(row, "environment")?,
        tags,
    })
}
