//! Attribution queries

use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use wildcam_common::db::Attribution;

use super::json_column;

const ATTRIBUTION_COLUMNS: &str = "id, image_id, model_version, species, confidence, extra";

/// Upper bound on ids bound into a single `IN (...)` list
const MAX_IDS_PER_QUERY: usize = 500;

/// Load every attribution owned by the given images
///
/// An empty id set returns immediately without touching the database.
pub async fn load_attributions(
    pool: &SqlitePool,
    image_ids: &[String],
) -> Result<Vec<Attribution>, sqlx::Error> {
    let mut attributions = Vec::new();

    for chunk in image_ids.chunks(MAX_IDS_PER_QUERY) {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {} FROM attributions WHERE image_id IN (",
            ATTRIBUTION_COLUMNS
        ));
        let mut ids = builder.separated(", ");
        for id in chunk {
            ids.push_bind(id.as_str());
        }
        ids.push_unseparated(") ORDER BY id");

        let rows = builder.build().fetch_all(pool).await?;
        for row in &rows {
            attributions.push(attribution_from_row(row)?);
        }
    }

    Ok(attributions)
}

/// Attributions of one image, highest confidence first
pub async fn fetch_image_attributions(
    pool: &SqlitePool,
    image_id: &str,
) -> Result<Vec<Attribution>, sqlx::Error> {
    let sql = format!(
        "SELECT {} FROM attributions WHERE image_id = ? ORDER BY confidence DESC",
        ATTRIBUTION_COLUMNS
    );

    let rows = sqlx::query(&sql).bind(image_id).fetch_all(pool).await?;
    rows.iter().map(attribution_from_row).collect()
}

/// Species column of every attribution, including missing labels
pub async fn load_species_labels(pool: &SqlitePool) -> Result<Vec<Option<String>>, sqlx::Error> {
    sqlx::query_scalar("SELECT species FROM attributions")
        .fetch_all(pool)
        .await
}

fn attribution_from_row(row: &SqliteRow) -> Result<Attribution, sqlx::Error> {
    Ok(Attribution {
        id: row.try_get("id")?,
        image_id: row.try_get("image_id")?,
        model_version: row.try_get("model_version")?,
        species: row.try_get("species")?,
        confidence: row.try_get("confidence")?,
        extra: json_column(row, "extra")?,
    })
}
