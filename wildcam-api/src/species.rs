//! Species occurrence summary across all attributions

use std::collections::HashMap;

use sqlx::SqlitePool;
use wildcam_common::db::{is_valid_species_label, SpeciesCount};
use wildcam_common::Result;

use crate::db;

/// Count valid species labels, most frequent first
///
/// Labels are counted exactly as stored; blank or missing labels are skipped.
/// Equal counts are ordered by label so the output is deterministic.
pub fn aggregate_species<I>(labels: I) -> Vec<SpeciesCount>
where
    I: IntoIterator<Item = Option<String>>,
{
    let mut counts: HashMap<String, i64> = HashMap::new();
    for label in labels.into_iter().flatten() {
        if is_valid_species_label(&label) {
            *counts.entry(label).or_insert(0) += 1;
        }
    }

    let mut summary: Vec<SpeciesCount> = counts
        .into_iter()
        .map(|(species, count)| SpeciesCount { species, count })
        .collect();
    summary.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.species.cmp(&b.species)));
    summary
}

/// Species summary over the whole attribution store
pub async fn species_summary(pool: &SqlitePool) -> Result<Vec<SpeciesCount>> {
    let labels = db::load_species_labels(pool).await?;
    Ok(aggregate_species(labels))
}
