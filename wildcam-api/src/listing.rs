//! Image listing pipeline
//!
//! time window → image page + windowed count → attributions for the page →
//! group by image → validity/species filter → pagination metadata.
//!
//! The pagination total comes from the windowed count only. Images dropped by
//! the attribution filters are still counted, so a page can hold fewer than
//! `limit` images (or none) while `totalPages` says more pages exist.

use std::collections::HashMap;

use sqlx::SqlitePool;
use tracing::debug;
use wildcam_common::db::{Attribution, EnrichedImage, Image};
use wildcam_common::{Result, TimeRange};

use crate::db;
use crate::pagination::{calculate_pagination, page_offset, Pagination};

/// A validated image listing request
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRequest {
    pub page: i64,
    pub limit: i64,
    pub time_range: TimeRange,
    /// Exact, case-sensitive species label to require
    pub species: Option<String>,
}

/// One page of filtered images with its pagination metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ImageListing {
    pub images: Vec<EnrichedImage>,
    pub pagination: Pagination,
}

/// Attributions indexed by owning image, in arrival order
///
/// Images without attributions have no entry.
pub fn group_attributions(attributions: Vec<Attribution>) -> HashMap<String, Vec<Attribution>> {
    let mut groups: HashMap<String, Vec<Attribution>> = HashMap::new();
    for attribution in attributions {
        groups
            .entry(attribution.image_id.clone())
            .or_default()
            .push(attribution);
    }
    groups
}

/// Join images to their attributions and apply the listing filters
///
/// An image survives when at least one attribution carries a valid species
/// label and, if `species` is given, at least one attribution's label equals
/// it exactly. Survivors keep their full attribution list and input order.
pub fn compose_results(
    images: Vec<Image>,
    mut groups: HashMap<String, Vec<Attribution>>,
    species: Option<&str>,
) -> Vec<EnrichedImage> {
    images
        .into_iter()
        .filter_map(|image| {
            let attributions = groups.remove(&image.id).unwrap_or_default();

            if !attributions.iter().any(Attribution::has_valid_species) {
                return None;
            }

            if let Some(wanted) = species {
                if !attributions
                    .iter()
                    .any(|a| a.species.as_deref() == Some(wanted))
                {
                    return None;
                }
            }

            Some(EnrichedImage {
                image,
                attributions,
            })
        })
        .collect()
}

/// Run the full listing pipeline for one request
///
/// Any storage failure aborts the whole listing.
pub async fn list_images(pool: &SqlitePool, request: &ListingRequest) -> Result<ImageListing> {
    let since = request.time_range.lower_bound();
    let offset = page_offset(request.page, request.limit);

    let (total, images) = tokio::try_join!(
        db::count_images(pool, since),
        db::fetch_image_page(pool, since, offset, request.limit),
    )?;

    let pagination = calculate_pagination(request.page, request.limit, total);

    if images.is_empty() {
        debug!(
            time_range = %request.time_range,
            offset,
            total,
            "Empty image page, skipping attribution lookup"
        );
        return Ok(ImageListing {
            images: Vec::new(),
            pagination,
        });
    }

    let image_ids: Vec<String> = images.iter().map(|image| image.id.clone()).collect();
    let attributions = db::load_attributions(pool, &image_ids).await?;
    let fetched = images.len();

    let images = compose_results(
        images,
        group_attributions(attributions),
        request.species.as_deref(),
    );

    debug!(
        time_range = %request.time_range,
        species = ?request.species,
        offset,
        total,
        fetched,
        returned = images.len(),
        "Composed image page"
    );

    Ok(ImageListing { images, pagination })
}
