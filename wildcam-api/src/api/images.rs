//! Image listing and lookup endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use tracing::debug;
use wildcam_common::db::{Attribution, EnrichedImage};
use wildcam_common::{Error, TimeRange};

use crate::api::ApiError;
use crate::listing::{self, ListingRequest};
use crate::pagination::{parse_limit, parse_page, Pagination};
use crate::{db, AppState};

/// Raw query parameters for `GET /images`
///
/// Kept as strings so malformed numbers fall back to defaults instead of
/// rejecting the request.
#[derive(Debug, Default)]
pub struct ListImagesQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub time_range: Option<String>,
    pub species: Option<String>,
}

impl ListImagesQuery {
    /// Collect known parameters from decoded query pairs
    ///
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = ListImagesQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                "timeRange" => &mut query.time_range,
                "species" => &mut query.species,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Token echoed back in `filters.timeRange`
    fn time_range_token(&self) -> String {
        self.time_range
            .clone()
            .unwrap_or_else(|| TimeRange::All.as_str().to_string())
    }

    fn species_filter(&self) -> Option<String> {
        self.species.clone().filter(|species| !species.is_empty())
    }

    pub fn to_request(&self) -> ListingRequest {
        ListingRequest {
            page: parse_page(self.page.as_deref()),
            limit: parse_limit(self.limit.as_deref()),
            time_range: self
                .time_range
                .as_deref()
                .map(TimeRange::from_token)
                .unwrap_or_default(),
            species: self.species_filter(),
        }
    }
}

/// Filters echoed back with a listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingFilters {
    pub time_range: String,
    pub species: Option<String>,
}

/// Response for `GET /images`
#[derive(Debug, Serialize)]
pub struct ImageListResponse {
    pub images: Vec<EnrichedImage>,
    pub pagination: Pagination,
    pub filters: ListingFilters,
}

/// Response for `GET /images/:id/attributions`
#[derive(Debug, Serialize)]
pub struct ImageAttributionsResponse {
    pub image_id: String,
    pub attributions: Vec<Attribution>,
}

/// GET /images?page&limit&timeRange&species
///
/// Returns images with at least one valid species identification, newest
/// first, optionally narrowed to one species.
pub async fn list_images(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ImageListResponse>, ApiError> {
    let query = ListImagesQuery::from_pairs(pairs);
    let request = query.to_request();
    let listing = listing::list_images(&state.db, &request).await?;

    Ok(Json(ImageListResponse {
        images: listing.images,
        pagination: listing.pagination,
        filters: ListingFilters {
            time_range: query.time_range_token(),
            species: request.species,
        },
    }))
}

/// GET /images/:id
///
/// Returns the image record with its attributions, highest confidence first.
pub async fn get_image(
    State(state): State<AppState>,
    Path(image_id): Path<String>,
) -> Result<Json<EnrichedImage>, ApiError> {
    let image = match db::fetch_image(&state.db, &image_id).await? {
        Some(image) => image,
        None => {
            debug!("Image not found: {}", image_id);
            return Err(Error::NotFound("Image not found".to_string()).into());
        }
    };

    let attributions = db::fetch_image_attributions(&state.db, &image_id).await?;

    Ok(Json(EnrichedImage {
        image,
        attributions,
    }))
}

/// GET /images/:id/attributions
///
/// Unknown ids yield an empty list.
pub async fn get_image_attributions(
    State(state): State<AppState>,
    Path(image_id): Path<String>,
) -> Result<Json<ImageAttributionsResponse>, ApiError> {
    let attributions = db::fetch_image_attributions(&state.db, &image_id).await?;

    Ok(Json(ImageAttributionsResponse {
        image_id,
        attributions,
    }))
}
