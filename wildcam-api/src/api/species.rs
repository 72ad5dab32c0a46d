//! Species summary endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use wildcam_common::db::SpeciesCount;

use crate::api::ApiError;
use crate::{species, AppState};

/// Response for `GET /species`
#[derive(Debug, Serialize)]
pub struct SpeciesResponse {
    pub species: Vec<SpeciesCount>,
}

/// GET /species
///
/// Complete, unpaginated count of every valid species label.
pub async fn list_species(State(state): State<AppState>) -> Result<Json<SpeciesResponse>, ApiError> {
    let species = species::species_summary(&state.db).await?;
    Ok(Json(SpeciesResponse { species }))
}
