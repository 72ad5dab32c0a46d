//! Database models
//!
//! One image owns zero or more attributions. Both are read-only from the
//! services' point of view; ingestion happens elsewhere.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A captured wildlife-camera image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    /// Capture time reported by the camera
    pub captured_at: DateTime<Utc>,
    /// Time the file landed in storage
    pub stored_at: Option<DateTime<Utc>>,
    pub file_name: Option<String>,
    pub file_path: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_video: bool,
    pub owner_id: Option<String>,
    pub is_favorite: bool,
    /// Environmental readings (temperature, moon phase, ...) as delivered by the camera
    pub environment: Value,
    pub tags: Vec<String>,
}

/// A machine-generated species identification for one image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribution {
    pub id: i64,
    pub image_id: String,
    pub model_version: String,
    /// Species label; missing or blank labels are invalid
    pub species: Option<String>,
    /// Confidence score in [0, 1]
    pub confidence: f64,
    pub extra: Value,
}

impl Attribution {
    /// Species label if it is present and non-blank
    pub fn valid_species(&self) -> Option<&str> {
        self.species
            .as_deref()
            .filter(|label| is_valid_species_label(label))
    }

    pub fn has_valid_species(&self) -> bool {
        self.valid_species().is_some()
    }
}

/// A label is valid when it still has content after trimming whitespace
pub fn is_valid_species_label(label: &str) -> bool {
    !label.trim().is_empty()
}

/// An image together with its full attribution list
///
/// Serializes as the image record with an extra `attributions` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedImage {
    #[serde(flatten)]
    pub image: Image,
    pub attributions: Vec<Attribution>,
}

/// Occurrence count of one species label across all attributions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesCount {
    pub species: String,
    pub count: i64,
}
