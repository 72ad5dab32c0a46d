//! HTTP API handlers for the core API service

pub mod error;
pub mod health;
pub mod images;
pub mod species;

pub use error::ApiError;
pub use health::health_routes;
pub use images::{get_image, get_image_attributions, list_images};
pub use species::list_species;
