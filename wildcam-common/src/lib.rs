//! # Wildcam Common Library
//!
//! Shared code for the wildcam services including:
//! - Image and attribution models
//! - Time-range resolution
//! - Service configuration loading
//! - Common error types

pub mod config;
pub mod db;
pub mod error;
pub mod time;

pub use error::{Error, Result};
pub use time::TimeRange;
