//! Database models shared by the wildcam services

pub mod models;

pub use models::*;
