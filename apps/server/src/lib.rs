//! BC Course Finder - search API server
//!
//! A JSON API over the provincial course catalog:
//! - Free-text search with exact-match filters and pagination
//! - Facet aggregation for the filter UI, cached in memory
//! - Autocomplete suggestions deduplicated by course code
//! - Course-code lookup across grade levels
//! - Fire-and-forget search analytics

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
