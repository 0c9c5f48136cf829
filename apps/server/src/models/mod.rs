//! Domain models for the course search server

pub mod analytics;
pub mod course;

pub use analytics::{SearchAnalyticsPayload, SearchLogEntry};
pub use course::{
    Course, CoursePage, FacetValue, FilterOptions, HealthStatus, LookupResponse, SearchResponse,
    SuggestResponse, Suggestion,
};
