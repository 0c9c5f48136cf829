//! Business logic services

pub mod analytics;
pub mod filters;
pub mod lookup;
pub mod search;
pub mod suggest;

pub use analytics::AnalyticsService;
pub use filters::FilterService;
pub use lookup::LookupService;
pub use search::SearchService;
pub use suggest::SuggestService;
