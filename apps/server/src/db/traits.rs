//! Core trait for course catalog storage backends

use crate::api::params::SearchParams;
use crate::db::sql::FacetColumn;
use crate::models::{Course, CoursePage, FacetValue, SearchLogEntry, Suggestion};
use crate::Result;
use async_trait::async_trait;

/// Storage operations for the course catalog
///
/// All reads against the `courses` table go through this trait so the HTTP
/// layer can be exercised against an in-memory backend in tests. Every
/// method is read-only except `insert_search_log`, which writes to the
/// separate `search_logs` table; course rows are never mutated here (the
/// import pipeline is the only writer).
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Run a validated search: filters ANDed, text query OR-grouped over
    /// `course_title`/`code`/`hst_sub_category`, ordered by `grade` then
    /// `course_title` (plain string order), windowed by limit/offset.
    ///
    /// # Returns
    /// The page of matching courses plus the exact total match count,
    /// independent of the window. An empty page is not an error.
    async fn search_courses(&self, params: &SearchParams) -> Result<CoursePage>;

    /// Tally one facet column: distinct non-null values with row counts,
    /// ordered by value. Display ordering is applied by the caller.
    async fn facet_counts(&self, column: FacetColumn) -> Result<Vec<FacetValue>>;

    /// Fetch up to `limit` suggestion rows whose title or code contains
    /// `term` (case-insensitive), ordered by title. No deduplication — the
    /// caller dedups by code after the fact.
    async fn suggest_courses(&self, term: &str, limit: i64) -> Result<Vec<Suggestion>>;

    /// Fetch every course row holding the given code, across grade levels.
    async fn courses_by_code(&self, code: &str) -> Result<Vec<Course>>;

    /// Exact row count of the catalog; doubles as the health check.
    async fn count_courses(&self) -> Result<i64>;

    /// Append one search telemetry row.
    async fn insert_search_log(&self, entry: &SearchLogEntry) -> Result<()>;
}
