//! Domain models for the course catalog

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A BC course record as stored in the `courses` table
///
/// Rows are read-only from the server's perspective; the import pipeline is
/// the only writer.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Course {
    /// Database-assigned identifier
    pub id: i64,

    /// Provincial course code (digits). NOT unique on its own: the same code
    /// may recur across grade levels, so `(code, grade)` is the natural key.
    pub code: String,

    /// MyEducation BC system code
    pub myedbc_code: Option<String>,

    /// TRAX system code
    pub trax_code: Option<String>,

    /// Grade token: numeric like "10", or non-numeric like "K"
    pub grade: String,

    pub course_title: String,

    /// May hold comma-separated multiple values, e.g. "2,4"
    pub credit_value: Option<String>,

    pub category: String,

    pub language: String,

    pub developer: Option<String>,

    pub authorizer: Option<String>,

    pub open_date: Option<NaiveDate>,

    pub close_date: Option<NaiveDate>,

    pub completion_end_date: Option<NaiveDate>,

    pub grad_program: Option<String>,

    pub grad_program_requirement: Option<String>,

    pub hst_main_category: Option<String>,

    pub hst_sub_category: Option<String>,

    pub ministry_subject_code: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// One page of search results plus the exact total match count
#[derive(Debug, Clone)]
pub struct CoursePage {
    pub courses: Vec<Course>,
    /// Full matching set size, independent of the page window
    pub total: i64,
}

/// Response body for `GET /courses/search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub courses: Vec<Course>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// A single facet entry: one distinct column value and its row count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValue {
    pub value: String,
    pub count: i64,
}

/// Response body for `GET /courses/filters`
///
/// Independent per-column tallies over non-null values, not a cross-tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptions {
    pub grades: Vec<FacetValue>,
    pub categories: Vec<FacetValue>,
    pub languages: Vec<FacetValue>,
    pub subjects: Vec<FacetValue>,
    pub credits: Vec<FacetValue>,
}

/// Autocomplete projection used by `GET /courses/suggest`
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Suggestion {
    pub code: String,
    pub title: String,
    pub grade: String,
}

/// Response body for `GET /courses/suggest`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<Suggestion>,
}

/// Response body for `GET /courses/{code}`
///
/// A code held by exactly one course returns the bare course object; a code
/// shared across grade levels returns the multi shape. Callers discriminate
/// by shape, not by status.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum LookupResponse {
    Single(Box<Course>),
    Multiple {
        code: String,
        courses: Vec<Course>,
        message: String,
    },
}

/// Response body for `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// "healthy" or "unhealthy"
    pub status: String,
    /// "connected" or "disconnected"
    pub database: String,
    pub course_count: i64,
    /// RFC 3339 UTC timestamp of the check
    pub timestamp: String,
}
