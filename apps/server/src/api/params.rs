//! Request parameter parsing and validation
//!
//! All inbound query parameters are checked here before any store access.
//! Parsing is a pure function of the raw (key, value) items plus the search
//! bounds from configuration: no side effects, no defaults pulled from the
//! environment.

use crate::config::SearchConfig;
use crate::{Error, Result};

/// Longest accepted exact-match filter values, in characters.
const MAX_GRADE_LEN: usize = 50;
const MAX_CATEGORY_LEN: usize = 100;
const MAX_LANGUAGE_LEN: usize = 50;
const MAX_SUBJECT_LEN: usize = 100;
const MAX_CREDITS_LEN: usize = 20;

/// Validated parameters for `GET /courses/search`.
///
/// Filter fields hold the value exactly as the client sent it; empty strings
/// are kept and skipped later, so `?grade=` behaves like an absent filter.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Free-text query. Absent or blank means no text filter.
    pub q: Option<String>,
    pub grade: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
    /// Matched against the `hst_main_category` column.
    pub subject: Option<String>,
    /// Matched against the `credit_value` column.
    pub credits: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl SearchParams {
    /// Parse search parameters from ordered (key, value) items.
    ///
    /// Repeated parameters keep the last occurrence; unknown parameters are
    /// ignored. Out-of-range `limit` values clamp to `[1, max_limit]` rather
    /// than failing; non-numeric `limit`/`offset` and negative `offset` are
    /// validation errors.
    pub fn from_items(items: &[(String, String)], config: &SearchConfig) -> Result<Self> {
        let mut q = None;
        let mut grade = None;
        let mut category = None;
        let mut language = None;
        let mut subject = None;
        let mut credits = None;
        let mut limit = config.default_limit;
        let mut offset = 0i64;

        for (key, value) in items {
            match key.as_str() {
                "q" => {
                    check_length("q", value, config.max_query_length)?;
                    q = Some(value.clone());
                }
                "grade" => {
                    check_length("grade", value, MAX_GRADE_LEN)?;
                    grade = Some(value.clone());
                }
                "category" => {
                    check_length("category", value, MAX_CATEGORY_LEN)?;
                    category = Some(value.clone());
                }
                "language" => {
                    check_length("language", value, MAX_LANGUAGE_LEN)?;
                    language = Some(value.clone());
                }
                "subject" => {
                    check_length("subject", value, MAX_SUBJECT_LEN)?;
                    subject = Some(value.clone());
                }
                "credits" => {
                    check_length("credits", value, MAX_CREDITS_LEN)?;
                    credits = Some(value.clone());
                }
                "limit" => {
                    let parsed: i64 = value.parse().map_err(|_| {
                        Error::Validation(format!("Invalid limit value: {value}"))
                    })?;
                    limit = parsed.clamp(1, config.max_limit);
                }
                "offset" => {
                    let parsed: i64 = value.parse().map_err(|_| {
                        Error::Validation(format!("Invalid offset value: {value}"))
                    })?;
                    if parsed < 0 {
                        return Err(Error::Validation(format!(
                            "Invalid offset value: {value} (must not be negative)"
                        )));
                    }
                    offset = parsed;
                }
                // Unknown parameters are ignored rather than rejected.
                _ => {}
            }
        }

        Ok(Self {
            q,
            grade,
            category,
            language,
            subject,
            credits,
            limit,
            offset,
        })
    }

    /// The text filter to apply, if any: `q` trimmed for the emptiness check
    /// only. The match pattern itself uses the untrimmed value.
    pub fn text_query(&self) -> Option<&str> {
        match &self.q {
            Some(q) if !q.trim().is_empty() => Some(q.as_str()),
            _ => None,
        }
    }
}

/// Validated parameters for `GET /courses/suggest`.
#[derive(Debug, Clone)]
pub struct SuggestParams {
    /// Required partial query, 1 to `max_suggest_query_length` characters.
    pub q: String,
    pub limit: i64,
}

impl SuggestParams {
    /// Parse suggestion parameters from ordered (key, value) items.
    ///
    /// `q` is required and must be non-empty, unlike search. `limit` clamps
    /// to `[1, suggest_max_limit]`.
    pub fn from_items(items: &[(String, String)], config: &SearchConfig) -> Result<Self> {
        let mut q = None;
        let mut limit = config.suggest_default_limit;

        for (key, value) in items {
            match key.as_str() {
                "q" => {
                    check_length("q", value, config.max_suggest_query_length)?;
                    if value.is_empty() {
                        return Err(Error::Validation(
                            "Parameter 'q' must not be empty".to_string(),
                        ));
                    }
                    q = Some(value.clone());
                }
                "limit" => {
                    let parsed: i64 = value.parse().map_err(|_| {
                        Error::Validation(format!("Invalid limit value: {value}"))
                    })?;
                    limit = parsed.clamp(1, config.suggest_max_limit);
                }
                _ => {}
            }
        }

        let q = q.ok_or_else(|| Error::Validation("Missing required parameter: q".to_string()))?;

        Ok(Self { q, limit })
    }
}

/// Check a course code path parameter: digits only, at least one.
pub fn validate_course_code(code: &str) -> Result<()> {
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::Validation("Course code must be numeric".to_string()));
    }
    Ok(())
}

fn check_length(name: &str, value: &str, max_chars: usize) -> Result<()> {
    if value.chars().count() > max_chars {
        return Err(Error::Validation(format!(
            "Parameter '{name}' exceeds maximum length of {max_chars} characters"
        )));
    }
    Ok(())
}
