//! Autocomplete suggestion resolution

use std::collections::HashSet;
use std::sync::Arc;

use crate::api::params::SuggestParams;
use crate::db::CourseStore;
use crate::models::{SuggestResponse, Suggestion};
use crate::Result;

pub struct SuggestService {
    store: Arc<dyn CourseStore>,
}

impl SuggestService {
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self { store }
    }

    /// Resolve a partial query into title-ordered suggestions.
    ///
    /// The store query is limited first; deduplication by code happens
    /// afterwards, keeping the first occurrence in title order. The result
    /// can therefore come out shorter than `limit` even when more distinct
    /// codes match beyond the scanned window — a deliberate trade of
    /// completeness for a cheap bounded query.
    pub async fn suggest(&self, params: &SuggestParams) -> Result<SuggestResponse> {
        let term = params.q.trim();
        let rows = self.store.suggest_courses(term, params.limit).await?;

        Ok(SuggestResponse {
            suggestions: dedup_by_code(rows),
        })
    }
}

/// Drop repeated codes, keeping the first occurrence per code.
fn dedup_by_code(rows: Vec<Suggestion>) -> Vec<Suggestion> {
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter(|s| seen.insert(s.code.clone()))
        .collect()
}
