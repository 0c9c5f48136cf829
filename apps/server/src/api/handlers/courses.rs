//! Course endpoint handlers: search, filters, suggestions, code lookup

use axum::{
    extract::{Path, RawQuery, State},
    response::Json,
};

use crate::api::params::{self, SearchParams, SuggestParams};
use crate::models::{FilterOptions, LookupResponse, SearchResponse, SuggestResponse};
use crate::state::AppState;
use crate::Result;

/// Search the catalog (GET /courses/search)
///
/// Free-text `q` plus exact-match filters, paginated. Validation happens
/// before any store access; an empty result page is a normal 200.
pub async fn search_courses(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<SearchResponse>> {
    let items = parse_query_items(raw_query.as_deref());
    let params = SearchParams::from_items(&items, &state.config.search)?;
    let response = state.search.search(&params).await?;
    Ok(Json(response))
}

/// Facet values and counts for the five filterable columns
/// (GET /courses/filters). Served from the in-memory cache when fresh.
pub async fn filter_options(State(state): State<AppState>) -> Result<Json<FilterOptions>> {
    let options = state.filters.filter_options().await?;
    Ok(Json(options))
}

/// Autocomplete suggestions (GET /courses/suggest)
pub async fn suggest_courses(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<SuggestResponse>> {
    let items = parse_query_items(raw_query.as_deref());
    let params = SuggestParams::from_items(&items, &state.config.search)?;
    let response = state.suggest.suggest(&params).await?;
    Ok(Json(response))
}

/// Look up course records by code (GET /courses/{code})
///
/// One match returns the bare course; several grade-level variants return
/// the multi shape; zero is a 404.
pub async fn course_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LookupResponse>> {
    params::validate_course_code(&code)?;
    let response = state.lookup.lookup(&code).await?;
    Ok(Json(response))
}

/// Query string items, percent-decoded with form-urlencoded semantics
/// ('+' means space).
fn parse_query_items(raw_query: Option<&str>) -> Vec<(String, String)> {
    match raw_query {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect(),
        None => Vec::new(),
    }
}
