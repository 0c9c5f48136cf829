//! Course API routes
//!
//! Path parameters are case-sensitive and percent-decoded as UTF-8 by
//! axum's `Path` extractor; query strings are parsed by the handlers with
//! form-urlencoded semantics.

use crate::api::handlers::courses;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn course_routes() -> Router<AppState> {
    Router::new()
        // Exact routes first (more specific)
        .route("/search", get(courses::search_courses))
        .route("/filters", get(courses::filter_options))
        .route("/suggest", get(courses::suggest_courses))
        // Parameterized code lookup comes after the exact routes
        .route("/:code", get(courses::course_by_code))
}
