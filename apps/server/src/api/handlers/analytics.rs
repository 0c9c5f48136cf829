//! Search analytics handler

use axum::{body::Bytes, extract::State, response::Json};
use serde_json::{json, Value as JsonValue};

use crate::state::AppState;

/// Record client search telemetry (POST /analytics/search)
///
/// Always answers `{"success": true}`: analytics must never fail a user
/// request, so undecodable or out-of-bounds payloads are logged server-side
/// and dropped, and the database insert runs detached from this response.
pub async fn log_search(State(state): State<AppState>, body: Bytes) -> Json<JsonValue> {
    state.analytics.record_search(&body);
    Json(json!({ "success": true }))
}
