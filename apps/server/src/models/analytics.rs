//! Models for the fire-and-forget search analytics endpoint

use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use validator::Validate;

/// Client-reported search telemetry posted to `POST /analytics/search`
///
/// The endpoint acknowledges unconditionally, so a payload failing these
/// bounds is logged and dropped rather than rejected. The counter caps
/// match the `INTEGER` columns of `search_logs`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchAnalyticsPayload {
    /// The free-text query the user ran
    #[validate(length(max = 200))]
    pub query: String,

    /// Active filters at the time of the search, as an opaque JSON object
    pub filters: Option<Map<String, JsonValue>>,

    /// How many courses the search returned
    #[validate(range(min = 0, max = 2_147_483_647))]
    pub result_count: i64,

    /// Client-observed latency in milliseconds
    #[validate(range(min = 0, max = 2_147_483_647))]
    pub response_time_ms: i64,
}

/// A row bound for insertion into `search_logs`
#[derive(Debug, Clone)]
pub struct SearchLogEntry {
    pub query: String,
    pub filters: Option<JsonValue>,
    pub result_count: i32,
    pub response_time_ms: i32,
}

impl From<SearchAnalyticsPayload> for SearchLogEntry {
    fn from(payload: SearchAnalyticsPayload) -> Self {
        Self {
            query: payload.query,
            filters: payload.filters.map(JsonValue::Object),
            result_count: payload.result_count as i32,
            response_time_ms: payload.response_time_ms as i32,
        }
    }
}
