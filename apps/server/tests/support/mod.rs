pub mod fixtures;
pub mod store;

use std::sync::Arc;

use anyhow::Context as _;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, HeaderName, HeaderValue, Method, Request, StatusCode},
    Router,
};
use coursefinder::{api::create_router, models::Course, AppState, Config};
use serde_json::Value;
use tower::ServiceExt as _;

// Re-export commonly used items
pub use fixtures::*;
pub use store::InMemoryCourseStore;

/// A router wired to an in-memory store, dispatched via `oneshot` without
/// binding a socket. The store handle stays accessible for fault injection
/// and for inspecting recorded analytics rows.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryCourseStore>,
}

impl TestApp {
    /// App over the standard fixture catalog with default configuration.
    pub fn new() -> Self {
        Self::with_courses(course_catalog())
    }

    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self::with_config(courses, |_| {})
    }

    pub fn with_config(courses: Vec<Course>, configure: impl FnOnce(&mut Config)) -> Self {
        let mut config = Config::default();
        configure(&mut config);

        let store = Arc::new(InMemoryCourseStore::new(courses));
        let state = AppState::with_store(Arc::new(config), store.clone());
        let router = create_router(state);

        Self { router, store }
    }

    pub async fn request(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<Bytes>,
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        self.request_with_extra_headers(method, path_and_query, body, &[])
            .await
    }

    pub async fn request_with_extra_headers(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<Bytes>,
        extra_headers: &[(&str, &str)],
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        let request = Request::builder()
            .method(method)
            .uri(path_and_query)
            .header("host", "example.org")
            .header("accept", "application/json")
            .header("content-type", "application/json")
            .body(match body {
                Some(bytes) => Body::from(bytes),
                None => Body::empty(),
            })
            .context("build request")?;

        let mut request = request;
        for (name, value) in extra_headers {
            request.headers_mut().insert(
                name.parse::<HeaderName>().context("parse header name")?,
                value.parse::<HeaderValue>().context("parse header value")?,
            );
        }

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("dispatch request")?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .context("read response body")?;

        Ok((status, headers, body))
    }

    /// GET a path and decode the JSON body.
    pub async fn get_json(&self, path_and_query: &str) -> anyhow::Result<(StatusCode, Value)> {
        let (status, _headers, body) = self.request(Method::GET, path_and_query, None).await?;
        let value: Value = serde_json::from_slice(&body)
            .with_context(|| format!("decode JSON body from {path_and_query}"))?;
        Ok((status, value))
    }
}

pub fn to_json_body(value: &Value) -> anyhow::Result<Bytes> {
    Ok(Bytes::from(serde_json::to_vec(value).context("encode JSON body")?))
}

/// Assert status code matches expected
pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(
        actual, expected,
        "{context}: expected status {expected}, got {actual}"
    );
}

/// Assert an error body carries the standard shape: `error` message plus
/// machine-readable `code`.
pub fn assert_error_body(body: &Value, expected_message: &str, expected_code: &str) {
    assert_eq!(
        body.get("error").and_then(|v| v.as_str()),
        Some(expected_message),
        "error message in {body}"
    );
    assert_eq!(
        body.get("code").and_then(|v| v.as_str()),
        Some(expected_code),
        "error code in {body}"
    );
}

/// Collect a string field from every element of a JSON array.
pub fn string_field(items: &Value, field: &str) -> Vec<String> {
    items
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|e| e.get(field).and_then(|v| v.as_str()).map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

/// Decode a facet list into (value, count) pairs.
pub fn facet_pairs(items: &Value) -> Vec<(String, i64)> {
    items
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|e| {
                    let value = e.get("value")?.as_str()?.to_string();
                    let count = e.get("count")?.as_i64()?;
                    Some((value, count))
                })
                .collect()
        })
        .unwrap_or_default()
}
