//! Request identifiers and per-request logging

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use std::time::Instant;
use tracing::Span;
use uuid::Uuid;

/// Per-request context, available to handlers via request extensions.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
}

/// Root span plus entry/exit log lines for every request.
///
/// The server always assigns its own `x-request-id` (uuid v4). A client
/// that sent a different id gets it echoed back in `x-correlation-id`, so
/// both sides can link their logs.
#[tracing::instrument(
    name = "http_request",
    skip_all,
    fields(
        http.method = %req.method(),
        http.route = %req.uri().path(),
        http.response.status_code = tracing::field::Empty,
        request_id = tracing::field::Empty,
    )
)]
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    Span::current().record("request_id", request_id.as_str());

    let client_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    req.extensions_mut().insert(RequestContext {
        request_id: request_id.clone(),
    });

    tracing::debug!("Request received");

    let mut response = next.run(req).await;

    let status = response.status();
    Span::current().record("http.response.status_code", status.as_u16());
    tracing::info!(
        status = status.as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Request completed"
    );

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert("x-request-id", value);
    }
    if let Some(client_id) = client_id.filter(|id| *id != request_id) {
        if let Ok(value) = HeaderValue::from_str(&client_id) {
            headers.insert("x-correlation-id", value);
        }
    }

    response
}
