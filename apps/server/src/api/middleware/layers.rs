//! Middleware layer construction

use axum::http::HeaderValue;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
};

/// Request tracing slot.
///
/// The per-request span lives on `request_id_middleware` via
/// `#[instrument]`, so this is an identity layer rather than a
/// `TraceLayer`.
pub fn trace() -> tower::layer::util::Identity {
    tower::layer::util::Identity::new()
}

/// Cross-origin access for the browser front end.
///
/// Only origins listed in `server.cors_origins` are allowed. With none
/// configured, or none parseable as header values, no CORS headers are
/// emitted at all.
pub fn cors(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if allowed.is_empty() {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Response compression negotiated from `accept-encoding`.
pub fn compression() -> CompressionLayer {
    CompressionLayer::new()
}
