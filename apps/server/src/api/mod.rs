//! HTTP surface: router assembly, handlers, middleware, parameter parsing

pub mod handlers;
pub mod middleware;
pub mod params;
pub mod routes;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::json;

use crate::state::AppState;

/// Assemble the application router and its middleware stack.
///
/// Every response passes through the request-id span and the security
/// header middleware, including error and fallback responses.
pub fn create_router(state: AppState) -> Router {
    let max_body_size = state.config.server.max_request_body_size;
    let cors_origins = state.config.server.cors_origins.clone();

    Router::new()
        .route("/health", get(handlers::system::health))
        .route("/", get(root))
        .route("/favicon.ico", get(favicon))
        .nest("/courses", routes::courses::course_routes())
        .route("/analytics/search", post(handlers::analytics::log_search))
        .with_state(state)
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(middleware::compression())
        .layer(middleware::cors(&cors_origins))
        .layer(middleware::trace())
        .layer(DefaultBodyLimit::max(max_body_size))
}

/// Service banner for humans and uptime monitors hitting the base URL.
async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "service": "coursefinder",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

/// Browsers request this on every visit; answer quietly rather than
/// filling the logs with 404s.
async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}
