//! Health check handler

use axum::{extract::State, http::StatusCode, response::Json};
use chrono::{SecondsFormat, Utc};

use crate::models::HealthStatus;
use crate::state::AppState;

/// Database-backed health check (GET /health)
///
/// Counts the catalog to exercise the store. An unreachable store
/// answers 503 with the same body shape (`unhealthy`/`disconnected`,
/// zero count) rather than the generic error body, so monitors can always
/// parse the response.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    match state.store.count_courses().await {
        Ok(count) => (
            StatusCode::OK,
            Json(HealthStatus {
                status: "healthy".to_string(),
                database: "connected".to_string(),
                course_count: count,
                timestamp,
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus {
                    status: "unhealthy".to_string(),
                    database: "disconnected".to_string(),
                    course_count: 0,
                    timestamp,
                }),
            )
        }
    }
}
