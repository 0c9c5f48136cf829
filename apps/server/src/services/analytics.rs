//! Fire-and-forget search telemetry

use std::sync::Arc;

use validator::Validate;

use crate::db::CourseStore;
use crate::models::{SearchAnalyticsPayload, SearchLogEntry};

/// Records client search telemetry into `search_logs`.
///
/// Analytics must never block or fail a user request: payloads that fail to
/// decode or validate are logged and dropped, and the insert runs on a
/// detached task whose outcome the caller never awaits.
pub struct AnalyticsService {
    store: Arc<dyn CourseStore>,
}

impl AnalyticsService {
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self { store }
    }

    /// Decode, bound-check, and queue one telemetry payload.
    pub fn record_search(&self, body: &[u8]) {
        let payload: SearchAnalyticsPayload = match serde_json::from_slice(body) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding undecodable analytics payload");
                return;
            }
        };

        if let Err(e) = payload.validate() {
            tracing::warn!(error = %e, "Discarding out-of-bounds analytics payload");
            return;
        }

        let entry = SearchLogEntry::from(payload);
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            if let Err(e) = store.insert_search_log(&entry).await {
                tracing::error!(error = %e, "Failed to record search analytics");
            }
        });
    }
}
