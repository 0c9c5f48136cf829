//! Shared application state

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use crate::config::Config;
use crate::db::{self, CourseStore, PostgresCourseStore};
use crate::services::{
    AnalyticsService, FilterService, LookupService, SearchService, SuggestService,
};

/// Everything a request handler needs, cloned per router layer.
///
/// The store handle is constructed once at startup and shared; handlers
/// never open their own connections.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn CourseStore>,
    pub search: Arc<SearchService>,
    pub suggest: Arc<SuggestService>,
    pub lookup: Arc<LookupService>,
    pub filters: Arc<FilterService>,
    pub analytics: Arc<AnalyticsService>,
}

impl AppState {
    /// Connect to Postgres, optionally apply migrations, and wire services.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let pool = db::create_pool(&config.database)
            .await
            .context("Failed to connect to the database")?;

        if config.database.run_migrations {
            db::run_migrations(&pool)
                .await
                .context("Failed to apply database migrations")?;
            tracing::info!("Database migrations applied");
        }

        let store: Arc<dyn CourseStore> = Arc::new(PostgresCourseStore::new(pool));
        Ok(Self::with_store(Arc::new(config), store))
    }

    /// Assemble state over any store implementation. Tests use this with an
    /// in-memory store; `new` uses it with Postgres.
    pub fn with_store(config: Arc<Config>, store: Arc<dyn CourseStore>) -> Self {
        let filter_ttl = Duration::from_secs(config.search.filter_cache_seconds);

        Self {
            search: Arc::new(SearchService::new(Arc::clone(&store))),
            suggest: Arc::new(SuggestService::new(Arc::clone(&store))),
            lookup: Arc::new(LookupService::new(Arc::clone(&store))),
            filters: Arc::new(FilterService::new(Arc::clone(&store), filter_ttl)),
            analytics: Arc::new(AnalyticsService::new(Arc::clone(&store))),
            config,
            store,
        }
    }
}
