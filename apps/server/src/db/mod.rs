//! Database layer - connection pool, SQL assembly, and the course store

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::Result;

pub mod postgres;
pub mod sql;
pub mod traits;

pub use postgres::PostgresCourseStore;
pub use traits::CourseStore;

/// Create the process-wide connection pool.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .min_connections(config.pool_min_size)
        .max_connections(config.pool_max_size)
        .acquire_timeout(Duration::from_secs(config.pool_timeout_seconds))
        .connect(&config.url)
        .await?;
    Ok(pool)
}

/// Apply bundled migrations (the `courses` and `search_logs` tables).
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| crate::Error::Internal(format!("Migration failed: {e}")))?;
    Ok(())
}
