//! Postgres-backed course store

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::api::params::SearchParams;
use crate::db::sql::{self, FacetColumn, SearchQuery, COURSE_COLUMNS};
use crate::db::traits::CourseStore;
use crate::models::{Course, CoursePage, FacetValue, SearchLogEntry, Suggestion};
use crate::Result;

/// `CourseStore` implementation over a shared connection pool
///
/// The pool is created once at startup and reused for the process lifetime.
#[derive(Clone)]
pub struct PostgresCourseStore {
    pool: PgPool,
}

impl PostgresCourseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseStore for PostgresCourseStore {
    async fn search_courses(&self, params: &SearchParams) -> Result<CoursePage> {
        let query = SearchQuery::from_params(params);

        let (page_sql, binds) = query.build_sql();
        let mut page_query = sqlx::query_as::<_, Course>(&page_sql);
        for bind in &binds {
            page_query = page_query.bind(bind);
        }
        let courses = page_query.fetch_all(&self.pool).await?;

        let (count_sql, binds) = query.build_count_sql();
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        for bind in &binds {
            count_query = count_query.bind(bind);
        }
        let total = count_query.fetch_one(&self.pool).await?;

        Ok(CoursePage { courses, total })
    }

    async fn facet_counts(&self, column: FacetColumn) -> Result<Vec<FacetValue>> {
        let facet_sql = column.build_facet_sql();
        let rows = sqlx::query(&facet_sql).fetch_all(&self.pool).await?;

        let mut values = Vec::with_capacity(rows.len());
        for row in rows {
            values.push(FacetValue {
                value: row.get("value"),
                count: row.get("count"),
            });
        }
        Ok(values)
    }

    async fn suggest_courses(&self, term: &str, limit: i64) -> Result<Vec<Suggestion>> {
        let suggest_sql = sql::build_suggest_sql(limit);
        let suggestions = sqlx::query_as::<_, Suggestion>(&suggest_sql)
            .bind(sql::contains_pattern(term))
            .fetch_all(&self.pool)
            .await?;
        Ok(suggestions)
    }

    async fn courses_by_code(&self, code: &str) -> Result<Vec<Course>> {
        let lookup_sql = format!("SELECT {} FROM courses WHERE code = $1", COURSE_COLUMNS);
        let courses = sqlx::query_as::<_, Course>(&lookup_sql)
            .bind(code)
            .fetch_all(&self.pool)
            .await?;
        Ok(courses)
    }

    async fn count_courses(&self) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    async fn insert_search_log(&self, entry: &SearchLogEntry) -> Result<()> {
        sqlx::query(
            "INSERT INTO search_logs (query, filters, result_count, response_time_ms) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&entry.query)
        .bind(&entry.filters)
        .bind(entry.result_count)
        .bind(entry.response_time_ms)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
