//! In-memory `CourseStore` used to exercise the HTTP layer without Postgres.
//!
//! Matching, ordering, and tally semantics mirror the SQL the real store
//! runs: case-insensitive substring match over title/code/sub-category,
//! plain string ordering on `(grade, course_title)`, per-column non-null
//! tallies ordered by value, and a title-ordered LIMITed suggestion scan.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use coursefinder::api::params::SearchParams;
use coursefinder::db::sql::FacetColumn;
use coursefinder::db::CourseStore;
use coursefinder::error::{Error, Result};
use coursefinder::models::{Course, CoursePage, FacetValue, SearchLogEntry, Suggestion};

pub struct InMemoryCourseStore {
    courses: Vec<Course>,
    logs: Mutex<Vec<SearchLogEntry>>,
    failing: AtomicBool,
}

impl InMemoryCourseStore {
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses,
            logs: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }

    /// When set, every store call fails like a lost database connection.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of analytics rows recorded so far.
    pub fn logged_searches(&self) -> Vec<SearchLogEntry> {
        self.logs.lock().unwrap().clone()
    }

    fn check_available(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn matches(course: &Course, params: &SearchParams) -> bool {
        if let Some(q) = params.text_query() {
            let needle = q.to_lowercase();
            let text_hit = contains_ci(&course.course_title, &needle)
                || contains_ci(&course.code, &needle)
                || course
                    .hst_sub_category
                    .as_deref()
                    .map(|s| contains_ci(s, &needle))
                    .unwrap_or(false);
            if !text_hit {
                return false;
            }
        }

        filter_hits(Some(course.grade.as_str()), params.grade.as_deref())
            && filter_hits(Some(course.category.as_str()), params.category.as_deref())
            && filter_hits(Some(course.language.as_str()), params.language.as_deref())
            && filter_hits(course.hst_main_category.as_deref(), params.subject.as_deref())
            && filter_hits(course.credit_value.as_deref(), params.credits.as_deref())
    }
}

#[async_trait]
impl CourseStore for InMemoryCourseStore {
    async fn search_courses(&self, params: &SearchParams) -> Result<CoursePage> {
        self.check_available()?;

        let mut matched: Vec<&Course> = self
            .courses
            .iter()
            .filter(|c| Self::matches(c, params))
            .collect();
        matched.sort_by(|a, b| {
            a.grade
                .cmp(&b.grade)
                .then_with(|| a.course_title.cmp(&b.course_title))
        });

        let total = matched.len() as i64;
        let courses = matched
            .into_iter()
            .skip(params.offset as usize)
            .take(params.limit as usize)
            .cloned()
            .collect();

        Ok(CoursePage { courses, total })
    }

    async fn facet_counts(&self, column: FacetColumn) -> Result<Vec<FacetValue>> {
        self.check_available()?;

        let mut tallies: BTreeMap<String, i64> = BTreeMap::new();
        for course in &self.courses {
            let value = match column {
                FacetColumn::Grade => Some(course.grade.as_str()),
                FacetColumn::Category => Some(course.category.as_str()),
                FacetColumn::Language => Some(course.language.as_str()),
                FacetColumn::HstMainCategory => course.hst_main_category.as_deref(),
                FacetColumn::CreditValue => course.credit_value.as_deref(),
            };
            if let Some(value) = value {
                *tallies.entry(value.to_string()).or_insert(0) += 1;
            }
        }

        Ok(tallies
            .into_iter()
            .map(|(value, count)| FacetValue { value, count })
            .collect())
    }

    async fn suggest_courses(&self, term: &str, limit: i64) -> Result<Vec<Suggestion>> {
        self.check_available()?;

        let needle = term.to_lowercase();
        let mut rows: Vec<&Course> = self
            .courses
            .iter()
            .filter(|c| contains_ci(&c.course_title, &needle) || contains_ci(&c.code, &needle))
            .collect();
        rows.sort_by(|a, b| a.course_title.cmp(&b.course_title));

        Ok(rows
            .into_iter()
            .take(limit as usize)
            .map(|c| Suggestion {
                code: c.code.clone(),
                title: c.course_title.clone(),
                grade: c.grade.clone(),
            })
            .collect())
    }

    async fn courses_by_code(&self, code: &str) -> Result<Vec<Course>> {
        self.check_available()?;
        Ok(self
            .courses
            .iter()
            .filter(|c| c.code == code)
            .cloned()
            .collect())
    }

    async fn count_courses(&self) -> Result<i64> {
        self.check_available()?;
        Ok(self.courses.len() as i64)
    }

    async fn insert_search_log(&self, entry: &SearchLogEntry) -> Result<()> {
        self.check_available()?;
        self.logs.lock().unwrap().push(entry.clone());
        Ok(())
    }
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Exact-match filter with the skip-when-empty rule: an absent or empty
/// wanted value matches everything.
fn filter_hits(actual: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted {
        Some(wanted) if !wanted.is_empty() => actual == Some(wanted),
        _ => true,
    }
}
