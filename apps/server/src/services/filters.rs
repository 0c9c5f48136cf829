//! Facet aggregation with a time-bounded in-memory cache

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::db::sql::FacetColumn;
use crate::db::CourseStore;
use crate::models::{FacetValue, FilterOptions};
use crate::Result;

struct CachedOptions {
    options: FilterOptions,
    fetched_at: Instant,
}

/// Computes the five filter facets and serves them from memory for up to
/// the configured TTL. There is no invalidation signal: the catalog only
/// changes through the offline import, so staleness inside the window is
/// accepted.
pub struct FilterService {
    store: Arc<dyn CourseStore>,
    ttl: Duration,
    cache: RwLock<Option<CachedOptions>>,
}

impl FilterService {
    pub fn new(store: Arc<dyn CourseStore>, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            cache: RwLock::new(None),
        }
    }

    /// Facets for all five filterable columns, cached. A zero TTL turns the
    /// cache off.
    pub async fn filter_options(&self) -> Result<FilterOptions> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.fetched_at.elapsed() < self.ttl {
                    return Ok(cached.options.clone());
                }
            }
        }

        let options = self.fetch_options().await?;

        let mut cache = self.cache.write().await;
        *cache = Some(CachedOptions {
            options: options.clone(),
            fetched_at: Instant::now(),
        });

        Ok(options)
    }

    /// Tally every facet column concurrently, then apply display ordering.
    async fn fetch_options(&self) -> Result<FilterOptions> {
        let (mut grades, mut categories, mut languages, mut subjects, mut credits) = futures::try_join!(
            self.store.facet_counts(FacetColumn::Grade),
            self.store.facet_counts(FacetColumn::Category),
            self.store.facet_counts(FacetColumn::Language),
            self.store.facet_counts(FacetColumn::HstMainCategory),
            self.store.facet_counts(FacetColumn::CreditValue),
        )?;

        grades.sort_by(|a, b| compare_grades(&a.value, &b.value));
        categories.sort_by(|a, b| a.value.cmp(&b.value));
        languages.sort_by(|a, b| a.value.cmp(&b.value));
        subjects.sort_by(|a, b| a.value.cmp(&b.value));
        credits.sort_by(|a, b| compare_credits(&a.value, &b.value));

        Ok(FilterOptions {
            grades,
            categories,
            languages,
            subjects,
            credits,
        })
    }
}

/// Grade facet ordering, a cascade rather than one total order:
/// grades with a leading number compare numerically; otherwise values
/// starting with `K` come first; otherwise plain string order. Comparing
/// "10" against "K1" falls through to the K rule because "K1" carries no
/// leading number.
pub fn compare_grades(a: &str, b: &str) -> Ordering {
    match (leading_int(a), leading_int(b)) {
        (Some(na), Some(nb)) => na.cmp(&nb),
        _ => {
            let a_k = a.starts_with('K');
            let b_k = b.starts_with('K');
            if a_k && !b_k {
                Ordering::Less
            } else if !a_k && b_k {
                Ordering::Greater
            } else {
                a.cmp(b)
            }
        }
    }
}

/// Credit facet ordering: numeric on the portion before the first comma
/// (multi-value strings like "2,4" sort by their first value), plain
/// string order when either side has no leading number.
pub fn compare_credits(a: &str, b: &str) -> Ordering {
    let na = leading_int(a.split(',').next().unwrap_or(a));
    let nb = leading_int(b.split(',').next().unwrap_or(b));
    match (na, nb) {
        (Some(na), Some(nb)) => na.cmp(&nb),
        _ => a.cmp(b),
    }
}

/// Leading base-10 integer: optional whitespace and sign, then digits.
/// None when the value does not start with a number.
fn leading_int(s: &str) -> Option<i64> {
    let t = s.trim_start();
    let (negative, rest) = match t.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };
    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }
    digits
        .parse::<i64>()
        .ok()
        .map(|n| if negative { -n } else { n })
}
