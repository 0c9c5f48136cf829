//! Course search execution and response shaping

use std::sync::Arc;

use crate::api::params::SearchParams;
use crate::db::CourseStore;
use crate::models::SearchResponse;
use crate::Result;

pub struct SearchService {
    store: Arc<dyn CourseStore>,
}

impl SearchService {
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self { store }
    }

    /// Run a validated search and shape the page into the response body.
    ///
    /// `limit` and `offset` are echoed back as validated, so clients can
    /// page without tracking their own request state. An empty page with
    /// `total: 0` is a normal response, not an error.
    pub async fn search(&self, params: &SearchParams) -> Result<SearchResponse> {
        let page = self.store.search_courses(params).await?;

        Ok(SearchResponse {
            courses: page.courses,
            total: page.total,
            limit: params.limit,
            offset: params.offset,
        })
    }
}
