//! Course-code lookup

use std::sync::Arc;

use crate::db::CourseStore;
use crate::models::LookupResponse;
use crate::{Error, Result};

pub struct LookupService {
    store: Arc<dyn CourseStore>,
}

impl LookupService {
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self { store }
    }

    /// Resolve a course code to one or many records.
    ///
    /// The same code may recur across grade levels: a single match returns
    /// the bare course object, multiple matches return the multi shape with
    /// an explanatory message. Zero matches is a NotFound error.
    pub async fn lookup(&self, code: &str) -> Result<LookupResponse> {
        let mut courses = self.store.courses_by_code(code).await?;

        match courses.len() {
            0 => Err(Error::NotFound(format!(
                "Course with code '{code}' not found"
            ))),
            1 => Ok(LookupResponse::Single(Box::new(courses.remove(0)))),
            _ => Ok(LookupResponse::Multiple {
                code: code.to_string(),
                courses,
                message: "Multiple courses found with the same code (different grades)"
                    .to_string(),
            }),
        }
    }
}
