//! Course fixtures shaped like real BC course registry rows.

use chrono::{NaiveDate, TimeZone, Utc};
use coursefinder::models::Course;

/// Builder over a fully populated course row. Defaults are a provincially
/// developed, English, 4-credit course; tests override what they exercise.
pub struct CourseBuilder {
    course: Course,
}

impl CourseBuilder {
    pub fn new(id: i64, code: &str, grade: &str, title: &str) -> Self {
        let imported_at = Utc.with_ymd_and_hms(2025, 1, 16, 9, 45, 0).unwrap();
        Self {
            course: Course {
                id,
                code: code.to_string(),
                myedbc_code: None,
                trax_code: None,
                grade: grade.to_string(),
                course_title: title.to_string(),
                credit_value: Some("4".to_string()),
                category: "Ministry Developed".to_string(),
                language: "English".to_string(),
                developer: None,
                authorizer: None,
                open_date: NaiveDate::from_ymd_opt(2018, 7, 1),
                close_date: None,
                completion_end_date: None,
                grad_program: None,
                grad_program_requirement: None,
                hst_main_category: None,
                hst_sub_category: None,
                ministry_subject_code: None,
                created_at: imported_at,
                updated_at: imported_at,
            },
        }
    }

    pub fn credits(mut self, value: &str) -> Self {
        self.course.credit_value = Some(value.to_string());
        self
    }

    pub fn no_credits(mut self) -> Self {
        self.course.credit_value = None;
        self
    }

    pub fn category(mut self, value: &str) -> Self {
        self.course.category = value.to_string();
        self
    }

    pub fn language(mut self, value: &str) -> Self {
        self.course.language = value.to_string();
        self
    }

    /// Sets `hst_main_category`, the column behind the `subject` filter.
    pub fn subject(mut self, value: &str) -> Self {
        self.course.hst_main_category = Some(value.to_string());
        self
    }

    /// Sets `hst_sub_category`, the third free-text search column.
    pub fn sub_category(mut self, value: &str) -> Self {
        self.course.hst_sub_category = Some(value.to_string());
        self
    }

    pub fn build(self) -> Course {
        self.course
    }
}

/// The standard catalog most tests run against.
///
/// Deliberate features: code 3201 recurs across grades 11 and 12 (lookup
/// multi shape, suggestion dedup); grades span numeric, "K", and "Adult";
/// one course has no credit value and one has none of the HST categories;
/// "Mechanics" appears only as a sub-category so free-text search must
/// reach the third column.
pub fn course_catalog() -> Vec<Course> {
    vec![
        CourseBuilder::new(1, "3201", "11", "Biology 11")
            .category("Board/Authority Authorized")
            .subject("Sciences")
            .sub_category("Life Sciences")
            .build(),
        CourseBuilder::new(2, "3201", "12", "Biology 12")
            .category("Board/Authority Authorized")
            .subject("Sciences")
            .sub_category("Life Sciences")
            .build(),
        CourseBuilder::new(3, "4105", "10", "Foundations of Mathematics and Pre-Calculus 10")
            .subject("Mathematics")
            .sub_category("Pre-Calculus")
            .build(),
        CourseBuilder::new(4, "4106", "11", "Pre-Calculus 11")
            .subject("Mathematics")
            .sub_category("Pre-Calculus")
            .build(),
        CourseBuilder::new(5, "4107", "12", "Calculus 12")
            .subject("Mathematics")
            .sub_category("Calculus")
            .build(),
        CourseBuilder::new(6, "5201", "K", "Arts Education K")
            .no_credits()
            .subject("Arts Education")
            .build(),
        CourseBuilder::new(7, "5301", "8", "Sciences humaines 8")
            .language("French")
            .subject("Social Studies")
            .sub_category("Humanities")
            .build(),
        CourseBuilder::new(8, "6001", "12", "English Studies 12")
            .subject("Language Arts")
            .sub_category("English Studies")
            .build(),
        CourseBuilder::new(9, "6002", "10", "Composition 10")
            .credits("2,4")
            .subject("Language Arts")
            .sub_category("Composition")
            .build(),
        CourseBuilder::new(10, "7100", "12", "Automotive Technology 12")
            .category("Board/Authority Authorized")
            .subject("Applied Design, Skills, and Technologies")
            .sub_category("Mechanics")
            .build(),
        CourseBuilder::new(11, "8200", "Adult", "Adult Graduation Assessment Preparation")
            .credits("1")
            .category("External Credential")
            .build(),
        CourseBuilder::new(12, "3210", "11", "Marine Biology 11")
            .category("Board/Authority Authorized")
            .subject("Sciences")
            .sub_category("Life Sciences")
            .build(),
    ]
}
