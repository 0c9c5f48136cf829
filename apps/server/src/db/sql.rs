//! SQL assembly for course queries
//!
//! Queries against the `courses` table are built as a conditional set of
//! WHERE clauses plus a parallel vector of text bind values referenced by
//! `$n` placeholders. User input is always bound, never interpolated; LIKE
//! meta-characters in substring patterns are escaped so input matches
//! literally.

use crate::api::params::SearchParams;

/// Column list for full course rows, in `Course` field order.
pub const COURSE_COLUMNS: &str = "id, code, myedbc_code, trax_code, grade, course_title, \
     credit_value, category, language, developer, authorizer, open_date, close_date, \
     completion_end_date, grad_program, grad_program_requirement, hst_main_category, \
     hst_sub_category, ministry_subject_code, created_at, updated_at";

/// A facet column exposed by `GET /courses/filters`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetColumn {
    Grade,
    Category,
    Language,
    /// Exposed to clients as `subjects`.
    HstMainCategory,
    /// Exposed to clients as `credits`.
    CreditValue,
}

impl FacetColumn {
    pub fn column_name(&self) -> &'static str {
        match self {
            FacetColumn::Grade => "grade",
            FacetColumn::Category => "category",
            FacetColumn::Language => "language",
            FacetColumn::HstMainCategory => "hst_main_category",
            FacetColumn::CreditValue => "credit_value",
        }
    }

    /// Per-column tally over non-null values. Ordered by value so ties in
    /// the later comparator sort come out deterministically.
    pub fn build_facet_sql(&self) -> String {
        let column = self.column_name();
        format!(
            "SELECT {column} AS value, COUNT(*) AS count FROM courses \
             WHERE {column} IS NOT NULL GROUP BY {column} ORDER BY {column} ASC"
        )
    }
}

/// Accumulated search query: filter clauses, bind values, page window.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    clauses: Vec<String>,
    binds: Vec<String>,
    limit: i64,
    offset: i64,
}

impl SearchQuery {
    /// Fold validated search parameters into predicates.
    ///
    /// The free-text predicate is an OR-group over `course_title`, `code`
    /// and `hst_sub_category`; each present non-empty filter adds one ANDed
    /// equality predicate. Empty filter values behave like absent ones.
    pub fn from_params(params: &SearchParams) -> Self {
        let mut query = Self {
            clauses: Vec::new(),
            binds: Vec::new(),
            limit: params.limit,
            offset: params.offset,
        };

        if let Some(q) = params.text_query() {
            let idx = query.push_bind(format!("%{}%", escape_like_pattern(q)));
            query.clauses.push(format!(
                "(course_title ILIKE ${idx} ESCAPE E'\\\\' \
                 OR code ILIKE ${idx} ESCAPE E'\\\\' \
                 OR hst_sub_category ILIKE ${idx} ESCAPE E'\\\\')",
                idx = idx
            ));
        }

        query.push_eq("grade", params.grade.as_deref());
        query.push_eq("category", params.category.as_deref());
        query.push_eq("language", params.language.as_deref());
        query.push_eq("hst_main_category", params.subject.as_deref());
        query.push_eq("credit_value", params.credits.as_deref());

        query
    }

    /// Page query: filtered rows ordered by `grade` then `course_title`,
    /// both as plain string comparisons ("10" sorts before "2"), windowed
    /// to `[offset, offset+limit-1]`.
    pub fn build_sql(&self) -> (String, Vec<String>) {
        let mut sql = format!("SELECT {} FROM courses", COURSE_COLUMNS);
        self.push_where(&mut sql);
        sql.push_str(" ORDER BY grade ASC, course_title ASC");
        sql.push_str(&format!(" LIMIT {} OFFSET {}", self.limit, self.offset));
        (sql, self.binds.clone())
    }

    /// Exact total count over the same predicates, independent of the window.
    pub fn build_count_sql(&self) -> (String, Vec<String>) {
        let mut sql = String::from("SELECT COUNT(*) FROM courses");
        self.push_where(&mut sql);
        (sql, self.binds.clone())
    }

    fn push_where(&self, sql: &mut String) {
        if !self.clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.clauses.join(" AND "));
        }
    }

    fn push_eq(&mut self, column: &str, value: Option<&str>) {
        if let Some(value) = value {
            if !value.is_empty() {
                let idx = self.push_bind(value.to_string());
                self.clauses.push(format!("{} = ${}", column, idx));
            }
        }
    }

    fn push_bind(&mut self, value: String) -> usize {
        self.binds.push(value);
        self.binds.len()
    }
}

/// Suggestion query: title/code substring OR-group, title order, store-side
/// LIMIT. Deduplication happens after the query, in the service layer.
pub fn build_suggest_sql(limit: i64) -> String {
    format!(
        "SELECT code, course_title AS title, grade FROM courses \
         WHERE course_title ILIKE $1 ESCAPE E'\\\\' OR code ILIKE $1 ESCAPE E'\\\\' \
         ORDER BY course_title ASC LIMIT {limit}"
    )
}

/// Case-insensitive substring pattern for a user-supplied term.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like_pattern(term))
}

fn escape_like_pattern(s: &str) -> String {
    // Escape SQL LIKE meta-characters so user input is treated literally.
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' | '%' | '_' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
