//! Note filter query builder.
//!
//! Turns a [`NoteFilter`] into a SQL `WHERE` fragment and the parameters it
//! references. Active dimensions are joined with `AND`; the free-text
//! dimension ORs a case-insensitive substring match over title, content, and
//! the raw comma-separated tag column (so a query can match inside one tag or
//! across a comma boundary). An empty filter produces an always-true
//! predicate, and every value is bound, never interpolated.

use notekeep_core::search::{contains_pattern, NoteFilter};
use sqlx::sqlite::{Sqlite, SqliteArguments};
use sqlx::query::QueryAs;

/// A value bound to a numbered `?N` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParam {
    Int(i64),
    Text(String),
}

/// Result of building a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterClause {
    /// The WHERE clause fragment (without the `WHERE` keyword).
    pub where_clause: String,
    /// Parameters in placeholder order (`?{offset + 1}`, `?{offset + 2}`, ...).
    pub params: Vec<QueryParam>,
}

impl FilterClause {
    /// Bind every parameter, in order, onto `query`.
    pub fn bind_to<'q, O>(
        &'q self,
        mut query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    ) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
        for param in &self.params {
            query = match param {
                QueryParam::Int(v) => query.bind(*v),
                QueryParam::Text(s) => query.bind(s.as_str()),
            };
        }
        query
    }
}

/// Builds the predicate for one [`NoteFilter`].
pub struct NoteFilterQueryBuilder<'a> {
    filter: &'a NoteFilter,
    param_offset: usize,
}

impl<'a> NoteFilterQueryBuilder<'a> {
    /// `param_offset` is the number of placeholders already used by the
    /// surrounding statement.
    pub fn new(filter: &'a NoteFilter, param_offset: usize) -> Self {
        Self {
            filter,
            param_offset,
        }
    }

    pub fn build(&self) -> FilterClause {
        let mut conditions = Vec::new();
        let mut params = Vec::new();

        if let Some(category_id) = self.filter.category_id {
            params.push(QueryParam::Int(category_id));
            let idx = self.param_offset + params.len();
            conditions.push(format!("category_id = ?{idx}"));
        }

        if let Some(text) = &self.filter.text {
            params.push(QueryParam::Text(contains_pattern(text)));
            let idx = self.param_offset + params.len();
            conditions.push(format!(
                "(title LIKE ?{idx} ESCAPE '\\' \
                 OR COALESCE(content, '') LIKE ?{idx} ESCAPE '\\' \
                 OR tags LIKE ?{idx} ESCAPE '\\')"
            ));
        }

        let where_clause = if conditions.is_empty() {
            "1 = 1".to_string()
        } else {
            conditions.join(" AND ")
        };

        FilterClause {
            where_clause,
            params,
        }
    }
}
