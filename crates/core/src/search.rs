//! Note search filter input and LIKE-pattern helpers.
//!
//! The SQL itself is composed in the repository layer; this module only
//! normalizes what the caller asked for so every layer agrees on when a
//! dimension is active.

use crate::types::DbId;

/// Escape character used in every `LIKE ... ESCAPE` clause.
pub const LIKE_ESCAPE: char = '\\';

/// Independent, optional filter dimensions for note retrieval.
///
/// Active dimensions are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    /// Exact match on `category_id`.
    pub category_id: Option<DbId>,
    /// Case-insensitive substring matched against title, content, and tags.
    pub text: Option<String>,
}

impl NoteFilter {
    /// Build a filter from raw request values.
    ///
    /// `q` is trimmed; a blank `q` disables text filtering.
    pub fn new(category_id: Option<DbId>, q: Option<&str>) -> Self {
        let text = q
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Self { category_id, text }
    }

    /// Filter on category only.
    pub fn by_category(category_id: Option<DbId>) -> Self {
        Self::new(category_id, None)
    }
}

/// Escape LIKE wildcard characters (`%`, `_`, `\`) in user input.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Substring pattern for `LIKE ... ESCAPE '\'`.
pub fn contains_pattern(input: &str) -> String {
    format!("%{}%", escape_like(input))
}
