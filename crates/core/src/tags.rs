//! Tag list <-> delimited storage string transform.
//!
//! Notes keep an ordered list of tags in memory but persist them as a single
//! comma-separated column. An empty or missing column always reads back as an
//! empty list, never `[""]`.
//!
//! Tags that themselves contain the delimiter do not round-trip, and empty tag
//! elements are indistinguishable from absence. Both are accepted losses.

use crate::error::CoreError;

/// Separator between tags in the persisted column.
pub const TAG_DELIMITER: &str = ",";

/// Maximum length of the joined tag string in characters.
pub const MAX_TAGS_LENGTH: usize = 200;

/// Join a tag sequence into its storage form. `[]` becomes `""`.
pub fn join_tags<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|tag| tag.as_ref())
        .collect::<Vec<&str>>()
        .join(TAG_DELIMITER)
}

/// Split a stored tag column back into a sequence.
pub fn split_tags(stored: Option<&str>) -> Vec<String> {
    match stored {
        None | Some("") => Vec::new(),
        Some(s) => s.split(TAG_DELIMITER).map(str::to_string).collect(),
    }
}

/// Validate that the joined form of `tags` fits the storage column.
pub fn validate_tags<S: AsRef<str>>(tags: &[S]) -> Result<(), CoreError> {
    let len = join_tags(tags).chars().count();
    if len > MAX_TAGS_LENGTH {
        return Err(CoreError::Validation(format!(
            "Tags must not exceed {MAX_TAGS_LENGTH} characters when joined, got {len}"
        )));
    }
    Ok(())
}
