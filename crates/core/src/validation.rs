//! Field validation for notes and categories.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a note title in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of a category name in characters.
pub const MAX_CATEGORY_NAME_LENGTH: usize = 100;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a note title: non-blank and within [`MAX_TITLE_LENGTH`].
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    validate_required("Title", title, MAX_TITLE_LENGTH)
}

/// Validate a category name: non-blank and within [`MAX_CATEGORY_NAME_LENGTH`].
pub fn validate_category_name(name: &str) -> Result<(), CoreError> {
    validate_required("Category name", name, MAX_CATEGORY_NAME_LENGTH)
}

fn validate_required(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(CoreError::Validation(format!(
            "{field} must not exceed {max_len} characters, got {len}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn valid_title_accepted() {
        assert!(validate_title("Project Plan").is_ok());
    }

    #[test]
    fn empty_title_rejected() {
        assert_matches!(validate_title(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn whitespace_title_rejected() {
        assert_matches!(validate_title("   \t"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn title_at_limit_accepted() {
        assert!(validate_title(&"t".repeat(MAX_TITLE_LENGTH)).is_ok());
    }

    #[test]
    fn title_over_limit_rejected() {
        let result = validate_title(&"t".repeat(MAX_TITLE_LENGTH + 1));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("exceed"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(validate_category_name(&"é".repeat(MAX_CATEGORY_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn empty_category_name_rejected() {
        let result = validate_category_name("");
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.starts_with("Category name"));
    }
}
