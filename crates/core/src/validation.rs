//! Field-level validation for question and answer payloads.

use crate::error::CoreError;

/// Maximum length of answer content in characters.
pub const MAX_ANSWER_CONTENT_LENGTH: usize = 300;

/// A question title must be present and non-empty.
pub fn validate_title(title: Option<&str>) -> Result<&str, CoreError> {
    match title {
        Some(title) if !title.is_empty() => Ok(title),
        _ => Err(CoreError::Validation(
            "The title field is required. Please enter a title.".to_string(),
        )),
    }
}

/// Answer content must be non-empty and at most
/// [`MAX_ANSWER_CONTENT_LENGTH`] characters long.
pub fn validate_answer_content(content: Option<&str>) -> Result<&str, CoreError> {
    let content = match content {
        Some(content) if !content.is_empty() => content,
        _ => return Err(CoreError::Validation("Please enter an answer".to_string())),
    };
    if content.chars().count() > MAX_ANSWER_CONTENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Please ensure your answer does not exceed {MAX_ANSWER_CONTENT_LENGTH} characters."
        )));
    }
    Ok(content)
}
