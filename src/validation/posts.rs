//! 게시물/댓글 본문 검증

use super::{is_length_between, ValidationOutcome};
use crate::domain::dto::posts::request::PostRequest;
use crate::errors::FieldErrors;
use crate::utils::string_utils::normalize_blank;

/// 본문 10~300자
pub fn validate_post_input(data: &PostRequest) -> ValidationOutcome {
    let mut errors = FieldErrors::new();
    let text = normalize_blank(data.text.as_deref());

    if text.is_empty() {
        errors.insert("text", "text is invalid");
    }
    if !is_length_between(&text, 10, 300) {
        errors.insert("text", "Text must be between 10 to 300 characters");
    }

    ValidationOutcome::from_errors(errors)
}
