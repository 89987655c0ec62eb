//! # Payload Validation
//!
//! 요청 본문의 형태를 검사하는 순수 함수들입니다. 각 검증기는
//! [`ValidationOutcome`] (필드별 메시지 맵 + 유효 여부)을 돌려주며,
//! 어떤 부수 효과도 없습니다.
//!
//! ## 규칙
//!
//! - 없는 값과 공백뿐인 값은 모두 빈 문자열로 정규화한 뒤 검사합니다.
//! - 같은 필드에 대해 뒤의 검사가 앞의 메시지를 덮어씁니다.
//!   예) 핸들이 비어 있으면 길이 메시지 대신 "Profile handle is required".
//! - 길이는 문자(char) 수 기준입니다.
//!
//! ```rust,ignore
//! use crate::validation::validate_post_input;
//!
//! validate_post_input(&request).into_result()?;
//! ```

pub mod posts;
pub mod profiles;
pub mod users;

use validator::{ValidateEmail, ValidateLength, ValidateUrl};

use crate::errors::{AppError, AppResult, FieldErrors};

pub use posts::validate_post_input;
pub use profiles::{validate_education_input, validate_experience_input, validate_profile_input};
pub use users::{validate_login_input, validate_register_input};

/// 검증 결과
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOutcome {
    pub errors: FieldErrors,
    pub is_valid: bool,
}

impl ValidationOutcome {
    pub fn from_errors(errors: FieldErrors) -> Self {
        let is_valid = errors.is_empty();
        Self { errors, is_valid }
    }

    /// 실패 시 필드 맵을 담은 `ValidationError` 로 바꿉니다.
    pub fn into_result(self) -> AppResult<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(AppError::ValidationError(self.errors))
        }
    }
}

fn is_length_between(value: &String, min: u64, max: u64) -> bool {
    value.validate_length(Some(min), Some(max), None)
}

fn is_email(value: &String) -> bool {
    value.validate_email()
}

/// 스킴이 없는 주소(`example.com`)도 URL 로 인정합니다.
fn is_url(value: &String) -> bool {
    value.validate_url() || format!("http://{}", value).validate_url()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_validity_follows_errors() {
        assert!(ValidationOutcome::from_errors(FieldErrors::new()).is_valid);
        assert!(ValidationOutcome::from_errors(FieldErrors::new()).into_result().is_ok());

        let outcome = ValidationOutcome::from_errors(FieldErrors::single("text", "text is invalid"));
        assert!(!outcome.is_valid);
        assert!(matches!(outcome.into_result(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_url_accepts_missing_scheme() {
        assert!(is_url(&"https://github.com/al".to_string()));
        assert!(is_url(&"github.com/al".to_string()));
        assert!(!is_url(&"not a url".to_string()));
    }

    #[test]
    fn test_length_counts_characters() {
        assert!(is_length_between(&"한글".to_string(), 2, 2));
        assert!(!is_length_between(&"a".to_string(), 2, 30));
    }
}
