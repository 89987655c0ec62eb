//! 회원가입/로그인 본문 검증

use super::{is_email, is_length_between, ValidationOutcome};
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::errors::FieldErrors;
use crate::utils::string_utils::normalize_blank;

pub fn validate_register_input(data: &RegisterRequest) -> ValidationOutcome {
    let mut errors = FieldErrors::new();

    let name = normalize_blank(data.name.as_deref());
    let email = normalize_blank(data.email.as_deref());
    let password = normalize_blank(data.password.as_deref());
    let password2 = normalize_blank(data.password2.as_deref());

    if !is_length_between(&name, 2, 30) {
        errors.insert("name", "Name must be between 2 and 30 characters");
    }
    if name.is_empty() {
        errors.insert("name", "Name field is required");
    }

    if email.is_empty() {
        errors.insert("email", "Email field is required");
    }
    if !is_email(&email) {
        errors.insert("email", "Email is invalid");
    }

    if password.is_empty() {
        errors.insert("password", "Password field is required");
    }
    if !is_length_between(&password, 6, 30) {
        errors.insert("password", "Password must be at least 6 characters");
    }

    if password2.is_empty() {
        errors.insert("password2", "Confirm Password field is required");
    }
    if password != password2 {
        errors.insert("password2", "Passwords must match");
    }

    ValidationOutcome::from_errors(errors)
}

pub fn validate_login_input(data: &LoginRequest) -> ValidationOutcome {
    let mut errors = FieldErrors::new();

    let email = normalize_blank(data.email.as_deref());
    let password = normalize_blank(data.password.as_deref());

    if !is_email(&email) {
        errors.insert("email", "Email is invalid");
    }
    if email.is_empty() {
        errors.insert("email", "email field is required");
    }

    if !is_length_between(&password, 6, 30) {
        errors.insert("password", "password must be atleast 6 characters");
    }
    if password.is_empty() {
        errors.insert("password", "password field is required");
    }

    ValidationOutcome::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(name: &str, email: &str, password: &str, password2: &str) -> RegisterRequest {
        RegisterRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            password2: Some(password2.to_string()),
        }
    }

    #[test]
    fn test_register_valid() {
        let outcome = validate_register_input(&register("Al", "a@a.com", "secret1", "secret1"));
        assert!(outcome.is_valid, "{:?}", outcome.errors);
    }

    #[test]
    fn test_register_missing_everything() {
        let outcome = validate_register_input(&RegisterRequest::default());

        assert!(!outcome.is_valid);
        assert_eq!(outcome.errors.get("name"), Some("Name field is required"));
        assert_eq!(outcome.errors.get("email"), Some("Email is invalid"));
        assert_eq!(outcome.errors.get("password"), Some("Password must be at least 6 characters"));
        assert_eq!(outcome.errors.get("password2"), Some("Confirm Password field is required"));
    }

    #[test]
    fn test_register_field_rules() {
        let outcome = validate_register_input(&register("A", "nope", "short", "other"));

        assert_eq!(outcome.errors.get("name"), Some("Name must be between 2 and 30 characters"));
        assert_eq!(outcome.errors.get("email"), Some("Email is invalid"));
        assert_eq!(outcome.errors.get("password"), Some("Password must be at least 6 characters"));
        assert_eq!(outcome.errors.get("password2"), Some("Passwords must match"));
    }

    #[test]
    fn test_register_blank_is_missing() {
        let outcome = validate_register_input(&register("   ", "a@a.com", "secret1", "secret1"));
        assert_eq!(outcome.errors.get("name"), Some("Name field is required"));
        assert_eq!(outcome.errors.len(), 1);
    }

    #[test]
    fn test_login_messages() {
        let empty = validate_login_input(&LoginRequest::default());
        assert_eq!(empty.errors.get("email"), Some("email field is required"));
        assert_eq!(empty.errors.get("password"), Some("password field is required"));

        let malformed = validate_login_input(&LoginRequest {
            email: Some("a-at-a.com".into()),
            password: Some("12345".into()),
        });
        assert_eq!(malformed.errors.get("email"), Some("Email is invalid"));
        assert_eq!(malformed.errors.get("password"), Some("password must be atleast 6 characters"));

        let valid = validate_login_input(&LoginRequest {
            email: Some("a@a.com".into()),
            password: Some("secret1".into()),
        });
        assert!(valid.is_valid);
    }
}
