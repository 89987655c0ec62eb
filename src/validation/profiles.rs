//! 프로필, 경력, 학력 본문 검증

use super::{is_length_between, is_url, ValidationOutcome};
use crate::domain::dto::profiles::request::{EducationRequest, ExperienceRequest, ProfileRequest};
use crate::errors::FieldErrors;
use crate::utils::string_utils::normalize_blank;

pub fn validate_profile_input(data: &ProfileRequest) -> ValidationOutcome {
    let mut errors = FieldErrors::new();

    let handle = normalize_blank(data.handle.as_deref());
    let status = normalize_blank(data.status.as_deref());
    let skills = normalize_blank(data.skills.as_deref());

    if !is_length_between(&handle, 2, 40) {
        errors.insert("handle", "Handle needs to be between 2 and 40 characters");
    }
    if handle.is_empty() {
        errors.insert("handle", "Profile handle is required");
    }
    if status.is_empty() {
        errors.insert("status", "Status field is required");
    }
    if skills.is_empty() {
        errors.insert("skills", "Skills field is required");
    }

    let links = [
        ("website", &data.website),
        ("youtube", &data.youtube),
        ("twitter", &data.twitter),
        ("facebook", &data.facebook),
        ("linkedin", &data.linkedin),
        ("instagram", &data.instagram),
    ];
    for (field, value) in links {
        let value = normalize_blank(value.as_deref());
        if !value.is_empty() && !is_url(&value) {
            errors.insert(field, "Not a valid URL");
        }
    }

    ValidationOutcome::from_errors(errors)
}

pub fn validate_experience_input(data: &ExperienceRequest) -> ValidationOutcome {
    let mut errors = FieldErrors::new();

    if normalize_blank(data.title.as_deref()).is_empty() {
        errors.insert("title", "Job title field is required");
    }
    if normalize_blank(data.from.as_deref()).is_empty() {
        errors.insert("from", "From date field is required");
    }
    if normalize_blank(data.company.as_deref()).is_empty() {
        errors.insert("company", "Company field is required");
    }

    ValidationOutcome::from_errors(errors)
}

pub fn validate_education_input(data: &EducationRequest) -> ValidationOutcome {
    let mut errors = FieldErrors::new();

    if normalize_blank(data.school.as_deref()).is_empty() {
        errors.insert("school", "School field is required");
    }
    if normalize_blank(data.degree.as_deref()).is_empty() {
        errors.insert("degree", "Degree field is required");
    }
    if normalize_blank(data.fieldofstudy.as_deref()).is_empty() {
        errors.insert("fieldofstudy", "Field of study field is required");
    }
    if normalize_blank(data.from.as_deref()).is_empty() {
        errors.insert("from", "From date field is required");
    }

    ValidationOutcome::from_errors(errors)
}
