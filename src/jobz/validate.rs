//! Form validation: pure predicates over field values, plus the two form
//! validators (profile and job management). Validators collect one
//! [`FieldError`] per failing field so callers can flag each field
//! individually; an empty vec means the form passes.

use crate::model::JobDraft;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.+-]+@[\w-]+(\.[\w-]+)+$").expect("email pattern"));

pub fn is_empty(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// One failing form field with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if is_empty(value) {
        errors.push(FieldError::new(field, "is required"));
    }
}

/// Validates the profile form fields (skills are managed separately and
/// never block a profile save).
pub fn validate_profile(name: &str, position: &str, email: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require(&mut errors, "name", name);
    require(&mut errors, "position", position);
    if is_empty(email) {
        errors.push(FieldError::new("email", "is required"));
    } else if !is_email(email) {
        errors.push(FieldError::new("email", "is not a valid email address"));
    }
    errors
}

/// Validates a job draft before it reaches the repository.
pub fn validate_job(draft: &JobDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require(&mut errors, "company", &draft.company);
    require(&mut errors, "position", &draft.position);
    require(&mut errors, "contract", &draft.contract);
    require(&mut errors, "location", &draft.location);
    require(&mut errors, "role", &draft.role);
    require(&mut errors, "level", &draft.level);
    if let Some(logo) = &draft.logo {
        if !is_empty(logo) && url::Url::parse(logo).is_err() {
            errors.push(FieldError::new("logo", "is not a valid URL"));
        }
    }
    errors
}
