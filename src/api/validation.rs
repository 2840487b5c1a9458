//! Request Validation
//!
//! Field-level rules for request bodies. Each DTO lists every failing field
//! rather than stopping at the first one.

use crate::api::dto::{ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest};
use crate::api::error::FieldError;

/// Rules a request body must satisfy after deserialization
pub trait Validate {
    fn validate(&self) -> Vec<FieldError>;
}

const MIN_PASSWORD_LEN: usize = 8;

/// Basic address shape: one `@`, non-empty local part, dotted domain
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }

    domain.split('.').all(|label| !label.is_empty())
}

fn check_email(field: &str, value: &str, errors: &mut Vec<FieldError>) {
    if !is_valid_email(value) {
        errors.push(FieldError::new(field, "Invalid email address"));
    }
}

fn check_len(field: &str, value: &str, min: usize, max: usize, errors: &mut Vec<FieldError>) {
    let len = value.chars().count();
    if len < min {
        let message = if min == 1 {
            format!("{} is required", field)
        } else {
            format!("{} must be at least {} characters", field, min)
        };
        errors.push(FieldError::new(field, message));
    } else if len > max {
        errors.push(FieldError::new(
            field,
            format!("{} must be at most {} characters", field, max),
        ));
    }
}

fn check_password(field: &str, value: &str, errors: &mut Vec<FieldError>) {
    if value.chars().count() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            field,
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }
}

impl Validate for LoginRequest {
    // Any well-formed pair reaches the credential check so that every
    // mismatch is reported as INVALID_CREDENTIALS.
    fn validate(&self) -> Vec<FieldError> {
        Vec::new()
    }
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_email("email", &self.email, &mut errors);
        check_password("password", &self.password, &mut errors);
        check_len("name", self.name.trim(), 2, 100, &mut errors);
        if let Some(company) = &self.company {
            check_len("company", company, 0, 100, &mut errors);
        }
        errors
    }
}

impl Validate for ForgotPasswordRequest {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_email("email", &self.email, &mut errors);
        errors
    }
}

impl Validate for ResetPasswordRequest {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_len("token", self.token.trim(), 1, 512, &mut errors);
        check_password("password", &self.password, &mut errors);
        errors
    }
}
