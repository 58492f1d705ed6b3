use validator::{Validate, ValidationError};

pub fn validate<T: Validate>(val: &T) -> Result<(), validator::ValidationErrors> {
    val.validate()
}

/// Emails are compared case-insensitively, so they are stored in this form.
/// Applied while decoding request bodies, before the `email` rule runs.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Names need at least two characters besides surrounding whitespace.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() < 2 {
        return Err(ValidationError::new("blank_name"));
    }
    Ok(())
}
