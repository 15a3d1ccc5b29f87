use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

pub fn is_email(email: &str) -> Result<(), ValidationError> {
    if email.len() < 3 || email.len() > 255 {
        return Err(ValidationError::new("length")
            .with_message(Cow::from("Email must contain between 3 and 255 characters")));
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::new("email").with_message(Cow::from("Invalid email format")));
    }

    Ok(())
}

/// Strength rules belong to the user service; only reject what it could never accept.
pub fn is_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() || password.len() > 72 {
        return Err(ValidationError::new("length").with_message(Cow::from(
            "Password must contain between 1 and 72 characters",
        )));
    }

    Ok(())
}

pub fn is_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().len() < 3 {
        return Err(ValidationError::new("length")
            .with_message(Cow::from("Username must have at least 3 characters")));
    }

    Ok(())
}
