//! Field constraint checks shared by the parameter constructors.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::server::error::AppError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$")
        .expect("email pattern compiles")
});

/// Trims `value` and checks its length in characters lies within `min..=max`.
pub fn text(field: &str, value: &str, min: usize, max: usize) -> Result<String, AppError> {
    let value = value.trim();
    let len = value.chars().count();

    if len < min || len > max {
        return Err(AppError::Validation(if min == 0 {
            format!("Field '{}' must be at most {} characters", field, max)
        } else {
            format!(
                "Field '{}' must be between {} and {} characters",
                field, min, max
            )
        }));
    }

    Ok(value.to_string())
}

/// Checks an integer lies within `min..=max`.
pub fn int_range(field: &str, value: i64, min: i32, max: i32) -> Result<i32, AppError> {
    if value < i64::from(min) || value > i64::from(max) {
        return Err(AppError::Validation(format!(
            "Field '{}' must be between {} and {}",
            field, min, max
        )));
    }

    Ok(value as i32)
}

/// Trims `value` and checks it is a syntactically valid email address.
pub fn email(field: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();

    if value.len() > 254 || !EMAIL_RE.is_match(value) {
        return Err(AppError::Validation(format!(
            "Field '{}' must be a valid email address",
            field
        )));
    }

    Ok(value.to_string())
}
