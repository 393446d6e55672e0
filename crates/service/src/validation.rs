//! Field checks shared by the resource definitions.

use crate::errors::ServiceError;

/// Reject `None` or whitespace-only text.
pub fn require_text(value: Option<&str>, field: &'static str, message: &str) -> Result<(), ServiceError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(ServiceError::validation(field, message)),
    }
}

/// Reject a missing value.
pub fn require<T>(value: Option<&T>, field: &'static str, message: &str) -> Result<(), ServiceError> {
    match value {
        Some(_) => Ok(()),
        None => Err(ServiceError::validation(field, message)),
    }
}
