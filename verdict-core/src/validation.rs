//! Field-level validation errors
//!
//! A failed operation may report one or more of these alongside (or instead
//! of) a typed error code, so callers can bind each problem back to the
//! input field that caused it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single field-level problem reported by a failed operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// What went wrong
    pub message: String,
    /// The offending field, when the problem is tied to one
    pub field: Option<String>,
}

impl ValidationError {
    /// Create a validation error not tied to a specific field
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    /// Create a validation error for a specific field
    pub fn for_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}: {}", field, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_field_and_message() {
        assert_eq!(
            ValidationError::for_field("username", "Too short"),
            ValidationError::for_field("username", "Too short")
        );
        assert_ne!(
            ValidationError::for_field("username", "Too short"),
            ValidationError::for_field("password", "Too short")
        );
        assert_ne!(
            ValidationError::new("Too short"),
            ValidationError::for_field("username", "Too short")
        );
    }

    #[test]
    fn test_from_str() {
        let error: ValidationError = "Bad input".into();
        assert_eq!(error.message, "Bad input");
        assert!(error.field.is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ValidationError::for_field("username", "Too short").to_string(),
            "username: Too short"
        );
        assert_eq!(ValidationError::new("Bad input").to_string(), "Bad input");
    }
}
