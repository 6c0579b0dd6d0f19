//! The error payload carried by failed results
//!
//! An [`ErrorResult`] says why an operation did not succeed: an optional
//! typed error code, a human-readable message, and any field-level
//! validation errors. Absence of an `ErrorResult` is what represents
//! success; one is never constructed to mean "no error".

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::code::ErrorCode;
use crate::validation::ValidationError;

/// Why an operation failed.
///
/// The code may be absent even though the operation failed; the validation
/// errors then say why. At least one of the two is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResult<E> {
    code: Option<E>,
    message: String,
    validation_errors: Option<Vec<ValidationError>>,
}

impl<E: ErrorCode> ErrorResult<E> {
    /// Create an error identified by a well-defined code.
    ///
    /// The message defaults to the code's declared description, or `"Error"`
    /// when it has none.
    pub fn from_code(code: E) -> Self {
        let message = code.description().unwrap_or("Error").to_string();
        Self {
            code: Some(code),
            message,
            validation_errors: None,
        }
    }

    /// Create an error identified by a well-defined code, with an explicit
    /// message.
    pub fn from_code_with_message(code: E, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
            validation_errors: None,
        }
    }

    /// Create an error described only by field-level validation errors.
    ///
    /// # Panics
    ///
    /// Panics when `validation_errors` is empty: an `ErrorResult` never
    /// represents "no error".
    pub fn from_validation_errors(validation_errors: Vec<ValidationError>) -> Self {
        Self::from_validation_errors_with_message(validation_errors, "Validation Error")
    }

    /// Create a validation-only error with an explicit message.
    ///
    /// # Panics
    ///
    /// Panics when `validation_errors` is empty.
    pub fn from_validation_errors_with_message(
        validation_errors: Vec<ValidationError>,
        message: impl Into<String>,
    ) -> Self {
        assert!(
            !validation_errors.is_empty(),
            "an error result needs a code or at least one validation error"
        );
        Self {
            code: None,
            message: message.into(),
            validation_errors: Some(validation_errors),
        }
    }

    /// The typed error code, when one was declared for this failure.
    pub fn code(&self) -> Option<E> {
        self.code
    }

    /// The human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The field-level validation errors, when any were recorded.
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        self.validation_errors.as_deref()
    }

    /// Append a validation error, allocating the list if this error was
    /// created from just a code. The code and message are left untouched.
    pub fn add_validation_error(&mut self, error: impl Into<ValidationError>) {
        self.validation_errors
            .get_or_insert_with(Vec::new)
            .push(error.into());
    }

    /// True iff this error carries exactly the given code.
    ///
    /// The explicit form of comparing a failure against a bare error-code
    /// constant; a validation-only error matches no code at all.
    pub fn matches_code(&self, code: E) -> bool {
        self.code == Some(code)
    }

    /// Escalate into a failure meant to abort the operation.
    ///
    /// Use when a received error cannot be handled at this layer and should
    /// bubble up as an unexpected fault instead of a returned value. This is
    /// the only bridge from "returned error" to "raised failure".
    pub fn into_fatal_failure(self) -> FatalError<E> {
        FatalError { error: self }
    }
}

impl<E: ErrorCode> fmt::Display for ErrorResult<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self.code {
            None => {
                return if self.message == "Error" {
                    write!(f, "Error")
                } else {
                    write!(f, "Error (\"{}\")", self.message)
                };
            }
            Some(code) => code,
        };

        write!(f, "Error: {:?}", code)?;

        let description = code.description();
        if let Some(description) = description {
            write!(f, " (\"{}\")", description)?;
        }

        // Skip the message when it just repeats the code, its description,
        // or the bare marker.
        let code_name = format!("{:?}", code);
        if self.message != "Error"
            && self.message != code_name
            && description != Some(self.message.as_str())
        {
            write!(f, " (\"{}\")", self.message)?;
        }

        Ok(())
    }
}

/// An escalated domain error.
///
/// Wraps the [`ErrorResult`] a caller decided it cannot handle, so the error
/// content survives all the way to whichever outer layer finally reports it
/// and aborts.
#[derive(Debug, Error)]
#[error("unhandled domain error: {error}")]
pub struct FatalError<E: ErrorCode> {
    /// The escalated error, kept intact.
    pub error: ErrorResult<E>,
}
