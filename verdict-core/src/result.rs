//! Success-or-error result shapes
//!
//! Two carriers built on [`ErrorResult`]: [`VoidResult`] for operations with
//! nothing to return on success, and [`ValueResult`] for operations that
//! return a value. Expected failures travel inside them as ordinary return
//! values; panics are reserved for invariant violations in producing code.

use std::fmt;

use crate::code::ErrorCode;
use crate::error::ErrorResult;
use crate::validation::ValidationError;

/// Behavior shared by both result shapes.
pub trait Fallible<E: ErrorCode> {
    /// The error payload, when the operation failed.
    fn error(&self) -> Option<&ErrorResult<E>>;

    /// Append a field-level validation error.
    ///
    /// Semantics are shape-specific; see the implementations.
    fn add_validation_error(&mut self, error: impl Into<ValidationError>)
    where
        Self: Sized;

    /// True iff no error is attached.
    fn is_success(&self) -> bool {
        self.error().is_none()
    }

    /// The attached error's message, or `None` on success.
    fn error_message<'a>(&'a self) -> Option<&'a str>
    where
        E: 'a,
    {
        self.error().map(ErrorResult::message)
    }
}

// Success renders as `Success` (plus the quoted message when it is not the
// default); failure delegates to the error rendering.
fn fmt_result<E: ErrorCode>(
    f: &mut fmt::Formatter<'_>,
    success_message: Option<&str>,
    error: Option<&ErrorResult<E>>,
) -> fmt::Result {
    match error {
        Some(error) => write!(f, "{}", error),
        None => match success_message {
            Some(message) if message != "Success" => write!(f, "Success (\"{}\")", message),
            _ => write!(f, "Success"),
        },
    }
}

/// Result of an operation with nothing to return on success.
///
/// Exactly one of success (no error attached) or failure (error attached)
/// holds. The ergonomic path for producers whose only question is "did an
/// expected error occur" is [`VoidResult::from_optional_error`].
#[must_use]
#[derive(Debug, Clone)]
pub struct VoidResult<E> {
    success_message: Option<String>,
    error: Option<ErrorResult<E>>,
}

impl<E: ErrorCode> VoidResult<E> {
    /// A success with the default message.
    pub fn success() -> Self {
        Self::success_with_message("Success")
    }

    /// A success with an explicit message.
    pub fn success_with_message(message: impl Into<String>) -> Self {
        Self {
            success_message: Some(message.into()),
            error: None,
        }
    }

    /// A failure identified by a well-defined code.
    pub fn fail(code: E) -> Self {
        Self::from_error(ErrorResult::from_code(code))
    }

    /// A failure identified by a well-defined code, with an explicit message.
    pub fn fail_with_message(code: E, message: impl Into<String>) -> Self {
        Self::from_error(ErrorResult::from_code_with_message(code, message))
    }

    /// A failure described only by field-level validation errors.
    pub fn validation_failure(validation_errors: Vec<ValidationError>) -> Self {
        Self::from_error(ErrorResult::from_validation_errors(validation_errors))
    }

    /// A validation-only failure with an explicit message.
    pub fn validation_failure_with_message(
        validation_errors: Vec<ValidationError>,
        message: impl Into<String>,
    ) -> Self {
        Self::from_error(ErrorResult::from_validation_errors_with_message(
            validation_errors,
            message,
        ))
    }

    /// Wrap an existing error payload, e.g. one passed up from a lower layer.
    pub fn from_error(error: ErrorResult<E>) -> Self {
        Self {
            success_message: None,
            error: Some(error),
        }
    }

    /// Shorthand for producers that compute "maybe an error code":
    /// `None` becomes [`VoidResult::success`], `Some(code)` becomes
    /// [`VoidResult::fail`].
    pub fn from_optional_error(code: Option<E>) -> Self {
        match code {
            None => Self::success(),
            Some(code) => Self::fail(code),
        }
    }

    /// The failure's error code, or `None`.
    ///
    /// Deliberately narrowing: a validation-only failure has no code and
    /// extracts to `None`, indistinguishable from success through this view
    /// alone. Check [`Fallible::is_success`] first when that matters.
    pub fn to_optional_error(&self) -> Option<E> {
        self.error.as_ref().and_then(ErrorResult::code)
    }

    /// Consume the result, yielding the error payload of a failure.
    pub fn into_error(self) -> Option<ErrorResult<E>> {
        self.error
    }

    /// The success message, or `None` when failed.
    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }
}

impl<E: ErrorCode> Fallible<E> for VoidResult<E> {
    fn error(&self) -> Option<&ErrorResult<E>> {
        self.error.as_ref()
    }

    /// Creates a validation-only error payload if none is attached yet, so a
    /// producer can start from [`VoidResult::success`] and accumulate field
    /// errors without pre-declaring a code.
    fn add_validation_error(&mut self, error: impl Into<ValidationError>) {
        match &mut self.error {
            Some(err) => err.add_validation_error(error),
            None => {
                self.success_message = None;
                self.error = Some(ErrorResult::from_validation_errors(vec![error.into()]));
            }
        }
    }
}

impl<E: ErrorCode> fmt::Display for VoidResult<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_result(f, self.success_message.as_deref(), self.error.as_ref())
    }
}

/// Result of an operation that returns a value on success.
///
/// Holds the value or the error, never both and never neither; producing any
/// other combination is a bug in the producer and panics immediately.
#[must_use]
#[derive(Debug, Clone)]
pub struct ValueResult<T, E> {
    value: Option<T>,
    success_message: Option<String>,
    error: Option<ErrorResult<E>>,
}

impl<T, E: ErrorCode> ValueResult<T, E> {
    /// A success carrying `value`, with the default message.
    pub fn success(value: T) -> Self {
        Self::success_with_message(value, "Success")
    }

    /// A success carrying `value`, with an explicit message.
    pub fn success_with_message(value: T, message: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            success_message: Some(message.into()),
            error: None,
        }
    }

    /// A failure identified by a well-defined code.
    pub fn fail(code: E) -> Self {
        Self::from_error(ErrorResult::from_code(code))
    }

    /// A failure identified by a well-defined code, with an explicit message.
    pub fn fail_with_message(code: E, message: impl Into<String>) -> Self {
        Self::from_error(ErrorResult::from_code_with_message(code, message))
    }

    /// A failure described only by field-level validation errors.
    pub fn validation_failure(validation_errors: Vec<ValidationError>) -> Self {
        Self::from_error(ErrorResult::from_validation_errors(validation_errors))
    }

    /// A validation-only failure with an explicit message.
    pub fn validation_failure_with_message(
        validation_errors: Vec<ValidationError>,
        message: impl Into<String>,
    ) -> Self {
        Self::from_error(ErrorResult::from_validation_errors_with_message(
            validation_errors,
            message,
        ))
    }

    /// Wrap an existing error payload, e.g. one passed up from a lower layer.
    pub fn from_error(error: ErrorResult<E>) -> Self {
        Self {
            value: None,
            success_message: None,
            error: Some(error),
        }
    }

    /// Shorthand enforcing the value-XOR-error rule at construction.
    ///
    /// # Panics
    ///
    /// Panics when both or neither of `value` and `code` are present: that
    /// is a bug in the producing code, not a runtime condition for callers
    /// to branch on.
    pub fn from_pair(value: Option<T>, code: Option<E>) -> Self {
        match (value, code) {
            (Some(value), None) => Self::success(value),
            (None, Some(code)) => Self::fail(code),
            (Some(_), Some(_)) => {
                panic!("a result cannot carry a value and an error at the same time")
            }
            (None, None) => panic!("a result must carry either a value or an error"),
        }
    }

    /// Destructure into a `(value, error)` pair, the check-the-error-else-
    /// use-the-value consumption pattern. Success yields `(Some(value),
    /// None)`, failure yields `(None, Some(error))`, never anything else.
    pub fn into_parts(self) -> (Option<T>, Option<ErrorResult<E>>) {
        (self.value, self.error)
    }

    /// The success value, when the operation succeeded.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// The success message, or `None` when failed.
    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }
}

impl<T, E: ErrorCode> Fallible<E> for ValueResult<T, E> {
    fn error(&self) -> Option<&ErrorResult<E>> {
        self.error.as_ref()
    }

    /// Structural, not merely "error absent": success iff the value is
    /// present and no error is, failure iff the reverse. Any other state is
    /// a bug in the producing code.
    fn is_success(&self) -> bool {
        match (&self.value, &self.error) {
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (Some(_), Some(_)) => {
                panic!("a result cannot carry a value and an error at the same time")
            }
            (None, None) => panic!("a result must carry either a value or an error"),
        }
    }

    /// Delegates to the attached error payload.
    ///
    /// # Panics
    ///
    /// Panics on a value-carrying success: a valued result cannot be turned
    /// into a failure after the fact. Producers of valued operations collect
    /// their [`ValidationError`]s first and pick a factory once.
    fn add_validation_error(&mut self, error: impl Into<ValidationError>) {
        match &mut self.error {
            Some(err) => err.add_validation_error(error),
            None => panic!("cannot add validation errors to a result that carries a value"),
        }
    }
}

impl<T: fmt::Display, E: ErrorCode> fmt::Display for ValueResult<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.value, &self.error) {
            (Some(value), None) => {
                let message = self.success_message.as_deref().unwrap_or("Success");
                write!(f, "Success: {}: {}", message, value)
            }
            _ => fmt_result(f, self.success_message.as_deref(), self.error.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum CommandError {
        Error1,
        Error2,
    }

    impl ErrorCode for CommandError {
        fn description(&self) -> Option<&'static str> {
            match self {
                CommandError::Error1 => Some("An error 1 occurred"),
                CommandError::Error2 => None,
            }
        }
    }

    // A producer in the "maybe an error code" style.
    fn command(success: bool) -> VoidResult<CommandError> {
        if success {
            VoidResult::from_optional_error(None)
        } else {
            VoidResult::from_optional_error(Some(CommandError::Error1))
        }
    }

    #[test]
    fn test_void_success_roundtrip() {
        let result = command(true);
        assert!(result.is_success());
        assert_eq!(result.to_optional_error(), None);
        assert_eq!(result.error_message(), None);
        assert_eq!(result.success_message(), Some("Success"));
    }

    #[test]
    fn test_void_fail_roundtrip() {
        let result = command(false);
        assert!(!result.is_success());
        assert_eq!(result.to_optional_error(), Some(CommandError::Error1));
        assert_eq!(result.error_message(), Some("An error 1 occurred"));
        assert!(result.error().unwrap().matches_code(CommandError::Error1));
        assert!(!result.error().unwrap().matches_code(CommandError::Error2));
    }

    #[test]
    fn test_void_validation_only_failure_extracts_to_none() {
        let result = VoidResult::<CommandError>::validation_failure(vec![
            ValidationError::new("Bad input"),
        ]);
        assert!(!result.is_success());
        // The narrowing view cannot distinguish this from success.
        assert_eq!(result.to_optional_error(), None);
    }

    #[test]
    fn test_void_accumulates_validation_errors() {
        let mut result = VoidResult::<CommandError>::success();
        result.add_validation_error("Bad field");
        result.add_validation_error("Another bad field");

        assert!(!result.is_success());
        let recorded = result.error().unwrap().validation_errors().unwrap();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].message, "Bad field");
        assert_eq!(recorded[1].message, "Another bad field");
    }

    #[test]
    fn test_value_destructures_success() {
        let result = ValueResult::<_, CommandError>::success("payload");
        assert!(result.is_success());
        let (value, error) = result.into_parts();
        assert_eq!(value, Some("payload"));
        assert!(error.is_none());
    }

    #[test]
    fn test_value_destructures_failure() {
        let result = ValueResult::<String, _>::fail(CommandError::Error1);
        assert!(!result.is_success());
        let (value, error) = result.into_parts();
        assert!(value.is_none());
        assert!(error.unwrap().matches_code(CommandError::Error1));
    }

    #[test]
    fn test_from_pair_builds_both_shapes() {
        let success = ValueResult::<_, CommandError>::from_pair(Some("payload"), None);
        assert!(success.is_success());

        let failure = ValueResult::<&str, _>::from_pair(None, Some(CommandError::Error2));
        assert!(!failure.is_success());
        assert!(failure.error().unwrap().matches_code(CommandError::Error2));
    }

    #[test]
    #[should_panic]
    fn test_from_pair_rejects_value_and_error() {
        let _ = ValueResult::from_pair(Some("payload"), Some(CommandError::Error1));
    }

    #[test]
    #[should_panic]
    fn test_from_pair_rejects_neither() {
        let _ = ValueResult::<&str, CommandError>::from_pair(None, None);
    }

    #[test]
    #[should_panic]
    fn test_value_rejects_validation_errors_on_success() {
        let mut result = ValueResult::<_, CommandError>::success("payload");
        result.add_validation_error("Bad field");
    }

    #[test]
    fn test_value_accumulates_validation_errors_on_failure() {
        let mut result = ValueResult::<&str, _>::fail(CommandError::Error1);
        result.add_validation_error("Bad field");

        let recorded = result.error().unwrap().validation_errors().unwrap();
        assert_eq!(recorded.len(), 1);
        assert!(result.error().unwrap().matches_code(CommandError::Error1));
    }

    #[test]
    fn test_void_display() {
        assert_eq!(VoidResult::<CommandError>::success().to_string(), "Success");
        assert_eq!(
            VoidResult::<CommandError>::success_with_message("All done").to_string(),
            "Success (\"All done\")"
        );
        assert_eq!(
            VoidResult::fail(CommandError::Error1).to_string(),
            "Error: Error1 (\"An error 1 occurred\")"
        );
    }

    #[test]
    fn test_value_display() {
        assert_eq!(
            ValueResult::<_, CommandError>::success("payload").to_string(),
            "Success: Success: payload"
        );
        assert_eq!(
            ValueResult::<&str, _>::fail(CommandError::Error2).to_string(),
            "Error: Error2"
        );
    }
}
