//! Verdict Core - Result and error types for expected domain failures
//!
//! Operations that can fail in expected, recoverable ways return one of the
//! result shapes in this crate instead of panicking or abusing a catch-all
//! error channel. A failure carries an [`ErrorResult`]: an optional typed
//! error code, a message, and any field-level validation errors.
//!
//! This crate contains no I/O. Persistence, display and configuration
//! belong to consuming crates.

pub mod code;
pub mod error;
pub mod result;
pub mod validation;

pub use code::ErrorCode;
pub use error::{ErrorResult, FatalError};
pub use result::{Fallible, ValueResult, VoidResult};
pub use validation::ValidationError;
