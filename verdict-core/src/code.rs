//! Error code contract
//!
//! Each fallible operation picks a closed enumeration of its expected
//! failures and implements this trait for it.

use std::fmt;

/// A closed enumeration of the expected failures of one operation.
///
/// Implementors are small fieldless enums chosen per call site. The optional
/// description backs message defaulting when an error is built from a bare
/// code: a match over variants is the compile-time equivalent of a static
/// description table, and the default implementation opts out entirely.
pub trait ErrorCode: Copy + Eq + fmt::Debug {
    /// Human-readable description of this code, if one is declared.
    fn description(&self) -> Option<&'static str> {
        None
    }
}
