//! Canon Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A canon lookup error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for canon operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The value isn't a recognised testament.
    #[display("unknown testament: {_0}")]
    UnknownTestament(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // The table is static, asking again gets the same answer.
        false
    }
}
