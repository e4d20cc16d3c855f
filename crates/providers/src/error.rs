//! Provider Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A provider error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for provider operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a provider couldn't supply verses.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// No provider is enabled, or the chain was built empty.
    #[display("No scripture provider is available")]
    Unavailable,
    /// Transport failure, timeout or non-success status.
    #[display("Provider request failed: {_0}")]
    RequestFailed(#[error(not(source))] String),
    /// The provider answered, but not in the expected shape.
    #[display("Invalid API response format: {_0}")]
    ResponseInvalid(#[error(not(source))] String),
    #[display("No verses found")]
    NoVerses,
    #[display("unknown provider: {_0}")]
    UnknownProvider(#[error(not(source))] String),
    #[display("HTTP client could not be built")]
    Client,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RequestFailed(_))
    }
}
