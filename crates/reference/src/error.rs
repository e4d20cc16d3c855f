//! Reference Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A reference error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for parsing and validation.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a reference was rejected.
///
/// The display strings are shown to end users as-is.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[display("Book '{_0}' not found")]
    BookNotFound(#[error(not(source))] String),
    #[display("Chapter {chapter} does not exist in {book}")]
    ChapterOutOfRange { book: String, chapter: u16 },
    #[display("Verse {verse} does not exist in {book} {chapter}")]
    VerseOutOfRange { book: String, chapter: u16, verse: u16 },
    #[display("End verse must be greater than or equal to start verse")]
    EndBeforeStart,
    #[display("Verse ranges are not allowed")]
    RangesDisallowed,
    #[display("Verse range too large (max {_0} verses)")]
    RangeTooLarge(#[error(not(source))] u16),
    #[display("Could not parse reference: {_0}")]
    Unparseable(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Whether this error is about the shape of a verse range rather than the
    /// existence of a book, chapter or verse.
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Self::EndBeforeStart | Self::RangesDisallowed | Self::RangeTooLarge(_))
    }
}
