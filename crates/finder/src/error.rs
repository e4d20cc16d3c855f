//! Finder Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction. Errors from the lower crates are
//! raised into this taxonomy with their original frame kept as a child.

use std::fmt::{Display as FmtDisplay, Formatter, Result as FmtResult};

use derive_more::{Display, Error};
use lectern_providers::error::{Error as ProviderError, ErrorKind as ProviderErrorKind};
use lectern_reference::error::{Error as ReferenceError, ErrorKind as ReferenceErrorKind};

/// A finder error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for finder operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Hint shown when a reference can't be parsed.
pub const PARSE_HINT: &str =
    r#"Could not parse reference. Expected format: "Book Chapter:Verse" or "Book Chapter:Verse-Verse VERSION""#;

/// The upper bound quoted by an out-of-range message, rendered as
/// ` (max: N)` when known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Max(pub Option<u16>);
impl FmtDisplay for Max {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.0 {
            Some(max) => write!(f, " (max: {max})"),
            None => Ok(()),
        }
    }
}

/// Everything a caller can be told about a failed request.
///
/// The display strings are meant for end users.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[display("Book '{_0}' not found")]
    BookNotFound(#[error(not(source))] String),
    #[display("Chapter {chapter} does not exist in {book}{max}")]
    ChapterOutOfRange { book: String, chapter: u16, max: Max },
    #[display("Verse {verse} does not exist in {book} {chapter}{max}")]
    VerseOutOfRange { book: String, chapter: u16, verse: u16, max: Max },
    /// End before start, ranges disabled, or too many verses.
    #[display("{_0}")]
    InvalidRange(#[error(not(source))] String),
    #[display("No scripture provider is available")]
    ProviderUnavailable,
    #[display("{_0}")]
    ProviderRequestFailed(#[error(not(source))] String),
    #[display("{_0}")]
    ProviderResponseInvalid(#[error(not(source))] String),
    #[display("No verses found")]
    NoVersesReturned,
    /// Holds the text that failed to parse.
    #[display("{}", PARSE_HINT)]
    ParseFailed(#[error(not(source))] String),
    #[display("passage cache error")]
    Cache,
    #[display("snapshot storage error")]
    Storage,
    #[display("download failed: {_0}")]
    Download(#[error(not(source))] String),
    #[display("configuration error")]
    Config,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ProviderRequestFailed(_) | Self::Download(_) | Self::Cache)
    }

    /// Whether the request itself was wrong, as opposed to a source failing.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::BookNotFound(_)
                | Self::ChapterOutOfRange { .. }
                | Self::VerseOutOfRange { .. }
                | Self::InvalidRange(_)
                | Self::ParseFailed(_)
        )
    }

    pub(crate) fn chapter_out_of_range(book: &str, chapter: u16) -> Self {
        Self::ChapterOutOfRange { book: book.to_string(), chapter, max: Max::default() }
    }

    pub(crate) fn verse_out_of_range(book: &str, chapter: u16, verse: u16) -> Self {
        Self::VerseOutOfRange { book: book.to_string(), chapter, verse, max: Max::default() }
    }

    /// Quotes the canon's chapter or verse count in an out-of-range message.
    pub(crate) fn with_max(self) -> Self {
        match self {
            Self::ChapterOutOfRange { book, chapter, .. } => {
                let max = Max(lectern_canon::chapter_count(&book));
                Self::ChapterOutOfRange { book, chapter, max }
            },
            Self::VerseOutOfRange { book, chapter, verse, .. } => {
                let max = Max(lectern_canon::verse_count(&book, chapter));
                Self::VerseOutOfRange { book, chapter, verse, max }
            },
            other => other,
        }
    }

    /// Convert a parse or validation error, preserving its `Exn` frame.
    #[track_caller]
    pub fn reference(err: ReferenceError) -> Error {
        let kind = match &*err {
            ReferenceErrorKind::BookNotFound(book) => Self::BookNotFound(book.clone()),
            ReferenceErrorKind::ChapterOutOfRange { book, chapter } => Self::chapter_out_of_range(book, *chapter),
            ReferenceErrorKind::VerseOutOfRange { book, chapter, verse } => {
                Self::verse_out_of_range(book, *chapter, *verse)
            },
            ReferenceErrorKind::Unparseable(text) => Self::ParseFailed(text.clone()),
            range => Self::InvalidRange(range.to_string()),
        };
        err.raise(kind)
    }

    /// Convert a provider error, preserving its `Exn` frame.
    #[track_caller]
    pub fn provider(err: ProviderError) -> Error {
        let kind = match &*err {
            ProviderErrorKind::Unavailable | ProviderErrorKind::UnknownProvider(_) | ProviderErrorKind::Client => {
                Self::ProviderUnavailable
            },
            ProviderErrorKind::RequestFailed(message) => Self::ProviderRequestFailed(message.clone()),
            invalid @ ProviderErrorKind::ResponseInvalid(_) => Self::ProviderResponseInvalid(invalid.to_string()),
            ProviderErrorKind::NoVerses => Self::NoVersesReturned,
        };
        err.raise(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ReferenceErrorKind::BookNotFound("Hezekiah".into()), ErrorKind::BookNotFound("Hezekiah".into()))]
    #[case(
        ReferenceErrorKind::ChapterOutOfRange { book: "Genesis".into(), chapter: 51 },
        ErrorKind::ChapterOutOfRange { book: "Genesis".into(), chapter: 51, max: Max(None) },
    )]
    #[case(
        ReferenceErrorKind::VerseOutOfRange { book: "John".into(), chapter: 3, verse: 37 },
        ErrorKind::VerseOutOfRange { book: "John".into(), chapter: 3, verse: 37, max: Max(None) },
    )]
    #[case(ReferenceErrorKind::RangeTooLarge(20), ErrorKind::InvalidRange("Verse range too large (max 20 verses)".into()))]
    #[case(ReferenceErrorKind::Unparseable("nonsense".into()), ErrorKind::ParseFailed("nonsense".into()))]
    fn test_reference_conversion(#[case] inner: ReferenceErrorKind, #[case] expected: ErrorKind) {
        let err = ErrorKind::reference(exn::Exn::from(inner));
        assert_eq!(*err, expected);
    }

    #[rstest]
    #[case(ProviderErrorKind::Unavailable, ErrorKind::ProviderUnavailable)]
    #[case(ProviderErrorKind::RequestFailed("status 500".into()), ErrorKind::ProviderRequestFailed("status 500".into()))]
    #[case(ProviderErrorKind::NoVerses, ErrorKind::NoVersesReturned)]
    fn test_provider_conversion(#[case] inner: ProviderErrorKind, #[case] expected: ErrorKind) {
        let err = ErrorKind::provider(exn::Exn::from(inner));
        assert_eq!(*err, expected);
    }

    #[test]
    fn test_messages() {
        assert_eq!(ErrorKind::chapter_out_of_range("Genesis", 51).to_string(), "Chapter 51 does not exist in Genesis");
        assert_eq!(
            ErrorKind::chapter_out_of_range("Genesis", 51).with_max().to_string(),
            "Chapter 51 does not exist in Genesis (max: 50)"
        );
        assert_eq!(ErrorKind::verse_out_of_range("Genesis", 1, 32).to_string(), "Verse 32 does not exist in Genesis 1");
        assert_eq!(
            ErrorKind::verse_out_of_range("Genesis", 1, 32).with_max().to_string(),
            "Verse 32 does not exist in Genesis 1 (max: 31)"
        );
        assert_eq!(ErrorKind::NoVersesReturned.with_max(), ErrorKind::NoVersesReturned);
        assert_eq!(ErrorKind::ParseFailed("x".into()).to_string(), PARSE_HINT);
        assert!(ErrorKind::ParseFailed("x".into()).is_validation());
        assert!(!ErrorKind::NoVersesReturned.is_validation());
    }
}
