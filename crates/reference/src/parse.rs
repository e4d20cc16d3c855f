//! Free-text reference parsing.
//!
//! Understands the English forms people paste into a form field:
//!
//! - `John 3:16`, `John 3:16-17`, `John 3:16-17 NKJV`
//! - `Psalm 46-47`, `Psalm 46-47 KJV`
//! - `Psalm 23`, `Psalm 23 ESV`

use regex::Captures;
use tracing::instrument;

use crate::consts;
use crate::error::{ErrorKind, Result};
use crate::models::Reference;

/// Version assumed when a reference doesn't name one.
pub const DEFAULT_VERSION: &str = "NKJV";

/// Turns reference strings into [`Reference`]s.
///
/// # Examples
///
/// ```
/// use lectern_reference::Parser;
///
/// let parser = Parser::new("KJV");
/// let reference = parser.parse("1 Corinthians 13:4-7").unwrap();
/// assert_eq!(reference.book, "1 Corinthians");
/// assert_eq!(reference.start_verse, Some(4));
/// assert_eq!(reference.end_verse, Some(7));
/// assert_eq!(reference.version, "KJV");
///
/// assert!(parser.parse("Not a valid reference").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parser {
    default_version: String,
}
impl Default for Parser {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION)
    }
}
impl Parser {
    pub fn new(default_version: impl Into<String>) -> Self {
        Self { default_version: default_version.into() }
    }

    pub fn default_version(&self) -> &str {
        &self.default_version
    }

    /// Parses a reference, returning `None` when no pattern matches or the
    /// book is unknown.
    ///
    /// Patterns are tried most specific first (verse, chapter range, single
    /// chapter). The first pattern that matches decides the result; an
    /// unknown book is not retried against the looser patterns.
    #[instrument(level = "debug", skip(self))]
    pub fn parse(&self, text: &str) -> Option<Reference> {
        let text = text.trim();
        if let Some(captures) = consts::VERSE_REGEX.captures(text) {
            let reference = self.base(&captures, 5)?;
            let start = number(&captures, 3)?;
            let end = match captures.get(4) {
                Some(found) => Some(found.as_str().parse().ok()?),
                None => None,
            };
            return Some(reference.with_verses(start, end));
        }
        if let Some(captures) = consts::CHAPTER_RANGE_REGEX.captures(text) {
            let reference = self.base(&captures, 4)?;
            return Some(reference.with_end_chapter(number(&captures, 3)?));
        }
        if let Some(captures) = consts::CHAPTER_REGEX.captures(text) {
            return self.base(&captures, 3);
        }
        tracing::debug!("no reference pattern matched");
        None
    }

    /// Like [`parse`](Self::parse), but raises [`ErrorKind::Unparseable`].
    pub fn parse_reference(&self, text: &str) -> Result<Reference> {
        match self.parse(text) {
            Some(reference) => Ok(reference),
            None => exn::bail!(ErrorKind::Unparseable(text.trim().to_string())),
        }
    }

    /// Book, chapter and version are in the same place for every pattern,
    /// except for the version's group index.
    fn base(&self, captures: &Captures<'_>, version_group: usize) -> Option<Reference> {
        let book = captures.get(1)?.as_str().trim();
        if lectern_canon::find_book(book).is_none() {
            tracing::debug!(book, "reference names an unknown book");
            return None;
        }
        let version = captures
            .get(version_group)
            .map(|found| found.as_str().to_uppercase())
            .unwrap_or_else(|| self.default_version.clone());
        Some(Reference::chapter(book, number(captures, 2)?, version))
    }
}

fn number(captures: &Captures<'_>, group: usize) -> Option<u16> {
    captures.get(group)?.as_str().parse().ok()
}
