//! Checks a verse request against the canon before anything is fetched.

use lectern_canon::BookEntry;

use crate::error::{ErrorKind, Result};

/// Largest verse range allowed by default.
pub const DEFAULT_MAX_VERSES_PER_RANGE: u16 = 20;

/// Validation rules for verse requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Check that chapters and verses exist, not just the book.
    pub strict: bool,
    /// Permit requests spanning more than one verse.
    pub allow_ranges: bool,
    /// Upper bound on `end - start + 1`.
    pub max_verses_per_range: u16,
}
impl Default for Rules {
    fn default() -> Self {
        Self {
            strict: true,
            allow_ranges: true,
            max_verses_per_range: DEFAULT_MAX_VERSES_PER_RANGE,
        }
    }
}
impl Rules {
    /// Validates a verse or verse range, returning the canonical book.
    ///
    /// Checks run in order and stop at the first failure: book, chapter,
    /// start verse, then (for ranges) ordering, end verse and range size.
    /// Lenient rules skip the existence checks but still refuse chapter or
    /// verse `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lectern_reference::Rules;
    /// use lectern_reference::error::ErrorKind;
    ///
    /// let rules = Rules::default();
    /// assert_eq!(rules.validate("jn", 3, 16, Some(17)).unwrap().name, "John");
    /// let err = rules.validate("John", 3, 1, Some(21)).unwrap_err();
    /// assert_eq!(*err, ErrorKind::RangeTooLarge(20));
    /// ```
    pub fn validate(&self, book: &str, chapter: u16, start: u16, end: Option<u16>) -> Result<&'static BookEntry> {
        let Some(entry) = lectern_canon::find_book(book) else {
            exn::bail!(ErrorKind::BookNotFound(book.to_string()));
        };
        if chapter == 0 || (self.strict && !entry.contains_chapter(chapter)) {
            exn::bail!(ErrorKind::ChapterOutOfRange { book: book.to_string(), chapter });
        }
        if start == 0 || (self.strict && !entry.contains_verse(chapter, start)) {
            exn::bail!(ErrorKind::VerseOutOfRange { book: book.to_string(), chapter, verse: start });
        }
        let Some(end) = end else {
            return Ok(entry);
        };
        if end < start {
            exn::bail!(ErrorKind::EndBeforeStart);
        }
        if self.strict && !entry.contains_verse(chapter, end) {
            exn::bail!(ErrorKind::VerseOutOfRange { book: book.to_string(), chapter, verse: end });
        }
        if end > start && !self.allow_ranges {
            exn::bail!(ErrorKind::RangesDisallowed);
        }
        if u32::from(end) - u32::from(start) + 1 > u32::from(self.max_verses_per_range) {
            exn::bail!(ErrorKind::RangeTooLarge(self.max_verses_per_range));
        }
        Ok(entry)
    }
}
