use std::ops::RangeInclusive;

use lectern_canon::BookEntry;
use lectern_config::Version;
use lectern_providers::ProviderKind;
use lectern_reference::{Passage, Reference};
use tracing::instrument;

use crate::Finder;
use crate::error::{Error, ErrorKind, Result};

/// Outcome of [`Finder::fetch_multiple`].
#[derive(Debug, Default)]
pub struct Batch {
    /// Successful passages, in request order.
    pub passages: Vec<Passage>,
    pub errors: Vec<BatchError>,
}
impl Batch {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A failed item of a batch.
#[derive(Debug)]
pub struct BatchError {
    /// Position of the reference in the request.
    pub index: usize,
    pub error: Error,
}

impl Finder {
    /// Resolves each reference independently, one after another.
    #[instrument(skip_all, fields(count = references.len()))]
    pub async fn fetch_multiple(&self, references: &[Reference]) -> Batch {
        let mut batch = Batch::default();
        for (index, reference) in references.iter().enumerate() {
            match self.fetch(reference).await {
                Ok(passage) => batch.passages.push(passage),
                Err(error) => {
                    tracing::warn!(index, reference = %reference, error = ?error, "batch item failed");
                    batch.errors.push(BatchError { index, error });
                },
            }
        }
        batch
    }

    /// Parses free text into a reference, using the default version when the
    /// text doesn't name one.
    pub fn parse(&self, text: &str) -> Result<Reference> {
        self.parser.parse_reference(text).map_err(ErrorKind::reference)
    }

    /// Checks that a verse exists, returning the chapter's verse count.
    ///
    /// Out-of-range errors quote the largest valid chapter or verse.
    pub fn validate(&self, book: &str, chapter: u16, verse: u16) -> Result<u16> {
        let Some(entry) = lectern_canon::find_book(book) else {
            exn::bail!(ErrorKind::BookNotFound(book.to_string()));
        };
        let Some(count) = entry.verse_count(chapter) else {
            exn::bail!(ErrorKind::chapter_out_of_range(book, chapter).with_max());
        };
        if !entry.contains_verse(chapter, verse) {
            exn::bail!(ErrorKind::verse_out_of_range(book, chapter, verse).with_max());
        }
        Ok(count)
    }

    /// Chapter numbers of a book.
    pub fn chapters(&self, book: &str) -> Result<RangeInclusive<u16>> {
        match lectern_canon::chapter_count(book) {
            Some(count) => Ok(1..=count),
            None => exn::bail!(ErrorKind::BookNotFound(book.to_string())),
        }
    }

    /// Verse numbers of a chapter.
    pub fn verses_in(&self, book: &str, chapter: u16) -> Result<RangeInclusive<u16>> {
        if lectern_canon::find_book(book).is_none() {
            exn::bail!(ErrorKind::BookNotFound(book.to_string()));
        }
        match lectern_canon::verse_count(book, chapter) {
            Some(count) => Ok(1..=count),
            None => exn::bail!(ErrorKind::chapter_out_of_range(book, chapter)),
        }
    }

    /// Translations offered to users, in picker order.
    pub fn versions(&self) -> &[Version] {
        &self.versions
    }

    /// Every book in canonical order.
    pub fn books(&self) -> &'static [BookEntry] {
        lectern_canon::books()
    }

    pub fn default_version(&self) -> &str {
        self.parser.default_version()
    }

    /// Enabled providers in the order they're tried.
    pub fn providers(&self) -> Vec<ProviderKind> {
        self.chain.kinds()
    }
}
