use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// The four shapes a [`Reference`] can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Span {
    /// A single verse, e.g. `John 3:16`.
    Verse(u16),
    /// A verse range within one chapter, e.g. `John 3:16-17`.
    Verses { start: u16, end: u16 },
    /// A whole chapter, e.g. `Psalm 23`.
    Chapter,
    /// Consecutive whole chapters, e.g. `Psalm 46-47`.
    Chapters { end: u16 },
}

/// A structured pointer to scripture text.
///
/// `book` is kept as the caller wrote it (`"Psalm"`, `"1 Cor"`); resolving it
/// to a canonical entry is the validator's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    pub book: String,
    pub chapter: u16,
    #[serde(default)]
    pub end_chapter: Option<u16>,
    #[serde(default)]
    pub start_verse: Option<u16>,
    #[serde(default)]
    pub end_verse: Option<u16>,
    pub version: String,
}
impl Reference {
    /// A whole chapter.
    pub fn chapter(book: impl Into<String>, chapter: u16, version: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            chapter,
            end_chapter: None,
            start_verse: None,
            end_verse: None,
            version: version.into(),
        }
    }

    /// A single verse.
    pub fn verse(book: impl Into<String>, chapter: u16, verse: u16, version: impl Into<String>) -> Self {
        Self::chapter(book, chapter, version).with_verses(verse, None)
    }

    pub fn with_verses(mut self, start: u16, end: Option<u16>) -> Self {
        self.start_verse = Some(start);
        self.end_verse = end;
        self
    }

    pub fn with_end_chapter(mut self, end_chapter: u16) -> Self {
        self.end_chapter = Some(end_chapter);
        self
    }

    /// Classifies the reference.
    ///
    /// A greater `end_chapter` takes precedence over any verse fields, and a
    /// reference without a start verse is a whole chapter.
    pub fn span(&self) -> Span {
        if let Some(end) = self.end_chapter
            && end > self.chapter
        {
            return Span::Chapters { end };
        }
        match (self.start_verse, self.end_verse) {
            (None, _) => Span::Chapter,
            (Some(start), None) => Span::Verse(start),
            (Some(start), Some(end)) if end == start => Span::Verse(start),
            (Some(start), Some(end)) => Span::Verses { start, end },
        }
    }
}

/// Renders the human form without the version, e.g. `John 3:16-17`.
impl Display for Reference {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.span() {
            Span::Verse(verse) => write!(f, "{} {}:{}", self.book, self.chapter, verse),
            Span::Verses { start, end } => write!(f, "{} {}:{}-{}", self.book, self.chapter, start, end),
            Span::Chapter => write!(f, "{} {}", self.book, self.chapter),
            Span::Chapters { end } => write!(f, "{} {}-{}", self.book, self.chapter, end),
        }
    }
}
