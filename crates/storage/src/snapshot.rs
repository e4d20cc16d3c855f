//! Offline snapshot documents.
//!
//! Two JSON layouts are accepted:
//!
//! 1. An array of books in canonical order, each with a `chapters` array of
//!    arrays of verse text. `name` (when present and recognised) overrides the
//!    array position.
//!
//!    ```json
//!    [{"abbrev": "gn", "name": "Genesis", "chapters": [["In the beginning...", "..."]]}]
//!    ```
//!
//! 2. An object keyed by book name or alias, then by chapter number, holding
//!    either an array of verse text or an object keyed by verse number.
//!
//!    ```json
//!    {"John": {"3": {"16": "For God so loved...", "17": "..."}}}
//!    ```

use std::collections::{BTreeMap, HashMap};

use exn::ResultExt;
use lectern_canon::BookEntry;
use lectern_reference::VerseRecord;
use serde::Deserialize;

use crate::error::{ErrorKind, Result};

const BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Books(Vec<BookDocument>),
    Keyed(HashMap<String, HashMap<String, ChapterDocument>>),
}

#[derive(Deserialize)]
struct BookDocument {
    #[serde(default)]
    name: Option<String>,
    chapters: Vec<Vec<String>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ChapterDocument {
    List(Vec<String>),
    Map(HashMap<String, String>),
}
impl ChapterDocument {
    fn into_verses(self) -> BTreeMap<u16, String> {
        match self {
            Self::List(verses) => numbered(verses),
            Self::Map(verses) => verses
                .into_iter()
                .filter_map(|(verse, text)| Some((verse.trim().parse().ok()?, text)))
                .collect(),
        }
    }
}

fn numbered(verses: Vec<String>) -> BTreeMap<u16, String> {
    (1..=u16::MAX).zip(verses).collect()
}

/// Every verse of one translation, indexed by book ordinal and chapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    chapters: HashMap<(u8, u16), BTreeMap<u16, String>>,
}
impl Snapshot {
    /// Parses a snapshot document. A leading UTF-8 byte order mark is ignored
    /// and unrecognised books are skipped.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let bytes = bytes.strip_prefix(BOM).unwrap_or(bytes);
        let document: Document =
            serde_json::from_slice(bytes).or_raise(|| ErrorKind::InvalidSnapshot("unrecognised layout".to_string()))?;
        let mut snapshot = Self::default();
        match document {
            Document::Books(books) => {
                for (position, book) in books.into_iter().enumerate() {
                    let entry = book
                        .name
                        .as_deref()
                        .and_then(lectern_canon::find_book)
                        .or_else(|| u8::try_from(position + 1).ok().and_then(lectern_canon::by_ordinal));
                    let Some(entry) = entry else {
                        tracing::debug!(position, "skipping book beyond the canon");
                        continue;
                    };
                    for (chapter, verses) in (1..=u16::MAX).zip(book.chapters) {
                        snapshot.chapters.insert((entry.ordinal, chapter), numbered(verses));
                    }
                }
            },
            Document::Keyed(books) => {
                for (name, chapters) in books {
                    let Some(entry) = lectern_canon::find_book(&name) else {
                        tracing::debug!(book = %name, "skipping unknown book");
                        continue;
                    };
                    for (chapter, verses) in chapters {
                        let Ok(chapter) = chapter.trim().parse::<u16>() else {
                            continue;
                        };
                        snapshot.chapters.insert((entry.ordinal, chapter), verses.into_verses());
                    }
                }
            },
        }
        Ok(snapshot)
    }

    /// Number of chapters with text.
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Verses `start..=end` of a chapter, skipping any the snapshot lacks.
    pub fn verses(&self, book: &BookEntry, chapter: u16, start: u16, end: u16) -> Vec<VerseRecord> {
        let Some(verses) = self.chapters.get(&(book.ordinal, chapter)).filter(|_| start <= end) else {
            return Vec::new();
        };
        verses
            .range(start..=end)
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(verse, text)| VerseRecord::new(*verse, text.trim()))
            .collect()
    }
}
