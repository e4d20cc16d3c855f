//! Canonical metadata for the 66 books of the Protestant canon.
//!
//! The table is immutable, process-wide data: a flat array in canonical order
//! (indexed by `ordinal - 1`) plus a name/alias index that is built once on
//! first use. Every lookup function here is pure.
//!
//! # Examples
//!
//! ```
//! let john = lectern_canon::find_book("jn").unwrap();
//! assert_eq!(john.name, "John");
//! assert_eq!(lectern_canon::verse_count("John", 3), Some(36));
//! assert!(lectern_canon::validate_verse("John", 3, 16));
//! assert!(!lectern_canon::validate_verse("John", 3, 37));
//! ```

mod book;
mod data;
pub mod error;

use std::collections::HashMap;
use std::sync::LazyLock;

pub use crate::book::{BookEntry, Testament};
use crate::data::BOOKS;

struct Index {
    exact: HashMap<&'static str, usize>,
    names: HashMap<String, usize>,
    aliases: HashMap<String, usize>,
}

static INDEX: LazyLock<Index> = LazyLock::new(|| {
    let mut index = Index {
        exact: HashMap::with_capacity(BOOKS.len()),
        names: HashMap::with_capacity(BOOKS.len()),
        aliases: HashMap::new(),
    };
    for (position, book) in BOOKS.iter().enumerate() {
        index.exact.insert(book.name, position);
        index.names.insert(book.name.to_lowercase(), position);
        for alias in book.aliases {
            // Earlier books win if two ever share an abbreviation.
            index.aliases.entry(alias.to_lowercase()).or_insert(position);
        }
    }
    index
});

/// All books in canonical order.
pub fn books() -> &'static [BookEntry] {
    &BOOKS
}

/// Book at canonical position `ordinal` (`1..=66`).
pub fn by_ordinal(ordinal: u8) -> Option<&'static BookEntry> {
    BOOKS.get(usize::from(ordinal).checked_sub(1)?)
}

/// Finds a book by name or abbreviation.
///
/// Tries, in order: an exact title match, a case-insensitive title match, then
/// a case-insensitive alias match. Surrounding whitespace is ignored.
pub fn find_book(name: &str) -> Option<&'static BookEntry> {
    let name = name.trim();
    if let Some(position) = INDEX.exact.get(name) {
        return Some(&BOOKS[*position]);
    }
    let lowered = name.to_lowercase();
    INDEX
        .names
        .get(&lowered)
        .or_else(|| INDEX.aliases.get(&lowered))
        .map(|position| &BOOKS[*position])
}

pub fn chapter_count(book: &str) -> Option<u16> {
    find_book(book).map(BookEntry::chapter_count)
}

pub fn verse_count(book: &str, chapter: u16) -> Option<u16> {
    find_book(book)?.verse_count(chapter)
}

/// `true` if the book exists and `1 <= chapter <= chapter_count`.
pub fn validate_chapter(book: &str, chapter: u16) -> bool {
    find_book(book).is_some_and(|entry| entry.contains_chapter(chapter))
}

/// `true` if the chapter is valid and `1 <= verse <= verse_count`.
pub fn validate_verse(book: &str, chapter: u16, verse: u16) -> bool {
    find_book(book).is_some_and(|entry| entry.contains_verse(chapter, verse))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_table_shape() {
        assert_eq!(books().len(), 66);
        let ordinals: Vec<u8> = books().iter().map(|book| book.ordinal).collect();
        assert_eq!(ordinals, (1..=66).collect::<Vec<u8>>());
        assert_eq!(books().iter().filter(|book| book.testament == Testament::Old).count(), 39);
        assert_eq!(books().iter().filter(|book| book.testament == Testament::New).count(), 27);
        // Old Testament strictly precedes the New.
        assert!(books()[..39].iter().all(|book| book.testament == Testament::Old));
    }

    #[test]
    fn test_chapter_counts_match_sequences() {
        for book in books() {
            assert_eq!(usize::from(chapter_count(book.name).unwrap()), book.chapters.len(), "{}", book.name);
            assert!(book.chapters.iter().all(|count| *count >= 1), "{}", book.name);
            assert_eq!(book.usfm.len(), 3, "{}", book.name);
        }
    }

    #[rstest]
    #[case("Genesis", "Genesis")]
    #[case("genesis", "Genesis")]
    #[case("GENESIS", "Genesis")]
    #[case("gen", "Genesis")]
    #[case("  Gen  ", "Genesis")]
    #[case("1 Samuel", "1 Samuel")]
    #[case("1sam", "1 Samuel")]
    #[case("Psalms", "Psalms")]
    #[case("Psalm", "Psalms")]
    #[case("Ps", "Psalms")]
    #[case("Song of Songs", "Song of Solomon")]
    #[case("The Revelation", "Revelation")]
    fn test_find_book(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(find_book(input).map(|book| book.name), Some(expected));
    }

    #[rstest]
    #[case("NotABook")]
    #[case("")]
    #[case("4 John")]
    fn test_find_book_unknown(#[case] input: &str) {
        assert!(find_book(input).is_none());
    }

    #[test]
    fn test_by_ordinal() {
        assert_eq!(by_ordinal(1).map(|book| book.name), Some("Genesis"));
        assert_eq!(by_ordinal(43).map(|book| book.name), Some("John"));
        assert_eq!(by_ordinal(66).map(|book| book.name), Some("Revelation"));
        assert!(by_ordinal(0).is_none());
        assert!(by_ordinal(67).is_none());
    }

    #[rstest]
    #[case("Genesis", Some(50))]
    #[case("Psalms", Some(150))]
    #[case("Obadiah", Some(1))]
    #[case("Revelation", Some(22))]
    #[case("NotABook", None)]
    fn test_chapter_count(#[case] book: &str, #[case] expected: Option<u16>) {
        assert_eq!(chapter_count(book), expected);
    }

    #[rstest]
    #[case("Genesis", 1, Some(31))]
    #[case("Psalms", 23, Some(6))]
    #[case("Psalms", 119, Some(176))]
    #[case("Genesis", 100, None)]
    #[case("Genesis", 0, None)]
    #[case("NotABook", 1, None)]
    fn test_verse_count(#[case] book: &str, #[case] chapter: u16, #[case] expected: Option<u16>) {
        assert_eq!(verse_count(book, chapter), expected);
    }

    #[test]
    fn test_validate_chapter() {
        assert!(validate_chapter("Genesis", 1));
        assert!(validate_chapter("Genesis", 50));
        assert!(!validate_chapter("Genesis", 0));
        assert!(!validate_chapter("Genesis", 51));
        assert!(!validate_chapter("NotABook", 1));
    }

    #[test]
    fn test_validate_verse_boundaries() {
        for book in books() {
            for (index, count) in book.chapters.iter().enumerate() {
                let chapter = index as u16 + 1;
                assert!(!validate_verse(book.name, chapter, 0));
                assert!(validate_verse(book.name, chapter, 1));
                assert!(validate_verse(book.name, chapter, *count));
                assert!(!validate_verse(book.name, chapter, count + 1));
            }
        }
        assert!(validate_verse("John", 3, 16));
        assert!(!validate_verse("Psalms", 23, 7));
        assert!(!validate_verse("NotABook", 1, 1));
    }
}
