use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use crate::error::{Error, ErrorKind};

/// Which half of the canon a book belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Testament {
    /// (OT) Genesis through Malachi
    #[cfg_attr(feature = "serde", serde(rename = "ot"))]
    Old,
    /// (NT) Matthew through Revelation
    #[cfg_attr(feature = "serde", serde(rename = "nt"))]
    New,
}
impl Testament {
    /// Returns the short code used in listings (`ot`/`nt`).
    pub fn as_short_str(&self) -> &'static str {
        match self {
            Testament::Old => "ot",
            Testament::New => "nt",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Testament::Old => "Old Testament",
            Testament::New => "New Testament",
        }
    }
}
impl FromStr for Testament {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sanitized = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        Ok(match sanitized.as_str() {
            "ot" | "old" | "oldtestament" => Self::Old,
            "nt" | "new" | "newtestament" => Self::New,
            _ => exn::bail!(ErrorKind::UnknownTestament(s.to_string())),
        })
    }
}
impl Display for Testament {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// One book of the canon.
///
/// Entries only ever exist inside the static table, so everything is borrowed
/// for `'static` and the type is never constructed at runtime.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BookEntry {
    /// Full English title, e.g. `1 Corinthians`.
    pub name: &'static str,
    pub testament: Testament,
    /// Position in canonical order, `1..=66`.
    pub ordinal: u8,
    /// Three-character USFM book code, e.g. `1CO`.
    pub usfm: &'static str,
    /// Verse count of every chapter, in chapter order.
    pub chapters: &'static [u16],
    /// Common abbreviations and alternative titles.
    pub aliases: &'static [&'static str],
}
impl BookEntry {
    pub fn chapter_count(&self) -> u16 {
        // The longest book (Psalms) has 150 chapters.
        self.chapters.len() as u16
    }

    /// Number of verses in `chapter`, or `None` when the chapter doesn't exist.
    pub fn verse_count(&self, chapter: u16) -> Option<u16> {
        let index = usize::from(chapter).checked_sub(1)?;
        self.chapters.get(index).copied()
    }

    pub fn contains_chapter(&self, chapter: u16) -> bool {
        self.verse_count(chapter).is_some()
    }

    pub fn contains_verse(&self, chapter: u16, verse: u16) -> bool {
        self.verse_count(chapter).is_some_and(|count| (1..=count).contains(&verse))
    }
}
impl Display for BookEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ot", Testament::Old)]
    #[case("OT", Testament::Old)]
    #[case("Old Testament", Testament::Old)]
    #[case("old-testament", Testament::Old)]
    #[case("nt", Testament::New)]
    #[case("new", Testament::New)]
    #[case(" New Testament ", Testament::New)]
    fn test_testament_from_str(#[case] input: &str, #[case] expected: Testament) {
        assert_eq!(input.parse::<Testament>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_testament() {
        let err = "apocrypha".parse::<Testament>().unwrap_err();
        assert_eq!(*err, ErrorKind::UnknownTestament("apocrypha".to_string()));
    }

    #[test]
    fn test_verse_count_bounds() {
        let obadiah = crate::find_book("Obadiah").unwrap();
        assert_eq!(obadiah.chapter_count(), 1);
        assert_eq!(obadiah.verse_count(0), None);
        assert_eq!(obadiah.verse_count(1), Some(21));
        assert_eq!(obadiah.verse_count(2), None);
        assert!(obadiah.contains_verse(1, 21));
        assert!(!obadiah.contains_verse(1, 22));
        assert!(!obadiah.contains_verse(1, 0));
    }
}
