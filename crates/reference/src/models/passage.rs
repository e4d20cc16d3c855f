use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

static LEADING_VERSE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+(?:-\d+)?\s+").unwrap());

/// One fetched verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    pub verse: u16,
    pub text: String,
}
impl VerseRecord {
    pub fn new(verse: u16, text: impl Into<String>) -> Self {
        Self { verse, text: text.into() }
    }
}

/// Where a [`Passage`] came from.
///
/// Serialized as a plain tag: `local`, `combined`, or the provider's name.
/// Passages served from the cache keep the tag they were stored with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Source {
    /// An offline JSON snapshot.
    Local,
    /// Stitched together from several chapter lookups.
    Combined,
    /// A remote provider, by name.
    Provider(String),
}
impl Source {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Local => "local",
            Self::Combined => "combined",
            Self::Provider(name) => name,
        }
    }
}
impl From<String> for Source {
    fn from(value: String) -> Self {
        match value.as_str() {
            "local" => Self::Local,
            "combined" => Self::Combined,
            _ => Self::Provider(value),
        }
    }
}
impl From<Source> for String {
    fn from(value: Source) -> Self {
        match value {
            Source::Provider(name) => name,
            other => other.as_str().to_string(),
        }
    }
}
impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Resolved text for a reference, with provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    /// Human form of the reference, e.g. `John 3:16-17`.
    pub reference: String,
    pub book: String,
    pub chapter: u16,
    pub end_chapter: Option<u16>,
    pub start_verse: Option<u16>,
    pub end_verse: Option<u16>,
    pub version: String,
    /// Verses joined by single spaces (chapters by a blank line).
    pub text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub fetched_at: OffsetDateTime,
    pub source: Source,
}
impl Passage {
    /// Whether the passage covers more than a single verse.
    pub fn is_range(&self) -> bool {
        self.start_verse != self.end_verse || self.end_chapter.is_some()
    }

    /// The text with its leading verse number (`16 ` or `16-17 `) removed.
    pub fn text_without_numbers(&self) -> &str {
        match LEADING_VERSE_NUMBER.find(&self.text) {
            Some(found) => &self.text[found.end()..],
            None => &self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn passage(text: &str) -> Passage {
        Passage {
            reference: "John 3:16".to_string(),
            book: "John".to_string(),
            chapter: 3,
            end_chapter: None,
            start_verse: Some(16),
            end_verse: Some(16),
            version: "KJV".to_string(),
            text: text.to_string(),
            fetched_at: datetime!(2024-01-02 03:04:05 UTC),
            source: Source::Provider("bolls".to_string()),
        }
    }

    #[test]
    fn test_source_tags() {
        assert_eq!(Source::from("local".to_string()), Source::Local);
        assert_eq!(Source::from("combined".to_string()), Source::Combined);
        assert_eq!(Source::from("bible-api".to_string()), Source::Provider("bible-api".to_string()));
        assert_eq!(String::from(Source::Combined), "combined");
    }

    #[test]
    fn test_text_without_numbers() {
        assert_eq!(passage("16 For God so loved").text_without_numbers(), "For God so loved");
        assert_eq!(passage("16-17 For God").text_without_numbers(), "For God");
        assert_eq!(passage("For God").text_without_numbers(), "For God");
    }

    #[test]
    fn test_is_range() {
        let mut single = passage("16 For God");
        assert!(!single.is_range());
        single.end_verse = Some(17);
        assert!(single.is_range());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(passage("16 For God")).unwrap();
        assert_eq!(json["source"], "bolls");
        assert_eq!(json["fetched_at"], "2024-01-02T03:04:05Z");
        assert_eq!(json["end_chapter"], serde_json::Value::Null);
        let back: Passage = serde_json::from_value(json).unwrap();
        assert_eq!(back, passage("16 For God"));
    }
}
