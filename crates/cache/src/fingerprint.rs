use std::fmt::{Display, Formatter, Result as FmtResult};

/// Deterministic cache key for a verse request.
///
/// Rendered as `bible_verse_{version}_{book_slug}_{chapter}_{start}_{end}`,
/// where the slug is the lowercased book name with spaces replaced by
/// underscores. Callers should pass the canonical book name so that aliases
/// ("Jn", "john") share one entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);
impl Fingerprint {
    pub fn new(version: &str, book: &str, chapter: u16, start: u16, end: u16) -> Self {
        let slug = book.to_lowercase().replace(' ', "_");
        Self(format!("bible_verse_{version}_{slug}_{chapter}_{start}_{end}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl Display for Fingerprint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}
impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
