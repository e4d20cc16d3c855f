use lectern_reference::VerseRecord;
use regex::Regex;
use scraper::{Html, Node};
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

// Strong's numbers (`<S>430</S>`) and footnote markers carry no verse text.
const DROPPED_ELEMENTS: [&str; 2] = ["s", "sup"];

/// Normalizes verse text returned by providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCleaner {
    /// Remove markup, keeping the text it wraps and decoding entities.
    pub strip_html: bool,
    /// Trim and collapse runs of whitespace into single spaces.
    pub trim_whitespace: bool,
}
impl Default for TextCleaner {
    fn default() -> Self {
        Self { strip_html: true, trim_whitespace: true }
    }
}
impl TextCleaner {
    /// # Examples
    ///
    /// ```
    /// use lectern_providers::TextCleaner;
    ///
    /// let cleaner = TextCleaner::default();
    /// assert_eq!(cleaner.clean("  In the <i>beginning</i>\n God&nbsp;created "), "In the beginning God created");
    /// ```
    pub fn clean(&self, text: &str) -> String {
        let text = match self.strip_html && (text.contains('<') || text.contains('&')) {
            true => strip_markup(text),
            false => text.to_string(),
        };
        match self.trim_whitespace {
            true => WHITESPACE.replace_all(text.trim(), " ").into_owned(),
            false => text,
        }
    }

    /// Cleans each verse, drops the ones left empty, and orders the rest by
    /// verse number without duplicates.
    pub fn tidy(&self, verses: Vec<VerseRecord>) -> Vec<VerseRecord> {
        let mut verses: Vec<VerseRecord> = verses
            .into_iter()
            .map(|verse| VerseRecord::new(verse.verse, self.clean(&verse.text)))
            .filter(|verse| !verse.text.is_empty())
            .collect();
        verses.sort_by_key(|verse| verse.verse);
        verses.dedup_by_key(|verse| verse.verse);
        verses
    }
}

fn strip_markup(text: &str) -> String {
    let fragment = Html::parse_fragment(text);
    let stripped = fragment
        .root_element()
        .descendants()
        .filter(|node| {
            !node.ancestors().any(|ancestor| {
                ancestor.value().as_element().is_some_and(|element| DROPPED_ELEMENTS.contains(&element.name()))
            })
        })
        .filter_map(|node| match node.value() {
            Node::Text(text) => Some(&**text),
            // Line breaks separate words.
            Node::Element(element) if element.name() == "br" => Some(" "),
            _ => None,
        })
        .collect();
    stripped
}
