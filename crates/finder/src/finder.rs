use std::collections::BTreeMap;

use lectern_cache::{Fingerprint, Repository};
use lectern_canon::BookEntry;
use lectern_config::Version;
use lectern_providers::{ProviderChain, VerseRequest};
use lectern_reference::{Parser, Passage, Reference, Rules, Source, Span, VerseRecord};
use lectern_storage::LocalStore;
use reqwest::Client;
use time::OffsetDateTime;
use tracing::instrument;

use crate::FinderBuilder;
use crate::error::{ErrorKind, Result};

pub(crate) struct PassageCache {
    pub(crate) repo: Repository,
    pub(crate) ttl: time::Duration,
}

/// Resolves references against the cache, offline snapshots and remote
/// providers.
///
/// Cheap to share behind an `Arc`; every method takes `&self`.
pub struct Finder {
    pub(crate) parser: Parser,
    pub(crate) rules: Rules,
    pub(crate) include_verse_numbers: bool,
    pub(crate) cache: Option<PassageCache>,
    pub(crate) store: Option<LocalStore>,
    pub(crate) use_local_store: bool,
    pub(crate) chain: ProviderChain,
    pub(crate) versions: Vec<Version>,
    pub(crate) download_sources: BTreeMap<String, String>,
    pub(crate) http: Option<Client>,
}
impl Finder {
    pub fn builder() -> FinderBuilder {
        FinderBuilder::default()
    }

    /// Resolves a reference of any shape.
    ///
    /// Verse requests are validated before any source is touched. Cache and
    /// snapshot hits are returned as stored; provider results are cached
    /// before they're returned.
    #[instrument(skip(self, reference), fields(reference = %reference, version = %reference.version))]
    pub async fn fetch(&self, reference: &Reference) -> Result<Passage> {
        let version = self.normalize_version(&reference.version);
        match reference.span() {
            Span::Chapters { end } => self.fetch_chapters(&reference.book, reference.chapter, end, &version).await,
            Span::Chapter => self.fetch_chapter(&reference.book, reference.chapter, &version).await,
            Span::Verse(verse) => self.fetch_range(&reference.book, reference.chapter, verse, None, &version).await,
            Span::Verses { start, end } => {
                self.fetch_range(&reference.book, reference.chapter, start, Some(end), &version).await
            },
        }
    }

    /// Positional form of [`fetch`](Self::fetch).
    pub async fn fetch_verse(
        &self,
        book: &str,
        chapter: u16,
        start_verse: Option<u16>,
        end_verse: Option<u16>,
        version: &str,
        end_chapter: Option<u16>,
    ) -> Result<Passage> {
        let mut reference = Reference::chapter(book, chapter, version);
        if let Some(start) = start_verse {
            reference = reference.with_verses(start, end_verse);
        }
        if let Some(end) = end_chapter {
            reference = reference.with_end_chapter(end);
        }
        self.fetch(&reference).await
    }

    fn normalize_version(&self, version: &str) -> String {
        match version.trim() {
            "" => self.parser.default_version().to_string(),
            version => version.to_uppercase(),
        }
    }

    async fn fetch_chapters(&self, book: &str, start: u16, end: u16, version: &str) -> Result<Passage> {
        let Some(entry) = lectern_canon::find_book(book) else {
            exn::bail!(ErrorKind::BookNotFound(book.to_string()));
        };
        let mut texts = Vec::new();
        for chapter in start..=end {
            texts.push(self.fetch_chapter(entry.name, chapter, version).await?.text);
        }
        Ok(Passage {
            reference: format!("{} {}-{}", entry.name, start, end),
            book: entry.name.to_string(),
            chapter: start,
            end_chapter: Some(end),
            start_verse: None,
            end_verse: None,
            version: version.to_string(),
            text: texts.join("\n\n"),
            fetched_at: OffsetDateTime::now_utc(),
            source: Source::Combined,
        })
    }

    /// A whole chapter is the range `1..=verse_count`, subject to the same
    /// rules as any other range.
    async fn fetch_chapter(&self, book: &str, chapter: u16, version: &str) -> Result<Passage> {
        let Some(entry) = lectern_canon::find_book(book) else {
            exn::bail!(ErrorKind::BookNotFound(book.to_string()));
        };
        let Some(count) = entry.verse_count(chapter) else {
            exn::bail!(ErrorKind::chapter_out_of_range(book, chapter));
        };
        self.fetch_range(entry.name, chapter, 1, Some(count), version).await
    }

    async fn fetch_range(&self, book: &str, chapter: u16, start: u16, end: Option<u16>, version: &str) -> Result<Passage> {
        let entry = self.rules.validate(book, chapter, start, end).map_err(ErrorKind::reference)?;
        let end = end.unwrap_or(start);
        let fingerprint = Fingerprint::new(version, entry.name, chapter, start, end);

        if let Some(passage) = self.cached(&fingerprint).await {
            tracing::debug!(source = %passage.source, "cache hit");
            return Ok(passage);
        }
        if self.use_local_store
            && let Some(store) = &self.store
            && let Some(verses) = store.lookup(entry, chapter, start, end, version).await
        {
            let verses = self.chain.cleaner().tidy(verses);
            if !verses.is_empty() {
                tracing::debug!(verses = verses.len(), "local snapshot hit");
                return Ok(self.assemble(entry, chapter, start, end, version, &verses, Source::Local));
            }
        }

        let request = VerseRequest { book: entry, chapter, start_verse: start, end_verse: end, version };
        let (kind, verses) = self.chain.fetch(&request).await.map_err(ErrorKind::provider)?;
        let passage = self.assemble(entry, chapter, start, end, version, &verses, Source::Provider(kind.to_string()));
        self.remember(&fingerprint, &passage).await;
        Ok(passage)
    }

    /// Cache failures are misses.
    async fn cached(&self, fingerprint: &Fingerprint) -> Option<Passage> {
        let cache = self.cache.as_ref()?;
        match cache.repo.get(fingerprint).await {
            Ok(passage) => passage,
            Err(err) => {
                tracing::warn!(error = ?err, "cache lookup failed");
                None
            },
        }
    }

    async fn remember(&self, fingerprint: &Fingerprint, passage: &Passage) {
        let Some(cache) = &self.cache else {
            return;
        };
        if let Err(err) = cache.repo.put(fingerprint, passage, cache.ttl).await {
            tracing::error!(error = ?err, "failed to cache passage");
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        &self,
        entry: &BookEntry,
        chapter: u16,
        start: u16,
        end: u16,
        version: &str,
        verses: &[VerseRecord],
        source: Source,
    ) -> Passage {
        let text = verses
            .iter()
            .map(|verse| match self.include_verse_numbers {
                true => format!("{} {}", verse.verse, verse.text),
                false => verse.text.clone(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        let reference = match start == end {
            true => format!("{} {}:{}", entry.name, chapter, start),
            false => format!("{} {}:{}-{}", entry.name, chapter, start, end),
        };
        Passage {
            reference,
            book: entry.name.to_string(),
            chapter,
            end_chapter: None,
            start_verse: Some(start),
            end_verse: Some(end),
            version: version.to_string(),
            text,
            fetched_at: OffsetDateTime::now_utc(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lectern_cache::Database;
    use lectern_providers::error::ErrorKind as ProviderErrorKind;
    use lectern_providers::mock::ScriptedProvider;
    use lectern_providers::{Provider, ProviderKind, TextCleaner};
    use lectern_storage::backend::MockBackend;

    use super::*;
    use crate::error::Max;

    const KJV: &str = r#"{"John": {"3": {"16": "For God so loved the world", "17": "For God sent not"}}}"#;

    struct Fixture {
        bolls: Arc<ScriptedProvider>,
        bible_api: Arc<ScriptedProvider>,
    }
    impl Fixture {
        fn new(bolls: ScriptedProvider, bible_api: ScriptedProvider) -> Self {
            Self { bolls: Arc::new(bolls), bible_api: Arc::new(bible_api) }
        }

        fn echoing() -> Self {
            Self::new(ScriptedProvider::echoing(ProviderKind::Bolls), ScriptedProvider::echoing(ProviderKind::BibleApi))
        }

        fn builder(&self) -> FinderBuilder {
            let providers = [self.bolls.clone() as Arc<dyn Provider>, self.bible_api.clone() as Arc<dyn Provider>];
            Finder::builder().providers(ProviderChain::new(ProviderKind::Bolls, providers, TextCleaner::default()))
        }

        fn calls(&self) -> (usize, usize) {
            (self.bolls.calls(), self.bible_api.calls())
        }
    }

    async fn with_cache(builder: FinderBuilder) -> FinderBuilder {
        let db = Database::connect_in_memory().await.unwrap();
        builder.cache(Repository::from(&db), lectern_cache::DEFAULT_TTL)
    }

    #[tokio::test]
    async fn test_round_trip() {
        let fixture = Fixture::echoing();
        let finder = fixture.builder().build();
        let reference = finder.parse("John 3:16-17 NKJV").unwrap();
        let passage = finder.fetch(&reference).await.unwrap();
        assert_eq!(passage.reference, "John 3:16-17");
        assert_eq!(passage.text, "16 John 3:16 (NKJV) 17 John 3:17 (NKJV)");
        assert_eq!((passage.start_verse, passage.end_verse), (Some(16), Some(17)));
        assert_eq!(passage.source, Source::Provider("bolls".to_string()));
    }

    #[tokio::test]
    async fn test_canonical_book_and_version() {
        let finder = Fixture::echoing().builder().build();
        let passage = finder.fetch_verse("jn", 3, Some(16), None, "kjv", None).await.unwrap();
        assert_eq!(passage.reference, "John 3:16");
        assert_eq!(passage.book, "John");
        assert_eq!(passage.version, "KJV");
        assert!(!passage.is_range());
    }

    #[tokio::test]
    async fn test_second_fetch_is_served_from_cache() {
        let fixture = Fixture::echoing();
        let finder = with_cache(fixture.builder()).await.build();
        let reference = Reference::verse("John", 3, 16, "NKJV");
        let first = finder.fetch(&reference).await.unwrap();
        let second = finder.fetch(&reference).await.unwrap();
        assert_eq!(first.text, second.text);
        assert_eq!(second.source, Source::Provider("bolls".to_string()));
        assert_eq!(fixture.bolls.calls(), 1);
    }

    #[tokio::test]
    async fn test_without_cache_every_fetch_hits_a_provider() {
        let fixture = Fixture::echoing();
        let finder = fixture.builder().build();
        let reference = Reference::verse("John", 3, 16, "NKJV");
        finder.fetch(&reference).await.unwrap();
        finder.fetch(&reference).await.unwrap();
        assert_eq!(fixture.bolls.calls(), 2);
    }

    #[tokio::test]
    async fn test_fallback_names_the_provider_that_answered() {
        let fixture = Fixture::new(
            ScriptedProvider::failing(ProviderKind::Bolls, ProviderErrorKind::RequestFailed("timed out".into())),
            ScriptedProvider::echoing(ProviderKind::BibleApi),
        );
        let finder = fixture.builder().build();
        let passage = finder.fetch(&Reference::verse("John", 3, 16, "KJV")).await.unwrap();
        assert_eq!(passage.source, Source::Provider("bible-api".to_string()));
        assert_eq!(fixture.calls(), (1, 1));
    }

    #[tokio::test]
    async fn test_exhausted_providers_surface_the_last_failure() {
        let fixture = Fixture::new(
            ScriptedProvider::failing(ProviderKind::Bolls, ProviderErrorKind::NoVerses),
            ScriptedProvider::failing(ProviderKind::BibleApi, ProviderErrorKind::RequestFailed("status 503".into())),
        );
        let finder = fixture.builder().build();
        let err = finder.fetch(&Reference::verse("John", 3, 16, "KJV")).await.unwrap_err();
        assert_eq!(*err, ErrorKind::ProviderRequestFailed("status 503".into()));
    }

    #[tokio::test]
    async fn test_no_providers() {
        let finder = Finder::builder().build();
        let err = finder.fetch(&Reference::verse("John", 3, 16, "KJV")).await.unwrap_err();
        assert_eq!(*err, ErrorKind::ProviderUnavailable);
    }

    #[tokio::test]
    async fn test_range_limit() {
        let fixture = Fixture::echoing();
        let finder = fixture.builder().build();
        let reference = Reference::verse("John", 3, 1, "KJV").with_verses(1, Some(21));
        let err = finder.fetch(&reference).await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::InvalidRange(_)));
        assert_eq!(fixture.calls(), (0, 0));
    }

    #[tokio::test]
    async fn test_invalid_requests_touch_no_source() {
        let fixture = Fixture::echoing();
        let finder = with_cache(fixture.builder()).await.build();
        let err = finder.fetch(&Reference::verse("Hezekiah", 1, 1, "KJV")).await.unwrap_err();
        assert_eq!(*err, ErrorKind::BookNotFound("Hezekiah".into()));
        let err = finder.fetch(&Reference::verse("John", 3, 37, "KJV")).await.unwrap_err();
        assert_eq!((*err).to_string(), "Verse 37 does not exist in John 3");
        let err = finder.fetch(&Reference::verse("John", 3, 17, "KJV").with_verses(17, Some(16))).await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::InvalidRange(_)));
        assert_eq!(fixture.calls(), (0, 0));
    }

    #[tokio::test]
    async fn test_lenient_mode_skips_existence_checks() {
        let fixture = Fixture::echoing();
        let rules = Rules { strict: false, ..Rules::default() };
        let finder = fixture.builder().rules(rules).build();
        let passage = finder.fetch(&Reference::verse("John", 3, 40, "KJV")).await.unwrap();
        assert_eq!(passage.reference, "John 3:40");
        assert!(finder.fetch(&Reference::verse("Hezekiah", 1, 1, "KJV")).await.is_err());
    }

    #[tokio::test]
    async fn test_whole_chapter() {
        let finder = Fixture::echoing().builder().build();
        let passage = finder.fetch(&Reference::chapter("Psalm", 23, "KJV")).await.unwrap();
        assert_eq!(passage.reference, "Psalms 23:1-6");
        assert_eq!((passage.start_verse, passage.end_verse), (Some(1), Some(6)));
        assert!(passage.text.starts_with("1 Psalms 23:1 (KJV) 2 Psalms 23:2 (KJV)"));
    }

    #[tokio::test]
    async fn test_whole_chapter_respects_range_limit() {
        let fixture = Fixture::echoing();
        let finder = fixture.builder().build();
        let err = finder.fetch(&Reference::chapter("John", 3, "KJV")).await.unwrap_err();
        assert_eq!(*err, ErrorKind::InvalidRange("Verse range too large (max 20 verses)".into()));
        assert_eq!(fixture.calls(), (0, 0));

        let rules = Rules { max_verses_per_range: 36, ..Rules::default() };
        let finder = fixture.builder().rules(rules).build();
        let passage = finder.fetch(&Reference::chapter("John", 3, "KJV")).await.unwrap();
        assert_eq!(passage.reference, "John 3:1-36");
    }

    #[tokio::test]
    async fn test_lenient_mode_rejects_zero_and_huge_ranges() {
        let fixture = Fixture::echoing();
        let finder = fixture.builder().rules(Rules { strict: false, ..Rules::default() }).build();
        let err = finder.fetch_verse("John", 3, Some(0), Some(u16::MAX), "KJV", None).await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::VerseOutOfRange { verse: 0, .. }));
        let err = finder.fetch_verse("John", 3, Some(1), Some(u16::MAX), "KJV", None).await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::InvalidRange(_)));
        assert_eq!(fixture.calls(), (0, 0));
    }

    #[tokio::test]
    async fn test_whole_chapter_out_of_range() {
        let finder = Fixture::echoing().builder().build();
        let err = finder.fetch(&Reference::chapter("Jude", 2, "KJV")).await.unwrap_err();
        assert_eq!(*err, ErrorKind::ChapterOutOfRange { book: "Jude".into(), chapter: 2, max: Max(None) });
        assert_eq!((*err).to_string(), "Chapter 2 does not exist in Jude");
    }

    #[tokio::test]
    async fn test_chapter_range_is_combined() {
        let fixture = Fixture::echoing();
        let finder = fixture.builder().build();
        let passage = finder.fetch(&Reference::chapter("Psalm", 46, "KJV").with_end_chapter(47)).await.unwrap();
        assert_eq!(passage.reference, "Psalms 46-47");
        assert_eq!(passage.source, Source::Combined);
        assert_eq!((passage.chapter, passage.end_chapter), (46, Some(47)));
        assert_eq!((passage.start_verse, passage.end_verse), (None, None));
        let (first, second) = passage.text.split_once("\n\n").unwrap();
        assert!(first.ends_with("11 Psalms 46:11 (KJV)"));
        assert!(second.starts_with("1 Psalms 47:1 (KJV)"));
        assert_eq!(fixture.calls(), (2, 0));
    }

    #[tokio::test]
    async fn test_chapter_range_fails_fast() {
        let fixture = Fixture::echoing();
        let finder = fixture.builder().build();
        let err = finder.fetch(&Reference::chapter("2 John", 1, "KJV").with_end_chapter(3)).await.unwrap_err();
        assert_eq!(*err, ErrorKind::ChapterOutOfRange { book: "2 John".into(), chapter: 2, max: Max(None) });
        assert_eq!(fixture.calls(), (1, 0));
    }

    #[tokio::test]
    async fn test_local_snapshot_is_preferred_and_not_cached() {
        let fixture = Fixture::echoing();
        let store = LocalStore::new(Arc::new(MockBackend::with_files([("KJV.json", KJV)])));
        let finder = with_cache(fixture.builder()).await.local_store(store).build();
        let passage = finder.fetch(&Reference::verse("John", 3, 16, "KJV").with_verses(16, Some(17))).await.unwrap();
        assert_eq!(passage.source, Source::Local);
        assert_eq!(passage.text, "16 For God so loved the world 17 For God sent not");
        assert_eq!(fixture.calls(), (0, 0));
        assert_eq!(finder.cache.as_ref().unwrap().repo.count().await.unwrap(), 0);

        // Versions without a snapshot fall through to the providers.
        let passage = finder.fetch(&Reference::verse("John", 3, 16, "WEB")).await.unwrap();
        assert_eq!(passage.source, Source::Provider("bolls".to_string()));
    }

    #[tokio::test]
    async fn test_local_snapshot_text_is_cleaned_like_provider_text() {
        const MARKED_UP: &str = r#"{"John": {"3": {
            "16": "  For God <i>so</i> loved<S>25</S> the\n world ",
            "17": "For God sent not<sup>a</sup> his Son",
            "18": "<sup>b</sup>"
        }}}"#;
        let fixture = Fixture::echoing();
        let store = LocalStore::new(Arc::new(MockBackend::with_files([("KJV.json", MARKED_UP)])));
        let finder = fixture.builder().local_store(store).build();
        let passage = finder.fetch(&Reference::verse("John", 3, 16, "KJV").with_verses(16, Some(18))).await.unwrap();
        assert_eq!(passage.source, Source::Local);
        assert_eq!(passage.text, "16 For God so loved the world 17 For God sent not his Son");

        // Nothing usable left after cleaning counts as a miss.
        let passage = finder.fetch(&Reference::verse("John", 3, 18, "KJV")).await.unwrap();
        assert_eq!(passage.source, Source::Provider("bolls".to_string()));
        assert_eq!(fixture.calls(), (1, 0));
    }

    #[tokio::test]
    async fn test_local_snapshot_can_be_disabled() {
        let fixture = Fixture::echoing();
        let store = LocalStore::new(Arc::new(MockBackend::with_files([("KJV.json", KJV)])));
        let finder = fixture.builder().local_store(store).use_local_store(false).build();
        let passage = finder.fetch(&Reference::verse("John", 3, 16, "KJV")).await.unwrap();
        assert_eq!(passage.source, Source::Provider("bolls".to_string()));
    }

    #[tokio::test]
    async fn test_verse_numbers_can_be_omitted() {
        let finder = Fixture::echoing().builder().include_verse_numbers(false).build();
        let passage = finder.fetch_verse("John", 3, Some(16), Some(17), "KJV", None).await.unwrap();
        assert_eq!(passage.text, "John 3:16 (KJV) John 3:17 (KJV)");
    }

    #[tokio::test]
    async fn test_blank_version_uses_default() {
        let finder = Fixture::echoing().builder().default_version("WEB").build();
        let passage = finder.fetch_verse("John", 3, Some(16), None, " ", None).await.unwrap();
        assert_eq!(passage.version, "WEB");
    }
}
