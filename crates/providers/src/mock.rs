//! In-process providers with scripted answers, for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use lectern_reference::VerseRecord;

use crate::error::{ErrorKind, Result};
use crate::{Provider, ProviderKind, VerseRequest};

#[derive(Debug, Clone)]
enum Script {
    Verses(Vec<VerseRecord>),
    Echo,
    Fail(ErrorKind),
}

/// A [`Provider`] that answers every request the same way and counts how
/// often it was asked.
#[derive(Debug)]
pub struct ScriptedProvider {
    kind: ProviderKind,
    script: Script,
    calls: AtomicUsize,
}
impl ScriptedProvider {
    fn new(kind: ProviderKind, script: Script) -> Self {
        Self { kind, script, calls: AtomicUsize::new(0) }
    }

    /// Always returns `verses`, whatever was asked for.
    pub fn succeeding(kind: ProviderKind, verses: Vec<VerseRecord>) -> Self {
        Self::new(kind, Script::Verses(verses))
    }

    /// Returns one verse per requested number, with text like
    /// `"John 3:16 (KJV)"`.
    pub fn echoing(kind: ProviderKind) -> Self {
        Self::new(kind, Script::Echo)
    }

    pub fn failing(kind: ProviderKind, error: ErrorKind) -> Self {
        Self::new(kind, Script::Fail(error))
    }

    /// Number of `fetch_verses` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Provider for ScriptedProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn fetch_verses(&self, request: &VerseRequest<'_>) -> Result<Vec<VerseRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Verses(verses) => Ok(verses.clone()),
            Script::Echo => Ok(request
                .verses()
                .map(|verse| {
                    let text = format!("{} {}:{} ({})", request.book.name, request.chapter, verse, request.version);
                    VerseRecord::new(verse, text)
                })
                .collect()),
            Script::Fail(error) => exn::bail!(error.clone()),
        }
    }
}
