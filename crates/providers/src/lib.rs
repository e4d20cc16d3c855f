//! Remote scripture providers.
//!
//! Each [`Provider`] turns a [`VerseRequest`] into raw [`VerseRecord`]s from
//! one HTTP API. A [`ProviderChain`] tries them in order (primary first) and
//! returns the first success, cleaned and sorted.

mod bible_api;
mod bolls;
mod chain;
mod clean;
pub mod error;
mod http;
mod kind;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
mod scripture_api;

use async_trait::async_trait;
use lectern_canon::BookEntry;
use lectern_reference::VerseRecord;

pub use crate::bible_api::BibleApi;
pub use crate::bolls::Bolls;
pub use crate::chain::ProviderChain;
pub use crate::clean::TextCleaner;
pub use crate::http::{DEFAULT_TIMEOUT, client};
pub use crate::kind::{Endpoint, ProviderKind};
pub use crate::scripture_api::ScriptureApi;
use crate::error::Result;

/// A contiguous run of verses within one chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseRequest<'a> {
    pub book: &'static BookEntry,
    pub chapter: u16,
    pub start_verse: u16,
    pub end_verse: u16,
    /// Canonical version code, e.g. `NKJV`.
    pub version: &'a str,
}
impl VerseRequest<'_> {
    pub fn verses(&self) -> std::ops::RangeInclusive<u16> {
        self.start_verse..=self.end_verse
    }
}

/// One remote source of verse text.
///
/// Implementations return text as the provider sent it; cleaning happens
/// once, in [`ProviderChain`].
#[async_trait]
pub trait Provider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    async fn fetch_verses(&self, request: &VerseRequest<'_>) -> Result<Vec<VerseRecord>>;
}
