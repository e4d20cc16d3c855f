use std::sync::Arc;

use lectern_reference::VerseRecord;
use reqwest::Client;
use tracing::instrument;

use crate::error::{ErrorKind, Result};
use crate::{BibleApi, Bolls, Endpoint, Provider, ProviderKind, ScriptureApi, TextCleaner, VerseRequest};

/// Ordered fallback across providers.
///
/// The primary is tried first, then every other provider in declared order
/// ([`ProviderKind::ALL`]). The first success wins; nothing is retried, and if
/// every provider fails the last failure is returned.
pub struct ProviderChain {
    providers: Vec<Arc<dyn Provider>>,
    cleaner: TextCleaner,
}
impl ProviderChain {
    /// Orders `providers` with `primary` first. A primary that isn't among
    /// them is ignored and the rest keep declared order.
    pub fn new(
        primary: ProviderKind,
        providers: impl IntoIterator<Item = Arc<dyn Provider>>,
        cleaner: TextCleaner,
    ) -> Self {
        let mut providers: Vec<Arc<dyn Provider>> = providers.into_iter().collect();
        providers.sort_by_key(|provider| (provider.kind() != primary, provider.kind()));
        Self { providers, cleaner }
    }

    /// Builds the HTTP providers for every enabled endpoint.
    ///
    /// API.Bible is left out unless it has an API key.
    pub fn from_endpoints(
        primary: ProviderKind,
        endpoints: impl IntoIterator<Item = (ProviderKind, Endpoint)>,
        client: &Client,
        cleaner: TextCleaner,
    ) -> Self {
        let providers = endpoints.into_iter().filter_map(|(kind, endpoint)| {
            if !endpoint.enabled {
                return None;
            }
            let provider: Arc<dyn Provider> = match kind {
                ProviderKind::Bolls => Arc::new(Bolls::new(client.clone(), endpoint)),
                ProviderKind::BibleApi => Arc::new(BibleApi::new(client.clone(), endpoint)),
                ProviderKind::ScriptureApi if endpoint.key().is_none() => {
                    tracing::debug!("API.Bible enabled without an API key; skipping");
                    return None;
                },
                ProviderKind::ScriptureApi => Arc::new(ScriptureApi::new(client.clone(), endpoint)),
            };
            Some(provider)
        });
        Self::new(primary, providers, cleaner)
    }

    /// Providers in the order they'll be tried.
    pub fn kinds(&self) -> Vec<ProviderKind> {
        self.providers.iter().map(|provider| provider.kind()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Cleaner applied to every provider's verses.
    pub fn cleaner(&self) -> &TextCleaner {
        &self.cleaner
    }

    /// Fetches verses from the first provider that can supply them.
    ///
    /// Returned verses are cleaned, sorted by verse number and de-duplicated.
    #[instrument(skip_all, fields(
        book = request.book.name,
        chapter = request.chapter,
        start = request.start_verse,
        end = request.end_verse,
        version = request.version,
    ))]
    pub async fn fetch(&self, request: &VerseRequest<'_>) -> Result<(ProviderKind, Vec<VerseRecord>)> {
        let mut last_error = None;
        for (attempt, provider) in self.providers.iter().enumerate() {
            let kind = provider.kind();
            let result = match provider.fetch_verses(request).await {
                Ok(verses) => match self.cleaner.tidy(verses) {
                    verses if verses.is_empty() => Err(exn::Exn::from(ErrorKind::NoVerses)),
                    verses => Ok(verses),
                },
                Err(err) => Err(err),
            };
            match result {
                Ok(verses) => {
                    tracing::info!(provider = %kind, verses = verses.len(), "fetched verses");
                    return Ok((kind, verses));
                },
                Err(err) if attempt == 0 => {
                    tracing::warn!(provider = %kind, error = ?err, "primary provider failed, trying fallbacks");
                    last_error = Some(err);
                },
                Err(err) => {
                    tracing::warn!(provider = %kind, error = ?err, "fallback provider failed");
                    last_error = Some(err);
                },
            }
        }
        match last_error {
            Some(err) => Err(err),
            None => exn::bail!(ErrorKind::Unavailable),
        }
    }
}
