//! bolls.life: books by ordinal, one request per verse.

use async_trait::async_trait;
use exn::ResultExt;
use lectern_canon::BookEntry;
use lectern_reference::VerseRecord;
use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{ErrorKind, Result};
use crate::{Endpoint, Provider, ProviderKind, VerseRequest};

#[derive(Deserialize)]
struct VerseBody {
    text: Option<String>,
}

pub struct Bolls {
    client: Client,
    endpoint: Endpoint,
}
impl Bolls {
    pub fn new(client: Client, endpoint: Endpoint) -> Self {
        Self { client, endpoint }
    }

    /// Bolls codes are upper case; unmapped versions are passed through.
    fn version(&self, version: &str) -> String {
        match self.endpoint.mapped_version(version) {
            Some(mapped) => mapped.to_string(),
            None => version.trim().to_uppercase(),
        }
    }

    fn verse_url(&self, version: &str, book: &BookEntry, chapter: u16, verse: u16) -> String {
        format!("{}/get-verse/{}/{}/{}/{}/", self.endpoint.base(), version, book.ordinal, chapter, verse)
    }
}

/// A verse body is `{"text": "..."}`; anything else without text is a gap.
fn parse_verse(body: &[u8]) -> Result<Option<String>> {
    let body: VerseBody =
        serde_json::from_slice(body).or_raise(|| ErrorKind::ResponseInvalid("expected a verse object".to_string()))?;
    Ok(body.text.filter(|text| !text.trim().is_empty()))
}

#[async_trait]
impl Provider for Bolls {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Bolls
    }

    /// Verses the provider refuses (non-success status) are skipped; a
    /// transport failure abandons the whole request.
    #[instrument(level = "debug", skip_all, fields(book = request.book.name, chapter = request.chapter))]
    async fn fetch_verses(&self, request: &VerseRequest<'_>) -> Result<Vec<VerseRecord>> {
        let version = self.version(request.version);
        let mut verses = Vec::new();
        for verse in request.verses() {
            let url = self.verse_url(&version, request.book, request.chapter, verse);
            let (status, body) = crate::http::fetch(self.client.get(&url), &url).await?;
            if !status.is_success() {
                tracing::warn!(verse, status = status.as_u16(), "bolls refused verse");
                continue;
            }
            if let Some(text) = parse_verse(&body)? {
                verses.push(VerseRecord::new(verse, text));
            }
        }
        if verses.is_empty() {
            exn::bail!(ErrorKind::NoVerses);
        }
        Ok(verses)
    }
}
