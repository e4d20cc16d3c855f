//! bible-api.com: books by name, one request per range.

use async_trait::async_trait;
use exn::{OptionExt, ResultExt};
use lectern_reference::VerseRecord;
use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{ErrorKind, Result};
use crate::{Endpoint, Provider, ProviderKind, VerseRequest};

#[derive(Deserialize)]
struct PassageBody {
    verses: Option<Vec<VerseBody>>,
}

#[derive(Deserialize)]
struct VerseBody {
    verse: u16,
    text: String,
}

pub struct BibleApi {
    client: Client,
    endpoint: Endpoint,
}
impl BibleApi {
    pub fn new(client: Client, endpoint: Endpoint) -> Self {
        Self { client, endpoint }
    }

    /// bible-api translation ids are lower case.
    fn translation(&self, version: &str) -> String {
        match self.endpoint.mapped_version(version) {
            Some(mapped) => mapped.to_string(),
            None => version.trim().to_lowercase(),
        }
    }

    fn passage_url(&self, request: &VerseRequest<'_>) -> String {
        let passage = match request.end_verse > request.start_verse {
            true => format!("{} {}:{}-{}", request.book.name, request.chapter, request.start_verse, request.end_verse),
            false => format!("{} {}:{}", request.book.name, request.chapter, request.start_verse),
        };
        format!("{}/{}?translation={}", self.endpoint.base(), passage, self.translation(request.version))
    }
}

fn parse_passage(body: &[u8]) -> Result<Vec<VerseRecord>> {
    let body: PassageBody =
        serde_json::from_slice(body).or_raise(|| ErrorKind::ResponseInvalid("expected a passage object".to_string()))?;
    let verses = body
        .verses
        .ok_or_raise(|| ErrorKind::ResponseInvalid("missing `verses`".to_string()))?;
    Ok(verses.into_iter().map(|verse| VerseRecord::new(verse.verse, verse.text)).collect())
}

#[async_trait]
impl Provider for BibleApi {
    fn kind(&self) -> ProviderKind {
        ProviderKind::BibleApi
    }

    #[instrument(level = "debug", skip_all, fields(book = request.book.name, chapter = request.chapter))]
    async fn fetch_verses(&self, request: &VerseRequest<'_>) -> Result<Vec<VerseRecord>> {
        let url = self.passage_url(request);
        let (status, body) = crate::http::fetch(self.client.get(&url), &url).await?;
        if !status.is_success() {
            exn::bail!(ErrorKind::RequestFailed(format!("API returned status {}", status.as_u16())));
        }
        let verses = parse_passage(&body)?;
        if verses.is_empty() {
            exn::bail!(ErrorKind::NoVerses);
        }
        Ok(verses)
    }
}
