//! API.Bible: books by USFM code, one request per verse, keyed access.

use async_trait::async_trait;
use exn::{OptionExt, ResultExt};
use lectern_reference::VerseRecord;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{ErrorKind, Result};
use crate::{Endpoint, Provider, ProviderKind, VerseRequest};

const CONTENT_OPTIONS: &str = "content-type=text&include-notes=false&include-titles=false\
    &include-chapter-numbers=false&include-verse-numbers=false&include-verse-spans=false";

#[derive(Deserialize)]
struct VerseBody {
    data: Option<VerseData>,
}

#[derive(Deserialize)]
struct VerseData {
    content: Option<String>,
}

pub struct ScriptureApi {
    client: Client,
    endpoint: Endpoint,
}
impl ScriptureApi {
    pub fn new(client: Client, endpoint: Endpoint) -> Self {
        Self { client, endpoint }
    }

    /// API.Bible identifies translations by opaque bible ids; unmapped
    /// versions are assumed to already be one.
    fn bible_id<'a>(&'a self, version: &'a str) -> &'a str {
        self.endpoint.mapped_version(version).unwrap_or_else(|| version.trim())
    }

    fn verse_url(&self, bible_id: &str, request: &VerseRequest<'_>, verse: u16) -> String {
        format!(
            "{}/bibles/{}/verses/{}.{}.{}?{}",
            self.endpoint.base(),
            bible_id,
            request.book.usfm,
            request.chapter,
            verse,
            CONTENT_OPTIONS
        )
    }
}

fn parse_verse(body: &[u8]) -> Result<String> {
    let body: VerseBody =
        serde_json::from_slice(body).or_raise(|| ErrorKind::ResponseInvalid("expected a verse object".to_string()))?;
    body.data
        .and_then(|data| data.content)
        .ok_or_raise(|| ErrorKind::ResponseInvalid("missing `data.content`".to_string()))
}

#[async_trait]
impl Provider for ScriptureApi {
    fn kind(&self) -> ProviderKind {
        ProviderKind::ScriptureApi
    }

    /// Missing verses (404) are skipped. A rejected key fails immediately,
    /// since every other verse would be rejected too.
    #[instrument(level = "debug", skip_all, fields(book = request.book.name, chapter = request.chapter))]
    async fn fetch_verses(&self, request: &VerseRequest<'_>) -> Result<Vec<VerseRecord>> {
        let Some(key) = self.endpoint.key() else {
            exn::bail!(ErrorKind::RequestFailed("API key not configured".to_string()));
        };
        let bible_id = self.bible_id(request.version);
        let mut verses = Vec::new();
        for verse in request.verses() {
            let url = self.verse_url(bible_id, request, verse);
            let (status, body) = crate::http::fetch(self.client.get(&url).header("api-key", key), &url).await?;
            match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    exn::bail!(ErrorKind::RequestFailed(format!("API key rejected (status {})", status.as_u16())));
                },
                status if !status.is_success() => {
                    tracing::warn!(verse, status = status.as_u16(), "API.Bible refused verse");
                    continue;
                },
                _ => {},
            }
            let text = parse_verse(&body)?;
            if !text.trim().is_empty() {
                verses.push(VerseRecord::new(verse, text));
            }
        }
        if verses.is_empty() {
            exn::bail!(ErrorKind::NoVerses);
        }
        Ok(verses)
    }
}
