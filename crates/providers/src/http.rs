use std::time::Duration;

use exn::ResultExt;
use reqwest::Client;

use crate::error::{ErrorKind, Result};

/// Per-request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("lectern/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client shared by every provider.
///
/// A request that exceeds `timeout` fails like any other transport error,
/// which sends the chain on to the next provider.
pub fn client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .or_raise(|| ErrorKind::Client)
}

/// Sends a request, returning the status and the whole body.
///
/// Only transport failures are errors here; callers decide what a given
/// status means for their provider.
pub(crate) async fn fetch(request: reqwest::RequestBuilder, url: &str) -> Result<(reqwest::StatusCode, Vec<u8>)> {
    let response = request.send().await.or_raise(|| ErrorKind::RequestFailed(format!("GET {url}")))?;
    let status = response.status();
    let body = response.bytes().await.or_raise(|| ErrorKind::RequestFailed(format!("reading {url}")))?;
    Ok((status, body.to_vec()))
}
