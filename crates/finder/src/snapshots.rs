//! Offline snapshot and cache management.

use std::time::Duration;

use exn::ResultExt;
use serde::Serialize;
use tracing::instrument;

use crate::Finder;
use crate::error::{ErrorKind, Result};

/// Whole-translation downloads are large; allow them far longer than a verse
/// request.
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(300);

/// Offline availability of one offered version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotStatus {
    pub version: String,
    pub name: String,
    pub downloaded: bool,
    /// Snapshot size in bytes, when downloaded.
    pub size: Option<u64>,
    /// Whether a download source is configured.
    pub downloadable: bool,
}

impl Finder {
    fn download_source(&self, version: &str) -> Option<&str> {
        self.download_sources
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(version))
            .map(|(_, url)| url.as_str())
            .filter(|url| !url.trim().is_empty())
    }

    /// Downloads a version's snapshot from its configured source and installs
    /// it in the local store, returning the number of bytes stored.
    #[instrument(skip(self))]
    pub async fn download_snapshot(&self, version: &str) -> Result<u64> {
        let version = version.trim().to_uppercase();
        let Some(url) = self.download_source(&version) else {
            exn::bail!(ErrorKind::Download(format!("no download source configured for {version}")));
        };
        let Some(store) = &self.store else {
            exn::bail!(ErrorKind::Storage);
        };
        let client = match &self.http {
            Some(client) => client.clone(),
            None => lectern_providers::client(DOWNLOAD_TIMEOUT).or_raise(|| ErrorKind::Config)?,
        };
        tracing::info!(url, "downloading snapshot");
        let response = client
            .get(url)
            .send()
            .await
            .or_raise(|| ErrorKind::Download(format!("{version}: request failed")))?;
        let status = response.status();
        if !status.is_success() {
            exn::bail!(ErrorKind::Download(format!("{version} (HTTP {})", status.as_u16())));
        }
        let body = response
            .bytes()
            .await
            .or_raise(|| ErrorKind::Download(format!("{version}: body could not be read")))?;
        store.install(&version, &body).await.or_raise(|| ErrorKind::Storage)
    }

    /// Download state of every offered version, in picker order, followed by
    /// any other installed snapshots.
    pub async fn snapshot_status(&self) -> Result<Vec<SnapshotStatus>> {
        let mut statuses = Vec::with_capacity(self.versions.len());
        for version in &self.versions {
            statuses.push(self.status_of(&version.code, &version.name).await?);
        }
        let Some(store) = &self.store else {
            return Ok(statuses);
        };
        for code in store.installed().await.or_raise(|| ErrorKind::Storage)? {
            if !self.versions.iter().any(|version| version.code.eq_ignore_ascii_case(&code)) {
                statuses.push(self.status_of(&code, &code).await?);
            }
        }
        Ok(statuses)
    }

    async fn status_of(&self, code: &str, name: &str) -> Result<SnapshotStatus> {
        let installed = match &self.store {
            Some(store) => store.status(code).await.or_raise(|| ErrorKind::Storage)?,
            None => None,
        };
        Ok(SnapshotStatus {
            version: code.to_string(),
            name: name.to_string(),
            downloaded: installed.is_some(),
            size: installed.map(|file| file.size),
            downloadable: self.download_source(code).is_some(),
        })
    }

    /// Number of fresh passages in the cache, or `None` without a cache.
    pub async fn cached_passages(&self) -> Result<Option<u64>> {
        match &self.cache {
            Some(cache) => Ok(Some(cache.repo.count().await.or_raise(|| ErrorKind::Cache)?)),
            None => Ok(None),
        }
    }

    /// Removes every cached passage, returning how many were removed.
    #[instrument(skip(self))]
    pub async fn clear_cache(&self) -> Result<u64> {
        let Some(cache) = &self.cache else {
            return Ok(0);
        };
        let removed = cache.repo.flush().await.or_raise(|| ErrorKind::Cache)?;
        tracing::info!(removed, "cleared passage cache");
        Ok(removed)
    }

    /// Removes cached passages whose TTL has run out, returning how many were
    /// removed.
    #[instrument(skip(self))]
    pub async fn purge_expired_cache(&self) -> Result<u64> {
        let Some(cache) = &self.cache else {
            return Ok(0);
        };
        let removed = cache.repo.purge_expired().await.or_raise(|| ErrorKind::Cache)?;
        tracing::info!(removed, "purged expired passages");
        Ok(removed)
    }
}
