use std::path::PathBuf;
use std::sync::Arc;

use lectern_canon::BookEntry;
use lectern_reference::VerseRecord;
use tokio::sync::Mutex;
use tracing::instrument;

use crate::error::{ErrorKind, Result};
use crate::{BackendHandle, FileInfo, Snapshot};

struct Loaded {
    version: String,
    snapshot: Arc<Snapshot>,
}

/// Answers verse lookups from snapshot files named `{VERSION}.json`.
///
/// One snapshot is held in memory at a time: asking for another version
/// evicts the current one. Lookups never fail; a missing, unreadable or
/// malformed snapshot is logged and reported as a miss so callers can fall
/// through to a provider.
pub struct LocalStore {
    backend: BackendHandle,
    loaded: Mutex<Option<Loaded>>,
}
impl LocalStore {
    pub fn new(backend: BackendHandle) -> Self {
        Self { backend, loaded: Mutex::new(None) }
    }

    pub fn backend(&self) -> &BackendHandle {
        &self.backend
    }

    /// Snapshot file name for a version code.
    pub fn path_for(version: &str) -> PathBuf {
        PathBuf::from(format!("{}.json", version.trim().to_uppercase()))
    }

    /// Verses `start..=end` of a chapter, or `None` when the snapshot can't
    /// supply any of them.
    #[instrument(level = "debug", skip(self, book), fields(book = book.name))]
    pub async fn lookup(
        &self,
        book: &BookEntry,
        chapter: u16,
        start: u16,
        end: u16,
        version: &str,
    ) -> Option<Vec<VerseRecord>> {
        let snapshot = match self.snapshot(version).await {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                tracing::debug!("no local snapshot");
                return None;
            },
            Err(err) => {
                tracing::warn!(error = ?err, "local snapshot unusable");
                return None;
            },
        };
        let verses = snapshot.verses(book, chapter, start, end);
        if verses.is_empty() {
            tracing::debug!("local snapshot lacks the requested verses");
            return None;
        }
        Some(verses)
    }

    /// Loads a version's snapshot, reusing the in-memory copy when it's the
    /// one already held. `Ok(None)` when no snapshot file exists.
    pub async fn snapshot(&self, version: &str) -> Result<Option<Arc<Snapshot>>> {
        let version = version.trim().to_uppercase();
        let mut slot = self.loaded.lock().await;
        if let Some(loaded) = slot.as_ref()
            && loaded.version == version
        {
            return Ok(Some(Arc::clone(&loaded.snapshot)));
        }
        let path = Self::path_for(&version);
        if !self.backend.exists(&path).await? {
            return Ok(None);
        }
        let bytes = self.backend.read(&path).await?;
        let snapshot = Arc::new(Snapshot::from_json(&bytes)?);
        tracing::debug!(version = %version, chapters = snapshot.chapter_count(), "loaded local snapshot");
        *slot = Some(Loaded { version, snapshot: Arc::clone(&snapshot) });
        Ok(Some(snapshot))
    }

    /// Stores a snapshot document after checking that it parses and contains
    /// at least one recognised book. Returns the number of bytes written.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn install(&self, version: &str, bytes: &[u8]) -> Result<u64> {
        if Snapshot::from_json(bytes)?.is_empty() {
            exn::bail!(ErrorKind::InvalidSnapshot("no recognised books".to_string()));
        }
        self.backend.write(&Self::path_for(version), bytes).await?;
        let version = version.trim().to_uppercase();
        let mut slot = self.loaded.lock().await;
        if slot.as_ref().is_some_and(|loaded| loaded.version == version) {
            *slot = None;
        }
        tracing::info!(version = %version, backend = self.backend.name(), "installed local snapshot");
        Ok(bytes.len() as u64)
    }

    /// File metadata for a version's snapshot, if one is installed.
    pub async fn status(&self, version: &str) -> Result<Option<FileInfo>> {
        let path = Self::path_for(version);
        if !self.backend.exists(&path).await? {
            return Ok(None);
        }
        Ok(Some(self.backend.stat(&path).await?))
    }

    /// Version codes of every installed snapshot, sorted.
    pub async fn installed(&self) -> Result<Vec<String>> {
        let mut versions: Vec<String> = self
            .backend
            .list()
            .await?
            .into_iter()
            .filter(|file| file.path.extension().is_some_and(|extension| extension == "json"))
            .filter_map(|file| Some(file.path.file_stem()?.to_str()?.to_uppercase()))
            .collect();
        versions.sort();
        Ok(versions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{LocalBackend, MockBackend, StorageBackend};
    use std::path::Path;

    const KJV: &str = r#"{"John": {"3": {"16": "For God so loved the world", "17": "For God sent not"}}}"#;
    const WEB: &str = r#"{"John": {"3": {"16": "For God so loved the world, that he gave"}}}"#;

    fn john() -> &'static BookEntry {
        lectern_canon::find_book("John").unwrap()
    }

    fn store(files: impl IntoIterator<Item = (&'static str, &'static str)>) -> (Arc<MockBackend>, LocalStore) {
        let backend = Arc::new(MockBackend::with_files(files));
        let store = LocalStore::new(backend.clone());
        (backend, store)
    }

    #[test]
    fn test_path_for() {
        assert_eq!(LocalStore::path_for("kjv"), PathBuf::from("KJV.json"));
        assert_eq!(LocalStore::path_for(" WEB "), PathBuf::from("WEB.json"));
    }

    #[tokio::test]
    async fn test_lookup_hit() {
        let (_, store) = store([("KJV.json", KJV)]);
        let verses = store.lookup(john(), 3, 16, 17, "kjv").await.unwrap();
        assert_eq!(verses, vec![VerseRecord::new(16, "For God so loved the world"), VerseRecord::new(17, "For God sent not")]);
    }

    #[tokio::test]
    async fn test_lookup_skips_missing_verses() {
        let (_, store) = store([("KJV.json", KJV)]);
        let verses = store.lookup(john(), 3, 17, 20, "KJV").await.unwrap();
        assert_eq!(verses, vec![VerseRecord::new(17, "For God sent not")]);
    }

    #[tokio::test]
    async fn test_lookup_misses() {
        let (_, store) = store([("KJV.json", KJV), ("BAD.json", "{not json")]);
        assert!(store.lookup(john(), 3, 1, 2, "KJV").await.is_none());
        assert!(store.lookup(john(), 3, 16, 16, "ESV").await.is_none());
        assert!(store.lookup(john(), 3, 16, 16, "BAD").await.is_none());
        assert!(store.lookup(john(), 3, 16, 16, "../KJV").await.is_none());
    }

    #[tokio::test]
    async fn test_switching_versions_evicts() {
        let (_, store) = store([("KJV.json", KJV), ("WEB.json", WEB)]);
        assert_eq!(store.lookup(john(), 3, 16, 16, "KJV").await.unwrap()[0].text, "For God so loved the world");
        assert_eq!(
            store.lookup(john(), 3, 16, 16, "WEB").await.unwrap()[0].text,
            "For God so loved the world, that he gave"
        );
        let slot = store.loaded.lock().await;
        assert_eq!(slot.as_ref().map(|loaded| loaded.version.as_str()), Some("WEB"));
    }

    #[tokio::test]
    async fn test_install_replaces_loaded_snapshot() {
        let (backend, store) = store([("KJV.json", KJV)]);
        assert!(store.lookup(john(), 3, 16, 16, "KJV").await.is_some());
        let written = store.install("kjv", WEB.as_bytes()).await.unwrap();
        assert_eq!(written, WEB.len() as u64);
        assert_eq!(backend.read(Path::new("KJV.json")).await.unwrap(), WEB.as_bytes());
        assert_eq!(
            store.lookup(john(), 3, 16, 16, "KJV").await.unwrap()[0].text,
            "For God so loved the world, that he gave"
        );
    }

    #[tokio::test]
    async fn test_install_rejects_garbage() {
        let (backend, store) = store([]);
        let err = store.install("KJV", b"<html>rate limited</html>").await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::InvalidSnapshot(_)));
        let err = store.install("KJV", br#"{"NotABook": {}}"#).await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::InvalidSnapshot(_)));
        assert!(!backend.exists(Path::new("KJV.json")).await.unwrap());
    }

    #[tokio::test]
    async fn test_status_and_installed() {
        let (_, store) = store([("WEB.json", WEB), ("KJV.json", KJV), ("notes.txt", "")]);
        assert_eq!(store.status("KJV").await.unwrap().unwrap().size, KJV.len() as u64);
        assert!(store.status("ESV").await.unwrap().is_none());
        assert_eq!(store.installed().await.unwrap(), vec!["KJV".to_string(), "WEB".to_string()]);
    }

    #[tokio::test]
    async fn test_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(Arc::new(LocalBackend::new("snapshots", dir.path()).unwrap()));
        store.install("KJV", KJV.as_bytes()).await.unwrap();
        assert!(dir.path().join("KJV.json").is_file());
        assert_eq!(store.lookup(john(), 3, 16, 16, "KJV").await.unwrap().len(), 1);
    }
}
