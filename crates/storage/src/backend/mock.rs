//! In-memory storage backend for testing.

use crate::error::{ErrorKind, Result};
use crate::path::validate as validate_path;
use crate::{FileInfo, StorageBackend};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use tokio::sync::RwLock;

/// In-memory storage backend for testing.
///
/// Files live in a `HashMap` behind a [`RwLock`], so every trait method works
/// on `&self` without external synchronisation.
pub struct MockBackend {
    storage: RwLock<HashMap<PathBuf, (OffsetDateTime, Vec<u8>)>>,
}

impl MockBackend {
    /// Create a mock backend pre-populated with files.
    ///
    /// Panics if any path fails validation: broken test setup should not pass.
    pub fn with_files(files: impl IntoIterator<Item = (impl Into<PathBuf>, impl Into<Vec<u8>>)>) -> Self {
        let now = OffsetDateTime::now_utc();
        let map = files
            .into_iter()
            .map(|(path, data)| {
                let path = path.into();
                let Ok(validated) = validate_path(&path) else {
                    panic!("MockBackend::with_files: invalid path {}", path.display());
                };
                (validated, (now, data.into()))
            })
            .collect();
        Self { storage: RwLock::new(map) }
    }
}
impl Default for MockBackend {
    fn default() -> Self {
        let files: [(&str, &str); 0] = [];
        Self::with_files(files)
    }
}

#[async_trait]
impl StorageBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn list(&self) -> Result<Vec<FileInfo>> {
        let guard = self.storage.read().await;
        Ok(guard
            .iter()
            .filter(|(path, _)| path.parent() == Some(Path::new("")))
            .map(|(path, (modified, data))| FileInfo::new(path.clone(), data.len() as u64, *modified))
            .collect())
    }

    async fn exists(&self, path: &Path) -> Result<bool> {
        let path = validate_path(path)?;
        Ok(self.storage.read().await.contains_key(&path))
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let path = validate_path(path)?;
        match self.storage.read().await.get(&path) {
            Some((_, data)) => Ok(data.clone()),
            None => exn::bail!(ErrorKind::NotFound(path)),
        }
    }

    async fn write(&self, path: &Path, data: &[u8]) -> Result<()> {
        let path = validate_path(path)?;
        self.storage.write().await.insert(path, (OffsetDateTime::now_utc(), data.to_vec()));
        Ok(())
    }

    async fn stat(&self, path: &Path) -> Result<FileInfo> {
        let path = validate_path(path)?;
        match self.storage.read().await.get(&path) {
            Some((modified, data)) => Ok(FileInfo::new(path.clone(), data.len() as u64, *modified)),
            None => exn::bail!(ErrorKind::NotFound(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_read_stat() {
        let backend = MockBackend::default();
        assert!(!backend.exists(Path::new("KJV.json")).await.unwrap());
        let err = backend.read(Path::new("KJV.json")).await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::NotFound(_)));
        backend.write(Path::new("KJV.json"), b"[]").await.unwrap();
        assert_eq!(backend.read(Path::new("KJV.json")).await.unwrap(), b"[]");
        assert_eq!(backend.stat(Path::new("KJV.json")).await.unwrap().size, 2);
    }

    #[tokio::test]
    async fn test_list_only_covers_the_root() {
        let backend = MockBackend::with_files([("KJV.json", "[]"), ("old/WEB.json", "[]")]);
        let paths: Vec<PathBuf> = backend.list().await.unwrap().into_iter().map(|file| file.path).collect();
        assert_eq!(paths, vec![PathBuf::from("KJV.json")]);
    }

    #[tokio::test]
    async fn test_paths_are_normalized() {
        let backend = MockBackend::with_files([("./snapshots/KJV.json", "[]")]);
        assert!(backend.exists(Path::new("snapshots/KJV.json")).await.unwrap());
        assert!(backend.read(Path::new("../KJV.json")).await.is_err());
    }
}
