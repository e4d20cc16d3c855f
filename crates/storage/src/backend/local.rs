//! Snapshot files in a directory on disk.

use std::fs::Metadata;
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::error::{ErrorKind, Result};
use crate::path::validate as validate_path;
use crate::{FileInfo, StorageBackend};

/// Keeps snapshots as plain files in one directory.
///
/// # Examples
///
/// ```no_run
/// use lectern_storage::backend::LocalBackend;
///
/// # fn example() -> lectern_storage::error::Result<()> {
/// let backend = LocalBackend::new("snapshots", "/var/lib/lectern/snapshots")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LocalBackend {
    name: String,
    root: PathBuf,
}
impl LocalBackend {
    /// Uses `root` as the snapshot directory, creating it when missing.
    ///
    /// # Errors
    ///
    /// [`InvalidPath`](ErrorKind::InvalidPath) when `root` is relative or names
    /// something other than a directory.
    pub fn new(name: impl Into<String>, root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_absolute() || (root.exists() && !root.is_dir()) {
            exn::bail!(ErrorKind::InvalidPath(root));
        }
        // Runs once while wiring up the finder.
        std::fs::create_dir_all(&root).map_err(|err| io_error(err, &root))?;
        Ok(Self { name: name.into(), root })
    }

    fn resolve(&self, path: &Path) -> Result<PathBuf> {
        Ok(self.root.join(validate_path(path)?))
    }
}

fn io_error(err: IoError, path: &Path) -> ErrorKind {
    match err.kind() {
        IoErrorKind::NotFound => ErrorKind::NotFound(path.to_path_buf()),
        IoErrorKind::PermissionDenied => ErrorKind::PermissionDenied(path.to_path_buf()),
        _ => ErrorKind::Io(err),
    }
}

fn file_info(path: PathBuf, metadata: &Metadata) -> Result<FileInfo> {
    let modified = metadata.modified().map_err(ErrorKind::Io)?;
    Ok(FileInfo::new(path, metadata.len(), modified.into()))
}

#[async_trait]
impl StorageBackend for LocalBackend {
    fn name(&self) -> &str {
        &self.name
    }

    async fn list(&self) -> Result<Vec<FileInfo>> {
        let mut entries = fs::read_dir(&self.root).await.map_err(|err| io_error(err, &self.root))?;
        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|err| io_error(err, &self.root))? {
            let metadata = entry.metadata().await.map_err(|err| io_error(err, &entry.path()))?;
            if metadata.is_file() {
                files.push(file_info(PathBuf::from(entry.file_name()), &metadata)?);
            }
        }
        Ok(files)
    }

    async fn exists(&self, path: &Path) -> Result<bool> {
        let target = self.resolve(path)?;
        Ok(fs::try_exists(&target).await.map_err(|err| io_error(err, path))?)
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let target = self.resolve(path)?;
        Ok(fs::read(&target).await.map_err(|err| io_error(err, path))?)
    }

    async fn write(&self, path: &Path, data: &[u8]) -> Result<()> {
        let target = self.resolve(path)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await.map_err(|err| io_error(err, path))?;
        }
        Ok(fs::write(&target, data).await.map_err(|err| io_error(err, path))?)
    }

    async fn stat(&self, path: &Path) -> Result<FileInfo> {
        let relative = validate_path(path)?;
        let metadata = fs::metadata(self.root.join(&relative)).await.map_err(|err| io_error(err, path))?;
        file_info(relative, &metadata)
    }
}
