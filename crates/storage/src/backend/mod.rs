//! Storage backend trait and implementations.

mod local;
#[cfg(any(test, feature = "mock"))]
mod mock;

pub use self::local::LocalBackend;
#[cfg(any(test, feature = "mock"))]
pub use self::mock::MockBackend;
use crate::FileInfo;
use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Unified interface for where snapshot files live.
///
/// All paths are relative to the backend root and must be validated using
/// [`validate_path`](crate::validate_path) before use. Implementations
/// enforce this themselves.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use lectern_storage::{backend::StorageBackend, error::Result};
///
/// async fn snapshot_size(backend: &dyn StorageBackend, version: &str) -> Result<Option<u64>> {
///     let path = format!("{version}.json");
///     if !backend.exists(Path::new(&path)).await? {
///         return Ok(None);
///     }
///     Ok(Some(backend.stat(Path::new(&path)).await?.size))
/// }
/// ```
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Name of the backend, for logging only.
    fn name(&self) -> &str;

    /// Metadata for the files directly under the backend root, in no
    /// particular order.
    async fn list(&self) -> Result<Vec<FileInfo>>;

    async fn exists(&self, path: &Path) -> Result<bool>;

    /// Read file contents.
    ///
    /// Returns [`NotFound`](crate::error::ErrorKind::NotFound) if the file
    /// does not exist.
    async fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Create or overwrite a file, creating parent directories as needed.
    async fn write(&self, path: &Path, data: &[u8]) -> Result<()>;

    /// File metadata without reading contents.
    async fn stat(&self, path: &Path) -> Result<FileInfo>;
}
