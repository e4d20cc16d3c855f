//! Offline scripture snapshots.
//!
//! A snapshot is one JSON document per version (`KJV.json`, `WEB.json`, ...)
//! holding every verse of that translation. [`LocalStore`] reads them from a
//! [`StorageBackend`] so lookups can be answered without touching the
//! network.

pub mod backend;
pub mod error;
mod models;
mod path;
mod snapshot;
mod store;

pub use crate::backend::StorageBackend;
pub use crate::models::FileInfo;
pub use crate::path::validate as validate_path;
pub use crate::snapshot::Snapshot;
pub use crate::store::LocalStore;
use std::sync::Arc;

pub type BackendHandle = Arc<dyn StorageBackend + Send + Sync>;
