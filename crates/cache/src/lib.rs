//! SQLite cache for resolved passages.
//!
//! The cache is disposable: every row can be refetched from a provider, so a
//! missing or deleted database only costs network round trips. Rows are keyed
//! by a [`Fingerprint`] of the request and carry their own expiry; expired
//! rows read as misses and are removed by [`Repository::purge_expired`].

mod db;
pub mod error;
mod fingerprint;
mod repo;

pub use crate::db::Database;
pub use crate::fingerprint::Fingerprint;
pub use crate::repo::Repository;

/// How long a cached passage stays fresh by default (30 days).
pub const DEFAULT_TTL: time::Duration = time::Duration::days(30);
