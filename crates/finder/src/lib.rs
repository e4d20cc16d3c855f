//! Scripture reference resolution.
//!
//! A [`Finder`] turns a [`Reference`] into a [`Passage`] by consulting, in
//! order, the passage cache, an offline snapshot for the requested version and
//! the remote providers (primary first, then the others as fallbacks).
//!
//! Whole chapters are fetched as `1..=verse_count` verse ranges and chapter
//! ranges are stitched together from whole chapters, stopping at the first
//! chapter that fails.

mod builder;
pub mod error;
mod finder;
mod operations;
mod snapshots;

pub use lectern_canon::{BookEntry, Testament};
pub use lectern_config::Version;
pub use lectern_reference::{Passage, Reference, Source};

pub use crate::builder::FinderBuilder;
pub use crate::finder::Finder;
pub use crate::operations::{Batch, BatchError};
pub use crate::snapshots::{DOWNLOAD_TIMEOUT, SnapshotStatus};
