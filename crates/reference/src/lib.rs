//! Scripture references: what callers ask for and what they get back.
//!
//! - [`Parser`] turns free text (`"John 3:16-17 NKJV"`) into a [`Reference`].
//! - [`Rules`] validates a verse request against the canon.
//! - [`models`] holds the shared [`Reference`], [`Passage`] and [`VerseRecord`]
//!   types used by every other crate.

mod consts;
pub mod error;
pub mod models;
mod parse;
mod validate;

pub use crate::models::{Passage, Reference, Source, Span, VerseRecord};
pub use crate::parse::{DEFAULT_VERSION, Parser};
pub use crate::validate::{DEFAULT_MAX_VERSES_PER_RANGE, Rules};
