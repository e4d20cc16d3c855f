mod passage;
mod reference;

pub use self::passage::{Passage, Source, VerseRecord};
pub use self::reference::{Reference, Span};
