//! Sliding-window co-occurrence analysis.
//!
//! Each window is an independent observation: its distinct values form
//! pairs that are counted once per window, so overlapping windows count
//! the same pair again.

pub mod analyzer;
pub mod stopwords;
pub mod types;

pub use analyzer::{analyze, prepare_words};
pub use stopwords::StopwordSet;
pub use types::{CooccurrencePair, CooccurrenceTable};
