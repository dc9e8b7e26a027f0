//! Ranked term frequencies over a prepared word stream.

pub mod counter;

pub use counter::{count_terms, term_frequencies, FrequencyTable, TermFrequency};
