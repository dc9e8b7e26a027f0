//! N-gram collocations.
//!
//! N-grams are taken at stride 1 over a prepared word stream, so a stream
//! of `len` words yields `len - n + 1` positions. Each position is counted;
//! repeated n-grams accumulate.

pub mod ngrams;

pub use ngrams::{ngrams, Collocation, NgramTable};
