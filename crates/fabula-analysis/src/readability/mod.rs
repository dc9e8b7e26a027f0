//! Readability scoring with a fixed sentence/word/letter formula.
//!
//! `89 + (sentences * 300 - letters * 10) / words`, clamped to `[0, 100]`.
//! The formula is calibrated for Italian and is applied verbatim to
//! whatever counts it is given.

pub mod corpus;
pub mod counts;
pub mod scorer;

pub use corpus::{score_corpus, score_sentences, SentenceReadability};
pub use counts::TextCounts;
pub use scorer::{score, ReadabilityBand, ReadabilityResult};
