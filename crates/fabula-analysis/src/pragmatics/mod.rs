//! Surface conversational indicators.
//!
//! Coarse signals only: sentence lengths far from the text average,
//! immediately repeated words, and hedging vocabulary. None of them
//! establishes that a sentence is uninformative or evasive.

pub mod hedging;
pub mod indicators;

pub use hedging::HedgingLexicon;
pub use indicators::{analyze_indicators, PragmaticIndicators, SentenceFlag, SentenceLengthFlag};
