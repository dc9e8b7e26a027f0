//! Tokenizer collaborator contract and the built-in regex tokenizer.
//!
//! Engines never segment text themselves; they consume what a
//! [`Tokenizer`] produces.

pub mod regex_tokenizer;

use fabula_core::types::{Language, Token};

pub use regex_tokenizer::RegexTokenizer;

/// Sentence and word segmentation, parameterized by language.
pub trait Tokenizer: Send + Sync {
    /// Ordered sentence strings.
    fn sentences(&self, text: &str, language: Language) -> Vec<String>;

    /// Ordered word and punctuation tokens, original casing.
    fn tokens(&self, text: &str, language: Language) -> Vec<Token>;
}
