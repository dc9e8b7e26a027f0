//! Readability and language configuration.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::LanguageError;
use crate::types::Language;

/// Configuration for readability reports and the analysis language.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReadabilityConfig {
    /// Sentences listed in a per-sentence report. Default: 300.
    pub max_sentences_listed: Option<usize>,
    /// Language tag handed to the tokenizer. Default: "italian".
    pub language: Option<String>,
}

impl ReadabilityConfig {
    pub fn effective_max_sentences_listed(&self) -> usize {
        self.max_sentences_listed
            .unwrap_or(constants::DEFAULT_MAX_SENTENCES_LISTED)
    }

    pub fn effective_language(&self) -> Result<Language, LanguageError> {
        self.language
            .as_deref()
            .unwrap_or(constants::DEFAULT_LANGUAGE)
            .parse()
    }
}
