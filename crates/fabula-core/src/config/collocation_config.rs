//! Collocation configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for n-gram collocations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CollocationConfig {
    /// Words per n-gram (2..=5). Default: 2.
    pub ngram_size: Option<usize>,
    /// Ranked collocations shown in the report. Default: 10.
    pub top_collocations: Option<usize>,
    /// Drop stopwords before forming n-grams. Default: true.
    pub remove_stopwords: Option<bool>,
}

impl CollocationConfig {
    pub fn effective_ngram_size(&self) -> usize {
        self.ngram_size.unwrap_or(constants::DEFAULT_NGRAM_SIZE)
    }

    pub fn effective_top_collocations(&self) -> usize {
        self.top_collocations
            .unwrap_or(constants::DEFAULT_TOP_COLLOCATIONS)
    }

    pub fn effective_remove_stopwords(&self) -> bool {
        self.remove_stopwords.unwrap_or(true)
    }
}
