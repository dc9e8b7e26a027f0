//! Term frequency configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the ranked term-frequency list.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FrequencyConfig {
    /// Ranked terms shown in the report. Default: 20.
    pub top_terms: Option<usize>,
    /// Drop stopwords before counting. Default: true.
    pub remove_stopwords: Option<bool>,
}

impl FrequencyConfig {
    pub fn effective_top_terms(&self) -> usize {
        self.top_terms.unwrap_or(constants::DEFAULT_TOP_TERMS)
    }

    pub fn effective_remove_stopwords(&self) -> bool {
        self.remove_stopwords.unwrap_or(true)
    }
}
