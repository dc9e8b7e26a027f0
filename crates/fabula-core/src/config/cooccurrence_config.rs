//! Co-occurrence configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the sliding-window co-occurrence analysis.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CooccurrenceConfig {
    /// Window size in words (2..=10). Default: 3.
    pub window_size: Option<usize>,
    /// Ranked pairs shown in the report. Default: 15.
    pub top_pairs: Option<usize>,
    /// Drop stopwords before windowing. Default: true.
    pub remove_stopwords: Option<bool>,
    /// Stopwords added to the built-in list of the configured language.
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

impl CooccurrenceConfig {
    pub fn effective_window_size(&self) -> usize {
        self.window_size.unwrap_or(constants::DEFAULT_WINDOW_SIZE)
    }

    pub fn effective_top_pairs(&self) -> usize {
        self.top_pairs.unwrap_or(constants::DEFAULT_TOP_PAIRS)
    }

    pub fn effective_remove_stopwords(&self) -> bool {
        self.remove_stopwords.unwrap_or(true)
    }
}
