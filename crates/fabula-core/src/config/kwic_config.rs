//! KWIC configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for keyword-in-context extraction.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KwicConfig {
    /// Context tokens on each side of a match (1..=20). Default: 5.
    pub context_width: Option<usize>,
    /// Maximum matches collected. Default: 200.
    pub max_results: Option<usize>,
}

impl KwicConfig {
    pub fn effective_context_width(&self) -> usize {
        self.context_width
            .unwrap_or(constants::DEFAULT_KWIC_CONTEXT_WIDTH)
    }

    pub fn effective_max_results(&self) -> usize {
        self.max_results.unwrap_or(constants::DEFAULT_KWIC_MAX_RESULTS)
    }
}
