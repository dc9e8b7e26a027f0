//! Combinatorics configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for permutation and combination runs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CombinatoricsConfig {
    /// Input length above which permutations carry a capacity warning. Default: 8.
    pub permutation_warning_threshold: Option<usize>,
    /// Expected subset count above which combinations carry a capacity warning. Default: 1,000,000.
    pub combination_warning_count: Option<u64>,
    /// Generated items shown per listing. Default: 200.
    pub display_limit: Option<usize>,
}

impl CombinatoricsConfig {
    pub fn effective_permutation_warning_threshold(&self) -> usize {
        self.permutation_warning_threshold
            .unwrap_or(constants::DEFAULT_PERMUTATION_WARNING_THRESHOLD)
    }

    pub fn effective_combination_warning_count(&self) -> u128 {
        self.combination_warning_count
            .map(u128::from)
            .unwrap_or(constants::DEFAULT_COMBINATION_WARNING_COUNT)
    }

    pub fn effective_display_limit(&self) -> usize {
        self.display_limit.unwrap_or(constants::DEFAULT_DISPLAY_LIMIT)
    }
}
