//! CombinatoricsEngine: validation, estimation, and rendered enumeration.

use fabula_core::config::CombinatoricsConfig;
use fabula_core::constants::{
    COMBINATION_SEPARATOR, DEFAULT_COMBINATION_WARNING_COUNT,
    DEFAULT_PERMUTATION_WARNING_THRESHOLD, PERMUTATION_SEPARATOR,
};
use fabula_core::errors::{AnalysisError, ArgumentError};

use super::enumerate::{IndexCombinations, IndexPermutations};
use super::estimate::{
    binomial, factorial, CapacityWarning, CombinatoricOperation, SizeEstimate,
};
use crate::catalog::SymbolCatalog;

/// Generates plot sequences and function subsets from catalog codes.
#[derive(Debug, Clone)]
pub struct CombinatoricsEngine {
    permutation_warning_threshold: usize,
    combination_warning_count: u128,
}

impl Default for CombinatoricsEngine {
    fn default() -> Self {
        Self::new(
            DEFAULT_PERMUTATION_WARNING_THRESHOLD,
            DEFAULT_COMBINATION_WARNING_COUNT,
        )
    }
}

impl CombinatoricsEngine {
    pub fn new(permutation_warning_threshold: usize, combination_warning_count: u128) -> Self {
        Self {
            permutation_warning_threshold,
            combination_warning_count,
        }
    }

    pub fn from_config(config: &CombinatoricsConfig) -> Self {
        Self::new(
            config.effective_permutation_warning_threshold(),
            config.effective_combination_warning_count(),
        )
    }

    /// Expected number of permutations of `codes`, with a warning when the
    /// input is longer than the threshold.
    pub fn estimate_permutations<S: AsRef<str>>(&self, codes: &[S]) -> SizeEstimate {
        let input_len = codes.len();
        let count = factorial(input_len);
        let warning = (input_len > self.permutation_warning_threshold).then_some(CapacityWarning {
            operation: CombinatoricOperation::Permutations,
            input_len,
            expected_count: count,
        });
        SizeEstimate {
            operation: CombinatoricOperation::Permutations,
            input_len,
            count,
            warning,
        }
    }

    /// Expected number of `choose`-subsets of `available`, with a warning
    /// when the count exceeds the threshold.
    pub fn estimate_combinations<S: AsRef<str>>(
        &self,
        available: &[S],
        choose: usize,
    ) -> Result<SizeEstimate, ArgumentError> {
        validate_choose(available.len(), choose)?;
        let input_len = available.len();
        let operation = CombinatoricOperation::Combinations { choose };
        let count = binomial(input_len, choose);
        let oversized = count.map_or(true, |c| c > self.combination_warning_count);
        let warning = oversized.then_some(CapacityWarning {
            operation,
            input_len,
            expected_count: count,
        });
        Ok(SizeEstimate {
            operation,
            input_len,
            count,
            warning,
        })
    }

    /// Lazily render every ordering of `codes` as `"desc -> desc -> ..."`.
    ///
    /// Orderings follow lexicographic order of input positions. All codes
    /// are validated against `catalog` before anything is produced.
    pub fn permute_iter<'c, S: AsRef<str>>(
        &self,
        codes: &[S],
        catalog: &'c SymbolCatalog,
    ) -> Result<RenderedPermutations<'c>, AnalysisError> {
        let descriptions = catalog.resolve(codes)?;
        if descriptions.is_empty() {
            return Err(ArgumentError::EmptyInput { field: "codes" }.into());
        }
        let estimate = self.estimate_permutations(codes);
        if let Some(ref warning) = estimate.warning {
            tracing::warn!(input_codes = codes.len(), "{}", warning);
        }
        tracing::debug!(
            input_codes = codes.len(),
            expected_count = ?estimate.count,
            "enumerating permutations"
        );
        Ok(RenderedPermutations {
            indices: IndexPermutations::new(descriptions.len()),
            descriptions,
            total: estimate.count,
        })
    }

    /// Every ordering of `codes`, rendered. See [`Self::permute_iter`].
    pub fn permute<S: AsRef<str>>(
        &self,
        codes: &[S],
        catalog: &SymbolCatalog,
    ) -> Result<Vec<String>, AnalysisError> {
        Ok(self.permute_iter(codes, catalog)?.collect())
    }

    /// Lazily render every `choose`-subset of `available` as
    /// `"desc, desc, ..."` with descriptions sorted alphabetically.
    ///
    /// Subsets follow lexicographic order of input positions. Codes are
    /// validated first, then `0 < choose <= available.len()`.
    pub fn combine_iter<'c, S: AsRef<str>>(
        &self,
        available: &[S],
        choose: usize,
        catalog: &'c SymbolCatalog,
    ) -> Result<RenderedCombinations<'c>, AnalysisError> {
        let descriptions = catalog.resolve(available)?;
        let estimate = self.estimate_combinations(available, choose)?;
        if let Some(ref warning) = estimate.warning {
            tracing::warn!(input_codes = available.len(), choose, "{}", warning);
        }
        tracing::debug!(
            input_codes = available.len(),
            choose,
            expected_count = ?estimate.count,
            "enumerating combinations"
        );
        Ok(RenderedCombinations {
            indices: IndexCombinations::new(descriptions.len(), choose),
            descriptions,
            total: estimate.count,
        })
    }

    /// Every `choose`-subset of `available`, rendered. See [`Self::combine_iter`].
    pub fn combine<S: AsRef<str>>(
        &self,
        available: &[S],
        choose: usize,
        catalog: &SymbolCatalog,
    ) -> Result<Vec<String>, AnalysisError> {
        Ok(self.combine_iter(available, choose, catalog)?.collect())
    }
}

fn validate_choose(available: usize, choose: usize) -> Result<(), ArgumentError> {
    if available == 0 {
        return Err(ArgumentError::EmptyInput {
            field: "available_codes",
        });
    }
    if choose == 0 || choose > available {
        return Err(ArgumentError::OutOfRange {
            field: "choose",
            value: choose,
            min: 1,
            max: available,
        });
    }
    Ok(())
}

/// Iterator over rendered permutations.
#[derive(Debug, Clone)]
pub struct RenderedPermutations<'c> {
    descriptions: Vec<&'c str>,
    indices: IndexPermutations,
    total: Option<u128>,
}

impl RenderedPermutations<'_> {
    /// Total number of permutations this iterator yields from the start.
    pub fn total(&self) -> Option<u128> {
        self.total
    }
}

impl Iterator for RenderedPermutations<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let order = self.indices.advance()?;
        let parts: Vec<&str> = order.iter().map(|&i| self.descriptions[i]).collect();
        Some(parts.join(PERMUTATION_SEPARATOR))
    }
}

/// Iterator over rendered combinations.
#[derive(Debug, Clone)]
pub struct RenderedCombinations<'c> {
    descriptions: Vec<&'c str>,
    indices: IndexCombinations,
    total: Option<u128>,
}

impl RenderedCombinations<'_> {
    /// Total number of subsets this iterator yields from the start.
    pub fn total(&self) -> Option<u128> {
        self.total
    }
}

impl Iterator for RenderedCombinations<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let subset = self.indices.advance()?;
        let mut parts: Vec<&str> = subset.iter().map(|&i| self.descriptions[i]).collect();
        parts.sort_unstable();
        Some(parts.join(COMBINATION_SEPARATOR))
    }
}
