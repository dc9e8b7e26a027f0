//! N-gram counting and ranking.

use fabula_core::constants::{MAX_NGRAM_SIZE, MIN_NGRAM_SIZE, NGRAM_SEPARATOR};
use fabula_core::errors::ArgumentError;
use fabula_core::types::FxHashMap;
use serde::{Deserialize, Serialize};

/// One ranked n-gram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collocation {
    pub words: Vec<String>,
    pub count: u64,
}

impl Collocation {
    /// Words joined by a single space.
    pub fn text(&self) -> String {
        self.words.join(NGRAM_SEPARATOR)
    }
}

/// N-gram counts from one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NgramTable {
    counts: FxHashMap<Vec<String>, u64>,
    n: usize,
    positions: usize,
}

impl NgramTable {
    /// Words per n-gram.
    pub fn n(&self) -> usize {
        self.n
    }

    /// N-gram positions scanned.
    pub fn positions(&self) -> usize {
        self.positions
    }

    /// Number of distinct n-grams.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count for the exact word sequence; zero if never seen.
    pub fn count(&self, words: &[&str]) -> u64 {
        let key: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// All n-grams, count descending, ties by n-gram ascending.
    pub fn ranked(&self) -> Vec<Collocation> {
        let mut rows: Vec<Collocation> = self
            .counts
            .iter()
            .map(|(words, &count)| Collocation {
                words: words.clone(),
                count,
            })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.words.cmp(&b.words)));
        rows
    }

    /// The first `k` ranked n-grams.
    pub fn top(&self, k: usize) -> Vec<Collocation> {
        let mut rows = self.ranked();
        rows.truncate(k);
        rows
    }

    /// Plain `(text, count)` rows in ranked order.
    pub fn to_rows(&self) -> Vec<(String, u64)> {
        self.ranked()
            .into_iter()
            .map(|c| (c.text(), c.count))
            .collect()
    }
}

/// Count every run of `n` consecutive words (stride 1).
///
/// `n` must lie in `2..=5`. A stream shorter than `n` yields an empty table.
pub fn ngrams<S: AsRef<str>>(words: &[S], n: usize) -> Result<NgramTable, ArgumentError> {
    if !(MIN_NGRAM_SIZE..=MAX_NGRAM_SIZE).contains(&n) {
        return Err(ArgumentError::OutOfRange {
            field: "ngram_size",
            value: n,
            min: MIN_NGRAM_SIZE,
            max: MAX_NGRAM_SIZE,
        });
    }
    if words.len() < n {
        tracing::debug!(words = words.len(), n, "stream shorter than n-gram, nothing counted");
        return Ok(NgramTable {
            n,
            ..NgramTable::default()
        });
    }

    let mut counts: FxHashMap<Vec<String>, u64> = FxHashMap::default();
    for window in words.windows(n) {
        let key: Vec<String> = window.iter().map(|w| w.as_ref().to_string()).collect();
        *counts.entry(key).or_insert(0) += 1;
    }

    let positions = words.len() - n + 1;
    tracing::debug!(positions, distinct = counts.len(), n, "n-grams counted");
    Ok(NgramTable {
        counts,
        n,
        positions,
    })
}
