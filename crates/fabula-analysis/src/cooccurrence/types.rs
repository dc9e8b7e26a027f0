//! Co-occurrence pair keys and the accumulated table.

use std::cmp::Ordering;

use fabula_core::types::FxHashMap;
use serde::{Deserialize, Serialize};

/// Unordered pair of distinct tokens, stored with `first < second`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CooccurrencePair {
    first: String,
    second: String,
}

impl CooccurrencePair {
    /// Canonicalize `(a, b)` and `(b, a)` to the same key.
    /// Returns `None` when both sides are equal.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Option<Self> {
        let (a, b) = (a.into(), b.into());
        match a.cmp(&b) {
            Ordering::Less => Some(Self { first: a, second: b }),
            Ordering::Greater => Some(Self { first: b, second: a }),
            Ordering::Equal => None,
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }
}

/// Pair counts from one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CooccurrenceTable {
    counts: FxHashMap<CooccurrencePair, u64>,
    windows: usize,
}

impl CooccurrenceTable {
    pub(crate) fn with_windows(windows: usize) -> Self {
        Self {
            counts: FxHashMap::default(),
            windows,
        }
    }

    pub(crate) fn observe(&mut self, pair: CooccurrencePair) {
        *self.counts.entry(pair).or_insert(0) += 1;
    }

    /// Number of windows the stream produced.
    pub fn windows(&self) -> usize {
        self.windows
    }

    /// Number of distinct pairs.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count for the unordered pair `{a, b}`; zero if never seen.
    pub fn count(&self, a: &str, b: &str) -> u64 {
        CooccurrencePair::new(a, b)
            .and_then(|pair| self.counts.get(&pair).copied())
            .unwrap_or(0)
    }

    /// All pairs, count descending, ties by pair ascending.
    pub fn ranked(&self) -> Vec<(&CooccurrencePair, u64)> {
        let mut entries: Vec<(&CooccurrencePair, u64)> =
            self.counts.iter().map(|(pair, &count)| (pair, count)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// The first `n` ranked pairs.
    pub fn top(&self, n: usize) -> Vec<(&CooccurrencePair, u64)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Plain `(first, second, count)` rows in ranked order.
    pub fn to_rows(&self) -> Vec<(String, String, u64)> {
        self.ranked()
            .into_iter()
            .map(|(pair, count)| (pair.first.clone(), pair.second.clone(), count))
            .collect()
    }
}
