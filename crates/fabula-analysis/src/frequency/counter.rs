//! Term counting and ranking.

use fabula_core::errors::ArgumentError;
use fabula_core::types::FxHashMap;
use serde::{Deserialize, Serialize};

/// One ranked row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermFrequency {
    pub term: String,
    pub count: u64,
}

/// Occurrence counts for every distinct term of a stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FxHashMap<String, u64>,
    total_words: usize,
}

impl FrequencyTable {
    /// Words counted, duplicates included.
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// All terms, count descending, ties by term ascending.
    pub fn ranked(&self) -> Vec<TermFrequency> {
        let mut rows: Vec<TermFrequency> = self
            .counts
            .iter()
            .map(|(term, &count)| TermFrequency {
                term: term.clone(),
                count,
            })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
        rows
    }

    /// The first `n` ranked terms.
    pub fn top(&self, n: usize) -> Vec<TermFrequency> {
        let mut rows = self.ranked();
        rows.truncate(n);
        rows
    }
}

/// Count every word of `words` as given; callers lower-case and filter.
pub fn count_terms<S: AsRef<str>>(words: &[S]) -> FrequencyTable {
    let mut counts: FxHashMap<String, u64> = FxHashMap::default();
    for word in words {
        *counts.entry(word.as_ref().to_string()).or_insert(0) += 1;
    }
    tracing::debug!(
        words = words.len(),
        distinct = counts.len(),
        "term frequencies counted"
    );
    FrequencyTable {
        counts,
        total_words: words.len(),
    }
}

/// The `top` most frequent terms of `words`. `top == 0` is rejected.
pub fn term_frequencies<S: AsRef<str>>(
    words: &[S],
    top: usize,
) -> Result<Vec<TermFrequency>, ArgumentError> {
    if top == 0 {
        return Err(ArgumentError::TooSmall {
            field: "top_terms",
            value: top,
            min: 1,
        });
    }
    Ok(count_terms(words).top(top))
}
