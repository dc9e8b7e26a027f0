//! Window scanning and input preparation.

use fabula_core::constants::MIN_WINDOW_SIZE;
use fabula_core::errors::ArgumentError;
use fabula_core::types::collections::SmallVec8;
use fabula_core::types::Token;

use super::stopwords::StopwordSet;
use super::types::{CooccurrencePair, CooccurrenceTable};

/// Count unordered pairs of distinct values across all windows of
/// `window_size` consecutive tokens (stride 1).
///
/// A stream shorter than the window yields zero windows and an empty
/// table. `window_size < 2` is rejected.
pub fn analyze<S: AsRef<str>>(
    tokens: &[S],
    window_size: usize,
) -> Result<CooccurrenceTable, ArgumentError> {
    if window_size < MIN_WINDOW_SIZE {
        return Err(ArgumentError::TooSmall {
            field: "window_size",
            value: window_size,
            min: MIN_WINDOW_SIZE,
        });
    }
    if tokens.len() < window_size {
        tracing::debug!(
            tokens = tokens.len(),
            window_size,
            "stream shorter than window, no co-occurrences"
        );
        return Ok(CooccurrenceTable::default());
    }

    let windows = tokens.len() - window_size + 1;
    let mut table = CooccurrenceTable::with_windows(windows);

    for window in tokens.windows(window_size) {
        let mut distinct: SmallVec8<&str> = window.iter().map(|t| t.as_ref()).collect();
        distinct.sort_unstable();
        distinct.dedup();

        for (i, first) in distinct.iter().enumerate() {
            for second in &distinct[i + 1..] {
                if let Some(pair) = CooccurrencePair::new(*first, *second) {
                    table.observe(pair);
                }
            }
        }
    }

    tracing::debug!(
        windows_scanned = windows,
        distinct_pairs = table.len(),
        "co-occurrence analysis complete"
    );
    Ok(table)
}

/// Analyzer input from a token stream: word tokens only, lower-cased,
/// with stopwords removed when a set is given.
pub fn prepare_words(tokens: &[Token], stopwords: Option<&StopwordSet>) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| !t.is_punctuation())
        .map(|t| t.text.to_lowercase())
        .filter(|w| stopwords.map_or(true, |s| !s.contains(w)))
        .collect()
}
