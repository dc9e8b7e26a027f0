//! KWIC match records.

use serde::{Deserialize, Serialize};

/// One occurrence of the target with its reassembled context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KwicMatch {
    /// Position of the target in the token stream.
    pub index: usize,
    pub left_context: String,
    /// Target as it appears in the stream (original casing).
    pub target: String,
    pub right_context: String,
    /// Whether the target token is punctuation.
    #[serde(default)]
    pub target_is_punctuation: bool,
    /// Whether the first right-context token is punctuation.
    #[serde(default)]
    pub right_starts_with_punctuation: bool,
}

impl KwicMatch {
    /// Display line `...left [target] right...`.
    ///
    /// Spacing follows the context rule: no space is placed before a
    /// punctuation token, so a target followed by "." renders as
    /// `[target].`.
    pub fn render(&self) -> String {
        let mut line = String::from("...");
        line.push_str(&self.left_context);
        if !self.left_context.is_empty() && !self.target_is_punctuation {
            line.push(' ');
        }
        line.push('[');
        line.push_str(&self.target);
        line.push(']');
        if !self.right_context.is_empty() && !self.right_starts_with_punctuation {
            line.push(' ');
        }
        line.push_str(&self.right_context);
        line.push_str("...");
        line
    }
}

/// Matches in stream order, capped, with the uncapped occurrence count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KwicResult {
    pub matches: Vec<KwicMatch>,
    pub total_occurrences: usize,
}

impl KwicResult {
    pub fn is_truncated(&self) -> bool {
        self.matches.len() < self.total_occurrences
    }
}
