//! Output payloads. Plain values so a sink can render or store them freely.

use serde::{Deserialize, Serialize};

/// A titled block of text for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextOutput {
    pub title: String,
    pub body: String,
}

/// A listing truncated to a display limit, with the untruncated total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingOutput {
    pub title: String,
    pub items: Vec<String>,
    /// Number of items that exist, which may exceed `items.len()`.
    /// Saturates at `u64::MAX` for astronomically large enumerations.
    pub total: u64,
}

impl ListingOutput {
    pub fn is_truncated(&self) -> bool {
        (self.items.len() as u64) < self.total
    }

    /// "N of M total" summary line.
    pub fn summary(&self) -> String {
        format!("{} of {} total", self.items.len(), self.total)
    }
}

/// A numeric score with the counts it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreOutput {
    pub title: String,
    pub score: f64,
    pub letters: usize,
    pub words: usize,
    pub sentences: usize,
}

/// A caller-facing advisory that does not block the operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryOutput {
    pub title: String,
    pub message: String,
}
