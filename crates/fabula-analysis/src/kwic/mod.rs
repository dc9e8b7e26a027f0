//! Keyword-in-context extraction with punctuation-aware spacing.

pub mod extractor;
pub mod types;

pub use extractor::{find, join_tokens};
pub use types::{KwicMatch, KwicResult};
