//! Tokens produced by a tokenizer and consumed read-only by the engines.

use serde::{Deserialize, Serialize};

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Word,
    Punctuation,
}

/// A single token of a stream, in original casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn word(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Word,
        }
    }

    pub fn punctuation(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Punctuation,
        }
    }

    pub fn is_punctuation(&self) -> bool {
        self.kind == TokenKind::Punctuation
    }

    /// True for a non-empty word made only of alphabetic characters.
    /// Digits, underscores and mixed tokens are not counted as words
    /// by the readability scorer.
    pub fn is_alphabetic(&self) -> bool {
        self.kind == TokenKind::Word
            && !self.text.is_empty()
            && self.text.chars().all(char::is_alphabetic)
    }
}
