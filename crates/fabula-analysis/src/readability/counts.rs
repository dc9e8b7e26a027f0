//! Word and letter counting over alphabetic tokens.

use fabula_core::types::Token;
use serde::{Deserialize, Serialize};

/// Counts fed to the scorer. Only alphabetic word tokens contribute to
/// `words` and `letters`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextCounts {
    pub sentences: usize,
    pub words: usize,
    pub letters: usize,
}

impl TextCounts {
    pub fn from_tokens(tokens: &[Token], sentences: usize) -> Self {
        let (words, letters) = tokens
            .iter()
            .filter(|t| t.is_alphabetic())
            .fold((0, 0), |(w, l), t| (w + 1, l + t.text.chars().count()));
        Self {
            sentences,
            words,
            letters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_alphabetic_tokens_excluded() {
        let tokens = vec![
            Token::word("città"),
            Token::punctuation("."),
            Token::word("1848"),
            Token::word("re"),
            Token::word("x2"),
        ];
        let counts = TextCounts::from_tokens(&tokens, 1);
        assert_eq!(counts.words, 2);
        assert_eq!(counts.letters, 7);
    }
}
