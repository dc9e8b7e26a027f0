//! Regex-based tokenizer: `\w+` words and a fixed punctuation set.

use std::sync::LazyLock;

use fabula_core::types::{Language, Token};
use regex::Regex;

use super::Tokenizer;

/// Words are maximal `\w` runs (Unicode-aware); punctuation is one of
/// `. , ; ! ? ' " ( )`. Everything else is dropped.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\w+|[.,;!?'"()]"#).expect("token pattern is valid"));

/// Sentence break: terminal punctuation, optional closing quotes or
/// brackets, then whitespace.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[.!?…]+["'»”)\]]*\s+"#).expect("sentence pattern is valid"));

/// Language-independent tokenizer. Elided Italian articles such as
/// `l'eroe` split into `l`, `'`, `eroe`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexTokenizer;

impl RegexTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for RegexTokenizer {
    fn sentences(&self, text: &str, _language: Language) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;
        for m in SENTENCE_BREAK.find_iter(text) {
            let sentence = text[start..m.end()].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = m.end();
        }
        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }
        sentences
    }

    fn tokens(&self, text: &str, _language: Language) -> Vec<Token> {
        TOKEN_PATTERN
            .find_iter(text)
            .map(|m| {
                let s = m.as_str();
                if matches!(s, "." | "," | ";" | "!" | "?" | "'" | "\"" | "(" | ")") {
                    Token::punctuation(s)
                } else {
                    Token::word(s)
                }
            })
            .collect()
    }
}
