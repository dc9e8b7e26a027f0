//! Occurrence scan and context reassembly.

use fabula_core::errors::ArgumentError;
use fabula_core::types::Token;

use super::types::{KwicMatch, KwicResult};

/// Find case-insensitive occurrences of `target` in `tokens`.
///
/// Each match carries up to `context_width` tokens on either side,
/// clamped at the stream edges. Matches stop being collected after
/// `max_results`, but every occurrence is still counted.
pub fn find(
    tokens: &[Token],
    target: &str,
    context_width: usize,
    max_results: usize,
) -> Result<KwicResult, ArgumentError> {
    let needle = target.trim().to_lowercase();
    if needle.is_empty() {
        return Err(ArgumentError::EmptyInput { field: "target" });
    }
    if context_width == 0 {
        return Err(ArgumentError::TooSmall {
            field: "context_width",
            value: 0,
            min: 1,
        });
    }
    if max_results == 0 {
        return Err(ArgumentError::TooSmall {
            field: "max_results",
            value: 0,
            min: 1,
        });
    }

    let mut result = KwicResult::default();
    for (i, token) in tokens.iter().enumerate() {
        if token.text.to_lowercase() != needle {
            continue;
        }
        result.total_occurrences += 1;
        if result.matches.len() >= max_results {
            continue;
        }

        let start = i.saturating_sub(context_width);
        let end = (i + context_width + 1).min(tokens.len());
        let left = &tokens[start..i];
        let right = &tokens[i + 1..end];

        result.matches.push(KwicMatch {
            index: i,
            left_context: join_tokens(left),
            target: token.text.clone(),
            right_context: join_tokens(right),
            target_is_punctuation: token.is_punctuation(),
            right_starts_with_punctuation: right.first().is_some_and(Token::is_punctuation),
        });
    }

    tracing::debug!(
        keyword = %needle,
        total_occurrences = result.total_occurrences,
        collected = result.matches.len(),
        "kwic scan complete"
    );
    Ok(result)
}

/// Join tokens with a single space, except before punctuation tokens.
pub fn join_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (k, token) in tokens.iter().enumerate() {
        if k > 0 && !token.is_punctuation() {
            out.push(' ');
        }
        out.push_str(&token.text);
    }
    out
}
