//! Global and per-sentence scoring over raw text.

use fabula_core::errors::ReadabilityError;
use fabula_core::types::Language;
use serde::{Deserialize, Serialize};

use super::counts::TextCounts;
use super::scorer::{score, ReadabilityResult};
use crate::tokenize::Tokenizer;

/// Score of one sentence; `result` is `None` when the sentence has no
/// alphabetic words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceReadability {
    pub index: usize,
    pub sentence: String,
    pub result: Option<ReadabilityResult>,
}

/// Score the whole text as one unit.
pub fn score_corpus(
    tokenizer: &dyn Tokenizer,
    text: &str,
    language: Language,
) -> Result<ReadabilityResult, ReadabilityError> {
    let sentences = tokenizer.sentences(text, language).len();
    let tokens = tokenizer.tokens(text, language);
    let counts = TextCounts::from_tokens(&tokens, sentences);
    let result = score(counts.sentences, counts.words, counts.letters)?;
    tracing::debug!(
        readability_score = result.score,
        sentences = counts.sentences,
        words = counts.words,
        "corpus scored"
    );
    Ok(result)
}

/// Score every sentence with `sentence_count = 1`.
pub fn score_sentences(
    tokenizer: &dyn Tokenizer,
    text: &str,
    language: Language,
) -> Vec<SentenceReadability> {
    tokenizer
        .sentences(text, language)
        .into_iter()
        .enumerate()
        .map(|(index, sentence)| {
            let tokens = tokenizer.tokens(&sentence, language);
            let counts = TextCounts::from_tokens(&tokens, 1);
            let result = score(1, counts.words, counts.letters).ok();
            SentenceReadability {
                index,
                sentence,
                result,
            }
        })
        .collect()
}
