//! Sentence-length flags, consecutive repetitions and hedging.

use fabula_core::constants::{
    LONG_SENTENCE_FACTOR, LONG_SENTENCE_MIN_WORDS, SHORT_SENTENCE_FACTOR, SHORT_SENTENCE_MAX_WORDS,
};
use fabula_core::types::{FxHashSet, Language};
use serde::{Deserialize, Serialize};

use super::hedging::HedgingLexicon;
use crate::tokenize::Tokenizer;

/// Why a sentence was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceLengthFlag {
    /// Well above the average and longer than 15 words.
    TooLong,
    /// Well below the average and shorter than 4 words.
    TooShort,
    /// Not blank, but no alphabetic words at all.
    NoWords,
}

impl SentenceLengthFlag {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::TooLong => "may be too long or wordy",
            Self::TooShort => "may be too brief to be informative",
            Self::NoWords => "contains only punctuation or symbols",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceFlag {
    /// Zero-based sentence index.
    pub index: usize,
    /// Alphabetic words in the sentence.
    pub words: usize,
    pub kind: SentenceLengthFlag,
    pub sentence: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PragmaticIndicators {
    pub sentence_count: usize,
    /// Word and punctuation tokens of the whole text.
    pub token_count: usize,
    /// Mean alphabetic words per sentence; `None` when the text has none.
    pub average_sentence_length: Option<f64>,
    pub flagged_sentences: Vec<SentenceFlag>,
    /// Lower-cased words that occur twice in a row, distinct, in order of
    /// first repetition.
    pub repeated_words: Vec<String>,
    /// Hedging terms present, in lexicon order.
    pub hedging_terms: Vec<String>,
}

/// Compute every indicator for `text`.
pub fn analyze_indicators(
    tokenizer: &dyn Tokenizer,
    text: &str,
    language: Language,
    hedging: &HedgingLexicon,
) -> PragmaticIndicators {
    let sentences = tokenizer.sentences(text, language);
    let tokens = tokenizer.tokens(text, language);

    let lengths: Vec<usize> = sentences
        .iter()
        .map(|s| {
            tokenizer
                .tokens(s, language)
                .iter()
                .filter(|t| t.is_alphabetic())
                .count()
        })
        .collect();
    let total: usize = lengths.iter().sum();

    let (average_sentence_length, flagged_sentences) = if total == 0 {
        (None, Vec::new())
    } else {
        let average = total as f64 / lengths.len() as f64;
        let flags = sentences
            .iter()
            .zip(&lengths)
            .enumerate()
            .filter_map(|(index, (sentence, &words))| {
                classify(words, average, sentence).map(|kind| SentenceFlag {
                    index,
                    words,
                    kind,
                    sentence: sentence.clone(),
                })
            })
            .collect();
        (Some(average), flags)
    };

    let alphabetic: Vec<String> = tokens
        .iter()
        .filter(|t| t.is_alphabetic())
        .map(|t| t.text.to_lowercase())
        .collect();
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut repeated_words = Vec::new();
    for pair in alphabetic.windows(2) {
        if pair[0] == pair[1] && seen.insert(pair[0].as_str()) {
            repeated_words.push(pair[0].clone());
        }
    }

    let indicators = PragmaticIndicators {
        sentence_count: sentences.len(),
        token_count: tokens.len(),
        average_sentence_length,
        flagged_sentences,
        repeated_words,
        hedging_terms: hedging.find(&tokens),
    };
    tracing::debug!(
        sentences = indicators.sentence_count,
        flagged = indicators.flagged_sentences.len(),
        repeated = indicators.repeated_words.len(),
        hedging = indicators.hedging_terms.len(),
        "conversational indicators computed"
    );
    indicators
}

fn classify(words: usize, average: f64, sentence: &str) -> Option<SentenceLengthFlag> {
    let len = words as f64;
    if len > average * LONG_SENTENCE_FACTOR && words > LONG_SENTENCE_MIN_WORDS {
        Some(SentenceLengthFlag::TooLong)
    } else if len < average * SHORT_SENTENCE_FACTOR && words > 0 && words < SHORT_SENTENCE_MAX_WORDS
    {
        Some(SentenceLengthFlag::TooShort)
    } else if words == 0 && !sentence.trim().is_empty() {
        Some(SentenceLengthFlag::NoWords)
    } else {
        None
    }
}
