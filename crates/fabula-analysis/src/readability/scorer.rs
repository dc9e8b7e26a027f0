//! The scoring formula and band classification.

use std::fmt;

use fabula_core::constants::{
    READABILITY_BASE, READABILITY_LETTER_WEIGHT, READABILITY_SENTENCE_WEIGHT,
};
use fabula_core::errors::ReadabilityError;
use serde::{Deserialize, Serialize};

/// Difficulty class of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadabilityBand {
    VeryEasy,
    Easy,
    FairlyHard,
    Hard,
}

impl ReadabilityBand {
    /// `>= 80` very easy, `>= 60` easy, `>= 40` fairly hard, else hard.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::VeryEasy
        } else if score >= 60.0 {
            Self::Easy
        } else if score >= 40.0 {
            Self::FairlyHard
        } else {
            Self::Hard
        }
    }

    /// Reader profile the band corresponds to.
    pub fn audience(&self) -> &'static str {
        match self {
            Self::VeryEasy => "readers with primary-school education",
            Self::Easy => "readers with lower-secondary education",
            Self::FairlyHard => "readers with upper-secondary education",
            Self::Hard => "readers with a university degree",
        }
    }
}

impl fmt::Display for ReadabilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::VeryEasy => "Very easy",
            Self::Easy => "Easy",
            Self::FairlyHard => "Fairly hard",
            Self::Hard => "Hard",
        })
    }
}

/// Score of one text unit with the counts it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityResult {
    pub score: f64,
    pub letters: usize,
    pub words: usize,
    pub sentences: usize,
    pub band: ReadabilityBand,
}

/// Apply the readability formula.
///
/// `word_count == 0` is refused with [`ReadabilityError::DivisionGuard`].
pub fn score(
    sentence_count: usize,
    word_count: usize,
    letter_count: usize,
) -> Result<ReadabilityResult, ReadabilityError> {
    if word_count == 0 {
        return Err(ReadabilityError::DivisionGuard { counted: "words" });
    }
    let raw = READABILITY_BASE
        + (sentence_count as f64 * READABILITY_SENTENCE_WEIGHT
            - letter_count as f64 * READABILITY_LETTER_WEIGHT)
            / word_count as f64;
    let score = raw.clamp(0.0, 100.0);
    Ok(ReadabilityResult {
        score,
        letters: letter_count,
        words: word_count,
        sentences: sentence_count,
        band: ReadabilityBand::from_score(score),
    })
}
