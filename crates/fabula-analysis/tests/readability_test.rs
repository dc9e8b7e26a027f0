//! Readability scoring over counts and text.

use fabula_analysis::readability::{score, score_corpus, score_sentences, ReadabilityBand};
use fabula_analysis::tokenize::RegexTokenizer;
use fabula_core::errors::{FabulaErrorCode, ReadabilityError};
use fabula_core::types::Language;

#[test]
fn test_reference_score() {
    let result = score(10, 100, 500).unwrap();
    assert_eq!(result.score, 69.0);
    assert_eq!(result.band, ReadabilityBand::Easy);
}

#[test]
fn test_score_always_in_range() {
    for (s, w, l) in [(0, 1, 1000), (50, 1, 0), (3, 40, 180), (1, 7, 35)] {
        let result = score(s, w, l).unwrap();
        assert!((0.0..=100.0).contains(&result.score), "{s} {w} {l}");
    }
}

#[test]
fn test_division_guard_code() {
    let err = score(1, 0, 10).unwrap_err();
    assert_eq!(err.error_code(), "DIVISION_GUARD");
}

#[test]
fn test_long_words_score_lower() {
    let short = "Il re va. La fata sa. Il lupo ha fame.";
    let long = "Conseguentemente l'amministrazione straordinariamente organizzata \
                predispose provvedimenti particolarmente articolati.";
    let tokenizer = RegexTokenizer::new();
    let easy = score_corpus(&tokenizer, short, Language::Italian).unwrap();
    let hard = score_corpus(&tokenizer, long, Language::Italian).unwrap();
    assert!(easy.score > hard.score);
    assert_eq!(hard.band, ReadabilityBand::Hard);
}

#[test]
fn test_same_formula_for_every_language() {
    let tokenizer = RegexTokenizer::new();
    let text = "The king leaves the castle. He returns after a year.";
    let it = score_corpus(&tokenizer, text, Language::Italian).unwrap();
    let en = score_corpus(&tokenizer, text, Language::English).unwrap();
    assert_eq!(it, en);
}

#[test]
fn test_text_without_words_is_guarded() {
    let err = score_corpus(&RegexTokenizer::new(), "?! ... 12 34", Language::Italian).unwrap_err();
    assert_eq!(err, ReadabilityError::DivisionGuard { counted: "words" });
}

#[test]
fn test_per_sentence_uses_one_sentence_each() {
    let rows = score_sentences(
        &RegexTokenizer::new(),
        "Il re parte. Torna dopo un anno e trova il regno cambiato.",
        Language::Italian,
    );
    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert_eq!(row.result.as_ref().unwrap().sentences, 1);
    }
    assert_eq!(rows[1].index, 1);
}
