//! Conversational indicators over tokenized text.

use fabula_analysis::pragmatics::{analyze_indicators, HedgingLexicon, SentenceLengthFlag};
use fabula_analysis::tokenize::RegexTokenizer;
use fabula_core::types::Language;

const STORY: &str = "Il re re parte. \
    Il cavaliere attraversa la foresta oscura con la spada lucente e il mantello rosso \
    mentre la luna piena illumina il sentiero antico. Sì. ... Forse il drago dorme.";

#[test]
fn test_sentence_flags() {
    let lexicon = HedgingLexicon::for_language(Language::Italian);
    let result = analyze_indicators(&RegexTokenizer, STORY, Language::Italian, &lexicon);

    assert_eq!(result.sentence_count, 5);
    assert_eq!(result.token_count, 38);
    // Lengths 4, 22, 1, 0, 4.
    let average = result.average_sentence_length.unwrap();
    assert!((average - 6.2).abs() < 1e-9);

    let flags: Vec<(usize, SentenceLengthFlag)> = result
        .flagged_sentences
        .iter()
        .map(|f| (f.index, f.kind))
        .collect();
    assert_eq!(
        flags,
        vec![
            (1, SentenceLengthFlag::TooLong),
            (2, SentenceLengthFlag::TooShort),
            (3, SentenceLengthFlag::NoWords),
        ]
    );
    assert_eq!(result.flagged_sentences[0].words, 22);
    assert_eq!(result.flagged_sentences[2].sentence, "...");
}

#[test]
fn test_repetitions_and_hedging() {
    let lexicon = HedgingLexicon::for_language(Language::Italian);
    let result = analyze_indicators(&RegexTokenizer, STORY, Language::Italian, &lexicon);
    assert_eq!(result.repeated_words, vec!["re"]);
    assert_eq!(result.hedging_terms, vec!["forse"]);
}

#[test]
fn test_repetition_ignores_case_and_reports_once() {
    let lexicon = HedgingLexicon::default();
    let text = "Mai Mai più. Mai mai.";
    let result = analyze_indicators(&RegexTokenizer, text, Language::Italian, &lexicon);
    assert_eq!(result.repeated_words, vec!["mai"]);
    assert!(result.hedging_terms.is_empty());
}

#[test]
fn test_no_alphabetic_words_skips_length_flags() {
    let lexicon = HedgingLexicon::for_language(Language::Italian);
    let result = analyze_indicators(&RegexTokenizer, "123 456. 789!", Language::Italian, &lexicon);
    assert_eq!(result.sentence_count, 2);
    assert!(result.average_sentence_length.is_none());
    assert!(result.flagged_sentences.is_empty());
}

#[test]
fn test_english_multi_word_hedges() {
    let lexicon = HedgingLexicon::for_language(Language::English);
    let text = "It was sort of a dragon. Maybe it slept.";
    let result = analyze_indicators(&RegexTokenizer, text, Language::English, &lexicon);
    assert_eq!(result.hedging_terms, vec!["maybe", "sort of"]);
}
