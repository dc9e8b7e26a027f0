//! Report bodies for every workbench operation.

use std::fmt::Write;

use fabula_core::events::ListingOutput;
use fabula_core::types::Language;

use crate::catalog::SymbolCatalog;
use crate::collocations::NgramTable;
use crate::cooccurrence::CooccurrenceTable;
use crate::frequency::TermFrequency;
use crate::kwic::KwicResult;
use crate::pragmatics::PragmaticIndicators;
use crate::readability::{ReadabilityResult, SentenceReadability};

/// Characters of a sentence shown in per-sentence listings.
const SENTENCE_PREVIEW_CHARS: usize = 70;

/// Numbered listing with a trailing note when truncated.
pub fn listing_body(listing: &ListingOutput) -> String {
    let mut body = String::new();
    for (i, item) in listing.items.iter().enumerate() {
        let _ = writeln!(body, "{}. {}", i + 1, item);
    }
    if listing.is_truncated() {
        let hidden = listing.total - listing.items.len() as u64;
        let _ = writeln!(body, "\n... and {hidden} more results ({}).", listing.summary());
    }
    body
}

/// One `CODE: description` line per catalog entry.
pub fn catalog_body(catalog: &SymbolCatalog) -> String {
    let mut body = String::new();
    for symbol in catalog.iter() {
        let _ = writeln!(body, "  - {}: {}", symbol.code, symbol.description);
    }
    body
}

pub fn cooccurrence_body(table: &CooccurrenceTable, window_size: usize, top: usize) -> String {
    let mut body = format!(
        "Co-occurrences (window of {window_size} words, {} windows):\n",
        table.windows()
    );
    if table.is_empty() {
        body.push_str("No co-occurring pairs found.\n");
        return body;
    }
    let _ = writeln!(body, "Top {} of {} pairs:", top.min(table.len()), table.len());
    for (pair, count) in table.top(top) {
        let _ = writeln!(body, "  ({}, {}): {count}", pair.first(), pair.second());
    }
    body
}

pub fn frequency_body(rows: &[TermFrequency], total_words: usize) -> String {
    let mut body = format!("Term frequencies ({total_words} words counted):\n");
    if rows.is_empty() {
        body.push_str("No terms left to count.\n");
        return body;
    }
    for (rank, row) in rows.iter().enumerate() {
        let _ = writeln!(body, "{:>3}. {}: {}", rank + 1, row.term, row.count);
    }
    body
}

pub fn collocations_body(table: &NgramTable, top: usize) -> String {
    let mut body = format!(
        "Collocations of {} words ({} positions):\n",
        table.n(),
        table.positions()
    );
    if table.is_empty() {
        let _ = writeln!(body, "Text too short for {}-grams.", table.n());
        return body;
    }
    let _ = writeln!(body, "Top {} of {} n-grams:", top.min(table.len()), table.len());
    for collocation in table.top(top) {
        let _ = writeln!(body, "  \"{}\": {}", collocation.text(), collocation.count);
    }
    body
}

pub fn indicators_body(indicators: &PragmaticIndicators) -> String {
    let mut body = String::from("Conversational indicators (surface signals only):\n");
    let _ = writeln!(body, "Sentences: {}", indicators.sentence_count);
    let _ = writeln!(body, "Tokens (words and punctuation): {}", indicators.token_count);

    match indicators.average_sentence_length {
        Some(average) => {
            let _ = writeln!(body, "Average sentence length (alphabetic words): {average:.2}");
            if indicators.flagged_sentences.is_empty() {
                body.push_str("\nSentence lengths are within the usual range.\n");
            } else {
                body.push_str("\nSentence length flags:\n");
                for flag in &indicators.flagged_sentences {
                    let _ = writeln!(
                        body,
                        "- Sentence {} ({} words): {}. \"{}\"",
                        flag.index + 1,
                        flag.words,
                        flag.kind.describe(),
                        preview(&flag.sentence)
                    );
                }
            }
        }
        None => body.push_str("Average sentence length: N/A (no alphabetic words)\n"),
    }

    if indicators.repeated_words.is_empty() {
        body.push_str("\nNo consecutive repeated words.\n");
    } else {
        let _ = writeln!(
            body,
            "\nConsecutive repeated words: {}",
            indicators.repeated_words.join(", ")
        );
    }

    if indicators.hedging_terms.is_empty() {
        body.push_str("\nNo hedging terms found.\n");
    } else {
        let _ = writeln!(body, "\nHedging terms: {}", indicators.hedging_terms.join(", "));
    }
    body
}

pub fn kwic_body(result: &KwicResult, target: &str, context_width: usize) -> String {
    let mut body = format!(
        "Keyword in context for '{}' (context: {context_width} tokens):\n",
        target.trim()
    );
    if result.total_occurrences == 0 {
        body.push_str("No occurrences found.\n");
        return body;
    }
    for line in result.matches.iter().map(|m| m.render()) {
        body.push_str(&line);
        body.push('\n');
    }
    if result.is_truncated() {
        let _ = writeln!(
            body,
            "\nShowing the first {} of {} occurrences.",
            result.matches.len(),
            result.total_occurrences
        );
    } else {
        let _ = writeln!(body, "\n{} occurrences.", result.total_occurrences);
    }
    body
}

pub fn readability_body(result: &ReadabilityResult, language: Language) -> String {
    let mut body = String::from("Global readability index:\n");
    let _ = writeln!(body, "Letters (alphabetic): {}", result.letters);
    let _ = writeln!(body, "Words (alphabetic): {}", result.words);
    let _ = writeln!(body, "Sentences: {}", result.sentences);
    let _ = writeln!(body, "Score: {:.2}", result.score);
    let _ = writeln!(body, "Band: {} ({})", result.band, result.band.audience());
    if !language.matches_readability_calibration() {
        let _ = writeln!(body, "\n{}", calibration_note(language));
    }
    body
}

pub fn sentence_readability_body(
    rows: &[SentenceReadability],
    max_listed: usize,
    language: Language,
) -> String {
    let mut body = String::from("Readability per sentence:\n");
    for row in rows.iter().take(max_listed) {
        let preview = preview(&row.sentence);
        match &row.result {
            Some(result) => {
                let _ = writeln!(
                    body,
                    "Sentence {}: \"{preview}\"\n  Score: {:.2} ({}) [L:{}, W:{}]",
                    row.index + 1,
                    result.score,
                    result.band,
                    result.letters,
                    result.words
                );
            }
            None => {
                let _ = writeln!(
                    body,
                    "Sentence {}: \"{preview}\" - Score: N/A (0 words)",
                    row.index + 1
                );
            }
        }
    }
    if rows.len() > max_listed {
        let _ = writeln!(
            body,
            "\n... listing limited to the first {max_listed} of {} sentences.",
            rows.len()
        );
    }
    if !language.matches_readability_calibration() {
        let _ = writeln!(body, "\n{}", calibration_note(language));
    }
    body
}

/// Advisory text for scoring a language the formula was not calibrated on.
pub fn calibration_note(language: Language) -> String {
    format!(
        "The readability index is calibrated for Italian; the configured language is '{language}'. \
         The score is computed anyway and may be misleading."
    )
}

fn preview(sentence: &str) -> String {
    let mut chars = sentence.chars();
    let head: String = chars.by_ref().take(SENTENCE_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readability::score;

    #[test]
    fn test_listing_body_numbers_and_truncation_note() {
        let listing = ListingOutput {
            title: "Permutations".into(),
            items: vec!["a".into(), "b".into()],
            total: 6,
        };
        let body = listing_body(&listing);
        assert!(body.starts_with("1. a\n2. b\n"));
        assert!(body.contains("4 more results (2 of 6 total)"));
    }

    #[test]
    fn test_listing_body_complete_has_no_note() {
        let listing = ListingOutput {
            title: "Combinations".into(),
            items: vec!["a".into()],
            total: 1,
        };
        assert_eq!(listing_body(&listing), "1. a\n");
    }

    #[test]
    fn test_readability_body_flags_other_language() {
        let result = score(10, 100, 500).unwrap();
        let italian = readability_body(&result, Language::Italian);
        assert!(italian.contains("Score: 69.00"));
        assert!(italian.contains("Band: Easy"));
        assert!(!italian.contains("calibrated"));
        let english = readability_body(&result, Language::English);
        assert!(english.contains("'english'"));
    }

    #[test]
    fn test_frequency_body_ranks_rows() {
        let rows = crate::frequency::term_frequencies(&["re", "drago", "re"], 5).unwrap();
        let body = frequency_body(&rows, 3);
        assert!(body.starts_with("Term frequencies (3 words counted):\n"));
        assert!(body.contains("  1. re: 2\n"));
        assert!(body.contains("  2. drago: 1\n"));
        assert!(frequency_body(&[], 0).contains("No terms left"));
    }

    #[test]
    fn test_collocations_body_short_text() {
        let table = crate::collocations::ngrams(&["re"], 2).unwrap();
        assert!(collocations_body(&table, 10).contains("Text too short for 2-grams."));
        let table = crate::collocations::ngrams(&["il", "re", "il", "re"], 2).unwrap();
        let body = collocations_body(&table, 1);
        assert!(body.contains("Top 1 of 2 n-grams:"));
        assert!(body.contains("\"il re\": 2"));
    }

    #[test]
    fn test_preview_truncates_long_sentences() {
        let long = "x".repeat(100);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), SENTENCE_PREVIEW_CHARS + 3);
        assert_eq!(preview("short"), "short");
    }
}
