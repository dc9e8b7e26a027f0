use fabula_analysis::collocations::ngrams;
use fabula_analysis::frequency::count_terms;
use proptest::prelude::*;

fn small_vocab_stream() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(vec!["re", "drago", "bosco", "figlia"]), 0..80)
        .prop_map(|words| words.into_iter().map(String::from).collect())
}

proptest! {
    #[test]
    fn term_counts_sum_to_stream_length(words in small_vocab_stream()) {
        let table = count_terms(&words);
        let sum: u64 = table.ranked().iter().map(|r| r.count).sum();
        prop_assert_eq!(sum, words.len() as u64);
    }

    #[test]
    fn term_ranking_is_count_descending_then_term(words in small_vocab_stream()) {
        let ranked = count_terms(&words).ranked();
        for w in ranked.windows(2) {
            prop_assert!(w[0].count > w[1].count || (w[0].count == w[1].count && w[0].term < w[1].term));
        }
    }

    #[test]
    fn ngram_positions_match_stream_length(words in small_vocab_stream(), n in 2usize..=5) {
        let table = ngrams(&words, n).unwrap();
        let expected = words.len().checked_sub(n).map_or(0, |d| d + 1);
        prop_assert_eq!(table.positions(), expected);
        let sum: u64 = table.ranked().iter().map(|c| c.count).sum();
        prop_assert_eq!(sum, expected as u64);
    }

    #[test]
    fn ngram_ranking_is_count_descending_then_ngram(words in small_vocab_stream(), n in 2usize..=5) {
        let ranked = ngrams(&words, n).unwrap().ranked();
        for w in ranked.windows(2) {
            prop_assert!(w[0].count > w[1].count || (w[0].count == w[1].count && w[0].words < w[1].words));
            prop_assert_eq!(w[0].words.len(), n);
        }
    }
}
