use fabula_analysis::cooccurrence::analyze;
use proptest::prelude::*;

fn small_vocab_stream() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d", "e"]), 0..60)
        .prop_map(|words| words.into_iter().map(String::from).collect())
}

proptest! {
    #[test]
    fn window_count_matches_stream_length(tokens in small_vocab_stream(), size in 2usize..=10) {
        let table = analyze(&tokens, size).unwrap();
        let expected = tokens.len().checked_sub(size).map_or(0, |d| d + 1);
        prop_assert_eq!(table.windows(), expected);
    }

    #[test]
    fn pairs_are_canonical_and_distinct(tokens in small_vocab_stream(), size in 2usize..=6) {
        let table = analyze(&tokens, size).unwrap();
        for (pair, count) in table.ranked() {
            prop_assert!(pair.first() < pair.second());
            prop_assert!(count >= 1);
            prop_assert!(count as usize <= table.windows());
        }
    }

    #[test]
    fn ranking_is_count_descending_then_pair(tokens in small_vocab_stream(), size in 2usize..=6) {
        let table = analyze(&tokens, size).unwrap();
        let ranked = table.ranked();
        for w in ranked.windows(2) {
            let ((p0, c0), (p1, c1)) = (&w[0], &w[1]);
            prop_assert!(c0 > c1 || (c0 == c1 && p0 < p1));
        }
    }

    #[test]
    fn analysis_is_idempotent(tokens in small_vocab_stream(), size in 2usize..=6) {
        let a = analyze(&tokens, size).unwrap().to_rows();
        let b = analyze(&tokens, size).unwrap().to_rows();
        prop_assert_eq!(a, b);
    }
}
