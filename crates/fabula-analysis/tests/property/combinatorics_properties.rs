use std::collections::HashSet;

use fabula_analysis::combinatorics::estimate::{binomial, factorial};
use fabula_analysis::combinatorics::CombinatoricsEngine;
use fabula_analysis::SymbolCatalog;
use proptest::prelude::*;

fn code_list(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(1usize..=31, 1..=max)
        .prop_map(|ids| ids.into_iter().map(|i| format!("F{i}")).collect())
}

proptest! {
    #[test]
    fn permutation_count_is_factorial(codes in code_list(6)) {
        let engine = CombinatoricsEngine::default();
        let plots = engine.permute(&codes, SymbolCatalog::shared_default()).unwrap();
        prop_assert_eq!(plots.len() as u128, factorial(codes.len()).unwrap());
    }

    #[test]
    fn every_permutation_uses_the_same_descriptions(codes in code_list(5)) {
        let catalog = SymbolCatalog::shared_default();
        let engine = CombinatoricsEngine::default();
        let mut expected: Vec<&str> = codes.iter().map(|c| catalog.get(c).unwrap()).collect();
        expected.sort_unstable();
        for plot in engine.permute(&codes, catalog).unwrap() {
            let mut parts: Vec<&str> = plot.split(" -> ").collect();
            parts.sort_unstable();
            prop_assert_eq!(&parts, &expected);
        }
    }

    #[test]
    fn distinct_codes_give_distinct_permutations(n in 1usize..=6) {
        let codes: Vec<String> = (1..=n).map(|i| format!("F{i}")).collect();
        let engine = CombinatoricsEngine::default();
        let plots = engine.permute(&codes, SymbolCatalog::shared_default()).unwrap();
        let unique: HashSet<&String> = plots.iter().collect();
        prop_assert_eq!(unique.len(), plots.len());
    }

    #[test]
    fn combination_count_is_binomial((n, k) in (1usize..=10).prop_flat_map(|n| (Just(n), 1..=n))) {
        let codes: Vec<String> = (1..=n).map(|i| format!("F{i}")).collect();
        let engine = CombinatoricsEngine::default();
        let subsets = engine.combine(&codes, k, SymbolCatalog::shared_default()).unwrap();
        prop_assert_eq!(subsets.len() as u128, binomial(n, k).unwrap());
        for subset in &subsets {
            let parts: Vec<&str> = subset.split(", ").collect();
            prop_assert!(parts.windows(2).all(|w| w[0] <= w[1]), "unsorted: {}", subset);
        }
    }

    #[test]
    fn estimate_matches_iterator_total(codes in code_list(12)) {
        let engine = CombinatoricsEngine::default();
        let estimate = engine.estimate_permutations(&codes);
        let iter = engine.permute_iter(&codes, SymbolCatalog::shared_default()).unwrap();
        prop_assert_eq!(estimate.count, iter.total());
        prop_assert_eq!(estimate.requires_confirmation(), codes.len() > 8);
    }
}
