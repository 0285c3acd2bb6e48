//! Property-based tests for the pack-selection pipeline.

use proptest::prelude::*;

use packs_core::greedy::{collect_packs, GreedyRefiner};
use packs_core::{
    fewest_packs, find_exact_combinations, resolve_order, Catalog, Dispatcher, ExactMatcher,
    Strategy as PlanStrategy,
};

/// Distinct pack sizes, at least 5 each so the exact search stays small.
fn arb_sizes() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::btree_set(5i64..=60, 1..=4)
        .prop_map(|set| set.into_iter().collect::<Vec<i64>>())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn never_ships_less_than_ordered(sizes in arb_sizes(), quantity in 1i64..=300) {
        let selection = resolve_order(&sizes, quantity).unwrap();
        prop_assert!(selection.total_units() >= quantity);
    }

    #[test]
    fn exact_match_is_always_preferred(sizes in arb_sizes(), quantity in 1i64..=300) {
        let catalog = Catalog::new(sizes.clone()).unwrap();
        let exact = find_exact_combinations(&catalog.ascending(), quantity);
        let plan = Dispatcher::new().plan(&catalog, quantity).unwrap();

        if exact.is_empty() {
            prop_assert_eq!(plan.strategy, PlanStrategy::Greedy);
        } else {
            prop_assert_eq!(plan.strategy, PlanStrategy::Exact);
            prop_assert_eq!(plan.total_units(), quantity);
            let fewest = exact.iter().map(Vec::len).min().unwrap() as u64;
            prop_assert_eq!(plan.total_packs(), fewest);
        }
    }

    #[test]
    fn refinement_stops_only_when_nothing_improves(sizes in arb_sizes(), quantity in 1i64..=300) {
        let catalog = Catalog::new(sizes).unwrap();
        let descending = catalog.descending();
        let converged = GreedyRefiner::for_catalog(catalog.len())
            .refine(&descending, quantity)
            .unwrap();

        let again = collect_packs(&descending, converged.total_units());
        let improves = again.total_units() < converged.total_units()
            || (again.total_units() == converged.total_units()
                && again.total_packs() < converged.total_packs());
        prop_assert!(!improves);
    }

    #[test]
    fn single_pack_order_ships_that_pack(
        sizes in arb_sizes(),
        pick in any::<prop::sample::Index>(),
    ) {
        let size = sizes[pick.index(sizes.len())];
        let selection = resolve_order(&sizes, size).unwrap();
        prop_assert_eq!(selection.total_packs(), 1);
        prop_assert_eq!(selection.count_of(size), 1);
    }

    #[test]
    fn fewest_search_picks_what_full_search_picks(sizes in arb_sizes(), target in 1i64..=300) {
        let mut ascending = sizes;
        ascending.sort_unstable();
        let matcher = ExactMatcher::new();

        let all = matcher.search(&ascending, target).unwrap();
        let fewest = matcher.search_fewest(&ascending, target).unwrap();
        prop_assert_eq!(fewest, fewest_packs(&all).cloned());
    }

    #[test]
    fn exact_combinations_are_sorted_and_sum_to_target(sizes in arb_sizes(), target in 1i64..=200) {
        let mut ascending = sizes;
        ascending.sort_unstable();
        let found = find_exact_combinations(&ascending, target);

        for combination in &found {
            prop_assert_eq!(combination.iter().sum::<i64>(), target);
            prop_assert!(combination.windows(2).all(|w| w[0] <= w[1]));
        }
        let mut deduped = found.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), found.len());
    }
}

#[test]
fn standard_catalog_scenarios() {
    let expected: [(i64, i64, u64); 8] = [
        (1, 250, 1),
        (250, 250, 1),
        (251, 500, 1),
        (500, 500, 1),
        (501, 750, 2),
        (11_999, 12_000, 3),
        (12_000, 12_000, 3),
        (12_001, 12_250, 4),
    ];
    for (quantity, units, packs) in expected {
        let plan = Dispatcher::new()
            .plan(&Catalog::standard(), quantity)
            .unwrap();
        assert_eq!(plan.total_units(), units, "units for {quantity}");
        assert_eq!(plan.total_packs(), packs, "packs for {quantity}");
    }
}
