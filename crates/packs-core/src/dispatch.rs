//! # Dispatcher
//!
//! Turns an order into a pack selection by trying the exact search first and
//! falling back to the greedy refiner.
//!
//! ## Decision Procedure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  quantity > 0? catalog valid? ──no──► PackError (nothing computed)      │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  ExactMatcher on ascending sizes                                        │
//! │        │                                                                │
//! │        ├── combinations found ──► fewest packs ──► Strategy::Exact      │
//! │        │                                                                │
//! │        └── none ──► GreedyRefiner on descending sizes ──► Strategy::Greedy
//! │                                                                         │
//! │  Either way the selection is laid out in the catalog's listed order.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::cmp::Ordering;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{PackError, PackResult};
use crate::exact::ExactMatcher;
use crate::greedy::GreedyRefiner;
use crate::types::{OrderPlan, PackSelection, Strategy};
use crate::validation::validate_order_quantity;

/// Knobs for [`Dispatcher::plan`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Return every exact combination found alongside the chosen selection.
    pub include_combinations: bool,
    /// Node budget for the exact search. `None` searches exhaustively.
    pub search_budget: Option<u64>,
}

/// Composes the exact and greedy stages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    options: DispatchOptions,
}

impl Dispatcher {
    /// A dispatcher with default options (no combinations, no budget).
    pub fn new() -> Self {
        Dispatcher::default()
    }

    /// A dispatcher with the given options.
    pub fn with_options(options: DispatchOptions) -> Self {
        Dispatcher { options }
    }

    /// Plans one order against a catalog.
    ///
    /// ## Errors
    /// - [`PackError::InvalidOrder`] for `quantity <= 0`
    /// - [`PackError::SearchBudgetExhausted`] if a budget is set and runs out
    /// - [`PackError::OrderTooLarge`] if a greedy shipment could overflow `i64`
    /// - [`PackError::NonConvergence`] if refinement hits its pass limit
    ///
    /// ## Example
    /// ```rust
    /// use packs_core::{Catalog, Dispatcher, Strategy};
    ///
    /// let plan = Dispatcher::new().plan(&Catalog::standard(), 501).unwrap();
    /// assert_eq!(plan.strategy, Strategy::Greedy);
    /// assert_eq!(plan.total_units(), 750);
    /// assert_eq!(plan.overshoot(), 249);
    /// ```
    pub fn plan(&self, catalog: &Catalog, quantity: i64) -> PackResult<OrderPlan> {
        validate_order_quantity(quantity).map_err(PackError::InvalidOrder)?;

        let matcher = match self.options.search_budget {
            Some(budget) => ExactMatcher::with_budget(budget),
            None => ExactMatcher::new(),
        };
        let ascending = catalog.ascending();
        let (best, combinations) = if self.options.include_combinations {
            let all = matcher.search(&ascending, quantity)?;
            (fewest_packs(&all).cloned(), Some(all))
        } else {
            (matcher.search_fewest(&ascending, quantity)?, None)
        };

        let (selection, strategy) = match best {
            Some(best) => {
                debug!(quantity, packs = best.len(), "Exact combination selected");
                (
                    PackSelection::from_combination(catalog.sizes(), &best),
                    Strategy::Exact,
                )
            }
            None => {
                let descending = catalog.descending();
                let refined = GreedyRefiner::for_catalog(catalog.len())
                    .refine(&descending, quantity)?;
                debug!(
                    quantity,
                    units = refined.total_units(),
                    packs = refined.total_packs(),
                    "No exact combination, greedy selection used"
                );
                (refined.realigned(catalog.sizes()), Strategy::Greedy)
            }
        };

        Ok(OrderPlan {
            requested: quantity,
            selection,
            strategy,
            combinations,
        })
    }
}

/// Resolves an order against a list of pack sizes, in any order.
///
/// The selection's lines follow the order of `sizes`.
///
/// ## Errors
/// - [`PackError::InvalidOrder`] for `quantity <= 0` (checked first)
/// - [`PackError::InvalidCatalog`] for an empty list, a size `<= 0`, or a
///   duplicate size
///
/// ## Example
/// ```rust
/// use packs_core::resolve_order;
///
/// let selection = resolve_order(&[5000, 2000, 1000, 500, 250], 12_001).unwrap();
/// assert_eq!(selection.count_of(5000), 2);
/// assert_eq!(selection.count_of(2000), 1);
/// assert_eq!(selection.count_of(250), 1);
///
/// assert!(resolve_order(&[250], 0).is_err());
/// ```
pub fn resolve_order(sizes: &[i64], quantity: i64) -> PackResult<PackSelection> {
    validate_order_quantity(quantity).map_err(PackError::InvalidOrder)?;
    let catalog = Catalog::new(sizes)?;
    Ok(Dispatcher::new().plan(&catalog, quantity)?.selection)
}

/// Picks the combination with the fewest packs.
///
/// Ties go to the lexicographically greatest ascending sequence, i.e. the
/// one the search finds last, which leans towards larger packs.
pub fn fewest_packs(combinations: &[Vec<i64>]) -> Option<&Vec<i64>> {
    combinations
        .iter()
        .min_by(|a, b| match a.len().cmp(&b.len()) {
            Ordering::Equal => b.cmp(a),
            other => other,
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::STANDARD_PACK_SIZES;

    const SIX: [i64; 6] = [5000, 2000, 1000, 500, 251, 250];

    fn counts(selection: &PackSelection) -> Vec<u64> {
        selection.lines().iter().map(|l| l.count).collect()
    }

    fn resolve(sizes: &[i64], quantity: i64) -> Vec<u64> {
        counts(&resolve_order(sizes, quantity).unwrap())
    }

    #[test]
    fn test_standard_catalog_orders() {
        let five = STANDARD_PACK_SIZES;
        assert_eq!(resolve(&five, 1), vec![0, 0, 0, 0, 1]);
        assert_eq!(resolve(&five, 2), vec![0, 0, 0, 0, 1]);
        assert_eq!(resolve(&five, 249), vec![0, 0, 0, 0, 1]);
        assert_eq!(resolve(&five, 250), vec![0, 0, 0, 0, 1]);
        assert_eq!(resolve(&five, 251), vec![0, 0, 0, 1, 0]);
        assert_eq!(resolve(&five, 499), vec![0, 0, 0, 1, 0]);
        assert_eq!(resolve(&five, 500), vec![0, 0, 0, 1, 0]);
        assert_eq!(resolve(&five, 501), vec![0, 0, 0, 1, 1]);
        assert_eq!(resolve(&five, 11_999), vec![2, 1, 0, 0, 0]);
        assert_eq!(resolve(&five, 12_000), vec![2, 1, 0, 0, 0]);
        assert_eq!(resolve(&five, 12_001), vec![2, 1, 0, 0, 1]);
    }

    #[test]
    fn test_six_pack_catalog_orders() {
        assert_eq!(resolve(&SIX, 251), vec![0, 0, 0, 0, 1, 0]);
        assert_eq!(resolve(&SIX, 501), vec![0, 0, 0, 0, 1, 1]);
        assert_eq!(resolve(&SIX, 502), vec![0, 0, 0, 0, 2, 0]);
        assert_eq!(resolve(&SIX, 751), vec![0, 0, 0, 1, 1, 0]);
        assert_eq!(resolve(&SIX, 1_502), vec![0, 0, 1, 0, 2, 0]);
    }

    #[test]
    fn test_exact_match_beats_greedy_overshoot() {
        // Greedy alone would ship 12_250; an exact six-pack combination exists.
        let plan = Dispatcher::new()
            .plan(&Catalog::new(SIX.to_vec()).unwrap(), 12_001)
            .unwrap();
        assert_eq!(plan.strategy, Strategy::Exact);
        assert_eq!(plan.total_units(), 12_001);
        assert_eq!(plan.total_packs(), 6);
        assert_eq!(counts(&plan.selection), vec![2, 0, 1, 1, 1, 1]);
    }

    #[test]
    fn test_listed_order_is_preserved() {
        let selection = resolve_order(&[250, 500, 5000, 1000, 2000], 12_001).unwrap();
        let sizes: Vec<i64> = selection.lines().iter().map(|l| l.size).collect();
        assert_eq!(sizes, vec![250, 500, 5000, 1000, 2000]);
        assert_eq!(counts(&selection), vec![1, 0, 2, 0, 1]);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            resolve_order(&STANDARD_PACK_SIZES, 0),
            Err(PackError::InvalidOrder(_))
        ));
        assert!(matches!(
            resolve_order(&STANDARD_PACK_SIZES, -10),
            Err(PackError::InvalidOrder(_))
        ));
        assert!(matches!(
            resolve_order(&[], 10),
            Err(PackError::InvalidCatalog(_))
        ));
        assert!(matches!(
            resolve_order(&[500, 0], 10),
            Err(PackError::InvalidCatalog(_))
        ));
        // A bad order is reported before a bad catalog.
        assert!(matches!(
            resolve_order(&[], 0),
            Err(PackError::InvalidOrder(_))
        ));
    }

    #[test]
    fn test_order_too_large_for_catalog() {
        // Two packs of 2^62 would ship 2^63 units.
        let huge = 1_i64 << 62;
        let err = resolve_order(&[huge], huge + 1).unwrap_err();
        assert_eq!(
            err,
            PackError::OrderTooLarge {
                quantity: huge + 1,
                largest: huge,
            }
        );
        assert!(err.is_input_error());

        // An exact match never overshoots, so it is still allowed.
        let selection = resolve_order(&[huge], huge).unwrap();
        assert_eq!(selection.count_of(huge), 1);
    }

    #[test]
    fn test_combinations_on_request() {
        let catalog = Catalog::new(vec![500, 251, 250]).unwrap();

        let plan = Dispatcher::new().plan(&catalog, 751).unwrap();
        assert!(plan.combinations.is_none());

        let options = DispatchOptions {
            include_combinations: true,
            ..Default::default()
        };
        let plan = Dispatcher::with_options(options)
            .plan(&catalog, 751)
            .unwrap();
        assert_eq!(
            plan.combinations,
            Some(vec![vec![250, 250, 251], vec![251, 500]])
        );
        assert_eq!(counts(&plan.selection), vec![1, 1, 0]);
    }

    #[test]
    fn test_greedy_plan_has_empty_combinations() {
        let options = DispatchOptions {
            include_combinations: true,
            search_budget: None,
        };
        let plan = Dispatcher::with_options(options)
            .plan(&Catalog::standard(), 251)
            .unwrap();
        assert_eq!(plan.strategy, Strategy::Greedy);
        assert_eq!(plan.combinations, Some(vec![]));
    }

    #[test]
    fn test_search_budget_is_enforced() {
        let options = DispatchOptions {
            include_combinations: false,
            search_budget: Some(5),
        };
        let dispatcher = Dispatcher::with_options(options);
        assert_eq!(
            dispatcher.plan(&Catalog::standard(), 12_000),
            Err(PackError::SearchBudgetExhausted { budget: 5 })
        );
    }

    #[test]
    fn test_fewest_packs_tie_break() {
        let combinations = vec![
            vec![1, 1, 4],
            vec![2, 2, 2],
            vec![1, 5],
            vec![2, 4],
            vec![3, 3],
        ];
        assert_eq!(fewest_packs(&combinations), Some(&vec![3, 3]));
        assert_eq!(fewest_packs(&[]), None);
    }
}
