//! # Greedy Refiner
//!
//! Fallback used when no combination of packs matches an order exactly.
//!
//! ## Two Phases
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Single pass (collect_packs)                                         │
//! │     remaining ≥ largest pack? → take largest packs                      │
//! │     otherwise               → take the pack closest to remaining        │
//! │     repeat until remaining ≤ 0 (the last pack may overshoot)            │
//! │                                                                         │
//! │  2. Refinement (GreedyRefiner::refine)                                  │
//! │     run the single pass again on the units the last pass shipped        │
//! │        more units       → keep previous, stop                           │
//! │        same units       → keep the one with fewer packs                 │
//! │        identical result → fixpoint, stop                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Example with `[5000, 2000, 1000, 500, 250]` and an order of 251: the first
//! pass picks 250 (closest to 251) then 250 again for the last unit, shipping
//! 500 in two packs. Re-running on 500 picks a single 500 pack: same units,
//! fewer packs, so it wins.

use tracing::debug;

use crate::error::{PackError, PackResult};
use crate::types::PackSelection;
use crate::validation::validate_order_quantity;
use crate::REFINEMENT_SLACK;

/// Index of the pack size closest to `remaining` (smallest `|remaining - size|`).
///
/// Ties go to the first such size in `sizes`, which for a descending catalog
/// is the larger pack. `None` only for an empty slice.
///
/// ## Example
/// ```rust
/// use packs_core::greedy::closest_pack_index;
///
/// assert_eq!(closest_pack_index(&[5000, 2000, 1000, 500, 250], 251), Some(4));
/// // 750 is 250 away from both 1000 and 500: the first one wins.
/// assert_eq!(closest_pack_index(&[5000, 2000, 1000, 500, 250], 750), Some(2));
/// ```
pub fn closest_pack_index(sizes: &[i64], remaining: i64) -> Option<usize> {
    sizes
        .iter()
        .enumerate()
        .min_by_key(|&(_, &size)| remaining.abs_diff(size))
        .map(|(index, _)| index)
}

/// One greedy pass over a descending catalog.
///
/// The returned selection has one line per entry of `descending`, in the same
/// order. Its total is always at least `target`. Returns an empty selection
/// for `target <= 0` or an empty catalog.
pub fn collect_packs(descending: &[i64], target: i64) -> PackSelection {
    let mut selection = PackSelection::empty(descending);
    let Some(&largest) = descending.first() else {
        return selection;
    };

    let mut remaining = target;
    while remaining > 0 {
        if remaining >= largest {
            // Same as taking one largest pack per iteration, in one step.
            let packs = remaining / largest;
            selection.add_packs(0, packs as u64);
            remaining -= packs * largest;
            continue;
        }

        let Some(index) = closest_pack_index(descending, remaining) else {
            break;
        };
        selection.add_packs(index, 1);
        remaining -= descending[index];
    }

    selection
}

/// Rejects targets whose greedy shipment could overflow `i64`.
///
/// A pass overshoots its target by less than one largest pack, and a
/// refinement pass starts from the previous total, so every total seen stays
/// below `target + 2 * largest`.
fn check_headroom(descending: &[i64], target: i64) -> PackResult<()> {
    let Some(&largest) = descending.first() else {
        return Ok(());
    };
    let headroom = largest.checked_mul(2);
    match headroom.and_then(|slack| target.checked_add(slack)) {
        Some(_) => Ok(()),
        None => Err(PackError::OrderTooLarge {
            quantity: target,
            largest,
        }),
    }
}

/// Greedy selection with fixpoint refinement.
#[derive(Debug, Clone, Copy)]
pub struct GreedyRefiner {
    max_passes: usize,
}

impl GreedyRefiner {
    /// A refiner whose pass limit suits a catalog of `catalog_len` sizes.
    pub fn for_catalog(catalog_len: usize) -> Self {
        GreedyRefiner {
            max_passes: catalog_len + REFINEMENT_SLACK,
        }
    }

    /// A refiner with an explicit pass limit.
    pub fn with_max_passes(max_passes: usize) -> Self {
        GreedyRefiner { max_passes }
    }

    /// Runs the single pass, then refines until the result stops changing.
    ///
    /// `descending` must be sorted largest first with positive entries.
    ///
    /// ## Errors
    /// - [`PackError::InvalidOrder`] for `target <= 0`
    /// - [`PackError::OrderTooLarge`] if the overshoot could overflow `i64`
    /// - [`PackError::NonConvergence`] if the pass limit is reached
    ///
    /// ## Example
    /// ```rust
    /// use packs_core::greedy::GreedyRefiner;
    ///
    /// let sizes = [5000, 2000, 1000, 500, 250];
    /// let selection = GreedyRefiner::for_catalog(sizes.len()).refine(&sizes, 251).unwrap();
    /// assert_eq!(selection.count_of(500), 1);
    /// assert_eq!(selection.total_packs(), 1);
    /// ```
    pub fn refine(&self, descending: &[i64], target: i64) -> PackResult<PackSelection> {
        validate_order_quantity(target).map_err(PackError::InvalidOrder)?;
        check_headroom(descending, target)?;

        let mut current = collect_packs(descending, target);

        for pass in 1..=self.max_passes {
            let units = current.total_units();
            let candidate = collect_packs(descending, units);

            if candidate == current {
                debug!(order = target, pass, units, "Refinement reached fixpoint");
                return Ok(current);
            }

            let candidate_units = candidate.total_units();
            match candidate_units.cmp(&units) {
                std::cmp::Ordering::Greater => {
                    debug!(
                        order = target,
                        pass,
                        units,
                        candidate_units,
                        "Refinement rejected: more units"
                    );
                    return Ok(current);
                }
                std::cmp::Ordering::Equal => {
                    if candidate.total_packs() >= current.total_packs() {
                        debug!(
                            order = target,
                            pass,
                            units,
                            "Refinement kept: no fewer packs"
                        );
                        return Ok(current);
                    }
                    debug!(
                        order = target,
                        pass,
                        units,
                        packs = candidate.total_packs(),
                        "Refinement adopted: fewer packs"
                    );
                    current = candidate;
                }
                std::cmp::Ordering::Less => {
                    debug!(
                        order = target,
                        pass,
                        units,
                        candidate_units,
                        "Refinement adopted: fewer units"
                    );
                    current = candidate;
                }
            }
        }

        Err(PackError::NonConvergence {
            passes: self.max_passes,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
