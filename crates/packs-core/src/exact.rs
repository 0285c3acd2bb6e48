//! # Exact Matcher
//!
//! Finds every combination of pack sizes that sums exactly to an order.
//!
//! ## Search Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sizes (ascending): [250, 251, 500]     target: 751                     │
//! │                                                                         │
//! │  [250] ─┬─ [250, 250] ─┬─ [250, 250, 250] → 1 left, 250 > 1: prune     │
//! │         │              └─ [250, 250, 251] ✔ 751                          │
//! │         ├─ [250, 251] ──── 250 left: 251 > 250: prune                   │
//! │         └─ [250, 500] ──── 1 left: prune                                │
//! │  [251] ─┬─ [251, 251] ──── 249 left: prune                              │
//! │         └─ [251, 500] ✔ 751                                              │
//! │  [500] ──── 251 left: 500 > 251: prune                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each level only tries sizes at or after the size chosen above it, so a
//! multiset like `{250, 250, 251}` is produced once, never as a permutation.
//! A size larger than what is left ends the level: every later size is
//! larger still.
//!
//! The depth-first walk keeps its own stack of chosen indices instead of
//! recursing, so large orders over small packs cannot overflow the call stack.

use tracing::debug;

use crate::error::{PackError, PackResult};

/// Finds every exact combination of `ascending` sizes summing to `target`.
///
/// Returns an empty set when nothing sums exactly, when `target <= 0`, or
/// when `ascending` is empty. Each combination lists its sizes smallest
/// first.
///
/// ## Example
/// ```rust
/// use packs_core::exact::find_exact_combinations;
///
/// let found = find_exact_combinations(&[250, 251, 500], 751);
/// assert_eq!(found, vec![vec![250, 250, 251], vec![251, 500]]);
///
/// assert!(find_exact_combinations(&[250, 500], 251).is_empty());
/// ```
pub fn find_exact_combinations(ascending: &[i64], target: i64) -> Vec<Vec<i64>> {
    // No budget, so the search cannot fail.
    ExactMatcher::new()
        .search(ascending, target)
        .unwrap_or_default()
}

/// Exact-sum search, optionally bounded by a node budget.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher {
    budget: Option<u64>,
}

impl ExactMatcher {
    /// An unbounded matcher.
    pub fn new() -> Self {
        ExactMatcher { budget: None }
    }

    /// A matcher that gives up after placing `budget` packs on the search path.
    pub fn with_budget(budget: u64) -> Self {
        ExactMatcher {
            budget: Some(budget),
        }
    }

    /// Runs the search and returns every exact combination.
    ///
    /// `ascending` must be sorted smallest first with positive entries; the
    /// pruning relies on it.
    ///
    /// ## Errors
    /// [`PackError::SearchBudgetExhausted`] if the budget runs out before
    /// the search space does.
    pub fn search(&self, ascending: &[i64], target: i64) -> PackResult<Vec<Vec<i64>>> {
        let mut found = Vec::new();
        let nodes = self.walk(ascending, target, &mut found)?;

        debug!(
            order = target,
            combinations = found.len(),
            nodes,
            "Exact search finished"
        );
        Ok(found)
    }

    /// Runs the search keeping only the combination with the fewest packs.
    ///
    /// Picks what [`fewest_packs`](crate::dispatch::fewest_packs) would pick
    /// from [`search`](Self::search), without holding every combination in
    /// memory. Branches that need more packs than the best combination so far
    /// are not walked.
    ///
    /// ## Example
    /// ```rust
    /// use packs_core::ExactMatcher;
    ///
    /// let best = ExactMatcher::new().search_fewest(&[250, 251, 500], 751).unwrap();
    /// assert_eq!(best, Some(vec![251, 500]));
    /// ```
    ///
    /// ## Errors
    /// [`PackError::SearchBudgetExhausted`] as for [`search`](Self::search).
    pub fn search_fewest(&self, ascending: &[i64], target: i64) -> PackResult<Option<Vec<i64>>> {
        let mut fewest = Fewest {
            largest: ascending.last().copied().unwrap_or(1),
            best: None,
            seen: 0,
        };
        let nodes = self.walk(ascending, target, &mut fewest)?;

        debug!(
            order = target,
            combinations = fewest.seen,
            nodes,
            "Fewest-pack search finished"
        );
        Ok(fewest.best)
    }

    /// Depth-first walk shared by both searches. Returns the nodes visited.
    fn walk<C: Collector>(
        &self,
        ascending: &[i64],
        target: i64,
        collector: &mut C,
    ) -> PackResult<u64> {
        debug_assert!(ascending.windows(2).all(|w| w[0] <= w[1]));

        if ascending.is_empty() || target <= 0 {
            return Ok(0);
        }

        // `path` holds indices into `ascending`, never decreasing.
        let mut path: Vec<usize> = Vec::new();
        let mut remaining = target;
        let mut next = 0usize;
        let mut nodes = 0u64;

        loop {
            if remaining == 0 {
                collector.record(ascending, &path);
            } else if next < ascending.len()
                && ascending[next] <= remaining
                && collector.worth_extending(path.len(), remaining)
            {
                nodes += 1;
                if let Some(budget) = self.budget {
                    if nodes > budget {
                        debug!(order = target, budget, "Exact search over budget");
                        return Err(PackError::SearchBudgetExhausted { budget });
                    }
                }

                // Same index again: a size may be reused.
                path.push(next);
                remaining -= ascending[next];
                continue;
            }

            // Backtrack and move on to the next larger size at that level.
            match path.pop() {
                Some(last) => {
                    remaining += ascending[last];
                    next = last + 1;
                }
                None => break,
            }
        }

        Ok(nodes)
    }
}

/// What the walk does with each exact combination it reaches.
trait Collector {
    /// `path` indexes into `ascending` and sums exactly to the target.
    fn record(&mut self, ascending: &[i64], path: &[usize]);

    /// False when nothing below a `depth`-pack path with `remaining` units
    /// left can be kept.
    fn worth_extending(&self, depth: usize, remaining: i64) -> bool;
}

impl Collector for Vec<Vec<i64>> {
    fn record(&mut self, ascending: &[i64], path: &[usize]) {
        self.push(path.iter().map(|&i| ascending[i]).collect());
    }

    fn worth_extending(&self, _depth: usize, _remaining: i64) -> bool {
        true
    }
}

/// Keeps the fewest-pack combination seen so far.
struct Fewest {
    largest: i64,
    best: Option<Vec<i64>>,
    seen: usize,
}

impl Collector for Fewest {
    fn record(&mut self, ascending: &[i64], path: &[usize]) {
        self.seen += 1;
        // Combinations arrive in ascending lexicographic order, so a later
        // one of the same length wins the tie.
        let keep = match &self.best {
            Some(best) => path.len() <= best.len(),
            None => true,
        };
        if keep {
            self.best = Some(path.iter().map(|&i| ascending[i]).collect());
        }
    }

    fn worth_extending(&self, depth: usize, remaining: i64) -> bool {
        let Some(best) = &self.best else {
            return true;
        };
        // Each further pack adds at most `largest` units.
        let needed = remaining / self.largest + i64::from(remaining % self.largest != 0);
        (depth as u64).saturating_add(needed as u64) <= best.len() as u64
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
