//! # Domain Types
//!
//! Result types returned by the pack-selection pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   OrderPlan     │   │  PackSelection  │   │    PackLine     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  requested      │──►│  lines ─────────┼──►│  size           │       │
//! │  │  selection      │   │  (catalog order)│   │  count          │       │
//! │  │  strategy       │   └─────────────────┘   └─────────────────┘       │
//! │  │  combinations?  │                                                    │
//! │  └─────────────────┘   ┌─────────────────┐                              │
//! │                        │    Strategy     │                              │
//! │                        │  Exact | Greedy │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Line Per Pack Size
//! A selection keeps one `(size, count)` line for every catalog entry, zero
//! counts included, so two selections over the same catalog compare equal
//! exactly when every count matches.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Pack Line
// =============================================================================

/// How many packs of one size are shipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PackLine {
    /// Units in one pack.
    pub size: i64,
    /// Packs of this size to ship.
    pub count: u64,
}

impl PackLine {
    /// Units shipped on this line (`size × count`).
    #[inline]
    pub fn units(&self) -> i64 {
        self.size * self.count as i64
    }
}

// =============================================================================
// Pack Selection
// =============================================================================

/// The multiset of packs chosen for an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PackSelection {
    lines: Vec<PackLine>,
}

impl PackSelection {
    /// A selection with a zero count for every given size.
    pub fn empty(sizes: &[i64]) -> Self {
        PackSelection {
            lines: sizes.iter().map(|&size| PackLine { size, count: 0 }).collect(),
        }
    }

    /// Builds a selection from a list of chosen pack sizes.
    ///
    /// `sizes` fixes the line order; `combination` may repeat sizes.
    /// Sizes not present in `sizes` are ignored.
    ///
    /// ## Example
    /// ```rust
    /// use packs_core::PackSelection;
    ///
    /// let selection = PackSelection::from_combination(&[500, 251, 250], &[250, 251, 251]);
    /// assert_eq!(selection.count_of(251), 2);
    /// assert_eq!(selection.count_of(500), 0);
    /// assert_eq!(selection.total_units(), 752);
    /// ```
    pub fn from_combination(sizes: &[i64], combination: &[i64]) -> Self {
        let mut selection = PackSelection::empty(sizes);
        for &picked in combination {
            if let Some(line) = selection.lines.iter_mut().find(|l| l.size == picked) {
                line.count += 1;
            }
        }
        selection
    }

    /// Adds `count` packs to the line at `index`.
    pub(crate) fn add_packs(&mut self, index: usize, count: u64) {
        if let Some(line) = self.lines.get_mut(index) {
            line.count += count;
        }
    }

    /// Returns the same counts laid out in the order of `sizes`.
    ///
    /// Used to map a selection computed over a sorted copy of the catalog
    /// back onto the order the caller listed the sizes in.
    pub fn realigned(&self, sizes: &[i64]) -> Self {
        PackSelection {
            lines: sizes
                .iter()
                .map(|&size| PackLine {
                    size,
                    count: self.count_of(size),
                })
                .collect(),
        }
    }

    /// All lines, zero counts included, in catalog order.
    pub fn lines(&self) -> &[PackLine] {
        &self.lines
    }

    /// Lines with a non-zero count.
    pub fn shipped(&self) -> impl Iterator<Item = &PackLine> {
        self.lines.iter().filter(|l| l.count > 0)
    }

    /// Number of packs of `size` in the selection (zero if absent).
    pub fn count_of(&self, size: i64) -> u64 {
        self.lines
            .iter()
            .find(|l| l.size == size)
            .map_or(0, |l| l.count)
    }

    /// Total units shipped (`Σ size × count`).
    ///
    /// Fits in an `i64` for every selection the pipeline hands out: the greedy
    /// stage refuses orders that could overflow.
    pub fn total_units(&self) -> i64 {
        self.lines.iter().map(PackLine::units).sum()
    }

    /// Total packs shipped (`Σ count`).
    pub fn total_packs(&self) -> u64 {
        self.lines.iter().map(|l| l.count).sum()
    }

    /// True if nothing is shipped.
    pub fn is_empty(&self) -> bool {
        self.total_packs() == 0
    }
}

impl fmt::Display for PackSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for line in self.shipped() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}x{}", line.count, line.size)?;
            first = false;
        }
        if first {
            write!(f, "nothing")?;
        }
        Ok(())
    }
}

// =============================================================================
// Strategy
// =============================================================================

/// Which stage of the pipeline produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Some combination of packs summed exactly to the order.
    Exact,
    /// No exact combination; greedy selection with refinement.
    Greedy,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Exact => write!(f, "exact"),
            Strategy::Greedy => write!(f, "greedy"),
        }
    }
}

// =============================================================================
// Order Plan
// =============================================================================

/// The full outcome of dispatching one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderPlan {
    /// Units the customer asked for.
    pub requested: i64,
    /// Packs to ship.
    pub selection: PackSelection,
    /// Stage that produced `selection`.
    pub strategy: Strategy,
    /// Every exact combination found, when the caller asked for them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combinations: Option<Vec<Vec<i64>>>,
}

impl OrderPlan {
    /// Total units shipped.
    #[inline]
    pub fn total_units(&self) -> i64 {
        self.selection.total_units()
    }

    /// Total packs shipped.
    #[inline]
    pub fn total_packs(&self) -> u64 {
        self.selection.total_packs()
    }

    /// Units shipped beyond the request. Zero for exact matches.
    #[inline]
    pub fn overshoot(&self) -> i64 {
        self.total_units() - self.requested
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
