//! # packs-core: Pure Pack-Selection Logic
//!
//! Given a catalog of fixed pack sizes and an order for N widgets, decides
//! which packs to ship. Every function here is pure: no I/O, no global
//! state, safe to call from any number of threads at once.
//!
//! ## Shipping Rules
//! 1. Only whole packs are shipped. Packs are never broken open.
//! 2. Within rule 1, ship no more widgets than necessary.
//! 3. Within rules 1 and 2, ship as few packs as possible.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Widget Packs Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    packs-cli (console harness)                  │   │
//! │  │    args / env config ──► dispatch ──► text or JSON output       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ packs-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐      ┌───────────┐      ┌───────────┐        │   │
//! │  │   │ dispatch  │─1st─►│   exact   │      │  greedy   │        │   │
//! │  │   │ validate, │      │ DFS over  │      │ closest + │        │   │
//! │  │   │ pick best │─2nd─────────────────────►│ fixpoint  │        │   │
//! │  │   └───────────┘      └───────────┘      └───────────┘        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Validated list of pack sizes
//! - [`dispatch`] - Exact-first, greedy-fallback decision procedure
//! - [`error`] - Domain error types
//! - [`exact`] - Exact-sum combination search
//! - [`greedy`] - Greedy selection with fixpoint refinement
//! - [`types`] - Result types (PackSelection, OrderPlan, ...)
//! - [`validation`] - Order and catalog checks
//!
//! ## Example Usage
//!
//! ```rust
//! use packs_core::{resolve_order, STANDARD_PACK_SIZES};
//!
//! // 251 widgets: one 500 pack beats two 250 packs.
//! let selection = resolve_order(&STANDARD_PACK_SIZES, 251).unwrap();
//! assert_eq!(selection.count_of(500), 1);
//! assert_eq!(selection.total_packs(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod dispatch;
pub mod error;
pub mod exact;
pub mod greedy;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use dispatch::{fewest_packs, resolve_order, DispatchOptions, Dispatcher};
pub use error::{PackError, PackResult, ValidationError};
pub use exact::{find_exact_combinations, ExactMatcher};
pub use greedy::GreedyRefiner;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The standard five-pack catalog, largest first.
pub const STANDARD_PACK_SIZES: [i64; 5] = [5000, 2000, 1000, 500, 250];

/// Extra refinement passes allowed on top of one per catalog entry.
///
/// Real catalogs settle within two passes; the limit only exists so a
/// pathological catalog fails with `NonConvergence` instead of spinning.
pub const REFINEMENT_SLACK: usize = 4;
