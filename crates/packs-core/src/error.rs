//! # Error Types
//!
//! Domain-specific error types for packs-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  packs-core errors (this file)                                         │
//! │  ├── PackError        - Anything a dispatch call can fail with         │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  packs-cli errors (app)                                                │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  Flow: ValidationError → PackError → anyhow (CLI) → stderr             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending value in the message
//! 3. Errors are enum variants, never String
//! 4. All input errors are detected at the boundary, before any search work

use thiserror::Error;

// =============================================================================
// Pack Error
// =============================================================================

/// Errors produced while resolving an order into packs.
///
/// The algorithm is deterministic, so none of these are worth retrying:
/// the same input fails the same way every time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// The ordered quantity is zero or negative.
    ///
    /// ## When This Occurs
    /// - `resolve_order(&sizes, 0)`
    /// - `resolve_order(&sizes, -1)`
    #[error("Invalid order: {0}")]
    InvalidOrder(ValidationError),

    /// The pack catalog cannot be used.
    ///
    /// ## When This Occurs
    /// - Empty catalog
    /// - A pack size of zero or below
    /// - The same pack size listed twice
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(ValidationError),

    /// Packing the order could ship more units than an `i64` holds.
    ///
    /// The greedy stage may overshoot by up to two of the largest pack
    /// (one in the first pass, one more in a rejected refinement pass).
    ///
    /// ## When This Occurs
    /// - `resolve_order(&[1 << 62], (1 << 62) + 1)`
    #[error("Order of {quantity} is too large for packs of {largest}")]
    OrderTooLarge { quantity: i64, largest: i64 },

    /// The greedy refinement loop ran past its pass limit.
    ///
    /// Never expected for a valid catalog. Surfaced instead of returning a
    /// half-refined selection.
    #[error("Refinement did not converge within {passes} passes")]
    NonConvergence { passes: usize },

    /// The exact-combination search visited more nodes than the caller allowed.
    #[error("Exact search exceeded its budget of {budget} nodes")]
    SearchBudgetExhausted { budget: u64 },
}

impl PackError {
    /// Returns true for errors caused by the caller's input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PackError::InvalidOrder(_)
                | PackError::InvalidCatalog(_)
                | PackError::OrderTooLarge { .. }
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by [`crate::validation`] and wrapped into [`PackError`] by the
/// caller that knows which input (order or catalog) was at fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive, got {value}")]
    MustBePositive { field: String, value: i64 },

    /// Duplicate value (e.g., the same pack size listed twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PackError.
pub type PackResult<T> = Result<T, PackError>;

// =============================================================================
// Unit Tests
// =============================================================================
