//! # Validation Module
//!
//! Input validation for orders and pack catalogs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI (packs-cli)                                              │
//! │  ├── Parsing (clap, env config)                                        │
//! │  └── Reports errors on stderr                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── quantity > 0                                                      │
//! │  └── catalog non-empty, sizes > 0, no duplicates                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Algorithms (exact, greedy)                                   │
//! │  └── Assume validated input, never re-check                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use packs_core::validation::{validate_order_quantity, validate_pack_sizes};
//!
//! assert!(validate_order_quantity(251).is_ok());
//! assert!(validate_pack_sizes(&[5000, 2000, 1000, 500, 250]).is_ok());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an order quantity.
///
/// ## Rules
/// - Must be positive (> 0). Nobody orders zero widgets.
///
/// ## Example
/// ```rust
/// use packs_core::validation::validate_order_quantity;
///
/// assert!(validate_order_quantity(1).is_ok());
/// assert!(validate_order_quantity(0).is_err());
/// assert!(validate_order_quantity(-250).is_err());
/// ```
pub fn validate_order_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
            value: quantity,
        });
    }

    Ok(())
}

/// Validates a list of pack sizes.
///
/// ## Rules
/// - Must not be empty
/// - Every size must be positive (> 0)
/// - No size may appear twice
///
/// Order is not checked: callers may list sizes either way round.
pub fn validate_pack_sizes(sizes: &[i64]) -> ValidationResult<()> {
    if sizes.is_empty() {
        return Err(ValidationError::Required {
            field: "pack sizes".to_string(),
        });
    }

    let mut seen = HashSet::with_capacity(sizes.len());
    for &size in sizes {
        if size <= 0 {
            return Err(ValidationError::MustBePositive {
                field: "pack size".to_string(),
                value: size,
            });
        }
        if !seen.insert(size) {
            return Err(ValidationError::Duplicate {
                field: "pack size".to_string(),
                value: size,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
