//! # Pack Catalog
//!
//! The validated list of pack sizes an order can be filled from.
//!
//! A `Catalog` can only be built through [`Catalog::new`] (or serde, which
//! goes through the same check), so every catalog handed to the algorithms
//! is non-empty, strictly positive and free of duplicates. The listed order is
//! kept for presenting results; the algorithms work on sorted copies.

use serde::{Deserialize, Serialize};

use crate::error::{PackError, PackResult};
use crate::validation::validate_pack_sizes;
use crate::STANDARD_PACK_SIZES;

/// A validated set of pack sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct Catalog {
    sizes: Vec<i64>,
}

impl Catalog {
    /// Validates and wraps a list of pack sizes.
    ///
    /// ## Example
    /// ```rust
    /// use packs_core::Catalog;
    ///
    /// let catalog = Catalog::new(vec![250, 5000, 500]).unwrap();
    /// assert_eq!(catalog.descending(), vec![5000, 500, 250]);
    ///
    /// assert!(Catalog::new(vec![]).is_err());
    /// assert!(Catalog::new(vec![500, 0]).is_err());
    /// ```
    pub fn new(sizes: impl Into<Vec<i64>>) -> PackResult<Self> {
        let sizes = sizes.into();
        validate_pack_sizes(&sizes).map_err(PackError::InvalidCatalog)?;
        Ok(Catalog { sizes })
    }

    /// The five-pack catalog `[5000, 2000, 1000, 500, 250]`.
    pub fn standard() -> Self {
        Catalog {
            sizes: STANDARD_PACK_SIZES.to_vec(),
        }
    }

    /// Pack sizes in the order they were listed.
    pub fn sizes(&self) -> &[i64] {
        &self.sizes
    }

    /// Number of pack sizes.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Always false: an empty catalog fails validation.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Sizes sorted smallest first (exact search order).
    pub fn ascending(&self) -> Vec<i64> {
        let mut sizes = self.sizes.clone();
        sizes.sort_unstable();
        sizes
    }

    /// Sizes sorted largest first (greedy order).
    pub fn descending(&self) -> Vec<i64> {
        let mut sizes = self.sizes.clone();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}

impl TryFrom<Vec<i64>> for Catalog {
    type Error = PackError;

    fn try_from(sizes: Vec<i64>) -> Result<Self, Self::Error> {
        Catalog::new(sizes)
    }
}

impl From<Catalog> for Vec<i64> {
    fn from(catalog: Catalog) -> Self {
        catalog.sizes
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
