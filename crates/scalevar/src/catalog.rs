//! Layer 4: The named prescription catalog.
//!
//! ## Purpose
//!
//! This module builds the standard mapping from short string codes ("3",
//! "5b", "9", ...) to freshly constructed prescriptions on an `n x n`
//! shift grid.
//!
//! ## Design notes
//!
//! * **Fresh per call**: Nothing is cached or shared; every call
//!   reconstructs every mask, so callers can never observe cross-call
//!   mutation.
//! * **Caller-sized**: Arbitrary `n` is accepted. The codes name the 3x3
//!   point counts, and the band patterns only make sense on odd grids of
//!   at least 3, so the conventional choice is `n = 3`.
//!
//! ## Key concepts
//!
//! * **Catalog keys**: the code of each prescription is
//!   [`Pattern::key`]; the map iterates in key order.
//!
//! ## Invariants
//!
//! * The returned map has exactly nine entries, one per [`Pattern`].
//! * Every entry carries a non-empty name and an `(n, n)` mask.
//!
//! ## Non-goals
//!
//! * This module does not validate that `n` is odd or at least 3.

// External dependencies
use num_traits::Float;
use std::collections::BTreeMap;

// Internal dependencies
use crate::patterns::Pattern;
use crate::prescription::Prescription;
use crate::primitives::errors::ScaleVarError;

// ============================================================================
// Catalog
// ============================================================================

/// The nine catalog keys, in map order.
pub const CATALOG_KEYS: [&str; 9] = ["3", "3b", "3c", "3cb", "5", "5b", "7", "7b", "9"];

/// Build the standard prescription catalog on an `n x n` shift grid.
///
/// Returns the nine prescriptions keyed by their short codes. Every call
/// allocates fresh masks.
pub fn masks_nbyn<T: Float>(
    n: usize,
) -> Result<BTreeMap<&'static str, Prescription<T>>, ScaleVarError> {
    let mut catalog = BTreeMap::new();
    for pattern in Pattern::ALL {
        let prescription = Prescription::from_pattern(pattern, (n, n), None, None)?;
        catalog.insert(pattern.key(), prescription);
    }
    Ok(catalog)
}

/// The conventional 3x3 catalog.
pub fn masks_default<T: Float>() -> Result<BTreeMap<&'static str, Prescription<T>>, ScaleVarError> {
    masks_nbyn(3)
}
