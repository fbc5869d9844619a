//! Mask statistics and the covariance normalization.
//!
//! ## Purpose
//!
//! This module computes the two scalar statistics attached to every
//! prescription mask, the independent-scale count `s` and the weighted
//! point count `m`, and the normalization `s / m` applied when the
//! mask's shift combinations are assembled into a covariance estimate.
//!
//! ## Design notes
//!
//! * **Weighted**: `m` sums weights rather than counting active cells, so
//!   fractional-weight masks contribute their weight.
//! * **Generics**: All computations are generic over `Float` types.
//! * **Heuristic**: The axis-interaction condition inside `s` detects "the
//!   mask varies along both axes independently". It is established for the
//!   standard 3x3 catalog; on other grid sizes it is a heuristic that has
//!   not been re-derived from the underlying convention.
//!
//! ## Key concepts
//!
//! * **Scale count `s`**: 0, 1 or 2 independent directions of variation.
//! * **Point count `m`**: total mask weight.
//! * **Normalization**: `s / m`, undefined for an all-zero mask.
//!
//! ## Invariants
//!
//! * `s` is in {0, 1, 2} for any mask with non-negative weights.
//! * `normalization` never returns NaN or infinity; an all-zero mask is an
//!   explicit error.
//!
//! ## Non-goals
//!
//! * This module does not build masks or enforce the central-cell rule.
//! * This module does not assemble the covariance matrix itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ScaleVarError;
use crate::primitives::grid::Mask;

// ============================================================================
// Scale Count
// ============================================================================

/// Number of independent scale directions the mask exercises.
///
/// Starts at 0, then:
///
/// * +1 if the total mask weight exceeds 1 (more than a single active
///   point exists at all);
/// * +1 if along at least one axis some line-total exceeds 1 while every
///   line-total along the other axis is positive, i.e. the active cells do
///   not all lie on a single line or diagonal.
pub fn scale_count<T: Float>(mask: &Mask<T>) -> usize {
    let mut s = 0;

    if mask.total() > T::one() {
        s += 1;
    }

    let row_totals = mask.row_totals();
    let col_totals = mask.col_totals();

    let across_rows = col_totals.iter().any(|&t| t > T::one())
        && row_totals.iter().all(|&t| t > T::zero());
    let across_cols = row_totals.iter().any(|&t| t > T::one())
        && col_totals.iter().all(|&t| t > T::zero());

    if across_rows || across_cols {
        s += 1;
    }

    s
}

// ============================================================================
// Point Count
// ============================================================================

/// Weighted number of contributing points: the sum of all mask weights.
///
/// For a binary 0/1 mask this equals the number of active (non-central)
/// cells.
pub fn point_count<T: Float>(mask: &Mask<T>) -> T {
    mask.total()
}

// ============================================================================
// Normalization
// ============================================================================

/// Covariance normalization for the given mask: `s / m`.
///
/// Returns [`ScaleVarError::EmptyMask`] when the total weight is zero, so
/// callers never observe a NaN or infinite normalization.
pub fn normalization<T: Float>(mask: &Mask<T>) -> Result<T, ScaleVarError> {
    let m = point_count(mask);
    if m <= T::zero() {
        return Err(ScaleVarError::EmptyMask);
    }
    let s = T::from(scale_count(mask)).unwrap_or_else(T::zero);
    Ok(s / m)
}
