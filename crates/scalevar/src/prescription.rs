//! Layer 4: The named prescription record.
//!
//! ## Purpose
//!
//! This module defines [`Prescription`]: a mask plus its label and the
//! location of the central (no-shift) cell. Construction is the single
//! place where the central-cell rule is enforced, uniformly for every
//! pattern including the composites.
//!
//! ## Design notes
//!
//! * **Center last**: Blanking the central cell is the final construction
//!   step. Composite patterns OR two sub-grids, and the OR can re-activate
//!   a cell either half had blanked, so the rule cannot be pushed into the
//!   patterns themselves.
//! * **Immutable**: A prescription is never mutated after construction;
//!   callers that want a variant build a new one.
//! * **Validated**: Center overrides outside the grid are construction
//!   errors, not panics.
//!
//! ## Key concepts
//!
//! * **Central cell**: the `(f0, r0)` entry, representing zero shift in
//!   both scales. It never contributes weight: the shift stored there is
//!   identically null, so masking it merely makes the bookkeeping explicit.
//! * **Named constructors**: one shorthand per pattern, all delegating to
//!   [`Prescription::from_pattern`].
//!
//! ## Invariants
//!
//! * `mask[(f0, r0)] == 0` from the moment of construction on.
//! * `f0 < rows` and `r0 < cols`.
//!
//! ## Non-goals
//!
//! * This module does not render prescriptions for reporting.
//! * This module does not compute statistics; see the math layer.

// External dependencies
use num_traits::Float;
use std::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::patterns::Pattern;
use crate::primitives::errors::ScaleVarError;
use crate::primitives::grid::Mask;

// ============================================================================
// Prescription Record
// ============================================================================

/// A named scale-variation prescription: a weight mask with its central
/// cell blanked, plus metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Prescription<T> {
    /// The weight mask; `mask[(f0, r0)]` is always zero.
    pub mask: Mask<T>,

    /// Human-readable label.
    pub name: Option<String>,

    /// Row index of the central cell (factorization axis).
    pub f0: usize,

    /// Column index of the central cell (renormalization axis).
    pub r0: usize,
}

impl<T: Float> Prescription<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Wrap a mask as a prescription, blanking the central cell.
    ///
    /// `f0`/`r0` default to the geometric center of each axis (integer
    /// division by 2), which is the true center for odd sizes. Overrides
    /// outside the grid are rejected.
    pub fn new(
        mask: Mask<T>,
        name: Option<String>,
        f0: Option<usize>,
        r0: Option<usize>,
    ) -> Result<Self, ScaleVarError> {
        let f0 = f0.unwrap_or(mask.rows() / 2);
        let r0 = r0.unwrap_or(mask.cols() / 2);

        let mut mask = mask;
        mask.zero_cell(f0, r0)?;

        Ok(Self { mask, name, f0, r0 })
    }

    /// Build a prescription from a pattern, taking the pattern's label as
    /// the name.
    pub fn from_pattern(
        pattern: Pattern,
        shape: (usize, usize),
        f0: Option<usize>,
        r0: Option<usize>,
    ) -> Result<Self, ScaleVarError> {
        let f0 = f0.unwrap_or(shape.0 / 2);
        let r0 = r0.unwrap_or(shape.1 / 2);

        let mask = pattern.populate(shape, f0, r0)?;
        Self::new(mask, Some(pattern.label().to_string()), Some(f0), Some(r0))
    }

    // ========================================================================
    // Named Constructors
    // ========================================================================

    /// 3-point, renormalization scale only.
    pub fn ren(shape: (usize, usize)) -> Result<Self, ScaleVarError> {
        Self::from_pattern(Pattern::Ren, shape, None, None)
    }

    /// 3-point, factorization scale only.
    pub fn fact(shape: (usize, usize)) -> Result<Self, ScaleVarError> {
        Self::from_pattern(Pattern::Fact, shape, None, None)
    }

    /// 3-point, fully correlated joint variation.
    pub fn sum(shape: (usize, usize)) -> Result<Self, ScaleVarError> {
        Self::from_pattern(Pattern::Sum, shape, None, None)
    }

    /// 3-point, fully anti-correlated joint variation.
    pub fn antisum(shape: (usize, usize)) -> Result<Self, ScaleVarError> {
        Self::from_pattern(Pattern::AntiSum, shape, None, None)
    }

    /// 5-point: both single-scale variations combined.
    pub fn christ(shape: (usize, usize)) -> Result<Self, ScaleVarError> {
        Self::from_pattern(Pattern::Christ, shape, None, None)
    }

    /// 5-point correlated: both diagonal variations combined.
    pub fn standrews(shape: (usize, usize)) -> Result<Self, ScaleVarError> {
        Self::from_pattern(Pattern::StAndrews, shape, None, None)
    }

    /// 7-point: dense correlated band of three diagonals.
    pub fn tridiag(shape: (usize, usize)) -> Result<Self, ScaleVarError> {
        Self::from_pattern(Pattern::Tridiag, shape, None, None)
    }

    /// 7-point mirrored: dense anti-correlated band.
    pub fn antitridiag(shape: (usize, usize)) -> Result<Self, ScaleVarError> {
        Self::from_pattern(Pattern::AntiTridiag, shape, None, None)
    }

    /// 9-point: fully incoherent, no correlation assumed.
    pub fn incoherent(shape: (usize, usize)) -> Result<Self, ScaleVarError> {
        Self::from_pattern(Pattern::Incoherent, shape, None, None)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The `(f0, r0)` location of the central cell.
    #[inline]
    pub fn center(&self) -> (usize, usize) {
        (self.f0, self.r0)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Prescription<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.mask)
    }
}
