//! Layer 3: Prescription mask patterns.
//!
//! ## Purpose
//!
//! This module enumerates the scale-variation prescription patterns and
//! knows how to populate a mask grid for each of them. Patterns describe
//! *which* shift combinations a prescription selects; they do not carry
//! the central-cell rule, which the wrapping prescription applies as its
//! final construction step.
//!
//! ## Design notes
//!
//! * **Pre-blanking grids**: `populate` returns the raw pattern, before
//!   the central cell is forced to zero. Composite patterns OR the raw
//!   grids of their two halves, so the center may still be active here;
//!   the prescription construction blanks it afterwards.
//! * **Generalized**: Every pattern is defined on an arbitrary `(rows,
//!   cols)` grid, though the literal point counts in the labels refer to
//!   the conventional 3x3 case.
//!
//! ## Key concepts
//!
//! * **Single-line patterns**: one scale varied (`Ren`, `Fact`) or the two
//!   varied in lockstep (`Sum`, `AntiSum`).
//! * **Composite patterns**: OR-combinations of two single-line patterns
//!   (`Christ`, `StAndrews`).
//! * **Band patterns**: three adjacent diagonals (`Tridiag`,
//!   `AntiTridiag`).
//! * **Dense pattern**: every shift combination (`Incoherent`).
//!
//! ## Invariants
//!
//! * `populate` only writes 0/1 weights.
//! * `ALL` lists the nine patterns in catalog-key order.
//!
//! ## Non-goals
//!
//! * This module does not blank the central cell.
//! * This module does not compute statistics or normalizations.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ScaleVarError;
use crate::primitives::grid::Mask;

// ============================================================================
// Pattern Enum
// ============================================================================

/// Scale-variation prescription pattern.
///
/// Each variant selects a family of (renormalization, factorization) shift
/// combinations on the mask grid. The catalog keys ("3", "5b", ...) name
/// the nominal point count of the conventional 3x3 realization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Vary the renormalization scale only: row `f0` active.
    Ren,

    /// Vary the factorization scale only: column `r0` active.
    Fact,

    /// Fully correlated joint variation: the main diagonal active.
    Sum,

    /// Fully anti-correlated joint variation: the anti-diagonal active.
    AntiSum,

    /// 5-point: both single-scale variations combined (`Ren` OR `Fact`).
    Christ,

    /// 5-point correlated: both diagonal variations combined
    /// (`Sum` OR `AntiSum`).
    StAndrews,

    /// 7-point: the main diagonal plus its one-down and one-right shifts.
    Tridiag,

    /// 7-point mirrored: the anti-diagonal plus its two one-step shifts.
    AntiTridiag,

    /// 9-point: every shift combination active, no correlation assumed.
    Incoherent,
}

impl Pattern {
    /// The nine patterns in catalog-key order.
    pub const ALL: [Pattern; 9] = [
        Pattern::Ren,
        Pattern::Fact,
        Pattern::Sum,
        Pattern::AntiSum,
        Pattern::Christ,
        Pattern::StAndrews,
        Pattern::Tridiag,
        Pattern::AntiTridiag,
        Pattern::Incoherent,
    ];

    // ========================================================================
    // Metadata Methods
    // ========================================================================

    /// Short catalog key of the pattern.
    #[inline]
    pub const fn key(&self) -> &'static str {
        match self {
            Pattern::Ren => "3",
            Pattern::Fact => "3b",
            Pattern::Sum => "3c",
            Pattern::AntiSum => "3cb",
            Pattern::Christ => "5",
            Pattern::StAndrews => "5b",
            Pattern::Tridiag => "7",
            Pattern::AntiTridiag => "7b",
            Pattern::Incoherent => "9",
        }
    }

    /// Human-readable label of the pattern.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Pattern::Ren => "Renormalization only",
            Pattern::Fact => "Factorization only",
            Pattern::Sum => "Fully correlated",
            Pattern::AntiSum => "Fully anti-correlated",
            Pattern::Christ => "Christ",
            Pattern::StAndrews => "St Andrews",
            Pattern::Tridiag => "Tridiagonal",
            Pattern::AntiTridiag => "Anti-tridiagonal",
            Pattern::Incoherent => "Fully incoherent",
        }
    }

    /// Nominal point count of the conventional 3x3 realization, central
    /// cell included.
    #[inline]
    pub const fn nominal_points(&self) -> usize {
        match self {
            Pattern::Ren | Pattern::Fact | Pattern::Sum | Pattern::AntiSum => 3,
            Pattern::Christ | Pattern::StAndrews => 5,
            Pattern::Tridiag | Pattern::AntiTridiag => 7,
            Pattern::Incoherent => 9,
        }
    }

    // ========================================================================
    // Grid Population
    // ========================================================================

    /// Populate a fresh mask of the given shape with this pattern.
    ///
    /// `f0`/`r0` locate the central cell for the line patterns; both must
    /// lie inside the grid. The returned grid is the raw pattern; the
    /// central cell is *not* blanked here.
    pub fn populate<T: Float>(
        &self,
        shape: (usize, usize),
        f0: usize,
        r0: usize,
    ) -> Result<Mask<T>, ScaleVarError> {
        Mask::<T>::check_shape(shape)?;
        let (rows, cols) = shape;
        if f0 >= rows || r0 >= cols {
            return Err(ScaleVarError::CenterOutOfBounds { f0, r0, rows, cols });
        }

        match self {
            Pattern::Ren => {
                let mut mask = Mask::zeros(shape)?;
                mask.set_row(f0);
                Ok(mask)
            }
            Pattern::Fact => {
                let mut mask = Mask::zeros(shape)?;
                mask.set_col(r0);
                Ok(mask)
            }
            Pattern::Sum => {
                let mut mask = Mask::zeros(shape)?;
                mask.set_diag(0);
                Ok(mask)
            }
            Pattern::AntiSum => {
                let mut mask = Mask::zeros(shape)?;
                mask.set_anti_diag(0);
                Ok(mask)
            }
            Pattern::Christ => {
                let ren = Pattern::Ren.populate(shape, f0, r0)?;
                let fact = Pattern::Fact.populate(shape, f0, r0)?;
                ren.or(&fact)
            }
            Pattern::StAndrews => {
                let sum = Pattern::Sum.populate(shape, f0, r0)?;
                let antisum = Pattern::AntiSum.populate(shape, f0, r0)?;
                sum.or(&antisum)
            }
            Pattern::Tridiag => {
                let mut mask = Mask::zeros(shape)?;
                mask.set_diag(0);
                mask.set_diag(-1);
                mask.set_diag(1);
                Ok(mask)
            }
            Pattern::AntiTridiag => {
                let mut mask = Mask::zeros(shape)?;
                mask.set_anti_diag(0);
                mask.set_anti_diag(1);
                mask.set_anti_diag(-1);
                Ok(mask)
            }
            Pattern::Incoherent => Mask::ones(shape),
        }
    }
}
