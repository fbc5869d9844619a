//! The 2D weight grid underlying every prescription.
//!
//! ## Purpose
//!
//! This module provides the [`Mask`] type: an owned 2D array of
//! non-negative weights over the scale-shift grid, together with the small
//! fill-and-combine algebra the prescription patterns are built from
//! (row/column fills, shifted diagonals, logical OR).
//!
//! ## Design notes
//!
//! * **Owned**: Each mask exclusively owns its weights; combining masks
//!   allocates a fresh grid, so repeated construction is bit-for-bit
//!   reproducible.
//! * **Generics**: Weights are generic over `Float` types.
//! * **Weighted**: Entries are conventionally 0/1 but arbitrary
//!   non-negative reals are accepted, so downstream statistics must sum
//!   weights rather than count cells.
//!
//! ## Key concepts
//!
//! * **Line fills**: `set_row`/`set_col` activate a full grid line.
//! * **Diagonal fills**: `set_diag`/`set_anti_diag` activate a (possibly
//!   shifted) diagonal band element.
//! * **Combination**: `or` merges two masks into a fresh 0/1 grid.
//!
//! ## Invariants
//!
//! * Both axes of a mask are non-zero (enforced by every constructor).
//! * Weights adopted from callers are non-negative and finite.
//!
//! ## Non-goals
//!
//! * This module does not enforce the central-cell invariant; that is the
//!   prescription's construction step.
//! * This module does not compute statistics over the weights.

// External dependencies
use ndarray::{Array2, Axis};
use num_traits::Float;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Index;

// Internal dependencies
use crate::primitives::errors::ScaleVarError;

// ============================================================================
// Mask Type
// ============================================================================

/// A 2D grid of non-negative weights selecting scale-shift combinations.
///
/// Row indices run along the factorization-scale axis, column indices along
/// the renormalization-scale axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask<T> {
    weights: Array2<T>,
}

impl<T: Float> Mask<T> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create an all-zero mask of the given `(rows, cols)` shape.
    pub fn zeros(shape: (usize, usize)) -> Result<Self, ScaleVarError> {
        Self::check_shape(shape)?;
        Ok(Self {
            weights: Array2::from_elem(shape, T::zero()),
        })
    }

    /// Create an all-one mask of the given `(rows, cols)` shape.
    pub fn ones(shape: (usize, usize)) -> Result<Self, ScaleVarError> {
        Self::check_shape(shape)?;
        Ok(Self {
            weights: Array2::from_elem(shape, T::one()),
        })
    }

    /// Adopt caller-supplied weights as a mask.
    ///
    /// Rejects zero-sized axes and any weight that is negative or
    /// non-finite.
    pub fn from_weights(weights: Array2<T>) -> Result<Self, ScaleVarError> {
        Self::check_shape(weights.dim())?;
        for ((row, col), &value) in weights.indexed_iter() {
            if !(value.is_finite() && value >= T::zero()) {
                return Err(ScaleVarError::InvalidWeight {
                    row,
                    col,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(Self { weights })
    }

    pub(crate) fn check_shape(shape: (usize, usize)) -> Result<(), ScaleVarError> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(ScaleVarError::EmptyShape { rows, cols });
        }
        Ok(())
    }

    // ========================================================================
    // Fill Operations
    // ========================================================================

    /// Set every weight in row `row` to 1.
    ///
    /// The row index must be in bounds.
    pub fn set_row(&mut self, row: usize) {
        self.weights.row_mut(row).fill(T::one());
    }

    /// Set every weight in column `col` to 1.
    ///
    /// The column index must be in bounds.
    pub fn set_col(&mut self, col: usize) {
        self.weights.column_mut(col).fill(T::one());
    }

    /// Set the shifted main diagonal to 1.
    ///
    /// `offset = 0` is the main diagonal; a positive offset shifts it right
    /// by `offset` columns, a negative offset shifts it down by `-offset`
    /// rows. Cells falling outside the grid are skipped.
    pub fn set_diag(&mut self, offset: isize) {
        let (rows, cols) = self.shape();
        let mut r = (-offset).max(0) as usize;
        let mut c = offset.max(0) as usize;
        while r < rows && c < cols {
            self.weights[(r, c)] = T::one();
            r += 1;
            c += 1;
        }
    }

    /// Set the shifted anti-diagonal (the main diagonal of the row-reversed
    /// grid) to 1.
    ///
    /// `offset = 0` runs from the bottom-left corner to the top-right; a
    /// positive offset shifts it right by `offset` columns, a negative
    /// offset shifts it up by `-offset` rows. Cells falling outside the
    /// grid are skipped.
    pub fn set_anti_diag(&mut self, offset: isize) {
        let (rows, cols) = self.shape();
        let mut r = rows as isize - 1 + offset.min(0);
        let mut c = offset.max(0);
        while r >= 0 && (c as usize) < cols {
            self.weights[(r as usize, c as usize)] = T::one();
            r -= 1;
            c += 1;
        }
    }

    /// Force a single cell to 0.
    ///
    /// Used to blank the central (no-shift) cell; rejects out-of-bounds
    /// indices.
    pub fn zero_cell(&mut self, row: usize, col: usize) -> Result<(), ScaleVarError> {
        let (rows, cols) = self.shape();
        if row >= rows || col >= cols {
            return Err(ScaleVarError::CenterOutOfBounds {
                f0: row,
                r0: col,
                rows,
                cols,
            });
        }
        self.weights[(row, col)] = T::zero();
        Ok(())
    }

    // ========================================================================
    // Combination
    // ========================================================================

    /// Logical OR of two masks, cast back to 1.0/0.0 weights.
    ///
    /// A cell is active in the result when it carries positive weight in
    /// either operand. The operands must have identical shapes.
    pub fn or(&self, other: &Self) -> Result<Self, ScaleVarError> {
        if self.shape() != other.shape() {
            return Err(ScaleVarError::ShapeMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let weights = Array2::from_shape_fn(self.shape(), |idx| {
            if self.weights[idx] > T::zero() || other.weights[idx] > T::zero() {
                T::one()
            } else {
                T::zero()
            }
        });
        Ok(Self { weights })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The `(rows, cols)` shape of the mask.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.weights.dim()
    }

    /// Number of rows (factorization-scale axis).
    #[inline]
    pub fn rows(&self) -> usize {
        self.weights.nrows()
    }

    /// Number of columns (renormalization-scale axis).
    #[inline]
    pub fn cols(&self) -> usize {
        self.weights.ncols()
    }

    /// Borrow the underlying weight array.
    #[inline]
    pub fn weights(&self) -> &Array2<T> {
        &self.weights
    }

    /// Sum of all weights in the mask.
    pub fn total(&self) -> T {
        self.weights.iter().fold(T::zero(), |acc, &w| acc + w)
    }

    /// Per-row weight totals.
    pub fn row_totals(&self) -> Vec<T> {
        self.weights.sum_axis(Axis(1)).to_vec()
    }

    /// Per-column weight totals.
    pub fn col_totals(&self) -> Vec<T> {
        self.weights.sum_axis(Axis(0)).to_vec()
    }
}

impl<T> Index<(usize, usize)> for Mask<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &T {
        &self.weights[index]
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Mask<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for row in self.weights.rows() {
            for (j, w) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>5.1}", w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
