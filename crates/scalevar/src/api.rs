//! High-level API for building prescriptions.
//!
//! ## Purpose
//!
//! This module provides the fluent front door over the named constructors:
//! a builder that configures the grid shape, the mask source (a standard
//! pattern or explicit weights), an optional center override and an
//! optional label, and validates the whole configuration at `build()`.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Sensible defaults (a 3x3 grid and the pattern's own
//!   label), so the common case is two calls.
//! * **Single source**: `pattern` and `weights` configure the same slot;
//!   the last call wins, mirroring how repeated setter calls behave.
//! * **Validated**: All checks happen in `build()`, which returns the
//!   first violation it finds.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `PrescriptionBuilder::new()`, chained
//!   setters, then `.build()` for a `Result<Prescription<T>, _>`.
//!
//! ## Invariants
//!
//! * A successfully built prescription satisfies every `Prescription`
//!   invariant; the builder adds no construction path around them.
//!
//! ## Non-goals
//!
//! * This module does not expose partially validated prescriptions.

// External dependencies
use ndarray::Array2;
use num_traits::Float;

// Internal dependencies
use crate::patterns::Pattern;
use crate::prescription::Prescription;
use crate::primitives::errors::ScaleVarError;
use crate::primitives::grid::Mask;

// ============================================================================
// Mask Source
// ============================================================================

/// The configured origin of the mask weights.
#[derive(Debug, Clone)]
enum MaskSource<T> {
    /// A standard prescription pattern.
    Pattern(Pattern),

    /// Caller-supplied weights.
    Weights(Array2<T>),
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`Prescription`].
#[derive(Debug, Clone)]
pub struct PrescriptionBuilder<T> {
    /// Grid shape; defaults to `(3, 3)`.
    shape: Option<(usize, usize)>,

    /// Mask source: pattern or explicit weights.
    source: Option<MaskSource<T>>,

    /// Central-cell row override.
    f0: Option<usize>,

    /// Central-cell column override.
    r0: Option<usize>,

    /// Label override.
    name: Option<String>,
}

impl<T: Float> PrescriptionBuilder<T> {
    /// Create a builder with nothing configured.
    pub fn new() -> Self {
        Self {
            shape: None,
            source: None,
            f0: None,
            r0: None,
            name: None,
        }
    }

    // ========================================================================
    // Configuration Methods
    // ========================================================================

    /// Set the `(rows, cols)` grid shape.
    ///
    /// With explicit weights this acts as a cross-check: a shape that
    /// disagrees with the weight array is a build error.
    pub fn shape(mut self, shape: (usize, usize)) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Use a standard pattern as the mask source.
    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.source = Some(MaskSource::Pattern(pattern));
        self
    }

    /// Use caller-supplied weights as the mask source.
    ///
    /// Weights must be non-negative and finite; they need not be 0/1.
    pub fn weights(mut self, weights: Array2<T>) -> Self {
        self.source = Some(MaskSource::Weights(weights));
        self
    }

    /// Override the central-cell location.
    pub fn center(mut self, f0: usize, r0: usize) -> Self {
        self.f0 = Some(f0);
        self.r0 = Some(r0);
        self
    }

    /// Override the prescription label.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Validate the configuration and construct the prescription.
    pub fn build(self) -> Result<Prescription<T>, ScaleVarError> {
        match self.source {
            None => Err(ScaleVarError::MissingPattern),

            Some(MaskSource::Pattern(pattern)) => {
                let shape = self.shape.unwrap_or((3, 3));
                let mut prescription =
                    Prescription::from_pattern(pattern, shape, self.f0, self.r0)?;
                if let Some(name) = self.name {
                    prescription.name = Some(name);
                }
                Ok(prescription)
            }

            Some(MaskSource::Weights(weights)) => {
                if let Some(shape) = self.shape {
                    if shape != weights.dim() {
                        return Err(ScaleVarError::ShapeMismatch {
                            left: shape,
                            right: weights.dim(),
                        });
                    }
                }
                let mask = Mask::from_weights(weights)?;
                Prescription::new(mask, self.name, self.f0, self.r0)
            }
        }
    }
}

impl<T: Float> Default for PrescriptionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
