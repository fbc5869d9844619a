//! # scalevar — Scale-Variation Prescription Masks for Rust
//!
//! Scale-variation prescriptions for theoretical-uncertainty estimation in
//! particle-physics predictions, realized as small square weight matrices
//! ("masks") plus the normalization attached to each of them.
//!
//! ## What is a prescription?
//!
//! A perturbative prediction depends on an arbitrary renormalization scale
//! and factorization scale. Varying the two scales around their central
//! values and combining the resulting shifts into a covariance matrix gives
//! an estimate of the missing-higher-order uncertainty. A *prescription* is
//! a named rule for which (renormalization, factorization) shift
//! combinations enter that estimate: the classic 3-, 5-, 7- and 9-point
//! conventions are all selections of cells on a 3x3 grid of scale shifts.
//!
//! Each prescription is encoded as a mask of non-negative weights over the
//! shift grid, with the center cell (no shift in either scale) always
//! forced to zero, and carries two statistics:
//!
//! * `m`: the (possibly weighted) number of contributing points,
//! * `s`: the number of independent scale directions exercised (0, 1 or 2),
//!
//! combining into the covariance normalization `s / m`.
//!
//! ## Quick Start
//!
//! ```rust
//! use scalevar::prelude::*;
//!
//! // The nine standard prescriptions on the 3x3 shift grid.
//! let catalog = masks_nbyn::<f64>(3)?;
//!
//! // "7" is the tridiagonal 7-point prescription.
//! let seven_point = &catalog["7"];
//! assert_eq!(point_count(&seven_point.mask), 6.0);
//! assert_eq!(scale_count(&seven_point.mask), 2);
//! assert_eq!(normalization(&seven_point.mask)?, 2.0 / 6.0);
//! # Result::<(), ScaleVarError>::Ok(())
//! ```
//!
//! ### Builder API
//!
//! Prescriptions can also be configured fluently, including non-standard
//! grid sizes, off-center baselines and custom weights:
//!
//! ```rust
//! use scalevar::prelude::*;
//!
//! let prescr = PrescriptionBuilder::<f64>::new()
//!     .shape((5, 5))
//!     .pattern(Pattern::Christ)
//!     .name("5-point on a 5x5 grid")
//!     .build()?;
//!
//! // The central cell never contributes, regardless of the pattern.
//! assert_eq!(prescr.mask[(2, 2)], 0.0);
//! # Result::<(), ScaleVarError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible operation returns `Result<_, ScaleVarError>`; the `?`
//! operator is idiomatic. An all-zero mask has no defined normalization and
//! is reported as an explicit error, never as a silent NaN or infinity:
//!
//! ```rust
//! use scalevar::prelude::*;
//!
//! let empty = Mask::<f64>::zeros((3, 3))?;
//! assert!(normalization(&empty).is_err());
//! # Result::<(), ScaleVarError>::Ok(())
//! ```
//!
//! ## References
//!
//! * NNPDF Collaboration (2019). "A theoretical covariance matrix for PDF
//!   uncertainties in global fits", Eur. Phys. J. C 79, 838.
//! * Cacciari, M. & Houdeau, N. (2011). "Meaningful characterisation of
//!   perturbative theoretical uncertainties".

// Layer 1: Primitives - mask grid and error types.
pub mod primitives;

// Layer 2: Math - pure statistics over masks.
pub mod math;

// Layer 3: Patterns - the prescription mask patterns.
pub mod patterns;

// Layer 4: Prescription - the named prescription record and its catalog.
pub mod catalog;
pub mod prescription;

// Text rendering of prescriptions for reporting collaborators.
pub mod report;

// High-level fluent API for building prescriptions.
pub mod api;

// Standard scalevar prelude.
pub mod prelude {
    pub use crate::api::PrescriptionBuilder;
    pub use crate::catalog::{masks_default, masks_nbyn, CATALOG_KEYS};
    pub use crate::math::stats::{normalization, point_count, scale_count};
    pub use crate::patterns::Pattern;
    pub use crate::prescription::Prescription;
    pub use crate::primitives::errors::ScaleVarError;
    pub use crate::primitives::grid::Mask;
    pub use crate::report::describe;
}
