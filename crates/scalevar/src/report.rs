//! Text rendering of prescriptions.
//!
//! ## Purpose
//!
//! This module formats a prescription for reporting collaborators: its
//! name, the two mask statistics, and the weight grid itself. Everything
//! is returned as an in-memory string; printing, styling and plotting are
//! the caller's business.
//!
//! ## Design notes
//!
//! * **Pure**: No I/O here; the core stays free of terminal and plotting
//!   concerns.
//! * **Stable layout**: One header line, then the grid indented by four
//!   spaces, so reports of several prescriptions align.
//!
//! ## Non-goals
//!
//! * This module does not render heatmaps; graphical output belongs to
//!   external consumers of the mask data.

// External dependencies
use num_traits::Float;
use std::fmt::Display;

// Internal dependencies
use crate::math::stats::{point_count, scale_count};
use crate::prescription::Prescription;

// ============================================================================
// Rendering
// ============================================================================

/// Render a prescription as a short report: a header with its name and
/// statistics, followed by the indented weight grid.
///
/// ```rust
/// use scalevar::prelude::*;
///
/// let prescr = Prescription::<f64>::incoherent((3, 3))?;
/// let report = describe(&prescr);
/// assert!(report.starts_with("Fully incoherent, m: 8, s: 2"));
/// # Result::<(), ScaleVarError>::Ok(())
/// ```
pub fn describe<T: Float + Display>(prescription: &Prescription<T>) -> String {
    let name = prescription.name.as_deref().unwrap_or("(unnamed)");
    let m = point_count(&prescription.mask);
    let s = scale_count(&prescription.mask);

    let mut out = format!("{}, m: {}, s: {}\n", name, m, s);
    for line in prescription.mask.to_string().lines() {
        out.push_str("    ");
        out.push_str(line);
        out.push('\n');
    }
    out
}
