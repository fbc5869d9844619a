//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure statistics computed over prescription
//! masks: the independent-scale count, the weighted point count, and the
//! normalization combining the two.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Prescription & Catalog
//!   ↓
//! Layer 3: Patterns
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Mask statistics and the covariance normalization.
pub mod stats;
