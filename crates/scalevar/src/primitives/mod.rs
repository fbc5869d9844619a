//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures used throughout the
//! crate: the 2D mask grid and the shared error type. It has zero internal
//! dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// The 2D weight grid and its fill/combination algebra.
pub mod grid;
