//! Tests for the prescription mask patterns.
//!
//! These tests verify the nine pattern grids against their definitions:
//! - Exact 3x3 grids for every pattern, central cell blanked
//! - Pattern metadata (catalog keys, labels, nominal point counts)
//! - Generalization to larger grids
//! - Raw (pre-blanking) grids from `Pattern::populate`
//!
//! ## Test Organization
//!
//! 1. **3x3 Grids** - the conventional catalog realizations
//! 2. **Metadata** - keys, labels, nominal points
//! 3. **Generalized Grids** - 5x5 realizations
//! 4. **Raw Population** - pre-blanking behavior

use ndarray::array;

use scalevar::patterns::Pattern;
use scalevar::prescription::Prescription;

// ============================================================================
// 3x3 Grids
// ============================================================================

/// The renormalization-only pattern activates the central row, minus the
/// central cell.
#[test]
fn test_ren_3x3_grid() {
    let prescr = Prescription::<f64>::ren((3, 3)).unwrap();
    let expected = array![[0.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 0.0]];
    assert_eq!(prescr.mask.weights(), &expected);
}

/// The factorization-only pattern is the transpose of the
/// renormalization-only pattern.
#[test]
fn test_fact_3x3_grid() {
    let prescr = Prescription::<f64>::fact((3, 3)).unwrap();
    let expected = array![[0.0, 1.0, 0.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    assert_eq!(prescr.mask.weights(), &expected);

    let ren = Prescription::<f64>::ren((3, 3)).unwrap();
    assert_eq!(prescr.mask.weights(), &ren.mask.weights().t().to_owned());
}

/// The fully correlated pattern is the main diagonal minus the center.
#[test]
fn test_sum_3x3_grid() {
    let prescr = Prescription::<f64>::sum((3, 3)).unwrap();
    let expected = array![[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
    assert_eq!(prescr.mask.weights(), &expected);
}

/// The fully anti-correlated pattern is the anti-diagonal minus the center.
#[test]
fn test_antisum_3x3_grid() {
    let prescr = Prescription::<f64>::antisum((3, 3)).unwrap();
    let expected = array![[0.0, 0.0, 1.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
    assert_eq!(prescr.mask.weights(), &expected);
}

/// The 5-point pattern is the OR of the two single-scale patterns: a plus
/// sign minus the center.
#[test]
fn test_christ_3x3_grid() {
    let prescr = Prescription::<f64>::christ((3, 3)).unwrap();
    let expected = array![[0.0, 1.0, 0.0], [1.0, 0.0, 1.0], [0.0, 1.0, 0.0]];
    assert_eq!(prescr.mask.weights(), &expected);

    // Same thing computed from the OR definition directly.
    let ren = Prescription::<f64>::ren((3, 3)).unwrap();
    let fact = Prescription::<f64>::fact((3, 3)).unwrap();
    let combined = ren.mask.or(&fact.mask).unwrap();
    assert_eq!(prescr.mask.weights(), combined.weights());
}

/// The 5-point correlated pattern is the OR of the two diagonal patterns:
/// the four corners.
#[test]
fn test_standrews_3x3_grid() {
    let prescr = Prescription::<f64>::standrews((3, 3)).unwrap();
    let expected = array![[1.0, 0.0, 1.0], [0.0, 0.0, 0.0], [1.0, 0.0, 1.0]];
    assert_eq!(prescr.mask.weights(), &expected);
}

/// The 7-point pattern is a tridiagonal band minus the center.
#[test]
fn test_tridiag_3x3_grid() {
    let prescr = Prescription::<f64>::tridiag((3, 3)).unwrap();
    let expected = array![[1.0, 1.0, 0.0], [1.0, 0.0, 1.0], [0.0, 1.0, 1.0]];
    assert_eq!(prescr.mask.weights(), &expected);
}

/// The mirrored 7-point pattern is the anti-tridiagonal band minus the
/// center.
#[test]
fn test_antitridiag_3x3_grid() {
    let prescr = Prescription::<f64>::antitridiag((3, 3)).unwrap();
    let expected = array![[0.0, 1.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 0.0]];
    assert_eq!(prescr.mask.weights(), &expected);
}

/// The 9-point pattern activates everything but the center.
#[test]
fn test_incoherent_3x3_grid() {
    let prescr = Prescription::<f64>::incoherent((3, 3)).unwrap();
    let expected = array![[1.0, 1.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0]];
    assert_eq!(prescr.mask.weights(), &expected);
}

/// Every 3x3 pattern blanks the central cell.
#[test]
fn test_all_patterns_blank_center() {
    for pattern in Pattern::ALL {
        let prescr = Prescription::<f64>::from_pattern(pattern, (3, 3), None, None).unwrap();
        assert_eq!(prescr.center(), (1, 1));
        assert_eq!(
            prescr.mask[(1, 1)],
            0.0,
            "{} must blank the central cell",
            pattern.label()
        );
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// Catalog keys, labels and nominal point counts line up.
#[test]
fn test_pattern_metadata() {
    let expected = [
        (Pattern::Ren, "3", "Renormalization only", 3),
        (Pattern::Fact, "3b", "Factorization only", 3),
        (Pattern::Sum, "3c", "Fully correlated", 3),
        (Pattern::AntiSum, "3cb", "Fully anti-correlated", 3),
        (Pattern::Christ, "5", "Christ", 5),
        (Pattern::StAndrews, "5b", "St Andrews", 5),
        (Pattern::Tridiag, "7", "Tridiagonal", 7),
        (Pattern::AntiTridiag, "7b", "Anti-tridiagonal", 7),
        (Pattern::Incoherent, "9", "Fully incoherent", 9),
    ];

    assert_eq!(Pattern::ALL.len(), expected.len());
    for ((pattern, key, label, points), actual) in expected.into_iter().zip(Pattern::ALL) {
        assert_eq!(pattern, actual, "ALL must list patterns in catalog order");
        assert_eq!(pattern.key(), key);
        assert_eq!(pattern.label(), label);
        assert_eq!(pattern.nominal_points(), points);
        assert!(!pattern.label().is_empty());
    }
}

// ============================================================================
// Generalized Grids
// ============================================================================

/// On a 5x5 grid the central row keeps four active cells.
#[test]
fn test_ren_5x5_grid() {
    let prescr = Prescription::<f64>::ren((5, 5)).unwrap();
    assert_eq!(prescr.center(), (2, 2));
    for col in 0..5 {
        let expected = if col == 2 { 0.0 } else { 1.0 };
        assert_eq!(prescr.mask[(2, col)], expected);
    }
    assert_eq!(prescr.mask.total(), 4.0);
}

/// The 5x5 tridiagonal band has thirteen nominal cells, twelve after the
/// center is blanked.
#[test]
fn test_tridiag_5x5_grid() {
    let prescr = Prescription::<f64>::tridiag((5, 5)).unwrap();
    assert_eq!(prescr.mask.total(), 12.0);

    // Band structure: active iff |row - col| <= 1, center excepted.
    for row in 0..5usize {
        for col in 0..5usize {
            let in_band = row.abs_diff(col) <= 1;
            let expected = if (row, col) == (2, 2) || !in_band {
                0.0
            } else {
                1.0
            };
            assert_eq!(prescr.mask[(row, col)], expected, "cell ({row}, {col})");
        }
    }
}

/// The 5x5 anti-tridiagonal band mirrors the tridiagonal one.
#[test]
fn test_antitridiag_5x5_grid() {
    let prescr = Prescription::<f64>::antitridiag((5, 5)).unwrap();
    assert_eq!(prescr.mask.total(), 12.0);
    for row in 0..5usize {
        for col in 0..5usize {
            let in_band = (row + col).abs_diff(4) <= 1;
            let expected = if (row, col) == (2, 2) || !in_band {
                0.0
            } else {
                1.0
            };
            assert_eq!(prescr.mask[(row, col)], expected, "cell ({row}, {col})");
        }
    }
}

/// On odd grids the two diagonals only share the center, so the 5x5
/// St Andrews cross keeps eight active cells.
#[test]
fn test_standrews_5x5_grid() {
    let prescr = Prescription::<f64>::standrews((5, 5)).unwrap();
    assert_eq!(prescr.mask.total(), 8.0);
}

// ============================================================================
// Raw Population
// ============================================================================

/// `populate` returns the raw pattern: the composite OR re-activates the
/// center, and only the prescription construction blanks it.
#[test]
fn test_populate_is_pre_blanking() {
    let raw = Pattern::Christ.populate::<f64>((3, 3), 1, 1).unwrap();
    assert_eq!(raw[(1, 1)], 1.0);

    let prescr = Prescription::<f64>::christ((3, 3)).unwrap();
    assert_eq!(prescr.mask[(1, 1)], 0.0);
}

/// Raw population writes 0/1 weights only.
#[test]
fn test_populate_weights_are_binary() {
    for pattern in Pattern::ALL {
        let raw = pattern.populate::<f64>((3, 3), 1, 1).unwrap();
        for &w in raw.weights() {
            assert!(w == 0.0 || w == 1.0, "{}: weight {w}", pattern.label());
        }
    }
}
