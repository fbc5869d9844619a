//! scalevar Catalog Examples
//!
//! This example demonstrates the prescription catalog and its statistics:
//! - The nine standard 3x3 prescriptions
//! - Normalizations for covariance assembly
//! - Custom prescriptions through the builder

use ndarray::array;
use scalevar::prelude::*;

fn main() -> Result<(), ScaleVarError> {
    println!("{}", "=".repeat(60));
    println!("scalevar Catalog Examples");
    println!("{}", "=".repeat(60));
    println!();

    example_1_standard_catalog()?;
    example_2_normalizations()?;
    example_3_custom_prescriptions()?;

    Ok(())
}

/// Example 1: The standard 3x3 catalog
/// Renders every prescription with its statistics
fn example_1_standard_catalog() -> Result<(), ScaleVarError> {
    println!("Example 1: Standard 3x3 Catalog");
    println!("{}", "-".repeat(60));

    for (key, prescr) in masks_default::<f64>()? {
        println!("[{key}] {}", describe(&prescr));
    }

    Ok(())
}

/// Example 2: Normalizations
/// The s/m factor applied when assembling the covariance estimate
fn example_2_normalizations() -> Result<(), ScaleVarError> {
    println!("Example 2: Normalizations");
    println!("{}", "-".repeat(60));

    for (key, prescr) in masks_default::<f64>()? {
        let norm = normalization(&prescr.mask)?;
        println!("  {key:>3}: s/m = {norm:.4}");
    }

    println!();
    Ok(())
}

/// Example 3: Custom prescriptions
/// A 5x5 grid and a weighted mask through the builder
fn example_3_custom_prescriptions() -> Result<(), ScaleVarError> {
    println!("Example 3: Custom Prescriptions");
    println!("{}", "-".repeat(60));

    // A standard pattern on a larger shift grid.
    let wide = PrescriptionBuilder::<f64>::new()
        .shape((5, 5))
        .pattern(Pattern::Tridiag)
        .build()?;
    println!("{}", describe(&wide));

    // Down-weighted corners instead of a hard 0/1 selection.
    let soft = PrescriptionBuilder::new()
        .weights(array![
            [0.5, 1.0, 0.5],
            [1.0, 1.0, 1.0],
            [0.5, 1.0, 0.5]
        ])
        .name("Softened 9-point")
        .build()?;
    println!("{}", describe(&soft));
    println!("normalization: {:.4}", normalization(&soft.mask)?);

    Ok(())
}
