//! Example demonstrating Khatri-Rao product operations
//!
//! The Khatri-Rao product is a column-wise Kronecker product. Summing its
//! columns over a list of factor matrices gives the flattened tensor those
//! factors represent.
//!
//! Run with: cargo run --example khatri_rao

use ktensor_core::DenseND;
use ktensor_kernels::{khatri_rao, khatri_rao_list};
use scirs2_core::ndarray_ext::{array, Axis};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Khatri-Rao Product Example ===\n");

    // Example 1: Basic Khatri-Rao product
    println!("1. Basic Khatri-Rao Product");
    println!("---------------------------");

    let a = array![[1.0, 2.0], [3.0, 4.0]];
    let b = array![[5.0, 6.0], [7.0, 8.0], [9.0, 10.0]];

    println!("Matrix A (2×2):");
    println!("{:?}\n", a);
    println!("Matrix B (3×2):");
    println!("{:?}\n", b);

    let result = khatri_rao(&a.view(), &b.view());
    println!("Khatri-Rao Product A ⊙ B (6×2):");
    println!("{:?}\n", result);

    // Example 2: Factor list
    println!("2. Khatri-Rao Product over a Factor List");
    println!("----------------------------------------");

    let c = array![[1.0, -1.0], [0.5, 2.0]];
    let factors = [a.view(), b.view(), c.view()];

    let full = khatri_rao_list(&factors, None, None)?;
    println!("A ⊙ B ⊙ C shape: {:?}", full.shape());

    let flat = full.sum_axis(Axis(1));
    let tensor = DenseND::fold_vec(&flat, &[2, 3, 2], 0)?;
    println!("Row sums folded into a {:?} tensor:", tensor.shape());
    println!("{:?}\n", tensor);

    // Example 3: Skipping a factor
    println!("3. Skipping One Factor");
    println!("----------------------");

    for skip in 0..factors.len() {
        let rest = khatri_rao_list(&factors, Some(skip), None)?;
        println!("  skip={}: shape {:?}", skip, rest.shape());
    }
    println!();

    // Example 4: Masked product
    println!("4. Masked Khatri-Rao Product");
    println!("----------------------------");

    // Keep only the first row of mode 0; broadcast across modes 1 and 2
    let mask = DenseND::from_vec(vec![1.0, 0.0], &[2, 1, 1])?;
    let masked = khatri_rao_list(&factors, None, Some(&mask))?;
    let zeroed = masked
        .rows()
        .into_iter()
        .filter(|row| row.iter().all(|&x| x == 0.0))
        .count();
    println!("Rows zeroed by the mask: {} of {}", zeroed, masked.nrows());

    // Example 5: Errors
    println!("\n5. Error Reporting");
    println!("------------------");

    let wide = array![[1.0, 2.0, 3.0]];
    match khatri_rao_list(&[a.view(), wide.view()], None, None) {
        Err(err) => println!("Rank mismatch: {}", err),
        Ok(_) => println!("unexpected success"),
    }
    match khatri_rao_list(&factors, Some(3), None) {
        Err(err) => println!("Invalid skip: {}", err),
        Ok(_) => println!("unexpected success"),
    }

    Ok(())
}
