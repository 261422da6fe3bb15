//! Kruskal Tensor Reconstruction Example
//!
//! This example demonstrates how to reconstruct a tensor from its Kruskal
//! (CP) factors as a full tensor, a mode-n unfolding, or a flat vector, and
//! how weights and masks enter the reconstruction.
//!
//! Run with:
//! ```bash
//! cargo run --example reconstruction
//! ```

use ktensor_core::DenseND;
use ktensor_decomp::{kruskal_to_tensor, kruskal_to_unfolded, kruskal_to_vec, KruskalTensor};
use scirs2_core::ndarray_ext::{Array1, Array2};

fn factor(rows: usize, rank: usize, seed: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, rank), |(i, r)| {
        (((i + 1) * (r + 3) + seed * 7) % 11) as f64 / 11.0 - 0.5
    })
}

fn main() -> anyhow::Result<()> {
    println!("{}", "=".repeat(80));
    println!("Kruskal Tensor Reconstruction Example");
    println!("{}", "=".repeat(80));
    println!();

    // ========================================================================
    // Example 1: Full reconstruction
    // ========================================================================
    println!("Example 1: Full reconstruction from factors");
    println!("{}", "-".repeat(80));

    let shape = [20, 30, 40];
    let rank = 8;
    let factors: Vec<Array2<f64>> = shape
        .iter()
        .enumerate()
        .map(|(n, &s)| factor(s, rank, n))
        .collect();

    let tensor = kruskal_to_tensor(&factors, None, None)?;
    println!("Factor shapes: {:?}", factors.iter().map(|f| f.dim()).collect::<Vec<_>>());
    println!("Reconstructed tensor shape: {:?}", tensor.shape());
    println!("Frobenius norm: {:.6}", tensor.frobenius_norm());

    let stored: usize = shape.iter().sum::<usize>() * rank;
    let dense: usize = shape.iter().product();
    println!("Compression ratio: {:.2}x", dense as f64 / stored as f64);
    println!();

    // ========================================================================
    // Example 2: Unfolded reconstruction agrees with unfolding the full tensor
    // ========================================================================
    println!("Example 2: Mode-n unfolded reconstruction");
    println!("{}", "-".repeat(80));

    for mode in 0..shape.len() {
        let unfolded = kruskal_to_unfolded(&factors, mode)?;
        let reference = tensor.unfold(mode)?;
        let max_diff = (&unfolded - &reference)
            .iter()
            .fold(0.0f64, |acc, x| acc.max(x.abs()));
        println!(
            "  Mode {}: shape {:?}, max |difference| = {:.2e}",
            mode,
            unfolded.dim(),
            max_diff
        );
    }
    println!();

    // ========================================================================
    // Example 3: Vectorized reconstruction
    // ========================================================================
    println!("Example 3: Vectorized reconstruction");
    println!("{}", "-".repeat(80));

    let vec = kruskal_to_vec(&factors)?;
    println!("Vector length: {} (= {})", vec.len(), dense);
    println!("First entries: {:?}", vec.iter().take(4).collect::<Vec<_>>());
    println!();

    // ========================================================================
    // Example 4: Weights and masks
    // ========================================================================
    println!("Example 4: Weighted and masked reconstruction");
    println!("{}", "-".repeat(80));

    let weights = Array1::from_shape_fn(rank, |r| 1.0 + r as f64);
    let weighted = kruskal_to_tensor(&factors, Some(&weights), None)?;
    println!("Weighted norm: {:.6}", weighted.frobenius_norm());

    // Mask out every other slice along mode 1; broadcast over modes 0 and 2
    let mask_data: Vec<f64> = (0..shape[1]).map(|j| (j % 2) as f64).collect();
    let mask = DenseND::from_vec(mask_data, &[1, shape[1], 1])?;
    let masked = kruskal_to_tensor(&factors, Some(&weights), Some(&mask))?;
    let expected = weighted.hadamard(&mask.broadcast_to(&shape)?)?;
    println!("Masked norm: {:.6}", masked.frobenius_norm());
    println!(
        "Masked reconstruction equals weighted tensor times mask: diff norm {:.2e}",
        (&masked - &expected).frobenius_norm()
    );
    println!();

    // ========================================================================
    // Example 5: Normalized Kruskal tensor
    // ========================================================================
    println!("Example 5: Normalizing factors into weights");
    println!("{}", "-".repeat(80));

    let mut kt = KruskalTensor::new(factors, Some(weights))?;
    println!("Shape: {:?}, rank: {}", kt.shape(), kt.rank());
    println!("Norm from factors: {:.6}", kt.norm());

    kt.normalize();
    if let Some(w) = kt.weights() {
        println!("Weights after normalization: {:.4}", w);
    }
    let renormalized = kt.to_tensor()?;
    println!(
        "Reconstruction change after normalization: {:.2e}",
        (&renormalized - &weighted).frobenius_norm()
    );
    println!("Norm from factors: {:.6}", kt.norm());
    println!();

    println!("{}", "=".repeat(80));
    println!("Reconstruction Example Complete!");
    println!("{}", "=".repeat(80));

    Ok(())
}
