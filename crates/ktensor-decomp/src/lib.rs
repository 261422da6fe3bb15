//! # ktensor-decomp - Kruskal tensor reconstruction
//!
//! Conversion routines between the factored (Kruskal / CP) form of a tensor
//! and its dense, unfolded and vectorised forms.
//!
//! ## Overview
//!
//! A rank-R Kruskal tensor is stored as N factor matrices Uₖ of shape
//! (sₖ, R) and optional weights λ:
//!
//! ```text
//! X ≈ Σᵣ λᵣ (u₀ᵣ ∘ u₁ᵣ ∘ ... ∘ uₙ₋₁ᵣ)
//! ```
//!
//! **Operations:**
//! - `kruskal_to_tensor`: full dense tensor, with optional weights and mask
//! - `kruskal_to_unfolded`: mode-k unfolding without building the full tensor
//! - `kruskal_to_vec`: row-major vectorisation
//! - `KruskalTensor`: validated owner of factors and weights, with
//!   normalization and a factor-only Frobenius norm
//!
//! ## Quick Start
//!
//! ```
//! use scirs2_core::ndarray_ext::array;
//! use ktensor_decomp::{kruskal_to_tensor, kruskal_to_unfolded, KruskalTensor};
//!
//! let factors = vec![
//!     array![[1.0, 0.0], [0.0, 1.0]],
//!     array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]],
//! ];
//!
//! let tensor = kruskal_to_tensor(&factors, None, None)?;
//! assert_eq!(tensor.shape(), &[2, 3]);
//!
//! let unfolded = kruskal_to_unfolded(&factors, 1)?;
//! assert_eq!(unfolded.shape(), &[3, 2]);
//!
//! let kt = KruskalTensor::new(factors, Some(array![2.0, 1.0]))?;
//! println!("norm = {:.4}", kt.norm());
//! # Ok::<(), ktensor_decomp::KruskalError>(())
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`KruskalResult`]. Rank disagreements, empty
//! factor lists and masks that do not broadcast are reported by the kernel
//! layer and surface as [`KruskalError::Kernel`]; an out-of-range mode is
//! [`KruskalError::InvalidMode`].
//!
//! ## Logging
//!
//! Entry points emit `debug` records through the `log` facade; the
//! Khatri-Rao kernel emits `trace` records. No logger is installed by the
//! library.
//!
//! ## References
//!
//! - Kolda & Bader (2009), "Tensor Decompositions and Applications"

#![deny(warnings)]

pub mod kruskal;

#[cfg(test)]
mod property_tests;

// Re-exports
pub use kruskal::*;
