//! Tensor operations: reshape, unfold, fold, broadcast.
//!
//! All operations are implemented as methods on [`DenseND`](crate::dense::DenseND).
//!
//! # Available Operations
//!
//! - **Reshape:** [`DenseND::reshape`](crate::dense::DenseND::reshape)
//!   - Example: `[2, 3, 4]` → `[6, 4]`
//! - **Unfold:** [`DenseND::unfold`](crate::dense::DenseND::unfold)
//!   - Example: `[2, 3, 4]` unfolded on mode 1 → `[3, 8]` matrix
//! - **Fold:** [`DenseND::fold`](crate::dense::DenseND::fold) and
//!   [`DenseND::fold_vec`](crate::dense::DenseND::fold_vec)
//!   - Inverse of unfold, from a matrix or from its row-major flattening
//! - **Broadcast:** [`DenseND::broadcast_to`](crate::dense::DenseND::broadcast_to)
//!   - Example: `[3, 1]` → `[3, 4]`
//! - **Flatten:** [`DenseND::to_vec`](crate::dense::DenseND::to_vec)
//!
//! # Mathematical Background
//!
//! ## Mode-n Unfolding
//!
//! For a tensor **X** ∈ ℝ^(I₀ × I₁ × ... × Iₙ₋₁), the mode-k unfolding **X₍ₖ₎**
//! is a matrix of size Iₖ × (∏_{j≠k} Iⱼ). Row `iₖ` contains the slice
//! `X[..., iₖ, ...]` flattened in row-major order over the remaining modes,
//! so the last mode varies fastest.
//!
//! With this convention the mode-0 unfolding is a plain row-major reshape,
//! and the row-major flatten of a tensor equals the row-major flatten of its
//! mode-0 unfolding.
//!
//! ```
//! use ktensor_core::DenseND;
//!
//! let tensor = DenseND::from_vec((0..6).map(|x| x as f64).collect(), &[2, 3]).unwrap();
//! let unfolded = tensor.unfold(0).unwrap();
//! assert_eq!(unfolded.iter().cloned().collect::<Vec<_>>(), tensor.to_vec().to_vec());
//! ```
//!
//! # Performance Notes
//!
//! - **Reshape:** O(1) view plus a copy of the data
//! - **Unfold / Fold:** O(n), one permutation copy
//! - **Broadcast:** O(n) in the target size
