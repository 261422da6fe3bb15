//! # ktensor-core
//!
//! Dense tensor storage and the shape primitives used by the Kruskal kernels.
//!
//! This crate provides the array backend of the ktensor workspace:
//!
//! - **Dense tensor representation** ([`DenseND`]) over `scirs2_core::ndarray_ext`
//! - **Matricization** (unfold/fold) in row-major order
//! - **Flat folding** ([`DenseND::fold_vec`]) for vectors laid out as a
//!   flattened unfolding
//! - **Broadcasting** with NumPy rules, used to apply reconstruction masks
//!
//! ## SciRS2 Integration
//!
//! This crate uses `scirs2-core` for all array and numeric operations.
//!
//! ## Quick Start
//!
//! ```
//! use ktensor_core::DenseND;
//!
//! let tensor = DenseND::<f64>::ones(&[2, 3, 4]);
//!
//! // Unfold along mode 1 (matricization)
//! let unfolded = tensor.unfold(1).unwrap();
//! assert_eq!(unfolded.shape(), &[3, 8]);
//!
//! // Fold back to original shape
//! let folded = DenseND::fold(&unfolded, &[2, 3, 4], 1).unwrap();
//! assert_eq!(folded.shape(), &[2, 3, 4]);
//! ```
//!
//! ## Error Handling
//!
//! Shape operations return `anyhow::Result` with a message naming the
//! offending shapes or mode:
//!
//! ```
//! use ktensor_core::DenseND;
//!
//! let tensor = DenseND::<f64>::zeros(&[2, 3]);
//! assert!(tensor.reshape(&[7]).is_err());
//! assert!(tensor.unfold(10).is_err());
//! ```

#![deny(warnings)]

pub mod dense;
pub mod ops;

#[cfg(test)]
mod property_tests;

pub use dense::DenseND;
