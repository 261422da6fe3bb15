//! # ktensor-kernels
//!
//! Tensor kernel operations used by the Kruskal reconstruction routines.
//!
//! ## Overview
//!
//! - **Khatri-Rao product** ([`khatri_rao`]) - column-wise Kronecker product
//!   of two matrices
//! - **Khatri-Rao over a factor list** ([`khatri_rao_list`]) - checked
//!   product over N factors, optionally skipping one factor and applying a
//!   reconstruction mask
//! - **Structured errors** ([`KernelError`]) reporting the offending factor
//!   or mode
//!
//! ## Quick Start
//!
//! ```rust
//! use scirs2_core::ndarray_ext::Array2;
//! use ktensor_kernels::{khatri_rao, khatri_rao_list};
//!
//! let a = Array2::<f64>::ones((10, 5));
//! let b = Array2::<f64>::ones((8, 5));
//! let kr = khatri_rao(&a.view(), &b.view());
//! assert_eq!(kr.shape(), &[80, 5]);
//!
//! let c = Array2::<f64>::ones((3, 5));
//! let kr3 = khatri_rao_list(&[a.view(), b.view(), c.view()], None, None).unwrap();
//! assert_eq!(kr3.shape(), &[240, 5]);
//! ```
//!
//! ## SciRS2 Integration
//!
//! This crate uses `scirs2-core` for all array operations and numerical traits.

#![deny(warnings)]

pub mod error;
pub mod khatri_rao;


// Re-exports
pub use error::{KernelError, KernelResult};
pub use khatri_rao::*;
