//! # ktensor - Kruskal Tensor Primitives
//!
//! Conversion between the factorized (CP / PARAFAC) form of a multi-way
//! array and its dense, unfolded or flattened form, with optional
//! per-component weights and a multiplicative mask.
//!
//! This is the **meta crate** that re-exports all ktensor components for convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use ktensor::prelude::*;
//! use scirs2_core::ndarray_ext::array;
//!
//! let u = array![[1.0, 0.0], [0.0, 1.0]];
//! let v = array![[1.0, 1.0], [1.0, 1.0]];
//!
//! let tensor = kruskal_to_tensor(&[u, v], None, None)?;
//! assert_eq!(tensor.shape(), &[2, 2]);
//! # Ok::<(), KruskalError>(())
//! ```
//!
//! ## Components
//!
//! ### Core Tensor Operations ([`core`])
//!
//! Dense tensor type, reshape, unfold/fold, broadcasting.
//!
//! ```
//! use ktensor::core::DenseND;
//!
//! let tensor = DenseND::<f64>::ones(&[2, 3, 4]);
//! let unfolded = tensor.unfold(1).unwrap();
//! assert_eq!(unfolded.shape(), &[3, 8]);
//! ```
//!
//! ### Khatri-Rao Kernels ([`kernels`])
//!
//! Pairwise and list Khatri-Rao products, with a skipped factor and a mask.
//!
//! ```
//! use ktensor::kernels::{khatri_rao, khatri_rao_list};
//! use scirs2_core::ndarray_ext::Array2;
//!
//! let a = Array2::<f64>::ones((10, 5));
//! let b = Array2::<f64>::ones((8, 5));
//! let kr = khatri_rao(&a.view(), &b.view());
//! assert_eq!(kr.shape(), &[80, 5]);
//!
//! let rest = khatri_rao_list(&[a.view(), b.view()], Some(0), None).unwrap();
//! assert_eq!(rest.shape(), &[8, 5]);
//! ```
//!
//! ### Kruskal Reconstruction ([`decomp`])
//!
//! Full, unfolded and vectorized reconstruction, and the `KruskalTensor` type.
//!
//! ```
//! use ktensor::decomp::{kruskal_to_unfolded, KruskalTensor};
//! use scirs2_core::ndarray_ext::Array2;
//!
//! let factors = vec![Array2::<f64>::ones((3, 2)), Array2::<f64>::ones((4, 2))];
//! let unfolded = kruskal_to_unfolded(&factors, 1).unwrap();
//! assert_eq!(unfolded.shape(), &[4, 3]);
//!
//! let kt = KruskalTensor::from_factors(factors).unwrap();
//! assert_eq!(kt.shape(), vec![3, 4]);
//! ```
//!
//! ## Logging
//!
//! Reconstruction entry points log through the `log` facade at `debug`
//! level. Install any `log` backend in the final binary to see them.

#![deny(warnings)]

// Re-export all components
pub use ktensor_core as core;
pub use ktensor_decomp as decomp;
pub use ktensor_kernels as kernels;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use ktensor::prelude::*;
    //!
    //! let tensor = DenseND::<f64>::zeros(&[10, 20, 30]);
    //! ```

    // Core types
    pub use crate::core::DenseND;

    // Reconstruction
    pub use crate::decomp::{
        kruskal_shape, kruskal_to_tensor, kruskal_to_unfolded, kruskal_to_vec, KruskalError,
        KruskalResult, KruskalTensor,
    };

    // Kernels
    pub use crate::kernels::{khatri_rao, khatri_rao_list, KernelError, KernelResult};
}
