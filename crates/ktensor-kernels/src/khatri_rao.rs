//! Khatri-Rao product (column-wise Kronecker product)
//!
//! For matrices A (I × K) and B (J × K), the Khatri-Rao product C = A ⊙ B has
//! size (I*J × K) where each column k of C is the Kronecker product of column
//! k of A and column k of B.
//!
//! Over a list of factor matrices U₀ … Uₙ₋₁ of shapes (sᵢ × R), the product
//! U₀ ⊙ U₁ ⊙ … ⊙ Uₙ₋₁ has one row per multi-index (i₀, …, iₙ₋₁) in row-major
//! order, so its row sums are exactly the row-major flattening of the tensor
//! the factors describe.
//!
//! # SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`.

use crate::error::{KernelError, KernelResult};
use ktensor_core::DenseND;
use scirs2_core::ndarray_ext::{Array2, ArrayView2};
use scirs2_core::numeric::Num;

/// Compute the Khatri-Rao product (column-wise Kronecker product) of two matrices
///
/// # Arguments
///
/// * `a` - First matrix with shape (I, K)
/// * `b` - Second matrix with shape (J, K)
///
/// # Returns
///
/// A matrix with shape (I*J, K); row `i * J + j` holds `a[i, :] * b[j, :]`.
///
/// # Panics
///
/// Panics if the number of columns in A and B don't match. Use
/// [`khatri_rao_list`] for a checked variant.
///
/// # Complexity
///
/// Time: O(I * J * K)
/// Space: O(I * J * K)
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use ktensor_kernels::khatri_rao;
///
/// let a = array![[1.0, 2.0], [3.0, 4.0]];
/// let b = array![[5.0, 6.0], [7.0, 8.0]];
/// let c = khatri_rao(&a.view(), &b.view());
/// assert_eq!(c.shape(), &[4, 2]);
///
/// // First column: [1*5, 1*7, 3*5, 3*7]
/// assert_eq!(c[[0, 0]], 5.0);
/// assert_eq!(c[[1, 0]], 7.0);
/// assert_eq!(c[[2, 0]], 15.0);
/// assert_eq!(c[[3, 0]], 21.0);
/// ```
pub fn khatri_rao<T>(a: &ArrayView2<T>, b: &ArrayView2<T>) -> Array2<T>
where
    T: Clone + Num,
{
    let (i, k1) = (a.nrows(), a.ncols());
    let (j, k2) = (b.nrows(), b.ncols());

    assert_eq!(
        k1, k2,
        "Number of columns must match: A has {} columns, B has {} columns",
        k1, k2
    );

    let mut result = Array2::<T>::zeros((i * j, k1));

    for col_idx in 0..k1 {
        let a_col = a.column(col_idx);
        let b_col = b.column(col_idx);

        for (row_a_idx, a_val) in a_col.iter().enumerate() {
            for (row_b_idx, b_val) in b_col.iter().enumerate() {
                result[[row_a_idx * j + row_b_idx, col_idx]] = a_val.clone() * b_val.clone();
            }
        }
    }

    result
}

/// Compute the Khatri-Rao product of a list of factor matrices
///
/// The product is taken left to right over every factor except `skip`, so the
/// first included factor's row index varies slowest. When `mask` is given it
/// is broadcast to the shape of the included modes, flattened in row-major
/// order and multiplied into the matching rows of the product.
///
/// # Arguments
///
/// * `factors` - Factor matrices, all with the same number of columns R
/// * `skip` - Optional index of a factor to leave out
/// * `mask` - Optional mask broadcastable to `(s_i for i != skip)`
///
/// # Returns
///
/// A matrix with shape (∏_{i≠skip} sᵢ, R). If every factor is skipped the
/// result is the (1, R) row of ones, the neutral element of the product.
///
/// # Errors
///
/// - [`KernelError::EmptyInput`] if `factors` is empty
/// - [`KernelError::RankMismatch`] if column counts disagree
/// - [`KernelError::InvalidMode`] if `skip` is out of range
/// - [`KernelError::IncompatibleShapes`] if the mask does not broadcast
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use ktensor_kernels::khatri_rao_list;
///
/// let a = array![[1.0, 2.0], [3.0, 4.0]];
/// let b = array![[5.0, 6.0], [7.0, 8.0], [9.0, 10.0]];
/// let c = array![[1.0, 1.0]];
///
/// let kr = khatri_rao_list(&[a.view(), b.view(), c.view()], None, None).unwrap();
/// assert_eq!(kr.shape(), &[6, 2]);
///
/// let skipped = khatri_rao_list(&[a.view(), b.view(), c.view()], Some(1), None).unwrap();
/// assert_eq!(skipped.shape(), &[2, 2]);
/// ```
pub fn khatri_rao_list<T>(
    factors: &[ArrayView2<T>],
    skip: Option<usize>,
    mask: Option<&DenseND<T>>,
) -> KernelResult<Array2<T>>
where
    T: Clone + Num,
{
    const OP: &str = "khatri_rao_list";

    let rank = factors
        .first()
        .ok_or_else(|| KernelError::empty_input(OP, "factors"))?
        .ncols();

    for (idx, factor) in factors.iter().enumerate() {
        if factor.ncols() != rank {
            return Err(KernelError::rank_mismatch(OP, rank, factor.ncols(), idx));
        }
    }

    if let Some(mode) = skip {
        if mode >= factors.len() {
            return Err(KernelError::invalid_mode(OP, mode, factors.len()));
        }
    }

    let included: Vec<ArrayView2<T>> = factors
        .iter()
        .enumerate()
        .filter(|(idx, _)| Some(*idx) != skip)
        .map(|(_, factor)| factor.view())
        .collect();

    let mut result = match included.first() {
        Some(first) => first.to_owned(),
        None => Array2::ones((1, rank)),
    };

    for factor in included.iter().skip(1) {
        log::trace!(
            "{}: folding ({} x {}) into ({} x {})",
            OP,
            factor.nrows(),
            rank,
            result.nrows(),
            rank
        );
        result = khatri_rao(&result.view(), factor);
    }

    if let Some(mask) = mask {
        let shape: Vec<usize> = included.iter().map(|factor| factor.nrows()).collect();
        let broadcast = mask.broadcast_to(&shape).map_err(|_| {
            KernelError::incompatible_shapes(
                OP,
                mask.shape_vec(),
                shape.clone(),
                "mask is not broadcastable to the reconstructed shape",
            )
        })?;

        let weights = broadcast.to_vec();
        for (mut row, weight) in result.rows_mut().into_iter().zip(weights.iter()) {
            row.mapv_inplace(|value| value * weight.clone());
        }
    }

    Ok(result)
}
