//! Kruskal tensors (CP / PARAFAC factored form)
//!
//! A Kruskal tensor represents an N-way array as a sum of R rank-1 terms:
//!
//! X = Σᵣ λᵣ (u₀ᵣ ∘ u₁ᵣ ∘ ... ∘ uₙ₋₁ᵣ)
//!
//! Where:
//! - R is the rank, shared by every factor matrix
//! - Uₖ ∈ ℝ^(sₖ×R) are the factor matrices, column r holding uₖᵣ
//! - λᵣ are optional weights, one per rank-1 component
//!
//! The functions in this module turn that factored form back into a dense
//! tensor, a mode-k unfolding, or a flat vector. All of them go through the
//! Khatri-Rao product: the row sums of U₀ ⊙ U₁ ⊙ ... ⊙ Uₙ₋₁ are the row-major
//! flattening of X, and the mode-k unfolding is X₍ₖ₎ = Uₖ (⊙_{j≠k} Uⱼ)ᵀ.
//!
//! Inputs are never mutated. Weights are applied to a scaled copy of the
//! first factor.

use ktensor_core::DenseND;
use ktensor_kernels::{khatri_rao_list, KernelError};
use log::debug;
use scirs2_core::ndarray_ext::{Array1, Array2, ArrayView2, Axis};
use scirs2_core::numeric::Float;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KruskalError {
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Invalid mode {mode}: factor list has {n_modes} factors")]
    InvalidMode { mode: usize, n_modes: usize },

    #[error("Kernel error: {0}")]
    Kernel(#[from] KernelError),

    #[error(transparent)]
    Tensor(#[from] anyhow::Error),
}

impl KruskalError {
    /// Whether the error comes from factors, weights or a mask whose shapes
    /// disagree
    pub fn is_shape_mismatch(&self) -> bool {
        match self {
            KruskalError::ShapeMismatch(_) => true,
            KruskalError::Kernel(err) => err.is_shape_mismatch(),
            _ => false,
        }
    }
}

pub type KruskalResult<T> = Result<T, KruskalError>;

/// Validate a factor list and return its tensor shape and rank
///
/// # Errors
///
/// - `KernelError::EmptyInput` if there are no factors
/// - `KernelError::RankMismatch` naming the first factor whose column count
///   differs from the first factor's
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::Array2;
/// use ktensor_decomp::kruskal_shape;
///
/// let factors = vec![Array2::<f64>::ones((3, 2)), Array2::<f64>::ones((4, 2))];
/// let (shape, rank) = kruskal_shape(&factors).unwrap();
/// assert_eq!(shape, vec![3, 4]);
/// assert_eq!(rank, 2);
/// ```
pub fn kruskal_shape<T>(factors: &[Array2<T>]) -> KruskalResult<(Vec<usize>, usize)> {
    let rank = factors
        .first()
        .ok_or_else(|| KernelError::empty_input("kruskal_shape", "factors"))?
        .ncols();

    for (idx, factor) in factors.iter().enumerate() {
        if factor.ncols() != rank {
            return Err(
                KernelError::rank_mismatch("kruskal_shape", rank, factor.ncols(), idx).into(),
            );
        }
    }

    Ok((factors.iter().map(|f| f.nrows()).collect(), rank))
}

/// Reconstruct the full tensor from its factor matrices
///
/// Computes the Khatri-Rao product of all factors (with the mask applied to
/// its rows), sums over the rank axis and folds the resulting vector back
/// into shape `(s₀, …, sₙ₋₁)` along mode 0.
///
/// # Arguments
///
/// * `factors` - Factor matrices Uₖ of shape (sₖ, R)
/// * `weights` - Optional length-R weights, applied to a copy of the first factor
/// * `mask` - Optional mask broadcastable to `(s₀, …, sₙ₋₁)`
///
/// # Errors
///
/// - `KruskalError::Kernel` for an empty list, a rank mismatch or a mask that
///   does not broadcast
/// - `KruskalError::ShapeMismatch` if `weights` does not have length R
///
/// # Complexity
///
/// Time: O(R × ∏ₖ sₖ)
/// Space: O(R × ∏ₖ sₖ) for the Khatri-Rao product
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use ktensor_decomp::kruskal_to_tensor;
///
/// let u = array![[1.0, 0.0], [0.0, 1.0]];
/// let v = array![[1.0, 1.0], [1.0, 1.0]];
///
/// let tensor = kruskal_to_tensor(&[u, v], None, None).unwrap();
/// assert_eq!(tensor.shape(), &[2, 2]);
/// assert!(tensor.as_array().iter().all(|&x| x == 1.0));
/// ```
pub fn kruskal_to_tensor<T>(
    factors: &[Array2<T>],
    weights: Option<&Array1<T>>,
    mask: Option<&DenseND<T>>,
) -> KruskalResult<DenseND<T>>
where
    T: Float,
{
    let shape: Vec<usize> = factors.iter().map(|f| f.nrows()).collect();
    debug!(
        "kruskal_to_tensor: shape={:?}, weighted={}, masked={}",
        shape,
        weights.is_some(),
        mask.is_some()
    );

    let weighted = match (weights, factors.first()) {
        (Some(weights), Some(first)) => Some(scale_columns(first, weights)?),
        _ => None,
    };

    let mut views: Vec<ArrayView2<T>> = factors.iter().map(|f| f.view()).collect();
    if let Some(first) = &weighted {
        views[0] = first.view();
    }

    let kr = khatri_rao_list(&views, None, mask)?;
    let flat = kr.sum_axis(Axis(1));

    Ok(DenseND::fold_vec(&flat, &shape, 0)?)
}

/// Reconstruct the mode-`mode` unfolding without forming the full tensor
///
/// Uses X₍ₖ₎ = Uₖ (⊙_{j≠k} Uⱼ)ᵀ, so no N-dimensional array is allocated and
/// no fold/unfold round trip is needed.
///
/// # Returns
///
/// A matrix of shape (s_mode, ∏_{j≠mode} sⱼ), equal to
/// `kruskal_to_tensor(factors, None, None)?.unfold(mode)?`.
///
/// # Errors
///
/// - `KruskalError::InvalidMode` if `mode >= factors.len()`
/// - `KruskalError::Kernel` on a rank mismatch
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::Array2;
/// use ktensor_decomp::kruskal_to_unfolded;
///
/// let factors = vec![
///     Array2::<f64>::ones((2, 3)),
///     Array2::<f64>::ones((4, 3)),
///     Array2::<f64>::ones((5, 3)),
/// ];
/// let unfolded = kruskal_to_unfolded(&factors, 1).unwrap();
/// assert_eq!(unfolded.shape(), &[4, 10]);
/// assert_eq!(unfolded[[0, 0]], 3.0);
/// ```
pub fn kruskal_to_unfolded<T>(factors: &[Array2<T>], mode: usize) -> KruskalResult<Array2<T>>
where
    T: Float + 'static,
{
    let views: Vec<ArrayView2<T>> = factors.iter().map(|f| f.view()).collect();
    unfold_views(&views, mode)
}

/// Reconstruct the tensor as a vector
///
/// The vector is the row-major flattening of the tensor, i.e. the mode-0
/// unfolding read row by row. Weights and masks are not taken here; use
/// [`kruskal_to_tensor`] followed by [`DenseND::to_vec`] for those.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use ktensor_decomp::kruskal_to_vec;
///
/// let u = array![[1.0], [2.0]];
/// let v = array![[1.0], [10.0], [100.0]];
///
/// let vec = kruskal_to_vec(&[u, v]).unwrap();
/// assert_eq!(vec.to_vec(), vec![1.0, 10.0, 100.0, 2.0, 20.0, 200.0]);
/// ```
pub fn kruskal_to_vec<T>(factors: &[Array2<T>]) -> KruskalResult<Array1<T>>
where
    T: Float,
{
    Ok(kruskal_to_tensor(factors, None, None)?.to_vec())
}

fn unfold_views<T>(views: &[ArrayView2<T>], mode: usize) -> KruskalResult<Array2<T>>
where
    T: Float + 'static,
{
    let factor = views.get(mode).ok_or(KruskalError::InvalidMode {
        mode,
        n_modes: views.len(),
    })?;
    debug!(
        "kruskal_to_unfolded: mode={}, n_modes={}, rank={}",
        mode,
        views.len(),
        factor.ncols()
    );

    let rest = khatri_rao_list(views, Some(mode), None)?;
    Ok(factor.dot(&rest.t()))
}

/// Copy `factor` with column r multiplied by `weights[r]`
fn scale_columns<T>(factor: &Array2<T>, weights: &Array1<T>) -> KruskalResult<Array2<T>>
where
    T: Float,
{
    if weights.len() != factor.ncols() {
        return Err(KruskalError::ShapeMismatch(format!(
            "weights have length {} but factors have rank {}",
            weights.len(),
            factor.ncols()
        )));
    }

    let mut scaled = factor.clone();
    for (mut column, &weight) in scaled.axis_iter_mut(Axis(1)).zip(weights.iter()) {
        column.mapv_inplace(|x| x * weight);
    }
    Ok(scaled)
}

/// Owned Kruskal tensor: factor matrices plus optional component weights
///
/// Construction validates that the factor list is non-empty, that every
/// factor has the same rank, and that the weights (if any) have that length.
#[derive(Debug, Clone)]
pub struct KruskalTensor<T> {
    weights: Option<Array1<T>>,
    factors: Vec<Array2<T>>,
}

impl<T> KruskalTensor<T>
where
    T: Float + 'static,
{
    /// Build a Kruskal tensor from factors and optional weights
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::{array, Array2};
    /// use ktensor_decomp::KruskalTensor;
    ///
    /// let factors = vec![Array2::<f64>::ones((3, 2)), Array2::<f64>::ones((4, 2))];
    /// let kt = KruskalTensor::new(factors, Some(array![2.0, 0.5])).unwrap();
    /// assert_eq!(kt.shape(), vec![3, 4]);
    /// assert_eq!(kt.to_tensor().unwrap()[&[0, 0]], 2.5);
    /// ```
    pub fn new(factors: Vec<Array2<T>>, weights: Option<Array1<T>>) -> KruskalResult<Self> {
        let (_, rank) = kruskal_shape(&factors)?;

        if let Some(weights) = &weights {
            if weights.len() != rank {
                return Err(KruskalError::ShapeMismatch(format!(
                    "weights have length {} but factors have rank {}",
                    weights.len(),
                    rank
                )));
            }
        }

        Ok(Self { weights, factors })
    }

    /// Build an unweighted Kruskal tensor
    pub fn from_factors(factors: Vec<Array2<T>>) -> KruskalResult<Self> {
        Self::new(factors, None)
    }

    pub fn factors(&self) -> &[Array2<T>] {
        &self.factors
    }

    pub fn weights(&self) -> Option<&Array1<T>> {
        self.weights.as_ref()
    }

    /// Split into `(factors, weights)`
    pub fn into_parts(self) -> (Vec<Array2<T>>, Option<Array1<T>>) {
        (self.factors, self.weights)
    }

    /// Shape of the represented tensor
    pub fn shape(&self) -> Vec<usize> {
        self.factors.iter().map(|f| f.nrows()).collect()
    }

    /// Number of rank-1 components
    pub fn rank(&self) -> usize {
        self.factors[0].ncols()
    }

    pub fn n_modes(&self) -> usize {
        self.factors.len()
    }

    /// Reconstruct the full tensor, weights included
    pub fn to_tensor(&self) -> KruskalResult<DenseND<T>> {
        kruskal_to_tensor(&self.factors, self.weights.as_ref(), None)
    }

    /// Reconstruct the full tensor with a multiplicative mask
    pub fn to_tensor_masked(&self, mask: &DenseND<T>) -> KruskalResult<DenseND<T>> {
        kruskal_to_tensor(&self.factors, self.weights.as_ref(), Some(mask))
    }

    /// Mode-`mode` unfolding of the weighted tensor
    pub fn to_unfolded(&self, mode: usize) -> KruskalResult<Array2<T>> {
        let weighted = match &self.weights {
            Some(weights) => Some(scale_columns(&self.factors[0], weights)?),
            None => None,
        };

        let mut views: Vec<ArrayView2<T>> = self.factors.iter().map(|f| f.view()).collect();
        if let Some(first) = &weighted {
            views[0] = first.view();
        }

        unfold_views(&views, mode)
    }

    /// Row-major flattening of the weighted tensor
    pub fn to_vec(&self) -> KruskalResult<Array1<T>> {
        Ok(self.to_tensor()?.to_vec())
    }

    /// Normalize every factor column to unit length
    ///
    /// The column norms are accumulated into the weights (starting from the
    /// existing weights, or ones), so the represented tensor is unchanged.
    /// Columns with norm below machine epsilon are left as they are.
    pub fn normalize(&mut self) {
        let rank = self.rank();
        let mut weights = self
            .weights
            .take()
            .unwrap_or_else(|| Array1::<T>::ones(rank));

        for factor in &mut self.factors {
            for (r, mut column) in factor.axis_iter_mut(Axis(1)).enumerate() {
                let norm = column.iter().fold(T::zero(), |acc, &x| acc + x * x).sqrt();
                if norm > T::epsilon() {
                    weights[r] = weights[r] * norm;
                    column.mapv_inplace(|x| x / norm);
                }
            }
        }

        self.weights = Some(weights);
    }

    /// Frobenius norm of the represented tensor
    ///
    /// Computed from the factors alone:
    /// ||X||² = Σ_{r,s} λᵣ λₛ Πₖ ⟨Uₖ[:,r], Uₖ[:,s]⟩
    ///
    /// # Complexity
    ///
    /// Time: O(R² × Σₖ sₖ)
    pub fn norm(&self) -> T {
        let rank = self.rank();
        let mut gram = Array2::<T>::ones((rank, rank));

        for factor in &self.factors {
            gram = gram * factor.t().dot(factor);
        }

        let norm_sq = match &self.weights {
            Some(weights) => weights.dot(&gram.dot(weights)),
            None => gram.sum(),
        };

        norm_sq.max(T::zero()).sqrt()
    }
}
