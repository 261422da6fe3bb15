//! Dense N-dimensional tensor storage
//!
//! This module provides `DenseND<T>`, the dense array backend that the Kruskal
//! kernels reconstruct into. It supplies exactly the primitives those kernels
//! lean on: shape queries, reshape, mode-n unfolding and folding, broadcasting,
//! element-wise products and row-major flattening.
//!
//! # SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`.
//! Direct use of `ndarray` or `num_traits` is avoided; numeric bounds come from
//! `scirs2_core::numeric`.

use anyhow::{anyhow, bail};
use scirs2_core::ndarray_ext::{Array, Array1, Array2, ArrayView, IxDyn};
use scirs2_core::numeric::Num;
use std::fmt;

/// Dense N-dimensional tensor backed by scirs2_core's ndarray
///
/// # Type Parameters
///
/// * `T` - The element type (typically `f32` or `f64`)
///
/// # Memory Layout
///
/// Tensors built by this crate are C-contiguous (row-major). Flattening and
/// unfolding always follow logical row-major order, regardless of the
/// physical layout of the underlying storage.
///
/// # Examples
///
/// ```
/// use ktensor_core::DenseND;
///
/// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
/// assert_eq!(tensor.shape(), &[2, 3, 4]);
/// assert_eq!(tensor.rank(), 3);
/// ```
#[derive(Clone)]
pub struct DenseND<T> {
    pub(crate) data: Array<T, IxDyn>,
}

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Create a tensor from a vector with given shape
    ///
    /// # Arguments
    ///
    /// * `vec` - Flattened data in row-major order
    /// * `shape` - Target shape
    ///
    /// # Examples
    ///
    /// ```
    /// use ktensor_core::DenseND;
    ///
    /// let tensor = DenseND::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// assert_eq!(tensor[&[1, 0]], 4.0);
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> anyhow::Result<Self> {
        let total: usize = shape.iter().product();
        if vec.len() != total {
            bail!(
                "Shape {:?} requires {} elements, but got {}",
                shape,
                total,
                vec.len()
            );
        }
        let array = Array::from_shape_vec(IxDyn(shape), vec)?;
        Ok(Self { data: array })
    }

    /// Number of dimensions (modes) of this tensor
    pub fn rank(&self) -> usize {
        self.data.ndim()
    }

    /// Shape of this tensor
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the tensor has zero elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Owned copy of the shape
    pub fn shape_vec(&self) -> Vec<usize> {
        self.shape().to_vec()
    }

    /// Immutable reference to the underlying array
    pub fn as_array(&self) -> &Array<T, IxDyn> {
        &self.data
    }

    /// Immutable view of the tensor
    pub fn view(&self) -> ArrayView<'_, T, IxDyn> {
        self.data.view()
    }

    /// Create a tensor filled with a specific value
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        Self {
            data: Array::from_elem(IxDyn(shape), value),
        }
    }

    /// Create a tensor of zeros
    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            data: Array::zeros(IxDyn(shape)),
        }
    }

    /// Create a tensor of ones
    pub fn ones(shape: &[usize]) -> Self {
        Self {
            data: Array::ones(IxDyn(shape)),
        }
    }

    /// Flatten the tensor into a vector in row-major order
    ///
    /// For a tensor this is the same ordering as a row-major flatten of its
    /// mode-0 unfolding.
    ///
    /// # Examples
    ///
    /// ```
    /// use ktensor_core::DenseND;
    ///
    /// let tensor = DenseND::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(tensor.to_vec().to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn to_vec(&self) -> Array1<T> {
        self.data.iter().cloned().collect()
    }
}

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Reshape the tensor to a new shape
    ///
    /// Elements are read and written in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ktensor_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
    /// let reshaped = tensor.reshape(&[6, 4]).unwrap();
    /// assert_eq!(reshaped.shape(), &[6, 4]);
    /// ```
    pub fn reshape(&self, new_shape: &[usize]) -> anyhow::Result<Self> {
        let new_size: usize = new_shape.iter().product();
        let old_size = self.len();

        if new_size != old_size {
            bail!(
                "Cannot reshape tensor of size {} into shape {:?} (size {})",
                old_size,
                new_shape,
                new_size
            );
        }

        if let Ok(reshaped) = self.data.view().into_shape_with_order(IxDyn(new_shape)) {
            Ok(Self {
                data: reshaped.to_owned(),
            })
        } else {
            // Not in standard layout: copy through logical order
            let flat: Vec<T> = self.data.iter().cloned().collect();
            Ok(Self {
                data: Array::from_shape_vec(IxDyn(new_shape), flat)?,
            })
        }
    }

    /// Unfold the tensor along a specified mode (matricization)
    ///
    /// The mode axis is moved to the front and the remaining axes, in their
    /// original relative order, are flattened row-major into the columns.
    ///
    /// # Returns
    ///
    /// A 2D array with shape (shape\[mode\], product of other dimensions)
    ///
    /// # Examples
    ///
    /// ```
    /// use ktensor_core::DenseND;
    ///
    /// let tensor = DenseND::from_vec((0..24).map(|x| x as f64).collect(), &[2, 3, 4]).unwrap();
    /// let unfolded = tensor.unfold(1).unwrap();
    /// assert_eq!(unfolded.shape(), &[3, 8]);
    /// // Row 1 holds the slice tensor[:, 1, :]
    /// assert_eq!(unfolded[[1, 0]], 4.0);
    /// assert_eq!(unfolded[[1, 4]], 16.0);
    /// ```
    pub fn unfold(&self, mode: usize) -> anyhow::Result<Array2<T>> {
        if mode >= self.rank() {
            bail!(
                "Mode {} out of bounds for tensor with rank {}",
                mode,
                self.rank()
            );
        }

        let shape = self.shape();
        let mode_size = shape[mode];
        let other_size = other_modes_size(shape, mode);

        // [mode, 0, 1, ..., mode-1, mode+1, ..., rank-1]
        let mut perm: Vec<usize> = Vec::with_capacity(self.rank());
        perm.push(mode);
        perm.extend((0..self.rank()).filter(|&i| i != mode));

        let permuted = self.data.view().permuted_axes(IxDyn(&perm));
        let contiguous = permuted.as_standard_layout().into_owned();
        let unfolded = contiguous.into_shape_with_order((mode_size, other_size))?;

        Ok(unfolded)
    }

    /// Fold a matrix back into a tensor along a specified mode
    ///
    /// This is the inverse of [`unfold`](Self::unfold).
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::Array2;
    /// use ktensor_core::DenseND;
    ///
    /// let matrix = Array2::<f64>::zeros((3, 8));
    /// let tensor = DenseND::fold(&matrix, &[2, 3, 4], 1).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 3, 4]);
    /// ```
    pub fn fold(matrix: &Array2<T>, shape: &[usize], mode: usize) -> anyhow::Result<Self> {
        if mode >= shape.len() {
            bail!("Mode {} out of bounds for shape {:?}", mode, shape);
        }

        let mode_size = shape[mode];
        let other_size = other_modes_size(shape, mode);

        if matrix.shape() != [mode_size, other_size] {
            bail!(
                "Matrix shape {:?} incompatible with tensor shape {:?} and mode {}",
                matrix.shape(),
                shape,
                mode
            );
        }

        // [mode_size, other_dims...]
        let mut inter_shape = Vec::with_capacity(shape.len());
        inter_shape.push(mode_size);
        inter_shape.extend(
            shape
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != mode)
                .map(|(_, &s)| s),
        );

        let inter = matrix
            .as_standard_layout()
            .into_owned()
            .into_shape_with_order(IxDyn(&inter_shape))?;

        // Inverse of the unfold permutation
        let mut inv_perm = vec![0; shape.len()];
        let mut next = 1;
        for (i, slot) in inv_perm.iter_mut().enumerate() {
            if i != mode {
                *slot = next;
                next += 1;
            }
        }

        let tensor = inter.permuted_axes(IxDyn(&inv_perm));

        Ok(Self {
            data: tensor.as_standard_layout().into_owned(),
        })
    }

    /// Fold a flat vector into a tensor, treating it as a row-major
    /// flattening of the mode-`mode` unfolding
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::Array1;
    /// use ktensor_core::DenseND;
    ///
    /// let flat = Array1::from(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let tensor = DenseND::fold_vec(&flat, &[2, 3], 0).unwrap();
    /// assert_eq!(tensor[&[1, 2]], 6.0);
    /// ```
    pub fn fold_vec(flat: &Array1<T>, shape: &[usize], mode: usize) -> anyhow::Result<Self> {
        let mode_size = *shape
            .get(mode)
            .ok_or_else(|| anyhow!("Mode {} out of bounds for shape {:?}", mode, shape))?;
        let other_size = other_modes_size(shape, mode);

        if flat.len() != mode_size * other_size {
            bail!(
                "Vector of length {} cannot be folded into shape {:?}",
                flat.len(),
                shape
            );
        }

        let matrix = Array2::from_shape_vec((mode_size, other_size), flat.to_vec())?;
        Self::fold(&matrix, shape, mode)
    }

    /// Broadcast the tensor to a target shape
    ///
    /// Follows NumPy rules: shapes are compared right to left, and each pair
    /// of dimensions must be equal or the source dimension must be 1. Missing
    /// leading dimensions are treated as 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ktensor_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::from_vec(vec![1.0, 0.0], &[2, 1]).unwrap();
    /// let broadcast = tensor.broadcast_to(&[2, 3]).unwrap();
    /// assert_eq!(broadcast.shape(), &[2, 3]);
    /// assert_eq!(broadcast[&[0, 2]], 1.0);
    /// assert_eq!(broadcast[&[1, 2]], 0.0);
    /// ```
    pub fn broadcast_to(&self, target_shape: &[usize]) -> anyhow::Result<Self> {
        if self.shape() == target_shape {
            return Ok(self.clone());
        }

        let view = self.data.broadcast(IxDyn(target_shape)).ok_or_else(|| {
            anyhow!(
                "Shapes {:?} and {:?} are not broadcastable",
                self.shape(),
                target_shape
            )
        })?;

        Ok(Self {
            data: view.to_owned(),
        })
    }

    /// Element-wise multiplication (Hadamard product) with another tensor
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes don't match.
    pub fn hadamard(&self, other: &Self) -> anyhow::Result<Self> {
        if self.shape() != other.shape() {
            bail!(
                "Shape mismatch for Hadamard product: {:?} vs {:?}",
                self.shape(),
                other.shape()
            );
        }

        Ok(Self {
            data: &self.data * &other.data,
        })
    }
}

impl<T> DenseND<T>
where
    T: scirs2_core::numeric::Float,
{
    /// Frobenius norm: square root of the sum of squared elements
    pub fn frobenius_norm(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, &x| acc + x * x)
            .sqrt()
    }
}

/// Product of every dimension except `mode`
fn other_modes_size(shape: &[usize], mode: usize) -> usize {
    shape
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != mode)
        .map(|(_, &s)| s)
        .product()
}

impl<T> std::ops::Index<&[usize]> for DenseND<T> {
    type Output = T;

    fn index(&self, index: &[usize]) -> &Self::Output {
        &self.data[IxDyn(index)]
    }
}

impl<T> std::ops::IndexMut<&[usize]> for DenseND<T> {
    fn index_mut(&mut self, index: &[usize]) -> &mut Self::Output {
        &mut self.data[IxDyn(index)]
    }
}

impl<'b, T> std::ops::Sub<&'b DenseND<T>> for &DenseND<T>
where
    T: Clone + Num,
{
    type Output = DenseND<T>;

    fn sub(self, other: &'b DenseND<T>) -> DenseND<T> {
        DenseND {
            data: &self.data - &other.data,
        }
    }
}

impl<T: fmt::Debug + Clone + Num> fmt::Debug for DenseND<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseND")
            .field("shape", &self.shape())
            .field("rank", &self.rank())
            .field("data", &self.data)
            .finish()
    }
}
