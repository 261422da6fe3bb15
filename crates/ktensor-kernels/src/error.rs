//! Error types for tensor kernel operations
//!
//! Structured errors let the Kruskal layer report which factor or mode
//! broke an invariant without parsing messages.

use std::fmt;

/// Error type for Khatri-Rao kernels over a factor list
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// A factor index (e.g. the factor to skip) outside the factor list
    InvalidMode {
        operation: String,
        mode: usize,
        n_factors: usize,
    },

    /// A factor whose column count differs from the first factor's
    RankMismatch {
        operation: String,
        expected_rank: usize,
        actual_rank: usize,
        factor_index: usize,
    },

    /// No factors, or another required input is empty
    EmptyInput {
        operation: String,
        parameter: String,
    },

    /// A mask that does not broadcast to the shape described by the factors
    IncompatibleShapes {
        operation: String,
        shape_a: Vec<usize>,
        shape_b: Vec<usize>,
        reason: String,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::InvalidMode {
                operation,
                mode,
                n_factors,
            } => write!(
                f,
                "{}: no factor {} in a list of {} factors",
                operation, mode, n_factors
            ),

            KernelError::RankMismatch {
                operation,
                expected_rank,
                actual_rank,
                factor_index,
            } => write!(
                f,
                "{}: factor {} has rank {}, but factor 0 has rank {}",
                operation, factor_index, actual_rank, expected_rank
            ),

            KernelError::EmptyInput {
                operation,
                parameter,
            } => write!(f, "{}: '{}' must contain at least one factor", operation, parameter),

            KernelError::IncompatibleShapes {
                operation,
                shape_a,
                shape_b,
                reason,
            } => write!(
                f,
                "{}: mask shape {:?} vs factor shape {:?}: {}",
                operation, shape_a, shape_b, reason
            ),
        }
    }
}

impl std::error::Error for KernelError {}

/// Result type for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

impl KernelError {
    /// Factor `mode` is out of range for a list of `n_factors` factors
    pub fn invalid_mode(operation: impl Into<String>, mode: usize, n_factors: usize) -> Self {
        KernelError::InvalidMode {
            operation: operation.into(),
            mode,
            n_factors,
        }
    }

    /// Create a rank mismatch error
    pub fn rank_mismatch(
        operation: impl Into<String>,
        expected_rank: usize,
        actual_rank: usize,
        factor_index: usize,
    ) -> Self {
        KernelError::RankMismatch {
            operation: operation.into(),
            expected_rank,
            actual_rank,
            factor_index,
        }
    }

    /// Create an empty input error
    pub fn empty_input(operation: impl Into<String>, parameter: impl Into<String>) -> Self {
        KernelError::EmptyInput {
            operation: operation.into(),
            parameter: parameter.into(),
        }
    }

    /// Create an incompatible shapes error
    pub fn incompatible_shapes(
        operation: impl Into<String>,
        shape_a: Vec<usize>,
        shape_b: Vec<usize>,
        reason: impl Into<String>,
    ) -> Self {
        KernelError::IncompatibleShapes {
            operation: operation.into(),
            shape_a,
            shape_b,
            reason: reason.into(),
        }
    }

    /// Whether this error reports operands whose shapes disagree
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(
            self,
            KernelError::RankMismatch { .. } | KernelError::IncompatibleShapes { .. }
        )
    }
}
