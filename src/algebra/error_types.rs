use thiserror::Error;

/// Error type returned by the dense factorization kernels.
///
/// Indices refer to the (0-based) pivot position at which the kernel stopped.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorizationError {
    #[error("Matrix is not definite (non-positive pivot at index {index})")]
    /// Cholesky kernel met a non-positive pivot.
    NotPositiveDefinite { index: usize },
    #[error("Matrix factorization produced a zero pivot at index {index}")]
    /// Symmetric indefinite kernel met an exactly zero pivot column.
    ZeroPivot { index: usize },
    #[error("Matrix factorization produced a non-finite value at index {index}")]
    /// Inf or NaN encountered during factorization.
    NonFinite { index: usize },
}
