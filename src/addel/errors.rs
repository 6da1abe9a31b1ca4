use crate::algebra::FactorizationError;
use thiserror::Error;

/// Precondition violations reported by the update interface.
///
/// These are never recovered internally, and a call returning one of
/// them has not modified the factorization.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateError {
    #[error("Factorization is not initialized")]
    Uninitialized,
    #[error("Requested size {requested} exceeds the maximum size {max_size}")]
    MaxSizeExceeded { requested: usize, max_size: usize },
    #[error("Deletion index {jd} is not in the range [1,{rows}]")]
    IndexOutOfRange { jd: usize, rows: usize },
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("Bad pivot tolerance ({0})")]
    BadTolerances(&'static str),
    #[error("Matrix is not square")]
    NotSquare,
}

/// Errors returned by multiply and solve operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    #[error("Factorization is not initialized")]
    Uninitialized,
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("Deferred factorization failed")]
    Factorization(#[from] FactorizationError),
    #[error("Deferred factorization is singular")]
    Singular,
}
