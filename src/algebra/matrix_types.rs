/// Matrix orientation marker
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixShape {
    /// Normal matrix orientation
    N,
    /// Transposed matrix orientation
    T,
}

/// Matrix shape marker for triangular matrices
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixTriangle {
    /// Upper triangular matrix
    Triu,
    /// Lower triangular matrix
    Tril,
}

#[cfg(feature = "lapack")]
impl MatrixTriangle {
    /// `uplo` argument of the BLAS/LAPACK routines for this triangle
    pub(crate) fn as_blas_char(&self) -> u8 {
        match self {
            MatrixTriangle::Triu => b'U',
            MatrixTriangle::Tril => b'L',
        }
    }
}
