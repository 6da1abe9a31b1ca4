#![allow(non_snake_case)]
use crate::algebra::{FactorizationError, PivotIndex};

// LAPACK style ?potrf / ?sytrf / ?symv kernels on a packed
// TriangularView.  They are implemented natively, or through the
// blas/lapack crates with the "lapack" feature.  Neither allocates.

pub(crate) trait FactorCholesky<T> {
    // computes the Cholesky decomposition A = LL^T in place.  Only the
    // lower triangle is referenced, and it holds L on success.  On failure
    // the contents are partially overwritten.
    fn factor_cholesky(&mut self) -> Result<(), FactorizationError>;
}

pub(crate) trait FactorBunchKaufman<T> {
    // computes the Bunch-Kaufman decomposition PAP^T = LDL^T in place,
    // with D block diagonal (1x1 and 2x2 blocks).  Interchanges are
    // recorded in `ipiv`.
    fn factor_bunch_kaufman(&mut self, ipiv: &mut [PivotIndex]) -> Result<(), FactorizationError>;
}

pub(crate) trait SolveCholesky<T> {
    // Solve Ax = b in place using a Cholesky factor held in the lower triangle
    fn solve_cholesky(&self, b: &mut [T]);
}

pub(crate) trait SolveBunchKaufman<T> {
    // Solve Ax = b in place using a Bunch-Kaufman factorization
    fn solve_bunch_kaufman(&self, ipiv: &[PivotIndex], b: &mut [T]);
}

pub(crate) trait BunchKaufmanPivots<T> {
    // Calls `f` once for each eigenvalue of the block diagonal D.  By
    // Sylvester's law these have the same signs as the eigenvalues of A.
    fn for_each_pivot_eigenvalue(&self, ipiv: &[PivotIndex], f: impl FnMut(T));
}

pub(crate) trait MultiplySYMV<T> {
    // implements y = αA*x + βy
    fn symv(&self, x: &[T], y: &mut [T], α: T, β: T);
}
