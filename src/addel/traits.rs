#![allow(non_snake_case)]

use super::*;
use crate::algebra::*;

/// A nonsingular symmetric matrix operator.
///
/// This is the interface seen by an active-set solver: it can multiply by
/// and solve with the current matrix `S` without knowing how `S` is
/// factored.  Since `S` is symmetric, `trans` has no effect.
pub trait MatrixSymOpNonsing<T: FloatT> {
    /// current dimension of `S`
    fn rows(&self) -> usize;

    /// Inertia of `S`, or `None` if not initialized.
    fn inertia(&self) -> Option<Inertia>;

    /// Computes `y = α op(S) x + β y`.  When `β` is zero `y` is
    /// overwritten.
    fn multiply(&self, y: &mut [T], α: T, trans: MatrixShape, x: &[T], β: T)
        -> Result<(), SolveError>;

    /// Computes `y = op(S)⁻¹ x`.
    ///
    /// Takes `&mut self` because a matrix initialized without a forced
    /// factorization is only factored by its first solve, which then
    /// updates the kind and inertia.  Every later solve leaves the
    /// operator unchanged.  A deferred matrix that turns out singular
    /// returns [`SolveError::Singular`] and stays deferred.
    fn solve(&mut self, y: &mut [T], trans: MatrixShape, x: &[T]) -> Result<(), SolveError>;
}

/// A symmetric matrix that can be grown or shrunk by one row and column at
/// a time.
///
/// Updates that violate a precondition return an [`UpdateError`] and do not
/// modify the matrix.  All other updates return an [`UpdateOutcome`], and
/// only a `Committed` outcome changes the matrix.
pub trait MatrixSymAddDelUpdateable<T: FloatT>: MatrixSymOpNonsing<T> {
    /// Initialize to the 1x1 matrix `[alpha]`, with room for matrices up
    /// to `max_size`.
    fn initialize_scalar(&mut self, alpha: T, max_size: usize)
        -> Result<UpdateOutcome<T>, UpdateError>;

    /// Initialize to the symmetric matrix `A`, with room for matrices up
    /// to `max_size`.
    ///
    /// If `inertia` is given the factorization is validated against it.
    /// If it is also definite and `force_factorization` is false, the
    /// factorization is postponed until the first solve.
    fn initialize(
        &mut self,
        A: &Symmetric<Matrix<T>>,
        max_size: usize,
        force_factorization: bool,
        inertia: Option<Inertia>,
        tol: PivotTolerances<T>,
    ) -> Result<UpdateOutcome<T>, UpdateError>;

    /// largest dimension the matrix may grow to
    fn max_size(&self) -> usize;

    /// Reset to an uninitialized state.  Storage is kept.
    fn set_uninitialized(&mut self);

    /// Border the matrix as `[S t; t' alpha]`, adding one eigenvalue of
    /// sign `add_eigen`.  `t = None` is a zero border.
    fn augment_update(
        &mut self,
        t: Option<&[T]>,
        alpha: T,
        force_refactorization: bool,
        add_eigen: EigenSign,
        tol: PivotTolerances<T>,
    ) -> Result<UpdateOutcome<T>, UpdateError>;

    /// Delete row and column `jd` (1-based), removing one eigenvalue of
    /// sign `drop_eigen`.
    fn delete_update(
        &mut self,
        jd: usize,
        force_refactorization: bool,
        drop_eigen: EigenSign,
        tol: PivotTolerances<T>,
    ) -> Result<UpdateOutcome<T>, UpdateError>;
}
