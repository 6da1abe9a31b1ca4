#![allow(non_snake_case)]

use super::storage::TriangularStore;
use super::*;
use crate::algebra::*;
use log::{debug, warn};
use std::fmt;

/// Updatable factorization of a symmetric matrix `S`.
///
/// `S` is factored with a Cholesky factorization while it is positive or
/// negative definite, and with a Bunch-Kaufman factorization `PSP' = LDL'`
/// otherwise.  Rows and columns are added with
/// [`augment_update`](MatrixSymAddDelUpdateable::augment_update) and removed
/// with [`delete_update`](MatrixSymAddDelUpdateable::delete_update).
///
/// Every update is computed in a spare storage block and checked against
/// the inertia declared by the caller before it replaces the current
/// factorization.  Storage for both blocks is allocated in `initialize*`
/// only, so updates never allocate.
///
/// # Example
///
/// ```
/// use symaddel::addel::*;
/// use symaddel::algebra::*;
///
/// let A = Matrix::from(&[[4., 1.], [1., 3.]]);
/// let tol = PivotTolerances::default();
///
/// let mut S = MatrixSymAddDelBunchKaufman::new();
/// let outcome = S
///     .initialize(&A.sym(MatrixTriangle::Tril), 3, true, Some(Inertia::new(0, 0, 2)), tol)
///     .unwrap();
/// assert!(outcome.is_committed());
///
/// let t = [0., 1.];
/// let outcome = S
///     .augment_update(Some(&t), 5., false, EigenSign::Positive, tol)
///     .unwrap();
/// assert!(outcome.is_committed());
/// assert_eq!(S.inertia(), Some(Inertia::new(0, 0, 3)));
///
/// let mut x = [0.; 3];
/// S.solve(&mut x, MatrixShape::N, &[1., 1., 1.]).unwrap();
/// ```
#[derive(Debug)]
pub struct MatrixSymAddDelBunchKaufman<T: FloatT = f64> {
    store: TriangularStore<T>,
    kind: FactorizationKind,
    inertia: Option<Inertia>,
    // tolerances of the last committed update
    pivot_tols: PivotTolerances<T>,
}

impl<T> Default for MatrixSymAddDelBunchKaufman<T>
where
    T: FloatT,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MatrixSymAddDelBunchKaufman<T>
where
    T: FloatT,
{
    /// An uninitialized 0x0 factorization with no storage.
    pub fn new() -> Self {
        Self {
            store: TriangularStore::new(),
            kind: FactorizationKind::Uninitialized,
            inertia: None,
            pivot_tols: PivotTolerances::default(),
        }
    }

    pub fn kind(&self) -> FactorizationKind {
        self.kind
    }

    /// tolerances of the most recent committed update
    pub fn pivot_tols(&self) -> PivotTolerances<T> {
        self.pivot_tols
    }

    /// Set the tolerances used by `initialize_scalar` and by deferred
    /// factorizations.
    pub fn set_pivot_tols(&mut self, tol: PivotTolerances<T>) -> Result<(), UpdateError> {
        tol.validate()?;
        self.pivot_tols = tol;
        Ok(())
    }

    fn check_initialized(&self) -> Result<(), UpdateError> {
        if !self.kind.is_initialized() {
            return Err(UpdateError::Uninitialized);
        }
        Ok(())
    }

    fn check_solve_args(&self, y: &[T], x: &[T]) -> Result<usize, SolveError> {
        if !self.kind.is_initialized() {
            return Err(SolveError::Uninitialized);
        }
        let n = self.rows();
        for len in [y.len(), x.len()] {
            if len != n {
                return Err(SolveError::DimensionMismatch {
                    expected: n,
                    found: len,
                });
            }
        }
        Ok(n)
    }

    // Factors the size n matrix already written to the spare block and
    // validates it.  The spare block becomes active only if the outcome is
    // Committed.
    fn factor_and_commit(
        &mut self,
        n: usize,
        expected: Option<Inertia>,
        force: bool,
        tol: &PivotTolerances<T>,
    ) -> UpdateOutcome<T> {
        let hint = expected.and_then(|e| e.definiteness());
        let spare = self.store.spare_mut();

        let kind = match engine::copy_and_factor(spare, n, hint) {
            Ok(kind) => kind,
            Err(e) => {
                warn!("factorization of {n}x{n} candidate failed: {e}");
                return UpdateOutcome::Failed(FailReason::Factorization(e));
            }
        };
        let (computed, gamma) = engine::classify(spare, n, kind, tol);

        if gamma <= tol.singular_tol {
            warn!("{n}x{n} candidate is singular (gamma = {gamma:e})");
            return UpdateOutcome::Failed(FailReason::Singular { gamma });
        }

        let mut warning = None;
        if let Some(expected) = expected {
            if computed != expected {
                if !force {
                    debug!("skipping update: inertia {computed}, expected {expected}");
                    return UpdateOutcome::Skipped(SkipReason::WrongInertia { expected, computed });
                }
                warning = Some(UpdateWarning::WrongInertia { expected, computed });
            }
        }
        if warning.is_none() && gamma <= tol.warning_tol {
            warning = Some(UpdateWarning::NearSingular { gamma });
        }
        if let Some(w) = &warning {
            warn!("{w}");
        }

        self.store.commit(n);
        self.kind = kind;
        self.inertia = Some(computed);
        self.pivot_tols = *tol;
        debug!("committed {n}x{n} factorization: {kind}, inertia {computed}");

        UpdateOutcome::Committed { warning }
    }

    // Completes a factorization postponed by initialize.  A singular
    // result is not used, and the matrix stays deferred.
    fn ensure_factored(&mut self) -> Result<(), SolveError> {
        let FactorizationKind::Deferred(definiteness) = self.kind else {
            return Ok(());
        };
        let n = self.store.size();
        let tol = self.pivot_tols;
        let block = self.store.active_mut();
        let kind = engine::copy_and_factor(block, n, Some(definiteness))?;
        let (computed, gamma) = engine::classify(block, n, kind, &tol);

        if gamma <= tol.singular_tol {
            warn!("deferred {n}x{n} factorization is singular (gamma = {gamma:e})");
            return Err(SolveError::Singular);
        }
        if let Some(expected) = self.inertia {
            if expected != computed {
                warn!("deferred factorization has inertia {computed}, declared {expected}");
            }
        }
        if gamma <= tol.warning_tol {
            warn!("deferred factorization is near singular (gamma = {gamma:e})");
        }
        self.kind = kind;
        self.inertia = Some(computed);
        debug!("completed deferred {n}x{n} factorization: {kind}, inertia {computed}");
        Ok(())
    }
}

impl<T> MatrixSymOpNonsing<T> for MatrixSymAddDelBunchKaufman<T>
where
    T: FloatT,
{
    fn rows(&self) -> usize {
        self.store.size()
    }

    fn inertia(&self) -> Option<Inertia> {
        self.inertia
    }

    fn multiply(
        &self,
        y: &mut [T],
        α: T,
        _trans: MatrixShape,
        x: &[T],
        β: T,
    ) -> Result<(), SolveError> {
        let n = self.check_solve_args(y, x)?;
        self.store.active().original(n).symv(x, y, α, β);
        Ok(())
    }

    fn solve(&mut self, y: &mut [T], _trans: MatrixShape, x: &[T]) -> Result<(), SolveError> {
        let n = self.check_solve_args(y, x)?;
        self.ensure_factored()?;
        y.copy_from(x);
        engine::solve(self.store.active(), n, self.kind, y);
        Ok(())
    }
}

impl<T> MatrixSymAddDelUpdateable<T> for MatrixSymAddDelBunchKaufman<T>
where
    T: FloatT,
{
    fn initialize_scalar(
        &mut self,
        alpha: T,
        max_size: usize,
    ) -> Result<UpdateOutcome<T>, UpdateError> {
        if max_size == 0 {
            return Err(UpdateError::MaxSizeExceeded {
                requested: 1,
                max_size,
            });
        }
        self.set_uninitialized();
        self.store.reserve(max_size);

        if alpha == T::zero() {
            warn!("scalar initialization with alpha = 0 is singular");
            return Ok(UpdateOutcome::Failed(FailReason::Singular { gamma: T::zero() }));
        }
        self.store.spare_mut().original_mut(1)[(0, 0)] = alpha;

        let definiteness = if alpha > T::zero() {
            Definiteness::Positive
        } else {
            Definiteness::Negative
        };
        let expected = Inertia::uniform(definiteness.sign(), 1);
        let tol = self.pivot_tols;
        Ok(self.factor_and_commit(1, Some(expected), false, &tol))
    }

    fn initialize(
        &mut self,
        A: &Symmetric<Matrix<T>>,
        max_size: usize,
        force_factorization: bool,
        inertia: Option<Inertia>,
        tol: PivotTolerances<T>,
    ) -> Result<UpdateOutcome<T>, UpdateError> {
        tol.validate()?;
        if !A.is_square() {
            return Err(UpdateError::NotSquare);
        }
        let n = A.nrows();
        if n > max_size {
            return Err(UpdateError::MaxSizeExceeded {
                requested: n,
                max_size,
            });
        }
        if let Some(inertia) = inertia {
            if inertia.dim() != n {
                return Err(UpdateError::DimensionMismatch {
                    expected: n,
                    found: inertia.dim(),
                });
            }
        }

        self.set_uninitialized();
        self.store.reserve(max_size);

        let mut S = self.store.spare_mut().original_mut(n);
        for j in 0..n {
            for i in j..n {
                S[(i, j)] = A[(i, j)];
            }
        }

        // a matrix declared definite can wait for its first solve
        if !force_factorization && n > 0 {
            if let Some(definiteness) = inertia.and_then(|i| i.definiteness()) {
                self.store.commit(n);
                self.kind = FactorizationKind::Deferred(definiteness);
                self.inertia = inertia;
                self.pivot_tols = tol;
                debug!("initialized {n}x{n} {definiteness:?} definite matrix, factorization deferred");
                return Ok(UpdateOutcome::Committed { warning: None });
            }
        }

        Ok(self.factor_and_commit(n, inertia, false, &tol))
    }

    fn max_size(&self) -> usize {
        self.store.max_size()
    }

    fn set_uninitialized(&mut self) {
        self.store.clear();
        self.kind = FactorizationKind::Uninitialized;
        self.inertia = None;
    }

    fn augment_update(
        &mut self,
        t: Option<&[T]>,
        alpha: T,
        force_refactorization: bool,
        add_eigen: EigenSign,
        tol: PivotTolerances<T>,
    ) -> Result<UpdateOutcome<T>, UpdateError> {
        tol.validate()?;
        self.check_initialized()?;
        let n = self.rows();
        self.store.check_size(n + 1)?;
        if let Some(t) = t {
            if t.len() != n {
                return Err(UpdateError::DimensionMismatch {
                    expected: n,
                    found: t.len(),
                });
            }
        }
        let expected = self.inertia.map(|i| i.added(add_eigen));

        // [S t; t' alpha] in the spare block
        let (active, spare) = self.store.split_mut();
        spare.copy_original_from(active, n);
        let mut S = spare.original_mut(n + 1);
        for j in 0..n {
            S[(n, j)] = t.map_or(T::zero(), |t| t[j]);
        }
        S[(n, n)] = alpha;

        Ok(self.factor_and_commit(n + 1, expected, force_refactorization, &tol))
    }

    fn delete_update(
        &mut self,
        jd: usize,
        force_refactorization: bool,
        drop_eigen: EigenSign,
        tol: PivotTolerances<T>,
    ) -> Result<UpdateOutcome<T>, UpdateError> {
        tol.validate()?;
        self.check_initialized()?;
        let n = self.rows();
        if jd == 0 || jd > n {
            return Err(UpdateError::IndexOutOfRange { jd, rows: n });
        }
        // With no eigenvalue of the declared sign to drop, the unreduced
        // inertia has dimension n and can never match the candidate's.
        let expected = self.inertia.map(|i| i.removed(drop_eigen).unwrap_or(i));

        let (active, spare) = self.store.split_mut();
        spare.copy_original_from(active, n);
        compact::remove_row_col(&mut spare.original_mut(n), jd - 1);

        Ok(self.factor_and_commit(n - 1, expected, force_refactorization, &tol))
    }
}

impl<T> fmt::Display for MatrixSymAddDelBunchKaufman<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "MatrixSymAddDelBunchKaufman")?;
        writeln!(f, "  rows     = {}", self.rows())?;
        writeln!(f, "  max_size = {}", self.max_size())?;
        writeln!(f, "  kind     = {}", self.kind)?;
        match self.inertia {
            Some(inertia) => writeln!(f, "  inertia  = {inertia}")?,
            None => writeln!(f, "  inertia  = unknown")?,
        }
        if self.kind.is_initialized() {
            write!(f, "  S =")?;
            display_matrix(&self.store.active().original(self.rows()), f)?;
        }
        Ok(())
    }
}
