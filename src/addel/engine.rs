#![allow(non_snake_case)]

use super::storage::FactorBlock;
use super::*;
use crate::algebra::*;
use log::debug;

// Factorization of the matrix held in a single storage block.  These
// functions decide between Cholesky and Bunch-Kaufman, and translate the
// resulting pivots into an inertia.  They never look at the other block.

/// Copies the original matrix of size `n` into the factor region of
/// `block` and factors it.
///
/// When `hint` declares the matrix definite, a Cholesky factorization of
/// `S` or `-S` is attempted first, falling back to Bunch-Kaufman if that
/// fails.  Without a hint the matrix is factored with Bunch-Kaufman, and
/// switched to a Cholesky factorization if the pivots turn out to be
/// definite.
pub(crate) fn copy_and_factor<T: FloatT>(
    block: &mut FactorBlock<T>,
    n: usize,
    hint: Option<Definiteness>,
) -> Result<FactorizationKind, FactorizationError> {
    block.copy_original_to_factor(n);
    factor_in_place(block, n, hint)
}

/// As [`copy_and_factor`], but for a factor region that already holds a
/// fresh copy of the original matrix.
pub(crate) fn factor_in_place<T: FloatT>(
    block: &mut FactorBlock<T>,
    n: usize,
    hint: Option<Definiteness>,
) -> Result<FactorizationKind, FactorizationError> {
    if n == 0 {
        return Ok(FactorizationKind::Empty);
    }

    if let Some(definiteness) = hint {
        if try_cholesky(block, n, definiteness) {
            return Ok(FactorizationKind::Cholesky(definiteness));
        }
        block.copy_original_to_factor(n);
    }

    let (mut F, ipiv) = block.factor_and_pivots_mut(n);
    F.factor_bunch_kaufman(ipiv)?;

    if hint.is_none() {
        if let Some(definiteness) = pivot_definiteness(block, n) {
            debug!("pivots of {n}x{n} matrix are {definiteness:?} definite, switching to Cholesky");
            block.copy_original_to_factor(n);
            if try_cholesky(block, n, definiteness) {
                return Ok(FactorizationKind::Cholesky(definiteness));
            }
            // borderline case where Cholesky breaks down anyway
            block.copy_original_to_factor(n);
            let (mut F, ipiv) = block.factor_and_pivots_mut(n);
            F.factor_bunch_kaufman(ipiv)?;
        }
    }

    Ok(FactorizationKind::Indefinite)
}

// Cholesky of S or -S in the factor region.  On failure the factor
// region is left partially overwritten.
fn try_cholesky<T: FloatT>(block: &mut FactorBlock<T>, n: usize, definiteness: Definiteness) -> bool {
    let mut F = block.factor_mut(n);
    if definiteness == Definiteness::Negative {
        F.negate();
    }
    match F.factor_cholesky() {
        Ok(()) => true,
        Err(e) => {
            debug!("Cholesky factorization ({definiteness:?} definite) failed: {e}");
            false
        }
    }
}

// common sign of all Bunch-Kaufman pivot eigenvalues, if there is one
fn pivot_definiteness<T: FloatT>(block: &FactorBlock<T>, n: usize) -> Option<Definiteness> {
    let (mut pos, mut neg) = (0, 0);
    block
        .factor(n)
        .for_each_pivot_eigenvalue(block.pivots(n), |λ| {
            if λ > T::zero() {
                pos += 1;
            } else if λ < T::zero() {
                neg += 1;
            }
        });
    match (neg, pos) {
        (0, p) if p == n => Some(Definiteness::Positive),
        (m, 0) if m == n => Some(Definiteness::Negative),
        _ => None,
    }
}

/// Calls `f` with each pivot eigenvalue of a factorization of kind `kind`
/// held in `block`.  By Sylvester's law of inertia these have the same
/// signs as the eigenvalues of the original matrix.
fn for_each_eigenvalue<T: FloatT>(
    block: &FactorBlock<T>,
    n: usize,
    kind: FactorizationKind,
    mut f: impl FnMut(T),
) {
    let F = block.factor(n);
    match kind {
        FactorizationKind::Cholesky(definiteness) => {
            for i in 0..n {
                let d = F[(i, i)] * F[(i, i)];
                match definiteness {
                    Definiteness::Positive => f(d),
                    Definiteness::Negative => f(-d),
                }
            }
        }
        FactorizationKind::Indefinite => F.for_each_pivot_eigenvalue(block.pivots(n), f),
        _ => {}
    }
}

/// Computes the inertia of a factorization and its pivot ratio
/// `gamma = min|λ|/max|λ|`.  Eigenvalues with `|λ| <= zero_tol * max|λ|`
/// count as zero.  An empty factorization has `gamma = 1`.
pub(crate) fn classify<T: FloatT>(
    block: &FactorBlock<T>,
    n: usize,
    kind: FactorizationKind,
    tol: &PivotTolerances<T>,
) -> (Inertia, T) {
    if n == 0 {
        return (Inertia::default(), T::one());
    }

    let mut minabs = T::infinity();
    let mut maxabs = T::zero();
    for_each_eigenvalue(block, n, kind, |λ| {
        minabs = T::min(minabs, λ.abs());
        maxabs = T::max(maxabs, λ.abs());
    });

    let zero_threshold = tol.zero_tol * maxabs;
    let mut inertia = Inertia::default();
    for_each_eigenvalue(block, n, kind, |λ| {
        if λ.abs() <= zero_threshold {
            inertia.zero += 1;
        } else if λ > T::zero() {
            inertia.pos += 1;
        } else {
            inertia.neg += 1;
        }
    });

    let gamma = if maxabs > T::zero() {
        minabs / maxabs
    } else {
        T::zero()
    };
    (inertia, gamma)
}

/// Solves `S x = b` in place with the factorization held in `block`
pub(crate) fn solve<T: FloatT>(block: &FactorBlock<T>, n: usize, kind: FactorizationKind, b: &mut [T]) {
    let F = block.factor(n);
    match kind {
        FactorizationKind::Cholesky(Definiteness::Positive) => F.solve_cholesky(b),
        FactorizationKind::Cholesky(Definiteness::Negative) => {
            // S = -LL'
            F.solve_cholesky(b);
            b.negate();
        }
        FactorizationKind::Indefinite => F.solve_bunch_kaufman(block.pivots(n), b),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::storage::TriangularStore;
    use super::*;

    fn store_with<const N: usize>(rows: &[[f64; N]; N]) -> TriangularStore<f64> {
        let mut store = TriangularStore::new();
        store.reserve(N + 1);
        let mut S = store.spare_mut().original_mut(N);
        for j in 0..N {
            for i in j..N {
                S[(i, j)] = rows[i][j];
            }
        }
        store.commit(N);
        store
    }

    fn solve_residual<const N: usize>(
        rows: &[[f64; N]; N],
        store: &TriangularStore<f64>,
        kind: FactorizationKind,
    ) -> f64 {
        let x: Vec<f64> = (0..N).map(|i| 1. + i as f64).collect();
        let mut b: Vec<f64> = rows.iter().map(|row| row[..].dot(&x)).collect();
        solve(store.active(), N, kind, &mut b);
        b.norm_inf_diff(&x)
    }

    #[test]
    fn test_positive_definite() {
        let rows = [[4., 1., 0.], [1., 3., 1.], [0., 1., 5.]];
        let mut store = store_with(&rows);
        let tol = PivotTolerances::default();

        let hint = Some(Definiteness::Positive);
        let kind = copy_and_factor(store.active_mut(), 3, hint).unwrap();
        assert_eq!(kind, FactorizationKind::Cholesky(Definiteness::Positive));

        let (inertia, gamma) = classify(store.active(), 3, kind, &tol);
        assert_eq!(inertia, Inertia::new(0, 0, 3));
        assert!(gamma > 0. && gamma <= 1.);
        assert!(solve_residual(&rows, &store, kind) < 1e-12);
    }

    #[test]
    fn test_negative_definite() {
        let rows = [[-4., 1.], [1., -3.]];
        let mut store = store_with(&rows);
        let tol = PivotTolerances::default();

        let kind = copy_and_factor(store.active_mut(), 2, Some(Definiteness::Negative)).unwrap();
        assert_eq!(kind, FactorizationKind::Cholesky(Definiteness::Negative));
        assert_eq!(classify(store.active(), 2, kind, &tol).0, Inertia::new(2, 0, 0));
        assert!(solve_residual(&rows, &store, kind) < 1e-12);

        // the original is untouched by the negation
        assert_eq!(store.active().original(2)[(0, 0)], -4.);
    }

    #[test]
    fn test_wrong_hint_falls_back() {
        let rows = [[1., 2.], [2., 1.]];
        let mut store = store_with(&rows);
        let tol = PivotTolerances::default();

        let kind = copy_and_factor(store.active_mut(), 2, Some(Definiteness::Positive)).unwrap();
        assert_eq!(kind, FactorizationKind::Indefinite);
        assert_eq!(classify(store.active(), 2, kind, &tol).0, Inertia::new(1, 0, 1));
        assert!(solve_residual(&rows, &store, kind) < 1e-12);
    }

    #[test]
    fn test_no_hint_switches_to_cholesky() {
        let rows = [[2., -1.], [-1., 2.]];
        let mut store = store_with(&rows);

        let kind = copy_and_factor(store.active_mut(), 2, None).unwrap();
        assert_eq!(kind, FactorizationKind::Cholesky(Definiteness::Positive));
        assert!(solve_residual(&rows, &store, kind) < 1e-12);
    }

    #[test]
    fn test_zero_eigenvalue() {
        // rank one, eigenvalues 0 and 2
        let rows = [[1., 1.], [1., 1.]];
        let mut store = store_with(&rows);
        let tol = PivotTolerances::default();

        match copy_and_factor(store.active_mut(), 2, None) {
            Ok(kind) => {
                let (inertia, gamma) = classify(store.active(), 2, kind, &tol);
                assert_eq!(inertia, Inertia::new(0, 1, 1));
                assert!(gamma <= tol.singular_tol);
            }
            Err(e) => assert!(matches!(e, FactorizationError::ZeroPivot { .. })),
        }
    }

    #[test]
    fn test_empty() {
        let mut store = TriangularStore::<f64>::new();
        store.reserve(2);
        let kind = copy_and_factor(store.spare_mut(), 0, None).unwrap();
        assert_eq!(kind, FactorizationKind::Empty);
        let (inertia, gamma) = classify(store.active(), 0, kind, &PivotTolerances::default());
        assert_eq!((inertia, gamma), (Inertia::default(), 1.));
    }
}
