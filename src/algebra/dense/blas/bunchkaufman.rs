#![allow(non_snake_case)]

use crate::algebra::dense::pivots::{as_ipiv, as_ipiv_mut};
use crate::algebra::*;

impl<S, T> FactorBunchKaufman<T> for TriangularView<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
    T: FloatT,
{
    fn factor_bunch_kaufman(&mut self, ipiv: &mut [PivotIndex]) -> Result<(), FactorizationError> {
        let n = self.n;
        assert!(ipiv.len() >= n);

        // standard LAPACK ?sytrf arguments.  With lwork = 1 it runs the
        // unblocked ?sytf2 code, which never touches the workspace
        let (uplo, a, lda) = self.lapack_parts_mut();
        let mut work = [T::zero()];
        let info = &mut 0_i32;

        T::xsytrf(uplo, n as i32, a, lda, as_ipiv_mut(&mut ipiv[..n]), &mut work, 1, info);

        // ?sytrf does not stop at NaNs, so check every entry of D
        let mut k = 0;
        while k < n {
            let block = match ipiv[k].decode() {
                BkPivot::OneByOne(_) => 1,
                BkPivot::TwoByTwo(_) => 2,
            };
            for i in k..(k + block) {
                for j in k..=i {
                    if !self[(i, j)].is_finite() {
                        return Err(FactorizationError::NonFinite { index: k });
                    }
                }
            }
            k += block;
        }
        if *info > 0 {
            return Err(FactorizationError::ZeroPivot {
                index: *info as usize - 1,
            });
        }
        Ok(())
    }
}

impl<S, T> SolveBunchKaufman<T> for TriangularView<S, T>
where
    S: AsRef<[T]>,
    T: FloatT,
{
    fn solve_bunch_kaufman(&self, ipiv: &[PivotIndex], b: &mut [T]) {
        assert_eq!(b.len(), self.n);

        // standard LAPACK ?sytrs arguments for a single right hand side
        let n = self.n as i32;
        let (uplo, a, lda) = self.lapack_parts();
        let ipiv = as_ipiv(&ipiv[..self.n]);
        let ldb = n.max(1);
        let info = &mut 0_i32;

        T::xsytrs(uplo, n, 1, a, lda, ipiv, b, ldb, info);
        debug_assert_eq!(*info, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // factors S held in the given storage triangle, then solves S*sol = S*x
    fn factor_and_solve(
        S: &Matrix<f64>,
        x: &[f64],
        uplo: MatrixTriangle,
    ) -> (Vec<BkPivot>, Vec<f64>, Vec<f64>) {
        let n = S.nrows();
        let mut F = S.clone();
        let mut ipiv = vec![PivotIndex::default(); n];
        let mut view: TriangularViewMut<f64> =
            TriangularView::new(&mut F.data[..], n, n, (0, 0), uplo);
        view.factor_bunch_kaufman(&mut ipiv).unwrap();

        let mut b = vec![0.; n];
        for i in 0..n {
            for j in 0..n {
                b[i] += S[(i, j)] * x[j];
            }
        }
        view.solve_bunch_kaufman(&ipiv, &mut b);

        let mut eigs = vec![];
        view.for_each_pivot_eigenvalue(&ipiv, |λ| eigs.push(λ));
        (ipiv.iter().map(|p| p.decode()).collect(), b, eigs)
    }

    #[test]
    fn test_xsytrf_two_by_two() {
        // zero diagonal forces a 2x2 pivot
        #[rustfmt::skip]
        let S = Matrix::from(
            &[[ 0., 1., 2.],
              [ 1., 0., 3.],
              [ 2., 3., 0.]]);
        let x = [1., 2., 3.];

        for uplo in [MatrixTriangle::Tril, MatrixTriangle::Triu] {
            let (ipiv, sol, eigs) = factor_and_solve(&S, &x, uplo);
            assert!(ipiv.iter().any(|p| matches!(p, BkPivot::TwoByTwo(_))));
            assert!(sol.norm_inf_diff(&x) < 1e-12);

            // trace zero, det 12 > 0: one positive and two negative eigenvalues
            assert_eq!(eigs.len(), 3);
            assert_eq!(eigs.iter().filter(|&&λ| λ > 0.).count(), 1);
            assert_eq!(eigs.iter().filter(|&&λ| λ < 0.).count(), 2);
        }
    }

    #[test]
    fn test_xsytrf_kkt() {
        #[rustfmt::skip]
        let S = Matrix::from(
            &[[ 4., 1., 1., 1.],
              [ 1., 2., 1., 0.],
              [ 1., 1., 0., 0.],
              [ 1., 0., 0., 0.]]);
        let x = [-1., 0.5, 2., 4.];

        for uplo in [MatrixTriangle::Tril, MatrixTriangle::Triu] {
            let (_, sol, eigs) = factor_and_solve(&S, &x, uplo);
            assert!(sol.norm_inf_diff(&x) < 1e-12);
            assert_eq!(eigs.iter().filter(|&&λ| λ > 0.).count(), 2);
            assert_eq!(eigs.iter().filter(|&&λ| λ < 0.).count(), 2);
        }
    }

    #[test]
    fn test_xsytrf_zero_pivot() {
        let mut F = Matrix::<f64>::zeros((2, 2));
        F[(1, 1)] = 1.;
        let mut ipiv = vec![PivotIndex::default(); 2];
        let mut view: TriangularViewMut<f64> =
            TriangularView::new(&mut F.data[..], 2, 2, (0, 0), MatrixTriangle::Tril);

        assert_eq!(
            view.factor_bunch_kaufman(&mut ipiv),
            Err(FactorizationError::ZeroPivot { index: 0 })
        );
    }

    #[test]
    fn test_xsytrf_nan() {
        let mut F = Matrix::from(&[[1., f64::NAN], [f64::NAN, 1.]]);
        let mut ipiv = vec![PivotIndex::default(); 2];
        let mut view: TriangularViewMut<f64> =
            TriangularView::new(&mut F.data[..], 2, 2, (0, 0), MatrixTriangle::Tril);

        assert!(matches!(
            view.factor_bunch_kaufman(&mut ipiv),
            Err(FactorizationError::NonFinite { .. })
        ));
    }
}
