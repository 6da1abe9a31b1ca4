#![allow(non_snake_case)]

use crate::algebra::*;

impl<S, T> FactorCholesky<T> for TriangularView<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
    T: FloatT,
{
    fn factor_cholesky(&mut self) -> Result<(), FactorizationError> {
        // standard LAPACK ?potrf arguments, factoring the stored
        // triangle in place.  A Triu view holds L^T, which is the
        // U of a ?potrf 'U' factorization
        let n = self.n as i32;
        let (uplo, a, lda) = self.lapack_parts_mut();
        let info = &mut 0_i32;

        T::xpotrf(uplo, n, a, lda, info);

        if *info > 0 {
            return Err(FactorizationError::NotPositiveDefinite {
                index: *info as usize - 1,
            });
        }
        Ok(())
    }
}

impl<S, T> SolveCholesky<T> for TriangularView<S, T>
where
    S: AsRef<[T]>,
    T: FloatT,
{
    fn solve_cholesky(&self, b: &mut [T]) {
        assert_eq!(b.len(), self.n);

        // standard LAPACK ?potrs arguments for a single right hand side
        let n = self.n as i32;
        let (uplo, a, lda) = self.lapack_parts();
        let ldb = n.max(1);
        let info = &mut 0_i32;

        T::xpotrs(uplo, n, 1, a, lda, b, ldb, info);
        debug_assert_eq!(*info, 0);
    }
}

macro_rules! generate_test_cholesky {
    ($fxx:ty, $test_name:ident, $tolfn:ident) => {
        #[test]
        fn $test_name() {
            #[rustfmt::skip]
            let S = Matrix::<$fxx>::from(
            &[[ 8., -2., 4.],
              [-2., 12., 2.],
              [ 4.,  2., 6.]]);

            // both storage triangles, as the original and factor regions use
            for uplo in [MatrixTriangle::Tril, MatrixTriangle::Triu] {
                let mut L = S.clone();
                let mut view: TriangularViewMut<$fxx> =
                    TriangularView::new(&mut L.data[..], 3, 3, (0, 0), uplo);
                assert!(view.factor_cholesky().is_ok());

                // check LL^T == S
                for i in 0..3 {
                    for j in 0..=i {
                        let mut s: $fxx = 0.;
                        for p in 0..=j {
                            s += view[(i, p)] * view[(j, p)];
                        }
                        assert!((s - S[(i, j)]).abs() < (1e-8 as $fxx).$tolfn());
                    }
                }

                let x: [$fxx; 3] = [1., 3., 5.];
                let mut b: [$fxx; 3] = [22., 44., 40.];
                view.solve_cholesky(&mut b);
                assert!(b.norm_inf_diff(&x) <= (1e-10 as $fxx).$tolfn());
            }
        }
    };
}

generate_test_cholesky!(f32, test_xpotrf_f32, sqrt);
generate_test_cholesky!(f64, test_xpotrf_f64, abs);

#[test]
fn test_xpotrf_not_definite() {
    #[rustfmt::skip]
    let mut S = Matrix::<f64>::from(
        &[[ 1., 2.],
          [ 2., 1.]]);
    let mut view: TriangularViewMut<f64> =
        TriangularView::new(&mut S.data[..], 2, 2, (0, 0), MatrixTriangle::Tril);

    assert_eq!(
        view.factor_cholesky(),
        Err(FactorizationError::NotPositiveDefinite { index: 1 })
    );
}
