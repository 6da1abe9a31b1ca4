#![allow(non_snake_case)]

use crate::algebra::*;

impl<S, T> FactorCholesky<T> for TriangularView<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
    T: FloatT,
{
    fn factor_cholesky(&mut self) -> Result<(), FactorizationError> {
        let n = self.n;

        // left looking, column by column.  Column j of L only
        // needs columns 0..j, all of which are already final
        for j in 0..n {
            let mut d = self[(j, j)];
            for p in 0..j {
                d -= self[(j, p)] * self[(j, p)];
            }

            // NaN fails this test as well
            if !(d > T::zero()) {
                return Err(FactorizationError::NotPositiveDefinite { index: j });
            }
            let ljj = d.sqrt();
            self[(j, j)] = ljj;

            for i in (j + 1)..n {
                let mut s = self[(i, j)];
                for p in 0..j {
                    s -= self[(i, p)] * self[(j, p)];
                }
                self[(i, j)] = s / ljj;
            }
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
        let n = self.n;
        assert_eq!(b.len(), n);

        // L z = b
        for i in 0..n {
            let mut s = b[i];
            for j in 0..i {
                s -= self[(i, j)] * b[j];
            }
            b[i] = s / self[(i, i)];
        }

        // L^T x = z
        for i in (0..n).rev() {
            let mut s = b[i];
            for j in (i + 1)..n {
                s -= self[(j, i)] * b[j];
            }
            b[i] = s / self[(i, i)];
        }
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

            // pack the lower triangle into a 3x3 block, in place
            let mut L = S.clone();
            let mut view: TriangularViewMut<$fxx> =
                TriangularView::new(&mut L.data[..], 3, 3, (0, 0), MatrixTriangle::Tril);
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

            // now try to solve
            let x: [$fxx; 3] = [1., 3., 5.];
            let mut b: [$fxx; 3] = [22., 44., 40.];
            view.solve_cholesky(&mut b);

            assert!(b.norm_inf_diff(&x) <= (1e-10 as $fxx).$tolfn());
        }
    };
}

generate_test_cholesky!(f32, test_cholesky_f32, sqrt);
generate_test_cholesky!(f64, test_cholesky_f64, abs);

#[test]
fn test_cholesky_not_definite() {
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
