#![allow(non_snake_case)]

use crate::algebra::*;
use itertools::izip;

impl<S, T> MultiplySYMV<T> for TriangularView<S, T>
where
    S: AsRef<[T]>,
    T: FloatT,
{
    // implements y = αA*x + βy, reading only the stored triangle
    fn symv(&self, x: &[T], y: &mut [T], α: T, β: T) {
        let n = self.n;
        assert!(x.len() == n && y.len() == n);

        // β = 0 overwrites y, so NaNs in y are not propagated
        if β == T::zero() {
            y.set(T::zero());
        } else if β != T::one() {
            y.scale(β);
        }

        for j in 0..n {
            let αxj = α * x[j];
            let mut acc = T::zero();
            for (i, yi, &xi) in izip!((j + 1)..n, &mut y[(j + 1)..], &x[(j + 1)..]) {
                let aij = self[(i, j)];
                *yi += αxj * aij;
                acc += aij * xi;
            }
            y[j] += αxj * self[(j, j)] + α * acc;
        }
    }
}

#[test]
fn test_symv() {
    // lower triangle of [1 2 4; 2 3 5; 4 5 6]
    #[rustfmt::skip]
    let A = Matrix::from(&[
        [ 1.,  0.,  0.],
        [ 2.,  3.,  0.],
        [ 4.,  5.,  6.],
    ]);
    let view: TriangularViewRef<f64> =
        TriangularView::new(&A.data[..], 3, 3, (0, 0), MatrixTriangle::Tril);

    let x = vec![1., -2., 3.];
    let mut y = vec![-4., -1., 3.];
    view.symv(&x, &mut y, 2.0, 3.0);
    assert_eq!(y, [6.0, 19.0, 33.0]);

    // β = 0 ignores whatever was in y
    let mut y = vec![f64::NAN; 3];
    view.symv(&x, &mut y, 1.0, 0.0);
    assert_eq!(y, [9.0, 11.0, 12.0]);
}
