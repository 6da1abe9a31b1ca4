#![allow(non_snake_case)]

use crate::algebra::*;

impl<S, T> MultiplySYMV<T> for TriangularView<S, T>
where
    S: AsRef<[T]>,
    T: FloatT,
{
    // implements y = αA*x + βy
    fn symv(&self, x: &[T], y: &mut [T], α: T, β: T) {
        let n = self.n;
        assert!(x.len() == n && y.len() == n);

        // standard BLAS ?symv arguments for computing matrix-vector product
        let (uplo, a, lda) = self.lapack_parts();
        let n = n as i32;
        let incx = 1;
        let incy = 1;
        T::xsymv(uplo, n, α, a, lda, x, incx, β, y, incy);
    }
}

macro_rules! generate_test_xsymv {
    ($fxx:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            // [1 2 4; 2 3 5; 4 5 6] in a 4x4 block, below the first row
            #[rustfmt::skip]
            let A = Matrix::<$fxx>::from(&[
                [ 0.,  0.,  0.,  0.],
                [ 1.,  0.,  0.,  0.],
                [ 2.,  3.,  0.,  0.],
                [ 4.,  5.,  6.,  0.],
            ]);
            let view: TriangularViewRef<$fxx> =
                TriangularView::new(&A.data[..], 4, 3, (1, 0), MatrixTriangle::Tril);

            let x = vec![1., -2., 3.];
            let mut y = vec![-4., -1., 3.];
            view.symv(&x, &mut y, 2.0, 3.0);
            assert_eq!(y, [6.0, 19.0, 33.0]);

            // β = 0 ignores whatever was in y
            let mut y = vec![<$fxx>::NAN; 3];
            view.symv(&x, &mut y, 1.0, 0.0);
            assert_eq!(y, [9.0, 11.0, 12.0]);
        }
    };
}

generate_test_xsymv!(f32, test_xsymv_f32);
generate_test_xsymv!(f64, test_xsymv_f64);
