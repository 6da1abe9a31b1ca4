#![allow(non_snake_case)]

use crate::algebra::*;

/// Removes row and column `k` (0-based) from the `n x n` symmetric matrix
/// held in `A`, in place.  On return the leading `(n-1) x (n-1)` part of
/// the same storage holds the reduced matrix.
///
/// Entries below and to the right of `k` move up and left by one.  Entry
/// `(i,j)` is only ever overwritten from `(i',j')` with `i' >= i, j' >= j`,
/// so sweeping forward column by column reads every source before it is
/// overwritten.
pub(crate) fn remove_row_col<S, T>(A: &mut TriangularView<S, T>, k: usize)
where
    S: AsRef<[T]> + AsMut<[T]>,
    T: FloatT,
{
    let n = A.n;
    assert!(k < n);

    // columns left of k only lose one row
    for j in 0..k {
        for i in k..(n - 1) {
            A[(i, j)] = A[(i + 1, j)];
        }
    }
    // trailing columns move up and left
    for j in k..(n - 1) {
        for i in j..(n - 1) {
            A[(i, j)] = A[(i + 1, j + 1)];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dense_lower(n: usize) -> Matrix<f64> {
        // S(i,j) = 10*(i+1) + (j+1) in the lower triangle
        let mut S = Matrix::zeros((n, n));
        for j in 0..n {
            for i in j..n {
                S[(i, j)] = (10 * (i + 1) + (j + 1)) as f64;
            }
        }
        S
    }

    #[test]
    fn test_remove_row_col() {
        for k in 0..4 {
            let mut S = dense_lower(4);
            let mut view: TriangularViewMut<f64> =
                TriangularView::new(&mut S.data[..], 4, 4, (0, 0), MatrixTriangle::Tril);
            remove_row_col(&mut view, k);

            let keep: Vec<usize> = (0..4).filter(|&i| i != k).collect();
            let R: TriangularViewRef<f64> =
                TriangularView::new(&S.data[..], 4, 3, (0, 0), MatrixTriangle::Tril);
            for (j, &jj) in keep.iter().enumerate() {
                for (i, &ii) in keep.iter().enumerate().skip(j) {
                    assert_eq!(R[(i, j)], (10 * (ii + 1) + (jj + 1)) as f64);
                }
            }
        }
    }

    #[test]
    fn test_remove_row_col_shifted_storage() {
        // original region of a store block, shifted down one row
        let mut data = vec![0.0_f64; 16];
        let mut view: TriangularViewMut<f64> =
            TriangularView::new(&mut data[..], 4, 3, (1, 0), MatrixTriangle::Tril);
        #[rustfmt::skip]
        let vals = [(0, 0, 4.), (1, 0, 1.), (2, 0, 0.),
                    (1, 1, 3.), (2, 1, 1.),
                    (2, 2, 5.)];
        for (i, j, v) in vals {
            view[(i, j)] = v;
        }

        remove_row_col(&mut view, 0);
        assert_eq!((view[(0, 0)], view[(1, 0)], view[(1, 1)]), (3., 1., 5.));
    }
}
