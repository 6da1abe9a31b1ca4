use crate::algebra::*;
use std::ops::{Index, IndexMut};

/// Owned dense matrix in column major format.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    /// dimensions
    pub size: (usize, usize),
    /// column major data
    pub data: Vec<T>,
}

impl<T> ShapedMatrix for Matrix<T> {
    fn size(&self) -> (usize, usize) {
        self.size
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

/// Read access by `(row, col)` into column major storage.
///
/// Implemented by [`Matrix`], by [`Symmetric`] views of it and by the
/// packed triangular views used inside the factorizations.
pub trait DenseMatrix<T>: ShapedMatrix + Index<(usize, usize), Output = T> {
    /// position of entry `idx` in [`data`](DenseMatrix::data)
    fn index_linear(&self, idx: (usize, usize)) -> usize;
    fn data(&self) -> &[T];
}

impl<T> DenseMatrix<T> for Matrix<T> {
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        debug_assert!(idx.0 < self.size.0 && idx.1 < self.size.1);
        idx.0 + self.size.0 * idx.1
    }
    fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        &self.data[self.index_linear(idx)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut T {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

/// Read only symmetric view of a square matrix.
///
/// Only the triangle named by `uplo` is ever referenced.  Entries in the
/// opposite triangle are read by reflection.
#[derive(Debug, Clone, Copy)]
pub struct Symmetric<'a, M> {
    pub src: &'a M,
    pub uplo: MatrixTriangle,
}

impl<M> ShapedMatrix for Symmetric<'_, M>
where
    M: ShapedMatrix,
{
    fn size(&self) -> (usize, usize) {
        self.src.size()
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

impl<T> DenseMatrix<T> for Symmetric<'_, Matrix<T>> {
    fn index_linear(&self, (i, j): (usize, usize)) -> usize {
        let stored = match self.uplo {
            MatrixTriangle::Triu => i <= j,
            MatrixTriangle::Tril => i >= j,
        };
        if stored {
            self.src.index_linear((i, j))
        } else {
            self.src.index_linear((j, i))
        }
    }
    fn data(&self) -> &[T] {
        self.src.data()
    }
}

impl<T> Index<(usize, usize)> for Symmetric<'_, Matrix<T>> {
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        &self.data()[self.index_linear(idx)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // [ 1  4  7 ]
    // [ 2  5  8 ]
    // [ 3  6  9 ]
    fn counting_matrix() -> Matrix<f64> {
        Matrix::from(&[[1., 4., 7.], [2., 5., 8.], [3., 6., 9.]])
    }

    #[test]
    fn test_matrix_indexing() {
        let A = counting_matrix();
        assert_eq!(A[(2, 0)], 3.);
        assert_eq!(A[(0, 1)], 4.);
        assert_eq!(A.index_linear((0, 1)), 3);
        assert_eq!(A.index_linear((2, 2)), 8);
    }

    #[test]
    fn test_symmetric_views() {
        let A = counting_matrix();

        let U = A.sym(MatrixTriangle::Triu);
        assert_eq!((U[(0, 2)], U[(2, 0)]), (7., 7.));
        assert_eq!((U[(1, 2)], U[(2, 1)]), (8., 8.));

        let L = A.sym(MatrixTriangle::Tril);
        assert_eq!((L[(0, 2)], L[(2, 0)]), (3., 3.));
        assert_eq!((L[(1, 2)], L[(2, 1)]), (6., 6.));
        assert_eq!(L[(1, 1)], 5.);
    }
}
