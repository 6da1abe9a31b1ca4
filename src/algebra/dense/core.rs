#![allow(non_snake_case)]

use crate::algebra::*;

impl<T> Matrix<T>
where
    T: FloatT,
{
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        Self {
            size,
            data: vec![T::zero(); m * n],
        }
    }

    /// Symmetric view referencing only the `uplo` triangle of `self`.
    pub fn sym(&self, uplo: MatrixTriangle) -> Symmetric<'_, Self> {
        debug_assert!(self.is_square());
        Symmetric { src: self, uplo }
    }
}

impl<T> Matrix<T> {
    pub fn col_slice(&self, col: usize) -> &[T] {
        let (m, n) = self.size;
        assert!(col < n);
        &self.data[(col * m)..(col + 1) * m]
    }

    pub fn col_slice_mut(&mut self, col: usize) -> &mut [T] {
        let (m, n) = self.size;
        assert!(col < n);
        &mut self.data[(col * m)..(col + 1) * m]
    }
}

// Matrix from row-major nested arrays, mostly for testing
impl<T, const R: usize, const C: usize> From<&[[T; C]; R]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; C]; R]) -> Self {
        let mut mat = Matrix::zeros((R, C));
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                mat[(i, j)] = v;
            }
        }
        mat
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}

pub(crate) fn display_matrix<M, T>(m: &M, f: &mut std::fmt::Formatter) -> std::fmt::Result
where
    M: DenseMatrix<T>,
    T: FloatT,
{
    writeln!(f)?;
    for i in 0..m.nrows() {
        write!(f, "[ ")?;
        for j in 0..m.ncols() {
            write!(f, " {:?}", m[(i, j)])?;
        }
        writeln!(f, "]")?;
    }
    writeln!(f)?;
    Ok(())
}

#[test]
fn test_matrix_from_rows() {
    #[rustfmt::skip]
    let A = Matrix::from(&[
        [1., 2., 3.],
        [4., 5., 6.],
    ]);
    assert_eq!(A.size(), (2, 3));
    assert_eq!(A.data, vec![1., 4., 2., 5., 3., 6.]);
    assert_eq!(A.col_slice(2), &[3., 6.]);
}
