use crate::algebra::*;
use std::ops::{Index, IndexMut};

/// Lower triangle of an `n x n` symmetric (or factor) matrix packed inside a
/// larger column-major block with leading dimension `ld`.
///
/// Logical entry `(i,j)` with `i >= j` lives at physical position
///
/// - `(r0 + i, c0 + j)` when `uplo == Tril`,
/// - `(r0 + j, c0 + i)` when `uplo == Triu`, i.e. the lower triangle is held
///   transposed in an upper triangular region.
///
/// Requests for `i < j` are reflected, so the view reads as a full symmetric
/// matrix.  This lets an original matrix and its factor share one square block
/// without their diagonals colliding.
#[derive(Debug)]
pub(crate) struct TriangularView<S, T>
where
    S: AsRef<[T]>,
{
    pub n: usize,
    ld: usize,
    offset: (usize, usize),
    uplo: MatrixTriangle,
    data: S,
    phantom: std::marker::PhantomData<T>,
}

pub(crate) type TriangularViewRef<'a, T> = TriangularView<&'a [T], T>;
pub(crate) type TriangularViewMut<'a, T> = TriangularView<&'a mut [T], T>;

impl<S, T> TriangularView<S, T>
where
    S: AsRef<[T]>,
{
    pub fn new(data: S, ld: usize, n: usize, offset: (usize, usize), uplo: MatrixTriangle) -> Self {
        let (r0, c0) = offset;
        assert!(r0 + n <= ld && (c0 + n) * ld <= data.as_ref().len());
        Self {
            n,
            ld,
            offset,
            uplo,
            data,
            phantom: std::marker::PhantomData::<T>,
        }
    }
}

impl<S, T> ShapedMatrix for TriangularView<S, T>
where
    S: AsRef<[T]>,
{
    fn size(&self) -> (usize, usize) {
        (self.n, self.n)
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

impl<S, T> DenseMatrix<T> for TriangularView<S, T>
where
    S: AsRef<[T]>,
{
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        debug_assert!(idx.0 < self.n && idx.1 < self.n);
        // always address the lower triangle
        let (i, j) = if idx.0 >= idx.1 { idx } else { (idx.1, idx.0) };
        let (r, c) = match self.uplo {
            MatrixTriangle::Tril => (self.offset.0 + i, self.offset.1 + j),
            MatrixTriangle::Triu => (self.offset.0 + j, self.offset.1 + i),
        };
        r + self.ld * c
    }
    fn data(&self) -> &[T] {
        self.data.as_ref()
    }
}

impl<S, T> Index<(usize, usize)> for TriangularView<S, T>
where
    S: AsRef<[T]>,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        &self.data.as_ref()[self.index_linear(idx)]
    }
}

impl<S, T> IndexMut<(usize, usize)> for TriangularView<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut T {
        let lidx = self.index_linear(idx);
        &mut self.data.as_mut()[lidx]
    }
}

impl<S, T> TriangularView<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
    T: FloatT,
{
    /// swap two logical entries
    #[inline]
    pub fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        let (la, lb) = (self.index_linear(a), self.index_linear(b));
        self.data.as_mut().swap(la, lb);
    }

    /// Negate every entry of the lower triangle
    pub fn negate(&mut self) {
        for j in 0..self.n {
            for i in j..self.n {
                self[(i, j)] = -self[(i, j)];
            }
        }
    }
}

// The stored triangle as a LAPACK argument: the column major array
// starting at logical (0,0), its leading dimension, and the physical
// triangle holding the view.
#[cfg(feature = "lapack")]
impl<S, T> TriangularView<S, T>
where
    S: AsRef<[T]>,
{
    fn lapack_start(&self) -> usize {
        self.offset.0 + self.ld * self.offset.1
    }

    pub fn lapack_parts(&self) -> (u8, &[T], i32) {
        let start = self.lapack_start();
        (self.uplo.as_blas_char(), &self.data.as_ref()[start..], self.ld as i32)
    }

    pub fn lapack_parts_mut(&mut self) -> (u8, &mut [T], i32)
    where
        S: AsMut<[T]>,
    {
        let start = self.lapack_start();
        (self.uplo.as_blas_char(), &mut self.data.as_mut()[start..], self.ld as i32)
    }
}

#[test]
fn test_triangular_view_layouts() {
    // 3x3 block holding a 2x2 lower triangle shifted down one row, and a
    // second 2x2 lower triangle stored transposed and shifted right
    let mut block = vec![0.0_f64; 9];
    {
        let mut orig: TriangularViewMut<f64> =
            TriangularView::new(&mut block[..], 3, 2, (1, 0), MatrixTriangle::Tril);
        orig[(0, 0)] = 1.;
        orig[(1, 0)] = 2.;
        orig[(1, 1)] = 3.;
    }
    {
        let mut fact: TriangularViewMut<f64> =
            TriangularView::new(&mut block[..], 3, 2, (0, 1), MatrixTriangle::Triu);
        fact[(0, 0)] = 10.;
        fact[(1, 0)] = 20.;
        fact[(1, 1)] = 30.;
    }
    // physical column major layout
    //  [ .   10  20 ]
    //  [ 1   .   30 ]
    //  [ 2   3   .  ]
    assert_eq!(block, vec![0., 1., 2., 10., 0., 3., 20., 30., 0.]);

    let orig: TriangularViewRef<f64> =
        TriangularView::new(&block[..], 3, 2, (1, 0), MatrixTriangle::Tril);
    assert_eq!(orig[(0, 1)], 2.);
    assert_eq!(orig[(1, 0)], 2.);
}
