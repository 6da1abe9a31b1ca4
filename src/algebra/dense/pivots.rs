#![allow(non_snake_case)]

use crate::algebra::*;

/// Interchange record for one row of a Bunch-Kaufman factorization, held in
/// the LAPACK `ipiv` encoding shared by both dense backends.
///
/// A positive value `p` marks a 1x1 pivot block whose row was interchanged
/// with row `p`.  Both rows of a 2x2 pivot block hold the same negative
/// value `-p`.  Row numbers are 1-based.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PivotIndex(i32);

/// A decoded [`PivotIndex`].  The stored row is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BkPivot {
    OneByOne(usize),
    TwoByTwo(usize),
}

impl Default for PivotIndex {
    fn default() -> Self {
        PivotIndex(1)
    }
}

impl From<BkPivot> for PivotIndex {
    fn from(p: BkPivot) -> Self {
        match p {
            BkPivot::OneByOne(kp) => PivotIndex(kp as i32 + 1),
            BkPivot::TwoByTwo(kp) => PivotIndex(-(kp as i32 + 1)),
        }
    }
}

impl PivotIndex {
    pub fn decode(&self) -> BkPivot {
        if self.0 < 0 {
            BkPivot::TwoByTwo((-self.0) as usize - 1)
        } else {
            BkPivot::OneByOne(self.0 as usize - 1)
        }
    }
}

// view of a pivot array as the i32 `ipiv` argument of ?sytrf / ?sytrs
#[cfg(feature = "lapack")]
pub(crate) fn as_ipiv(ipiv: &[PivotIndex]) -> &[i32] {
    // SAFETY: PivotIndex is repr(transparent) over i32
    unsafe { std::slice::from_raw_parts(ipiv.as_ptr() as *const i32, ipiv.len()) }
}

#[cfg(feature = "lapack")]
pub(crate) fn as_ipiv_mut(ipiv: &mut [PivotIndex]) -> &mut [i32] {
    // SAFETY: PivotIndex is repr(transparent) over i32
    unsafe { std::slice::from_raw_parts_mut(ipiv.as_mut_ptr() as *mut i32, ipiv.len()) }
}

impl<S, T> BunchKaufmanPivots<T> for TriangularView<S, T>
where
    S: AsRef<[T]>,
    T: FloatT,
{
    fn for_each_pivot_eigenvalue(&self, ipiv: &[PivotIndex], mut f: impl FnMut(T)) {
        let n = self.n;
        let two: T = (2.0).as_T();
        let mut k = 0;
        while k < n {
            match ipiv[k].decode() {
                BkPivot::OneByOne(_) => {
                    f(self[(k, k)]);
                    k += 1;
                }
                BkPivot::TwoByTwo(_) => {
                    // eigenvalues of [a b; b c]
                    let (a, b, c) = (self[(k, k)], self[(k + 1, k)], self[(k + 1, k + 1)]);
                    let mid = (a + c) / two;
                    let rad = T::hypot((a - c) / two, b);
                    f(mid + rad);
                    f(mid - rad);
                    k += 2;
                }
            }
        }
    }
}

#[test]
fn test_pivot_encoding() {
    assert_eq!(PivotIndex::from(BkPivot::OneByOne(0)), PivotIndex(1));
    assert_eq!(PivotIndex::from(BkPivot::TwoByTwo(2)), PivotIndex(-3));
    assert_eq!(PivotIndex(4).decode(), BkPivot::OneByOne(3));
    assert_eq!(PivotIndex(-1).decode(), BkPivot::TwoByTwo(0));
    assert_eq!(PivotIndex::default().decode(), BkPivot::OneByOne(0));
}

#[test]
fn test_pivot_eigenvalues() {
    // D = diag(3, [1 2; 2 1]) held on the diagonal and first subdiagonal
    #[rustfmt::skip]
    let D = Matrix::from(
        &[[ 3., 0., 0.],
          [ 0., 1., 0.],
          [ 0., 2., 1.]]);
    let view: TriangularViewRef<f64> =
        TriangularView::new(&D.data[..], 3, 3, (0, 0), MatrixTriangle::Tril);
    let ipiv = [PivotIndex(1), PivotIndex(-2), PivotIndex(-2)];

    let mut eigs = vec![];
    view.for_each_pivot_eigenvalue(&ipiv, |λ| eigs.push(λ));
    assert_eq!(eigs.len(), 3);
    assert_eq!(eigs[0], 3.);
    assert!((eigs[1] - 3.).abs() < 1e-14);
    assert!((eigs[2] + 1.).abs() < 1e-14);
}
