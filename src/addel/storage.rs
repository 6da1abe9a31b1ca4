#![allow(non_snake_case)]

use super::UpdateError;
use crate::algebra::*;

// Each block is a square column major array with leading dimension
// ld = max_size + 1.  For an n x n matrix S, the lower triangle of the
// original S is stored shifted down one row and the lower triangle of
// the factor is stored transposed and shifted right one column:
//
//   [ .  F  F  F ]
//   [ S  .  F  F ]
//   [ S  S  .  F ]
//   [ S  S  S  . ]
//
// so the two never overlap, not even on the diagonal.

/// One storage block of a [`TriangularStore`], holding an original
/// matrix, its factor and the pivots of that factor.
#[derive(Debug)]
pub(crate) struct FactorBlock<T> {
    data: Matrix<T>,
    pivots: Vec<PivotIndex>,
}

impl<T> FactorBlock<T>
where
    T: FloatT,
{
    fn new() -> Self {
        Self {
            data: Matrix::zeros((0, 0)),
            pivots: Vec::new(),
        }
    }

    fn reserve(&mut self, max_size: usize) {
        let ld = max_size + 1;
        // Vec::resize keeps the existing allocation when it is big enough
        self.data.data.clear();
        self.data.data.resize(ld * ld, T::zero());
        self.data.size = (ld, ld);
        self.pivots.clear();
        self.pivots.resize(max_size, PivotIndex::default());
    }

    fn ld(&self) -> usize {
        self.data.nrows()
    }

    /// original matrix of size n
    pub fn original(&self, n: usize) -> TriangularViewRef<'_, T> {
        TriangularView::new(&self.data.data[..], self.ld(), n, (1, 0), MatrixTriangle::Tril)
    }

    pub fn original_mut(&mut self, n: usize) -> TriangularViewMut<'_, T> {
        let ld = self.ld();
        TriangularView::new(&mut self.data.data[..], ld, n, (1, 0), MatrixTriangle::Tril)
    }

    /// factor of size n
    pub fn factor(&self, n: usize) -> TriangularViewRef<'_, T> {
        TriangularView::new(&self.data.data[..], self.ld(), n, (0, 1), MatrixTriangle::Triu)
    }

    pub fn factor_mut(&mut self, n: usize) -> TriangularViewMut<'_, T> {
        let ld = self.ld();
        TriangularView::new(&mut self.data.data[..], ld, n, (0, 1), MatrixTriangle::Triu)
    }

    pub fn pivots(&self, n: usize) -> &[PivotIndex] {
        &self.pivots[..n]
    }

    /// factor view and pivot array, borrowed together for the kernels
    pub fn factor_and_pivots_mut(&mut self, n: usize) -> (TriangularViewMut<'_, T>, &mut [PivotIndex]) {
        let ld = self.ld();
        let view = TriangularView::new(&mut self.data.data[..], ld, n, (0, 1), MatrixTriangle::Triu);
        (view, &mut self.pivots[..n])
    }

    /// overwrite the factor region with the original matrix of size n
    pub fn copy_original_to_factor(&mut self, n: usize) {
        for j in 0..n {
            for i in j..n {
                self.data[(j, i + 1)] = self.data[(i + 1, j)];
            }
        }
    }

    /// copy the original matrix of size n from another block
    pub fn copy_original_from(&mut self, src: &FactorBlock<T>, n: usize) {
        debug_assert_eq!(self.ld(), src.ld());
        // column j of the lower triangle is contiguous
        for j in 0..n {
            let rows = (j + 1)..(n + 1);
            let dst = &mut self.data.col_slice_mut(j)[rows.clone()];
            dst.copy_from(&src.data.col_slice(j)[rows]);
        }
    }

    #[cfg(test)]
    pub(crate) fn buffer_address(&self) -> *const T {
        self.data.data.as_ptr()
    }
}

/// Two equally sized storage blocks, exactly one of which is active.
///
/// The active block holds the last committed original and factor.  The
/// other one is scratch space for trial updates, and is only made
/// visible by [`commit`](TriangularStore::commit).
#[derive(Debug)]
pub(crate) struct TriangularStore<T> {
    blocks: [FactorBlock<T>; 2],
    active: usize,
    size: usize,
    max_size: usize,
}

impl<T> TriangularStore<T>
where
    T: FloatT,
{
    pub fn new() -> Self {
        Self {
            blocks: [FactorBlock::new(), FactorBlock::new()],
            active: 0,
            size: 0,
            max_size: 0,
        }
    }

    /// Size both blocks for matrices up to `max_size`.  This is the only
    /// place where storage is (re)allocated.  Contents are discarded.
    pub fn reserve(&mut self, max_size: usize) {
        for block in self.blocks.iter_mut() {
            block.reserve(max_size);
        }
        self.active = 0;
        self.size = 0;
        self.max_size = max_size;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Check that a matrix of `new_size` fits in the blocks
    pub fn check_size(&self, new_size: usize) -> Result<(), UpdateError> {
        if new_size > self.max_size {
            return Err(UpdateError::MaxSizeExceeded {
                requested: new_size,
                max_size: self.max_size,
            });
        }
        Ok(())
    }

    pub fn active(&self) -> &FactorBlock<T> {
        &self.blocks[self.active]
    }

    pub fn active_mut(&mut self) -> &mut FactorBlock<T> {
        &mut self.blocks[self.active]
    }

    pub fn spare_mut(&mut self) -> &mut FactorBlock<T> {
        &mut self.blocks[1 - self.active]
    }

    /// the active block for reading, and the spare block for writing
    pub fn split_mut(&mut self) -> (&FactorBlock<T>, &mut FactorBlock<T>) {
        let [b0, b1] = &mut self.blocks;
        if self.active == 0 {
            (&*b0, b1)
        } else {
            (&*b1, b0)
        }
    }

    /// Make the spare block active, holding a matrix of size `new_size`
    pub fn commit(&mut self, new_size: usize) {
        debug_assert!(new_size <= self.max_size);
        self.active = 1 - self.active;
        self.size = new_size;
    }

    /// Forget the current matrix.  Storage is kept.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    #[cfg(test)]
    pub(crate) fn buffer_addresses(&self) -> [*const T; 2] {
        [self.blocks[0].buffer_address(), self.blocks[1].buffer_address()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_original_and_factor_regions() {
        let mut block = FactorBlock::<f64>::new();
        block.reserve(3);
        {
            let mut S = block.original_mut(3);
            let mut v = 1.;
            for j in 0..3 {
                for i in j..3 {
                    S[(i, j)] = v;
                    v += 1.;
                }
            }
        }
        block.copy_original_to_factor(3);

        let S = block.original(3);
        let F = block.factor(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(S[(i, j)], F[(i, j)]);
            }
        }

        // overwriting the factor leaves the original alone
        block.factor_mut(3).negate();
        assert_eq!(block.original(3)[(2, 2)], 6.);
        assert_eq!(block.factor(3)[(2, 2)], -6.);
        assert_eq!(block.factor(3)[(1, 0)], -2.);
    }

    #[test]
    fn test_commit_and_split() {
        let mut store = TriangularStore::<f64>::new();
        store.reserve(4);
        assert_eq!(store.max_size(), 4);
        assert!(store.check_size(4).is_ok());
        assert_eq!(
            store.check_size(5),
            Err(UpdateError::MaxSizeExceeded {
                requested: 5,
                max_size: 4
            })
        );

        store.spare_mut().original_mut(1)[(0, 0)] = 3.;
        store.commit(1);
        assert_eq!(store.size(), 1);
        assert_eq!(store.active().original(1)[(0, 0)], 3.);

        // copy into the spare block and extend it
        let (active, spare) = store.split_mut();
        spare.copy_original_from(active, 1);
        let mut S = spare.original_mut(2);
        S[(1, 0)] = 1.;
        S[(1, 1)] = 2.;
        store.commit(2);

        let S = store.active().original(2);
        assert_eq!((S[(0, 0)], S[(0, 1)], S[(1, 1)]), (3., 1., 2.));
    }

    #[test]
    fn test_reserve_reuses_storage() {
        let mut store = TriangularStore::<f64>::new();
        store.reserve(6);
        let before = store.buffer_addresses();
        store.reserve(3);
        assert_eq!(before, store.buffer_addresses());
    }
}
