use crate::algebra::MatrixShape;

/// Dimension queries shared by all dense matrix types and views.
pub trait ShapedMatrix {
    fn size(&self) -> (usize, usize);
    #[allow(dead_code)]
    fn shape(&self) -> MatrixShape;
    fn nrows(&self) -> usize {
        self.size().0
    }
    fn ncols(&self) -> usize {
        self.size().1
    }
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}
