mod core;
mod types;
pub use self::types::*;
#[allow(unused_imports)]
pub(crate) use self::core::*;

mod triangular;
pub(crate) use self::triangular::*;

mod blaslike_traits;
pub(crate) use blaslike_traits::*;
mod pivots;
pub use self::pivots::{BkPivot, PivotIndex};

cfg_if::cfg_if! {
    if #[cfg(feature = "lapack")] {
        // kernels through the blas/lapack crates
        mod blas;
        pub use self::blas::BlasFloatT;
    } else {
        // native kernels
        mod bunchkaufman;
        mod cholesky;
        mod symv;
    }
}
