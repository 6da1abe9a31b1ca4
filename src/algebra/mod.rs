//! Dense linear algebra used by the updatable factorizations.
//!
//! This module provides a small column-major [`Matrix`] type with
//! [`Symmetric`] views, BLAS-like level-1 operations on slices through
//! [`VectorMath`], and in-place Cholesky and Bunch-Kaufman kernels operating
//! on packed triangular storage.  The kernels are native unless the `lapack`
//! feature is enabled.

mod dense;
mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod matrix_types;
mod vecmath;

pub use dense::*;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
pub use matrix_types::*;
