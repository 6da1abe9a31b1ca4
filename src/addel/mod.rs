//! Updatable factorizations of symmetric matrices.
//!
//! The main type is [`MatrixSymAddDelBunchKaufman`], which maintains a
//! factorization of a symmetric matrix that grows and shrinks by one row
//! and column at a time, as the working set of an active-set QP or SQP
//! solver changes.  It is used through the [`MatrixSymOpNonsing`] and
//! [`MatrixSymAddDelUpdateable`] traits.

mod bunchkaufman;
mod compact;
mod engine;
mod errors;
mod storage;
mod tolerances;
mod traits;
mod types;

pub use bunchkaufman::*;
pub use errors::*;
pub use tolerances::*;
pub use traits::*;
pub use types::*;
