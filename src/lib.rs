//! __symaddel__ maintains updatable factorizations of small dense symmetric
//! matrices, for use inside active-set QP and SQP solvers.
//!
//! Active-set methods solve a sequence of linear systems
//!
//! $$
//! S_k x = b_k
//! $$
//!
//! where each $S_{k+1}$ differs from $S_k$ by exactly one added or deleted row
//! and column, as constraints enter and leave the working set.  This crate
//! keeps a factorization of the current $S_k$ and updates it as the working set
//! changes, using
//!
//! * a Cholesky factorization of $S$ or $-S$ while the matrix is definite, and
//! * a Bunch-Kaufman $PSP^T = LDL^T$ factorization otherwise.
//!
//! The switch between the two is automatic.
//!
//! ## Features
//!
//! * __Validated updates__: the caller declares the sign of the eigenvalue that
//!   each update adds or removes.  The candidate factorization is checked
//!   against the expected inertia before it is accepted, and a rejected update
//!   leaves the previous factorization untouched.
//!
//! * __No allocation in the inner loop__: all storage is allocated when the
//!   factorization is initialized.  Updates work in a second, double-buffered
//!   storage block.
//!
//! * __Dense kernels in place__: Cholesky and Bunch-Kaufman factor and solve
//!   kernels operate directly on packed triangular storage.  By default these
//!   are native Rust.  The `lapack` feature (or one of `lapack-netlib`,
//!   `lapack-openblas`, `lapack-accelerate`, `lapack-mkl`) routes them to
//!   `?potrf`/`?potrs`/`?sytrf`/`?sytrs`/`?symv` through the
//!   [`lapack`](https://crates.io/crates/lapack) and
//!   [`blas`](https://crates.io/crates/blas) crates instead.
//!
//! See [`MatrixSymAddDelBunchKaufman`](crate::addel::MatrixSymAddDelBunchKaufman)
//! for an example.
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]

pub mod addel;
pub mod algebra;
