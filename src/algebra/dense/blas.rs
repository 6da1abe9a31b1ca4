#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(clippy::too_many_arguments)]

// Dense kernels through the blas/lapack crates.  The BLAS/LAPACK
// implementation itself is selected by the lapack-* features.

extern crate blas_src;
extern crate lapack_src;
use lapack::*;
use blas::*;

mod bunchkaufman;
mod cholesky;
mod symv;

pub trait BlasFloatT:
    private::BlasFloatSealed
    + XpotrfScalar
    + XpotrsScalar
    + XsytrfScalar
    + XsytrsScalar
    + XsymvScalar
{}

impl BlasFloatT for f32 {}
impl BlasFloatT for f64 {}

mod private {
    pub trait BlasFloatSealed {}
    impl BlasFloatSealed for f32 {}
    impl BlasFloatSealed for f64 {}
}


// --------------------------------------
// ?potrf : Cholesky decomposition
// --------------------------------------

pub trait XpotrfScalar: Sized {
    fn xpotrf(
        uplo: u8, n: i32, a: &mut [Self], lda: i32, info: &mut i32
    );
}

macro_rules! impl_blas_xpotrf {
    ($T:ty, $XPOTRF:path) => {
        impl XpotrfScalar for $T {
            fn xpotrf(
                uplo: u8, n: i32, a: &mut [Self], lda: i32, info: &mut i32
            ) {
                unsafe {
                    $XPOTRF(
                        uplo, n, a, lda, info
                    );
                }
            }
        }
    };
}

impl_blas_xpotrf!(f32, spotrf);
impl_blas_xpotrf!(f64, dpotrf);

// --------------------------------------
// ?potrs : solve with a Cholesky factor
// --------------------------------------

pub trait XpotrsScalar: Sized {
    fn xpotrs(
        uplo: u8, n: i32, nrhs: i32, a: &[Self], lda: i32,
        b: &mut [Self], ldb: i32, info: &mut i32
    );
}

macro_rules! impl_blas_xpotrs {
    ($T:ty, $XPOTRS:path) => {
        impl XpotrsScalar for $T {
            fn xpotrs(
                uplo: u8, n: i32, nrhs: i32, a: &[Self], lda: i32,
                b: &mut [Self], ldb: i32, info: &mut i32
            ) {
                unsafe {
                    $XPOTRS(
                        uplo, n, nrhs, a, lda, b, ldb, info
                    );
                }
            }
        }
    };
}

impl_blas_xpotrs!(f32, spotrs);
impl_blas_xpotrs!(f64, dpotrs);

// --------------------------------------
// ?sytrf : Bunch-Kaufman decomposition
// --------------------------------------

pub trait XsytrfScalar: Sized {
    fn xsytrf(
        uplo: u8, n: i32, a: &mut [Self], lda: i32, ipiv: &mut [i32],
        work: &mut [Self], lwork: i32, info: &mut i32
    );
}

macro_rules! impl_blas_xsytrf {
    ($T:ty, $XSYTRF:path) => {
        impl XsytrfScalar for $T {
            fn xsytrf(
                uplo: u8, n: i32, a: &mut [Self], lda: i32, ipiv: &mut [i32],
                work: &mut [Self], lwork: i32, info: &mut i32
            ) {
                unsafe {
                    $XSYTRF(
                        uplo, n, a, lda, ipiv, work, lwork, info
                    );
                }
            }
        }
    };
}

impl_blas_xsytrf!(f32, ssytrf);
impl_blas_xsytrf!(f64, dsytrf);

// --------------------------------------
// ?sytrs : solve with a Bunch-Kaufman factor
// --------------------------------------

pub trait XsytrsScalar: Sized {
    fn xsytrs(
        uplo: u8, n: i32, nrhs: i32, a: &[Self], lda: i32, ipiv: &[i32],
        b: &mut [Self], ldb: i32, info: &mut i32
    );
}

macro_rules! impl_blas_xsytrs {
    ($T:ty, $XSYTRS:path) => {
        impl XsytrsScalar for $T {
            fn xsytrs(
                uplo: u8, n: i32, nrhs: i32, a: &[Self], lda: i32, ipiv: &[i32],
                b: &mut [Self], ldb: i32, info: &mut i32
            ) {
                unsafe {
                    $XSYTRS(
                        uplo, n, nrhs, a, lda, ipiv, b, ldb, info
                    );
                }
            }
        }
    };
}

impl_blas_xsytrs!(f32, ssytrs);
impl_blas_xsytrs!(f64, dsytrs);

// --------------------------------------
// ?symv : matrix vector multiply (symmetric)
// --------------------------------------

pub trait XsymvScalar: Sized {
    fn xsymv(
        uplo: u8, n: i32, alpha: Self, a: &[Self], lda: i32,
        x: &[Self], incx: i32, beta: Self, y: &mut [Self], incy: i32
    );
}

macro_rules! impl_blas_xsymv {
    ($T:ty, $XSYMV:path) => {
        impl XsymvScalar for $T {
            fn xsymv(
                uplo: u8, n: i32, alpha: Self, a: &[Self], lda: i32,
                x: &[Self], incx: i32, beta: Self, y: &mut [Self], incy: i32
            ) {
                unsafe {
                    $XSYMV(
                        uplo, n, alpha, a, lda, x, incx, beta, y, incy
                    );
                }
            }
        }
    };
}

impl_blas_xsymv!(f32, ssymv);
impl_blas_xsymv!(f64, dsymv);
