#![allow(non_snake_case)]
use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

#[cfg(feature = "lapack")]
use crate::algebra::dense::BlasFloatT;

/// Core bounds for floating point values.
///
/// `CoreFloatT` collects its bounds from [`num_traits`](num_traits).  With
/// the "lapack" feature, [`FloatT`] is further restricted to the `f32`/`f64`
/// types that BLAS supports.
pub trait CoreFloatT:
    'static + Send + Float + NumAssign + FromPrimitive + Default + Display + LowerExp + Debug
{
}

impl<T> CoreFloatT for T where
    T: 'static + Send + Float + NumAssign + FromPrimitive + Default + Display + LowerExp + Debug
{
}

cfg_if::cfg_if! {
    if #[cfg(feature = "lapack")] {
        /// Floating point types accepted by the dense kernels and the
        /// updatable factorizations, i.e. `f32` and `f64`.
        pub trait FloatT: CoreFloatT + BlasFloatT {}
        impl<T> FloatT for T where T: CoreFloatT + BlasFloatT {}
    } else {
        /// Floating point types accepted by the dense kernels and the
        /// updatable factorizations.  Any type satisfying the bounds of
        /// [`CoreFloatT`] qualifies.
        pub trait FloatT: CoreFloatT {}
        impl<T> FloatT for T where T: CoreFloatT {}
    }
}

/// Conversion of primitive constants to a [`FloatT`](crate::algebra::FloatT),
/// so that kernels can write `(17.0).as_T()` instead of
/// `T::from_f64(17.0).unwrap()`.
pub trait AsFloatT<T>: 'static {
    fn as_T(&self) -> T;
}

macro_rules! impl_as_FloatT {
    ($ty:ty, $ident:ident) => {
        impl<T> AsFloatT<T> for $ty
        where
            T: FromPrimitive + 'static,
        {
            #[inline]
            fn as_T(&self) -> T {
                T::$ident(*self).unwrap()
            }
        }
    };
}
impl_as_FloatT!(f32, from_f32);
impl_as_FloatT!(f64, from_f64);
