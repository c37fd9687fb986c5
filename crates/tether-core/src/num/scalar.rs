// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Bounded Scalar Trait
//!
//! `BoundedScalar` collects the capabilities a numeric primitive needs to be
//! stored inside a bounded value. Every primitive is paired with a *wide*
//! working type in which unconstrained intermediate results are computed:
//!
//! - Integers up to 64 bits work in `i128`, so `0_u8 - 1` is the raw value
//!   `-1` rather than an unsigned underflow, and `max - min + 1` never
//!   overflows the primitive. Sums and differences of two 64-bit values
//!   always fit; products may not, and are handled through the checked and
//!   saturating product traits instead.
//! - Floats work in themselves.
//!
//! Only values already enforced into `[min, max]` are narrowed back, which
//! makes the narrowing lossless.
//!
//! Note: `i128` and `u128` are intentionally excluded, as they have no wider
//! working type.

use crate::num::constants::Grain;
use crate::num::ops::{
    modulo::{ModuloVal, MulModuloVal},
    product::{CheckedMulVal, SaturatingMulVal},
};
use num_traits::{Num, ToPrimitive};

/// A numeric primitive that can be held by a bounded value.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `isize`, `u8`, `u16`, `u32`,
/// `u64`, `usize`, `f32` and `f64`.
///
/// # Examples
///
/// ```rust
/// # use tether_core::num::scalar::BoundedScalar;
///
/// let raw = 0_u8.widen() - 1;
/// assert_eq!(raw, -1_i128);
/// assert_eq!(u8::narrow(200), 200_u8);
/// assert_eq!(<f32 as BoundedScalar>::from_bound(-3), -3.0);
/// ```
pub trait BoundedScalar:
    Copy + PartialOrd + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
    /// The unconstrained working type for intermediate results.
    type Wide: Num
        + Copy
        + PartialOrd
        + ToPrimitive
        + ModuloVal
        + MulModuloVal
        + CheckedMulVal
        + SaturatingMulVal
        + Grain
        + std::fmt::Debug;

    /// Smallest integral bound representable by the type.
    const LOWEST_BOUND: i128;

    /// Largest integral bound representable by the type.
    const HIGHEST_BOUND: i128;

    /// Converts the value into the wide working type.
    fn widen(self) -> Self::Wide;

    /// Converts a wide value back.
    ///
    /// The caller guarantees `wide` lies between two values of `Self`,
    /// which is the case for every enforced value.
    fn narrow(wide: Self::Wide) -> Self;

    /// Converts a compile-time integral bound.
    ///
    /// The caller guarantees `LOWEST_BOUND <= bound <= HIGHEST_BOUND`.
    fn from_bound(bound: i64) -> Self;
}

macro_rules! impl_bounded_scalar_integer {
    ($t:ty) => {
        impl BoundedScalar for $t {
            type Wide = i128;

            const LOWEST_BOUND: i128 = <$t>::MIN as i128;
            const HIGHEST_BOUND: i128 = <$t>::MAX as i128;

            #[inline(always)]
            fn widen(self) -> i128 {
                self as i128
            }

            #[inline(always)]
            fn narrow(wide: i128) -> Self {
                debug_assert!(
                    Self::LOWEST_BOUND <= wide && wide <= Self::HIGHEST_BOUND,
                    "called `BoundedScalar::narrow` with a value outside the primitive range"
                );
                wide as $t
            }

            #[inline(always)]
            fn from_bound(bound: i64) -> Self {
                bound as $t
            }
        }
    };
}

macro_rules! impl_bounded_scalar_float {
    ($t:ty) => {
        impl BoundedScalar for $t {
            type Wide = $t;

            const LOWEST_BOUND: i128 = i64::MIN as i128;
            const HIGHEST_BOUND: i128 = i64::MAX as i128;

            #[inline(always)]
            fn widen(self) -> $t {
                self
            }

            #[inline(always)]
            fn narrow(wide: $t) -> Self {
                wide
            }

            #[inline(always)]
            fn from_bound(bound: i64) -> Self {
                bound as $t
            }
        }
    };
}

impl_bounded_scalar_integer!(i8);
impl_bounded_scalar_integer!(i16);
impl_bounded_scalar_integer!(i32);
impl_bounded_scalar_integer!(i64);
impl_bounded_scalar_integer!(isize);
impl_bounded_scalar_integer!(u8);
impl_bounded_scalar_integer!(u16);
impl_bounded_scalar_integer!(u32);
impl_bounded_scalar_integer!(u64);
impl_bounded_scalar_integer!(usize);

impl_bounded_scalar_float!(f32);
impl_bounded_scalar_float!(f64);
