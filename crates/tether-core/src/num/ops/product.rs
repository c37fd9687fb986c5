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

//! Multiplication by value for the wide working types.
//!
//! Integer products are checked or saturated at the bounds of the type.
//! Float products never overflow: out-of-range results become infinities,
//! which bound enforcement resolves on its own.

use core::ops::Mul;

/// Checked multiplication by value (no references).
///
/// # Examples
///
/// ```rust
/// # use tether_core::num::ops::product::CheckedMulVal;
///
/// assert_eq!(16_i128.checked_mul_val(4), Some(64));
/// assert_eq!(i128::MAX.checked_mul_val(2), None);
/// assert_eq!(f64::MAX.checked_mul_val(2.0), Some(f64::INFINITY));
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Returns the product, or `None` if it does not fit in `Self`.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

/// Saturating multiplication by value (no references).
///
/// # Examples
///
/// ```rust
/// # use tether_core::num::ops::product::SaturatingMulVal;
///
/// let big = u64::MAX as i128;
/// assert_eq!(big.saturating_mul_val(big), i128::MAX);
/// assert_eq!(big.saturating_mul_val(-big), i128::MIN);
/// ```
pub trait SaturatingMulVal: Sized + Mul<Self, Output = Self> {
    /// Returns the product, clamped to the numeric bounds of `Self`.
    fn saturating_mul_val(self, v: Self) -> Self;
}

macro_rules! mul_impl_integer {
    ($t:ty) => {
        impl CheckedMulVal for $t {
            #[inline(always)]
            fn checked_mul_val(self, v: Self) -> Option<Self> {
                <$t>::checked_mul(self, v)
            }
        }

        impl SaturatingMulVal for $t {
            #[inline(always)]
            fn saturating_mul_val(self, v: Self) -> Self {
                <$t>::saturating_mul(self, v)
            }
        }
    };
}

macro_rules! mul_impl_float {
    ($t:ty) => {
        impl CheckedMulVal for $t {
            #[inline(always)]
            fn checked_mul_val(self, v: Self) -> Option<Self> {
                Some(self * v)
            }
        }

        impl SaturatingMulVal for $t {
            #[inline(always)]
            fn saturating_mul_val(self, v: Self) -> Self {
                self * v
            }
        }
    };
}

mul_impl_integer!(i8);
mul_impl_integer!(i16);
mul_impl_integer!(i32);
mul_impl_integer!(i64);
mul_impl_integer!(i128);
mul_impl_integer!(isize);
mul_impl_integer!(u8);
mul_impl_integer!(u16);
mul_impl_integer!(u32);
mul_impl_integer!(u64);
mul_impl_integer!(u128);
mul_impl_integer!(usize);

mul_impl_float!(f32);
mul_impl_float!(f64);
