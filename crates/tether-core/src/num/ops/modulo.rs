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

use core::ops::Rem;

/// Sign-correct modulo by value (no references).
///
/// Unlike the `%` operator, which truncates towards zero and therefore keeps
/// the sign of the dividend, the result always lies in `[0, length)` for any
/// `length > 0`, regardless of the sign of `self`.
///
/// A zero, negative or `NaN` length has no valid result; this method then
/// returns zero. Use [`CheckedModuloVal`] to observe that case instead.
///
/// # Examples
///
/// ```rust
/// # use tether_core::num::ops::modulo::ModuloVal;
///
/// assert_eq!((-10_i32) % 128, -10); // Truncating remainder
/// assert_eq!((-10_i32).modulo_val(128), 118);
/// assert_eq!(200_i32.modulo_val(128), 72);
/// assert_eq!((-0.25_f32).modulo_val(1.0), 0.75);
///
/// assert_eq!(7_i32.modulo_val(0), 0); // Degenerate length
/// ```
pub trait ModuloVal: Sized + Rem<Self, Output = Self> {
    /// Returns `self` reduced into `[0, length)`, or zero for a degenerate `length`.
    fn modulo_val(self, length: Self) -> Self;
}

/// Checked sign-correct modulo by value (no references).
///
/// # Examples
///
/// ```rust
/// # use tether_core::num::ops::modulo::CheckedModuloVal;
///
/// assert_eq!((-1_i8).checked_modulo_val(4), Some(3));
/// assert_eq!(5_u16.checked_modulo_val(0), None);
/// assert_eq!(1.5_f64.checked_modulo_val(-1.0), None);
/// ```
pub trait CheckedModuloVal: Sized + Rem<Self, Output = Self> {
    /// Returns `self` reduced into `[0, length)`, or `None` unless `length > 0`.
    fn checked_modulo_val(self, length: Self) -> Option<Self>;
}

macro_rules! modulo_impl_val {
    ($t:ty, $zero:expr) => {
        impl ModuloVal for $t {
            #[inline(always)]
            fn modulo_val(self, length: Self) -> Self {
                self.checked_modulo_val(length).unwrap_or($zero)
            }
        }
    };
}

macro_rules! checked_modulo_impl_signed {
    ($t:ty) => {
        impl CheckedModuloVal for $t {
            #[inline(always)]
            fn checked_modulo_val(self, length: Self) -> Option<Self> {
                if length <= 0 {
                    return None;
                }
                // `length > 0` rules out the `MIN % -1` overflow.
                let r = self % length;
                Some(if r < 0 { r + length } else { r })
            }
        }
        modulo_impl_val!($t, 0);
    };
}

macro_rules! checked_modulo_impl_unsigned {
    ($t:ty) => {
        impl CheckedModuloVal for $t {
            #[inline(always)]
            fn checked_modulo_val(self, length: Self) -> Option<Self> {
                if length == 0 {
                    return None;
                }
                Some(self % length)
            }
        }
        modulo_impl_val!($t, 0);
    };
}

macro_rules! checked_modulo_impl_float {
    ($t:ty) => {
        impl CheckedModuloVal for $t {
            #[inline(always)]
            fn checked_modulo_val(self, length: Self) -> Option<Self> {
                if length.is_nan() || length <= 0.0 {
                    return None;
                }
                let r = self % length;
                let r = if r < 0.0 { r + length } else { r };
                // `r + length` may round up to `length`; a non-finite dividend yields NaN.
                Some(if (0.0..length).contains(&r) { r } else { 0.0 })
            }
        }
        modulo_impl_val!($t, 0.0);
    };
}

checked_modulo_impl_signed!(i8);
checked_modulo_impl_signed!(i16);
checked_modulo_impl_signed!(i32);
checked_modulo_impl_signed!(i64);
checked_modulo_impl_signed!(i128);
checked_modulo_impl_signed!(isize);

checked_modulo_impl_unsigned!(u8);
checked_modulo_impl_unsigned!(u16);
checked_modulo_impl_unsigned!(u32);
checked_modulo_impl_unsigned!(u64);
checked_modulo_impl_unsigned!(u128);
checked_modulo_impl_unsigned!(usize);

checked_modulo_impl_float!(f32);
checked_modulo_impl_float!(f64);

/// Sign-correct modular multiplication by value (no references).
///
/// Returns `self * v` reduced into `[0, length)` without computing the full
/// product, so it stays exact when the product itself would overflow. A zero,
/// negative or `NaN` length yields zero, as with [`ModuloVal`].
///
/// # Examples
///
/// ```rust
/// # use tether_core::num::ops::modulo::MulModuloVal;
///
/// let big = u64::MAX as i128;
/// assert_eq!(big.mul_modulo_val(big, 1 << 64), 1);
/// assert_eq!((-3_i32).mul_modulo_val(5, 7), 6); // -15 = -3 * 7 + 6
/// assert_eq!(7_u8.mul_modulo_val(3, 0), 0);
/// ```
pub trait MulModuloVal: Sized {
    /// Returns `self * v` reduced into `[0, length)`, or zero for a degenerate `length`.
    fn mul_modulo_val(self, v: Self, length: Self) -> Self;
}

macro_rules! mul_modulo_impl_unsigned {
    ($t:ty) => {
        impl MulModuloVal for $t {
            fn mul_modulo_val(self, v: Self, length: Self) -> Self {
                if length == 0 {
                    return 0;
                }
                let (mut a, mut b) = (self % length, v % length);
                if let Some(product) = a.checked_mul(b) {
                    return product % length;
                }

                // Double-and-add keeps every partial sum below `length`.
                let add = |x: $t, y: $t| if x >= length - y { x - (length - y) } else { x + y };
                let mut acc = 0;
                while b > 0 {
                    if b & 1 == 1 {
                        acc = add(acc, a);
                    }
                    a = add(a, a);
                    b >>= 1;
                }
                acc
            }
        }
    };
}

macro_rules! mul_modulo_impl_signed {
    ($t:ty, $u:ty) => {
        impl MulModuloVal for $t {
            #[inline]
            fn mul_modulo_val(self, v: Self, length: Self) -> Self {
                if length <= 0 {
                    return 0;
                }
                let a = self.modulo_val(length) as $u;
                let b = v.modulo_val(length) as $u;
                // The result lies in `[0, length)` and fits back into `$t`.
                a.mul_modulo_val(b, length as $u) as $t
            }
        }
    };
}

macro_rules! mul_modulo_impl_float {
    ($t:ty) => {
        impl MulModuloVal for $t {
            #[inline(always)]
            fn mul_modulo_val(self, v: Self, length: Self) -> Self {
                (self * v).modulo_val(length)
            }
        }
    };
}

mul_modulo_impl_unsigned!(u8);
mul_modulo_impl_unsigned!(u16);
mul_modulo_impl_unsigned!(u32);
mul_modulo_impl_unsigned!(u64);
mul_modulo_impl_unsigned!(u128);
mul_modulo_impl_unsigned!(usize);

mul_modulo_impl_signed!(i8, u8);
mul_modulo_impl_signed!(i16, u16);
mul_modulo_impl_signed!(i32, u32);
mul_modulo_impl_signed!(i64, u64);
mul_modulo_impl_signed!(i128, u128);
mul_modulo_impl_signed!(isize, usize);

mul_modulo_impl_float!(f32);
mul_modulo_impl_float!(f64);
