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

//! # Bound Enforcement
//!
//! The assignment algorithm shared by every bounded value. A candidate raw
//! value, computed without constraints in the wide working type, is turned
//! into the value that gets stored:
//!
//! - Clamping snaps out-of-range values to the nearest bound.
//! - Wrapping leaves in-range values untouched and maps everything else to
//!   `min + mod(raw - min, length)`, where `length` is `max - min`, plus one
//!   for discrete types, and `mod` is the sign-correct modulo.
//!
//! Products are the one raw value the wide type cannot always hold;
//! `enforce_product` resolves them without computing the full product.
//!
//! The functions in this module are total: degenerate ranges and
//! non-finite floats all resolve to a value inside `[min, max]`.

use crate::math::interval::ClosedInterval;
use crate::num::constants::Grain;
use crate::num::ops::{
    modulo::{ModuloVal, MulModuloVal},
    product::{CheckedMulVal, SaturatingMulVal},
};
use crate::num::scalar::BoundedScalar;
use num_traits::{Num, ToPrimitive};

/// Restricts `raw` to `[min, max]` by snapping to the nearest bound.
///
/// Values that do not compare (`NaN`) resolve to `min`.
///
/// # Examples
///
/// ```rust
/// # use tether_core::algorithm::clamp;
///
/// assert_eq!(clamp(200, 0, 127), 127);
/// assert_eq!(clamp(-5, 0, 127), 0);
/// assert_eq!(clamp(64, 0, 127), 64);
/// assert_eq!(clamp(f32::NAN, 0.0, 1.0), 0.0);
/// ```
#[inline(always)]
pub fn clamp<W>(raw: W, min: W, max: W) -> W
where
    W: PartialOrd,
{
    debug_assert!(min <= max, "called `clamp` with min greater than max");

    if raw > max {
        max
    } else if raw >= min {
        raw
    } else {
        min
    }
}

/// Returns the period of `[min, max]` under wrapping.
///
/// This is `max - min` for continuous types and the number of points,
/// `max - min + 1`, for discrete ones.
///
/// # Examples
///
/// ```rust
/// # use tether_core::algorithm::period;
///
/// assert_eq!(period(0_i128, 127), 128);
/// assert_eq!(period(0.0_f64, 360.0), 360.0);
/// ```
#[inline(always)]
pub fn period<W>(min: W, max: W) -> W
where
    W: Num + Grain,
{
    max - min + W::GRAIN
}

/// Restricts `raw` to `[min, max]` by modular arithmetic.
///
/// Values already in range, including both bounds, are returned unchanged.
/// A degenerate range (`min == max`) and non-finite input resolve to `min`.
///
/// # Examples
///
/// ```rust
/// # use tether_core::algorithm::wrap;
///
/// // A discrete range [0, 127] holds 128 values.
/// assert_eq!(wrap(200_i128, 0, 127), 72);
/// assert_eq!(wrap(-10_i128, 0, 127), 118);
/// assert_eq!(wrap(127_i128, 0, 127), 127);
///
/// // A continuous range [0, 360] has period 360.
/// assert_eq!(wrap(370.0_f64, 0.0, 360.0), 10.0);
/// assert_eq!(wrap(360.0_f64, 0.0, 360.0), 360.0);
/// ```
#[inline]
pub fn wrap<W>(raw: W, min: W, max: W) -> W
where
    W: Num + Copy + PartialOrd + ModuloVal + Grain,
{
    debug_assert!(min <= max, "called `wrap` with min greater than max");

    if min <= raw && raw <= max {
        return raw;
    }

    let wrapped = min + (raw - min).modulo_val(period(min, max));
    // Float rounding in `min + r` may land one ulp past `max`.
    clamp(wrapped, min, max)
}

/// Enforces `raw` into `range` and narrows the result back to `T`.
///
/// This is the single write path of every bounded value.
///
/// # Examples
///
/// ```rust
/// # use tether_core::algorithm::enforce;
/// # use tether_core::math::interval::ClosedInterval;
///
/// let range = ClosedInterval::new(0_u8, 127);
///
/// assert_eq!(enforce(200, range, false), 127_u8);
/// assert_eq!(enforce(200, range, true), 72_u8);
/// assert_eq!(enforce(-1, range, true), 127_u8); // 0_u8 decremented
/// ```
#[inline]
pub fn enforce<T>(raw: T::Wide, range: ClosedInterval<T>, wrapping: bool) -> T
where
    T: BoundedScalar,
{
    let min = range.min().widen();
    let max = range.max().widen();

    let stored = if wrapping {
        wrap(raw, min, max)
    } else {
        clamp(raw, min, max)
    };
    T::narrow(stored)
}

/// Enforces the product `lhs * rhs` into `range` and narrows the result
/// back to `T`.
///
/// Products of 64-bit operands may not fit the wide working type. Clamping
/// then uses the saturated product, which lies past the same bound as the
/// exact one. Wrapping uses the product reduced modulo the period of the
/// range, which wraps to the same value.
///
/// # Examples
///
/// ```rust
/// # use tether_core::algorithm::enforce_product;
/// # use tether_core::math::interval::ClosedInterval;
///
/// let full = ClosedInterval::new(0, u64::MAX);
/// let big = u64::MAX as i128;
///
/// assert_eq!(enforce_product(big, big, full, false), u64::MAX);
/// assert_eq!(enforce_product(big, big, full, true), 1_u64);
/// assert_eq!(enforce_product(3, 4, ClosedInterval::new(0_u8, 9), true), 2_u8);
/// ```
#[inline]
pub fn enforce_product<T>(
    lhs: T::Wide,
    rhs: T::Wide,
    range: ClosedInterval<T>,
    wrapping: bool,
) -> T
where
    T: BoundedScalar,
{
    let raw = match lhs.checked_mul_val(rhs) {
        Some(product) => product,
        None if wrapping => lhs.mul_modulo_val(rhs, range.wrap_length()),
        None => lhs.saturating_mul_val(rhs),
    };
    enforce(raw, range, wrapping)
}

/// Returns the position of `value` within `range` on a `[0, 1]` scale.
///
/// A degenerate range has no extent to measure against and yields `0.0`.
///
/// # Examples
///
/// ```rust
/// # use tether_core::algorithm::normalize;
/// # use tether_core::math::interval::ClosedInterval;
///
/// assert_eq!(normalize(64_i32, ClosedInterval::new(0, 128)), 0.5);
/// assert_eq!(normalize(-1.0_f32, ClosedInterval::new(-1.0, 1.0)), 0.0);
/// assert_eq!(normalize(5_u8, ClosedInterval::new(5, 5)), 0.0);
/// ```
#[inline]
pub fn normalize<T>(value: T, range: ClosedInterval<T>) -> f32
where
    T: BoundedScalar,
{
    if range.is_degenerate() {
        return 0.0;
    }

    let offset = value.widen() - range.min().widen();
    match (offset.to_f64(), range.span().to_f64()) {
        (Some(offset), Some(span)) => (offset / span) as f32,
        _ => 0.0,
    }
}
