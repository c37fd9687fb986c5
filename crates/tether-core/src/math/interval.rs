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

use crate::algorithm::period;
use crate::num::scalar::BoundedScalar;

/// A closed interval `[min, max]` with both ends inclusive.
///
/// This is the range a bounded value is held in. Unlike a half-open range it
/// can express a single point (`min == max`) and the full range of a
/// primitive, and its length depends on the type: a discrete interval
/// `[0, 127]` holds `128` points while a continuous one measures `127`.
///
/// # Invariants
/// `min` must always be less than or equal to `max`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClosedInterval<T>
where
    T: BoundedScalar,
{
    min: T,
    max: T,
}

impl<T> ClosedInterval<T>
where
    T: BoundedScalar,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` or if either bound is `NaN`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0, 127);
    /// assert_eq!(iv.min(), 0);
    /// assert_eq!(iv.max(), 127);
    /// ```
    #[inline]
    pub fn new(min: T, max: T) -> Self {
        assert!(
            min <= max,
            "Invalid interval: min must be less than or equal to max"
        );
        Self { min, max }
    }

    /// Creates a new `ClosedInterval` if the inputs are valid.
    ///
    /// Returns `None` if `min > max` or if either bound is `NaN`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_core::math::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::try_new(0, 10).is_some());
    /// assert!(ClosedInterval::try_new(10, 10).is_some());
    /// assert!(ClosedInterval::try_new(10, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(min: T, max: T) -> Option<Self> {
        if min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Creates a new `ClosedInterval`, raising `max` to `min` if the bounds
    /// are inverted.
    ///
    /// An inverted request thereby collapses to the single point `min`.
    ///
    /// # Panics
    ///
    /// Panics if `min` is `NaN`, as no ordered interval can start there.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_core::math::interval::ClosedInterval;
    ///
    /// assert_eq!(ClosedInterval::new_raising(0, 10), ClosedInterval::new(0, 10));
    /// assert_eq!(ClosedInterval::new_raising(10, 0), ClosedInterval::new(10, 10));
    /// ```
    #[inline]
    pub fn new_raising(min: T, max: T) -> Self {
        assert!(
            min.partial_cmp(&min).is_some(),
            "Invalid interval: min must be comparable"
        );
        if min <= max {
            Self { min, max }
        } else {
            Self { min, max: min }
        }
    }

    /// Creates a new `ClosedInterval` without checking invariants in release builds.
    ///
    /// The caller must ensure `min <= max`.
    /// This function contains a `debug_assert!` to catch errors during development.
    #[inline]
    pub fn new_unchecked(min: T, max: T) -> Self {
        debug_assert!(
            min <= max,
            "Invalid interval: min must be less than or equal to max"
        );
        Self { min, max }
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub const fn min(&self) -> T {
        self.min
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub const fn max(&self) -> T {
        self.max
    }

    /// Moves the lower bound to `new_min` if that keeps `min <= max`.
    ///
    /// Returns `true` if the bound was updated. Otherwise the interval is
    /// left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_core::math::interval::ClosedInterval;
    ///
    /// let mut iv = ClosedInterval::new(0, 10);
    /// assert!(iv.set_min(10));
    /// assert!(!iv.set_min(15));
    /// assert_eq!(iv, ClosedInterval::new(10, 10));
    /// ```
    #[inline]
    pub fn set_min(&mut self, new_min: T) -> bool {
        if new_min <= self.max {
            self.min = new_min;
            true
        } else {
            false
        }
    }

    /// Moves the upper bound to `new_max` if that keeps `min <= max`.
    ///
    /// Returns `true` if the bound was updated.
    #[inline]
    pub fn set_max(&mut self, new_max: T) -> bool {
        if self.min <= new_max {
            self.max = new_max;
            true
        } else {
            false
        }
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0.0, 1.0);
    /// assert!(iv.contains(0.0));
    /// assert!(iv.contains(1.0));
    /// assert!(!iv.contains(1.5));
    /// assert!(!iv.contains(f64::NAN));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns `true` if the interval holds a single point (`min == max`).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Returns `max - min` in the wide working type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_core::math::interval::ClosedInterval;
    ///
    /// assert_eq!(ClosedInterval::new(-128_i8, 127).span(), 255_i128);
    /// ```
    #[inline]
    pub fn span(&self) -> T::Wide {
        self.max.widen() - self.min.widen()
    }

    /// Returns the period used when wrapping into the interval.
    ///
    /// This is the span for continuous types and the number of points
    /// (`span + 1`) for discrete ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_core::math::interval::ClosedInterval;
    ///
    /// assert_eq!(ClosedInterval::new(0_u8, 127).wrap_length(), 128);
    /// assert_eq!(ClosedInterval::new(0.0_f32, 360.0).wrap_length(), 360.0);
    /// ```
    #[inline]
    pub fn wrap_length(&self) -> T::Wide {
        period(self.min.widen(), self.max.widen())
    }
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: BoundedScalar,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosedInterval")
            .field("min", &self.min)
            .field("max", &self.max)
            .finish()
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: BoundedScalar,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

impl<T> std::ops::RangeBounds<T> for ClosedInterval<T>
where
    T: BoundedScalar,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.min)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.max)
    }
}

impl<T> From<std::ops::RangeInclusive<T>> for ClosedInterval<T>
where
    T: BoundedScalar,
{
    #[inline]
    fn from(range: std::ops::RangeInclusive<T>) -> Self {
        let (min, max) = range.into_inner();
        Self::new(min, max)
    }
}

impl<T> From<ClosedInterval<T>> for std::ops::RangeInclusive<T>
where
    T: BoundedScalar,
{
    #[inline]
    fn from(iv: ClosedInterval<T>) -> Self {
        iv.min..=iv.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::{Bound, RangeBounds};

    #[test]
    fn test_construction_valid() {
        let iv = ClosedInterval::new(10, 20);
        assert_eq!(iv.min(), 10);
        assert_eq!(iv.max(), 20);
        assert_eq!(iv.span(), 10i128);
        assert!(!iv.is_degenerate());
    }

    #[test]
    fn test_construction_degenerate() {
        let iv = ClosedInterval::new(10, 10);
        assert_eq!(iv.span(), 0i128);
        assert_eq!(iv.wrap_length(), 1i128);
        assert!(iv.is_degenerate());

        let fv = ClosedInterval::new(0.5, 0.5);
        assert_eq!(fv.wrap_length(), 0.0);
    }

    #[test]
    fn test_try_new() {
        assert!(ClosedInterval::try_new(5, 10).is_some());
        assert!(ClosedInterval::try_new(5, 5).is_some());
        // Invalid: min > max
        assert!(ClosedInterval::try_new(10, 5).is_none());
        assert!(ClosedInterval::try_new(f32::NAN, 1.0).is_none());
        assert!(ClosedInterval::try_new(0.0, f32::NAN).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_new_panic() {
        ClosedInterval::new(10, 5);
    }

    #[test]
    fn test_new_raising() {
        let iv = ClosedInterval::new_raising(10, 0);
        assert_eq!(iv.min(), 10);
        assert_eq!(iv.max(), 10);

        // A NaN upper bound is not an inversion we can keep
        let fv = ClosedInterval::new_raising(1.0, f64::NAN);
        assert_eq!(fv.min(), 1.0);
        assert_eq!(fv.max(), 1.0);
    }

    #[test]
    #[should_panic(expected = "Invalid interval: min must be comparable")]
    fn test_new_raising_nan_min_panics() {
        ClosedInterval::new_raising(f32::NAN, 1.0);
    }

    #[test]
    fn test_set_min_respects_invariant() {
        let mut iv = ClosedInterval::new(0, 10);
        assert!(!iv.set_min(15));
        assert_eq!(iv, ClosedInterval::new(0, 10));
        assert!(iv.set_min(-5));
        assert_eq!(iv.min(), -5);
        assert!(iv.set_min(10));
        assert!(iv.is_degenerate());
    }

    #[test]
    fn test_set_max_respects_invariant() {
        let mut iv = ClosedInterval::new(0, 10);
        assert!(!iv.set_max(-1));
        assert_eq!(iv.max(), 10);
        assert!(iv.set_max(0));
        assert_eq!(iv.max(), 0);
    }

    #[test]
    fn test_set_bounds_reject_nan() {
        let mut iv = ClosedInterval::new(0.0, 1.0);
        assert!(!iv.set_min(f64::NAN));
        assert!(!iv.set_max(f64::NAN));
        assert_eq!(iv, ClosedInterval::new(0.0, 1.0));
    }

    #[test]
    fn test_contains() {
        let iv = ClosedInterval::new(0_u8, 127);
        assert!(iv.contains(0));
        assert!(iv.contains(127));
        assert!(!iv.contains(128));
    }

    #[test]
    fn test_wrap_length_full_range() {
        assert_eq!(ClosedInterval::new(u8::MIN, u8::MAX).wrap_length(), 256);
        assert_eq!(
            ClosedInterval::new(i64::MIN, i64::MAX).wrap_length(),
            1_i128 << 64
        );
    }

    #[test]
    fn test_display_and_debug() {
        let iv = ClosedInterval::new(0, 127);
        assert_eq!(format!("{}", iv), "[0, 127]");
        assert_eq!(
            format!("{:?}", iv),
            "ClosedInterval { min: 0, max: 127 }"
        );
    }

    #[test]
    fn test_range_bounds() {
        let iv = ClosedInterval::new(1, 4);
        assert_eq!(iv.start_bound(), Bound::Included(&1));
        assert_eq!(iv.end_bound(), Bound::Included(&4));
    }

    #[test]
    fn test_range_inclusive_conversions() {
        let iv: ClosedInterval<i32> = (3..=7).into();
        assert_eq!(iv, ClosedInterval::new(3, 7));
        let r: std::ops::RangeInclusive<i32> = iv.into();
        assert_eq!(r, 3..=7);
    }
}
