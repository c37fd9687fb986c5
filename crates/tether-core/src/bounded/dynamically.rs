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

use crate::algorithm::{enforce, enforce_product, normalize};
use crate::bounded::error::BoundsError;
use crate::math::interval::ClosedInterval;
use crate::num::scalar::BoundedScalar;
use num_traits::One;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// A numeric value held within bounds chosen at runtime.
///
/// The bounds are stored next to the value and may be moved after
/// construction, as long as `min <= max` keeps holding. `WRAP` selects
/// between clamping (the default) and wrapping on assignment.
///
/// Whenever a bound moves, the stored value is enforced into the new range
/// right away, so `min <= value <= max` holds at every point in the value's
/// life, not only after the next assignment.
///
/// Two values compare equal only if their stored values and both bounds
/// match.
///
/// # Examples
///
/// ```rust
/// # use tether_core::bounded::dynamically::DynamicallyBounded;
///
/// let mut cutoff = DynamicallyBounded::<f32>::new(8000.0, 20.0, 20000.0);
/// cutoff *= 4.0;
/// assert_eq!(cutoff.get(), 20000.0);
///
/// cutoff.set_max(12000.0);
/// assert_eq!(cutoff.get(), 12000.0);
///
/// cutoff.set_min(15000.0); // Would exceed max, ignored
/// assert_eq!(cutoff.min(), 20.0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DynamicallyBounded<T, const WRAP: bool = false>
where
    T: BoundedScalar,
{
    value: T,
    range: ClosedInterval<T>,
}

impl<T, const WRAP: bool> DynamicallyBounded<T, WRAP>
where
    T: BoundedScalar,
{
    /// Creates a new bounded value in `[min, max]`.
    ///
    /// If `min > max`, `max` is raised to `min`. `value` is then clamped or
    /// wrapped into the resulting range.
    ///
    /// # Panics
    ///
    /// Panics if `min` is `NaN`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_core::bounded::dynamically::DynamicallyBounded;
    ///
    /// let v = DynamicallyBounded::<i32>::new(5, 10, 0);
    /// assert_eq!((v.min(), v.max()), (10, 10));
    /// assert_eq!(v.get(), 10);
    /// ```
    #[inline]
    pub fn new(value: T, min: T, max: T) -> Self {
        Self::with_range(value, Self::raised_range(min, max))
    }

    /// Creates a new bounded value in `range`, clamping or wrapping `value`.
    #[inline]
    pub fn with_range(value: T, range: ClosedInterval<T>) -> Self {
        Self {
            value: enforce(value.widen(), range, WRAP),
            range,
        }
    }

    /// Creates a new bounded value without correcting any input.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::InvertedRange`] if `min > max` or a bound is
    /// `NaN`, and [`BoundsError::OutOfRange`] if `value` is outside
    /// `[min, max]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_core::bounded::{dynamically::DynamicallyBounded, error::BoundsError};
    ///
    /// assert!(DynamicallyBounded::<i32>::try_new(5, 0, 10).is_ok());
    /// assert_eq!(
    ///     DynamicallyBounded::<i32>::try_new(5, 10, 0),
    ///     Err(BoundsError::InvertedRange)
    /// );
    /// assert_eq!(
    ///     DynamicallyBounded::<i32>::try_new(11, 0, 10),
    ///     Err(BoundsError::OutOfRange)
    /// );
    /// ```
    #[inline]
    pub fn try_new(value: T, min: T, max: T) -> Result<Self, BoundsError> {
        let range = ClosedInterval::try_new(min, max).ok_or(BoundsError::InvertedRange)?;
        if range.contains(value) {
            Ok(Self { value, range })
        } else {
            Err(BoundsError::OutOfRange)
        }
    }

    /// Returns `true` if assignments wrap instead of clamp.
    #[inline]
    pub const fn is_wrapping() -> bool {
        WRAP
    }

    /// Returns the stored value.
    #[inline]
    pub const fn get(&self) -> T {
        self.value
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub const fn min(&self) -> T {
        self.range.min()
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub const fn max(&self) -> T {
        self.range.max()
    }

    /// Returns the active range.
    #[inline]
    pub const fn range(&self) -> ClosedInterval<T> {
        self.range
    }

    /// Assigns `value`, clamping or wrapping it into range.
    #[inline]
    pub fn set(&mut self, value: T) {
        self.assign_raw(value.widen());
    }

    /// Assigns `value` only if it already lies within range.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::OutOfRange`] and leaves the stored value
    /// untouched if `value` is outside `[min, max]`.
    #[inline]
    pub fn try_set(&mut self, value: T) -> Result<(), BoundsError> {
        if self.range.contains(value) {
            self.value = value;
            Ok(())
        } else {
            Err(BoundsError::OutOfRange)
        }
    }

    /// Moves the lower bound to `new_min`.
    ///
    /// Ignored if `new_min > max` (or `NaN`). Otherwise the stored value is
    /// enforced into the new range immediately.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_core::bounded::dynamically::DynamicallyBounded;
    ///
    /// let mut v = DynamicallyBounded::<i32>::new(2, 0, 10);
    /// v.set_min(15);
    /// assert_eq!((v.min(), v.max()), (0, 10));
    ///
    /// v.set_min(4);
    /// assert_eq!(v.get(), 4);
    /// ```
    #[inline]
    pub fn set_min(&mut self, new_min: T) {
        if self.try_set_min(new_min).is_err() {
            tracing::trace!(
                ?new_min,
                max = ?self.range.max(),
                "ignoring lower bound above upper bound"
            );
        }
    }

    /// Moves the upper bound to `new_max`.
    ///
    /// Ignored if `new_max < min` (or `NaN`). Otherwise the stored value is
    /// enforced into the new range immediately.
    #[inline]
    pub fn set_max(&mut self, new_max: T) {
        if self.try_set_max(new_max).is_err() {
            tracing::trace!(
                ?new_max,
                min = ?self.range.min(),
                "ignoring upper bound below lower bound"
            );
        }
    }

    /// Moves the lower bound to `new_min`, reporting a refused move.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::InvertedRange`] and leaves the value untouched
    /// if `new_min > max` or `new_min` is `NaN`.
    #[inline]
    pub fn try_set_min(&mut self, new_min: T) -> Result<(), BoundsError> {
        if self.range.set_min(new_min) {
            self.reenforce();
            Ok(())
        } else {
            Err(BoundsError::InvertedRange)
        }
    }

    /// Moves the upper bound to `new_max`, reporting a refused move.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::InvertedRange`] and leaves the value untouched
    /// if `new_max < min` or `new_max` is `NaN`.
    #[inline]
    pub fn try_set_max(&mut self, new_max: T) -> Result<(), BoundsError> {
        if self.range.set_max(new_max) {
            self.reenforce();
            Ok(())
        } else {
            Err(BoundsError::InvertedRange)
        }
    }

    /// Replaces both bounds at once.
    ///
    /// Follows the construction policy: if `min > max`, `max` is raised to
    /// `min`. The stored value is enforced into the new range immediately.
    ///
    /// # Panics
    ///
    /// Panics if `min` is `NaN`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_core::bounded::dynamically::DynamicallyBounded;
    ///
    /// let mut v = DynamicallyBounded::<i32>::new(5, 0, 10);
    /// v.set_range(20, 30); // Not reachable through `set_min` alone
    /// assert_eq!((v.min(), v.max(), v.get()), (20, 30, 20));
    /// ```
    #[inline]
    pub fn set_range(&mut self, min: T, max: T) {
        self.range = Self::raised_range(min, max);
        self.reenforce();
    }

    /// Returns the position of the value within `[min, max]` on a `[0, 1]` scale.
    ///
    /// A degenerate range (`min == max`) yields `0.0`.
    #[inline]
    pub fn normalize(&self) -> f32 {
        normalize(self.value, self.range)
    }

    /// Adds one and returns the updated value.
    #[inline]
    pub fn increment(&mut self) -> Self {
        self.assign_raw(self.value.widen() + T::Wide::one());
        *self
    }

    /// Adds one and returns the value held before the update.
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.assign_raw(self.value.widen() + T::Wide::one());
        previous
    }

    /// Subtracts one and returns the updated value.
    #[inline]
    pub fn decrement(&mut self) -> Self {
        self.assign_raw(self.value.widen() - T::Wide::one());
        *self
    }

    /// Subtracts one and returns the value held before the update.
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.assign_raw(self.value.widen() - T::Wide::one());
        previous
    }

    fn raised_range(min: T, max: T) -> ClosedInterval<T> {
        match ClosedInterval::try_new(min, max) {
            Some(range) => range,
            None => {
                tracing::trace!(?min, ?max, "inverted bounds, raising max to min");
                ClosedInterval::new_raising(min, max)
            }
        }
    }

    #[inline(always)]
    fn reenforce(&mut self) {
        self.assign_raw(self.value.widen());
    }

    #[inline(always)]
    fn assign_raw(&mut self, raw: T::Wide) {
        self.value = enforce(raw, self.range, WRAP);
    }
}

impl<T, const WRAP: bool> AddAssign<T> for DynamicallyBounded<T, WRAP>
where
    T: BoundedScalar,
{
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        self.assign_raw(self.value.widen() + rhs.widen());
    }
}

impl<T, const WRAP: bool> SubAssign<T> for DynamicallyBounded<T, WRAP>
where
    T: BoundedScalar,
{
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        self.assign_raw(self.value.widen() - rhs.widen());
    }
}

impl<T, const WRAP: bool> MulAssign<T> for DynamicallyBounded<T, WRAP>
where
    T: BoundedScalar,
{
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.value = enforce_product(self.value.widen(), rhs.widen(), self.range, WRAP);
    }
}

impl<T, const WRAP: bool> DivAssign<T> for DynamicallyBounded<T, WRAP>
where
    T: BoundedScalar,
{
    /// # Panics
    ///
    /// Panics on integer division by zero, like the primitive does.
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.assign_raw(self.value.widen() / rhs.widen());
    }
}

impl<T, const WRAP: bool> std::fmt::Debug for DynamicallyBounded<T, WRAP>
where
    T: BoundedScalar,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicallyBounded")
            .field("value", &self.value)
            .field("min", &self.range.min())
            .field("max", &self.range.max())
            .field("wrap", &WRAP)
            .finish()
    }
}

impl<T, const WRAP: bool> std::fmt::Display for DynamicallyBounded<T, WRAP>
where
    T: BoundedScalar,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.value, f)
    }
}
