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

/// A numeric value held within bounds fixed by its type.
///
/// `MIN` and `MAX` are inclusive and `WRAP` selects between clamping
/// (the default) and wrapping on assignment. The bounds live in the type
/// only, so the value is exactly as large as `T`, and two values of the same
/// type compare by their stored value alone.
///
/// Bounds are integral because const generics cannot be floats; a float
/// parameter uses integral end points, or a [`DynamicallyBounded`] when it
/// needs fractional ones. The bounds are checked at compile time: `MIN` must
/// not exceed `MAX` and both must be representable in `T`.
///
/// There is no `Default`. Every value starts from an explicit initial value,
/// which is clamped or wrapped like any later assignment.
///
/// [`DynamicallyBounded`]: crate::bounded::dynamically::DynamicallyBounded
///
/// # Examples
///
/// ```rust
/// # use tether_core::bounded::statically::StaticallyBounded;
///
/// type Velocity = StaticallyBounded<i32, 0, 127>;
/// type Step = StaticallyBounded<i32, 0, 127, true>;
///
/// let mut velocity = Velocity::new(200);
/// assert_eq!(velocity.get(), 127);
/// velocity -= 27;
/// assert_eq!(velocity.get(), 100);
///
/// let mut step = Step::new(200);
/// assert_eq!(step.get(), 72);
/// step.set(-10);
/// assert_eq!(step.get(), 118);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StaticallyBounded<T, const MIN: i64, const MAX: i64, const WRAP: bool = false>
where
    T: BoundedScalar,
{
    value: T,
}

/// A statically bounded value that clamps on assignment.
pub type Clamped<T, const MIN: i64, const MAX: i64> = StaticallyBounded<T, MIN, MAX, false>;

/// A statically bounded value that wraps on assignment.
pub type Wrapped<T, const MIN: i64, const MAX: i64> = StaticallyBounded<T, MIN, MAX, true>;

impl<T, const MIN: i64, const MAX: i64, const WRAP: bool> StaticallyBounded<T, MIN, MAX, WRAP>
where
    T: BoundedScalar,
{
    /// The inclusive lower bound as declared on the type.
    pub const MIN_BOUND: i64 = MIN;

    /// The inclusive upper bound as declared on the type.
    pub const MAX_BOUND: i64 = MAX;

    const VALID_BOUNDS: () = assert!(
        MIN <= MAX && T::LOWEST_BOUND <= MIN as i128 && MAX as i128 <= T::HIGHEST_BOUND,
        "invalid static bounds: MIN must not exceed MAX and both must be representable in T"
    );

    /// Creates a new bounded value, clamping or wrapping `value` into range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_core::bounded::statically::{Clamped, Wrapped};
    ///
    /// assert_eq!(Clamped::<u8, 0, 127>::new(200).get(), 127);
    /// assert_eq!(Wrapped::<u8, 0, 127>::new(200).get(), 72);
    /// ```
    #[inline]
    pub fn new(value: T) -> Self {
        let () = Self::VALID_BOUNDS;
        Self {
            value: enforce(value.widen(), Self::range(), WRAP),
        }
    }

    /// Creates a new bounded value if `value` already lies within range.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::OutOfRange`] if `value` is outside `[MIN, MAX]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_core::bounded::{error::BoundsError, statically::Clamped};
    ///
    /// assert!(Clamped::<i32, 0, 10>::try_new(10).is_ok());
    /// assert_eq!(Clamped::<i32, 0, 10>::try_new(11), Err(BoundsError::OutOfRange));
    /// ```
    #[inline]
    pub fn try_new(value: T) -> Result<Self, BoundsError> {
        let () = Self::VALID_BOUNDS;
        if Self::range().contains(value) {
            Ok(Self { value })
        } else {
            Err(BoundsError::OutOfRange)
        }
    }

    /// Returns the range `[MIN, MAX]` in `T`.
    #[inline]
    pub fn range() -> ClosedInterval<T> {
        ClosedInterval::new_unchecked(T::from_bound(MIN), T::from_bound(MAX))
    }

    /// Returns `true` if assignments wrap instead of clamp.
    #[inline]
    pub const fn is_wrapping() -> bool {
        WRAP
    }

    /// Returns the inclusive lower bound in `T`.
    #[inline]
    pub fn min(self) -> T {
        T::from_bound(MIN)
    }

    /// Returns the inclusive upper bound in `T`.
    #[inline]
    pub fn max(self) -> T {
        T::from_bound(MAX)
    }

    /// Returns the stored value.
    #[inline]
    pub fn get(self) -> T {
        self.value
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
    /// untouched if `value` is outside `[MIN, MAX]`.
    #[inline]
    pub fn try_set(&mut self, value: T) -> Result<(), BoundsError> {
        if Self::range().contains(value) {
            self.value = value;
            Ok(())
        } else {
            Err(BoundsError::OutOfRange)
        }
    }

    /// Returns the position of the value within `[MIN, MAX]` on a `[0, 1]` scale.
    ///
    /// A type with `MIN == MAX` yields `0.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_core::bounded::statically::Clamped;
    ///
    /// assert_eq!(Clamped::<f32, -1, 1>::new(0.0).normalize(), 0.5);
    /// ```
    #[inline]
    pub fn normalize(self) -> f32 {
        normalize(self.value, Self::range())
    }

    /// Adds one and returns the updated value.
    #[inline]
    pub fn increment(&mut self) -> Self {
        self.assign_raw(self.value.widen() + T::Wide::one());
        *self
    }

    /// Adds one and returns the value held before the update.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_core::bounded::statically::Wrapped;
    ///
    /// let mut step = Wrapped::<u8, 0, 15>::new(15);
    /// assert_eq!(step.post_increment().get(), 15);
    /// assert_eq!(step.get(), 0);
    /// ```
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

    #[inline(always)]
    fn assign_raw(&mut self, raw: T::Wide) {
        self.value = enforce(raw, Self::range(), WRAP);
    }
}

impl<T, const MIN: i64, const MAX: i64, const WRAP: bool> From<T>
    for StaticallyBounded<T, MIN, MAX, WRAP>
where
    T: BoundedScalar,
{
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T, const MIN: i64, const MAX: i64, const WRAP: bool> AddAssign<T>
    for StaticallyBounded<T, MIN, MAX, WRAP>
where
    T: BoundedScalar,
{
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        self.assign_raw(self.value.widen() + rhs.widen());
    }
}

impl<T, const MIN: i64, const MAX: i64, const WRAP: bool> SubAssign<T>
    for StaticallyBounded<T, MIN, MAX, WRAP>
where
    T: BoundedScalar,
{
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        self.assign_raw(self.value.widen() - rhs.widen());
    }
}

impl<T, const MIN: i64, const MAX: i64, const WRAP: bool> MulAssign<T>
    for StaticallyBounded<T, MIN, MAX, WRAP>
where
    T: BoundedScalar,
{
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.value = enforce_product(self.value.widen(), rhs.widen(), Self::range(), WRAP);
    }
}

impl<T, const MIN: i64, const MAX: i64, const WRAP: bool> DivAssign<T>
    for StaticallyBounded<T, MIN, MAX, WRAP>
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

impl<T, const MIN: i64, const MAX: i64, const WRAP: bool> std::fmt::Debug
    for StaticallyBounded<T, MIN, MAX, WRAP>
where
    T: BoundedScalar,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticallyBounded")
            .field("value", &self.value)
            .field("min", &MIN)
            .field("max", &MAX)
            .field("wrap", &WRAP)
            .finish()
    }
}

impl<T, const MIN: i64, const MAX: i64, const WRAP: bool> std::fmt::Display
    for StaticallyBounded<T, MIN, MAX, WRAP>
where
    T: BoundedScalar,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.value, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Midi = StaticallyBounded<i32, 0, 127>;
    type MidiWrap = StaticallyBounded<i32, 0, 127, true>;

    #[test]
    fn test_size_matches_primitive() {
        assert_eq!(size_of::<Midi>(), size_of::<i32>());
        assert_eq!(size_of::<Wrapped<f64, 0, 1>>(), size_of::<f64>());
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(Midi::new(200).get(), 127);
        assert_eq!(Midi::new(-1).get(), 0);
        assert_eq!(Midi::new(64).get(), 64);
    }

    #[test]
    fn test_new_wraps() {
        assert_eq!(MidiWrap::new(200).get(), 72);
        assert_eq!(MidiWrap::new(-10).get(), 118);
        assert_eq!(MidiWrap::new(128).get(), 0);
    }

    #[test]
    fn test_set_in_range_is_identity() {
        let mut v = Midi::new(0);
        v.set(0);
        assert_eq!(v.get(), 0);
        v.set(127);
        assert_eq!(v.get(), 127);

        let mut w = MidiWrap::new(0);
        w.set(127);
        assert_eq!(w.get(), 127);
        w.set(0);
        assert_eq!(w.get(), 0);
    }

    #[test]
    fn test_set_clamps_and_wraps() {
        let mut v = Midi::new(0);
        v.set(200);
        assert_eq!(v.get(), 127);

        let mut w = MidiWrap::new(0);
        w.set(200);
        assert_eq!(w.get(), 72);
        w.set(-10);
        assert_eq!(w.get(), 118);
    }

    #[test]
    fn test_compound_assignment_clamps() {
        let mut v = Midi::new(100);
        v += 50;
        assert_eq!(v.get(), 127);
        v -= 200;
        assert_eq!(v.get(), 0);
        v += 10;
        v *= 3;
        assert_eq!(v.get(), 30);
        v /= 4;
        assert_eq!(v.get(), 7);
        v *= -1;
        assert_eq!(v.get(), 0);
    }

    #[test]
    fn test_compound_assignment_wraps() {
        let mut w = MidiWrap::new(120);
        w += 10;
        assert_eq!(w.get(), 2);
        w -= 5;
        assert_eq!(w.get(), 125);
        w *= 2;
        assert_eq!(w.get(), 122);
    }

    #[test]
    fn test_unsigned_arithmetic_below_zero() {
        let mut v = Clamped::<u8, 0, 255>::new(3);
        v -= 10;
        assert_eq!(v.get(), 0);

        let mut w = Wrapped::<u8, 0, 255>::new(3);
        w -= 10;
        assert_eq!(w.get(), 249);
        w += 10;
        assert_eq!(w.get(), 3);
    }

    #[test]
    fn test_multiply_large_unsigned() {
        let mut v = Clamped::<u64, 0, { i64::MAX }>::new(i64::MAX as u64);
        v *= u64::MAX;
        assert_eq!(v.get(), i64::MAX as u64);

        // The period is 2^63, and both operands are -1 modulo 2^63.
        let mut w = Wrapped::<u64, 0, { i64::MAX }>::new(i64::MAX as u64);
        w *= u64::MAX;
        assert_eq!(w.get(), 1);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut v = Midi::new(126);
        assert_eq!(v.increment().get(), 127);
        assert_eq!(v.increment().get(), 127);
        assert_eq!(v.decrement().get(), 126);

        let mut w = Wrapped::<u8, 0, 3>::new(0);
        assert_eq!(w.decrement().get(), 3);
        assert_eq!(w.increment().get(), 0);
    }

    #[test]
    fn test_postfix_returns_previous_value() {
        let mut w = Wrapped::<u8, 0, 3>::new(3);
        let before = w.post_increment();
        assert_eq!(before.get(), 3);
        assert_eq!(w.get(), 0);

        let before = w.post_decrement();
        assert_eq!(before.get(), 0);
        assert_eq!(w.get(), 3);
    }

    #[test]
    fn test_float_values() {
        let mut gain = Clamped::<f32, 0, 1>::new(0.5);
        gain += 0.75;
        assert_eq!(gain.get(), 1.0);
        gain -= 1.25;
        assert_eq!(gain.get(), 0.0);

        let mut phase = Wrapped::<f64, 0, 1>::new(0.75);
        phase += 0.5;
        assert_eq!(phase.get(), 0.25);
        phase.set(1.0);
        assert_eq!(phase.get(), 1.0);
    }

    #[test]
    fn test_float_nan_lands_on_min() {
        let mut gain = Clamped::<f32, -1, 1>::new(f32::NAN);
        assert_eq!(gain.get(), -1.0);
        gain.set(0.5);
        gain += f32::NAN;
        assert_eq!(gain.get(), -1.0);

        let phase = Wrapped::<f64, 0, 1>::new(f64::INFINITY);
        assert_eq!(phase.get(), 0.0);
    }

    #[test]
    fn test_degenerate_range() {
        let mut v = StaticallyBounded::<i32, 5, 5, true>::new(9);
        assert_eq!(v.get(), 5);
        v += 3;
        assert_eq!(v.get(), 5);
        assert_eq!(v.normalize(), 0.0);

        let f = StaticallyBounded::<f32, 2, 2, true>::new(-3.0);
        assert_eq!(f.get(), 2.0);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_integer_division_by_zero_panics() {
        let mut v = Midi::new(10);
        v /= 0;
    }

    #[test]
    fn test_normalize() {
        assert_eq!(Clamped::<i32, 0, 100>::new(25).normalize(), 0.25);
        assert_eq!(Clamped::<i32, -100, 100>::new(-100).normalize(), 0.0);
        assert_eq!(Clamped::<u16, 0, 1000>::new(1000).normalize(), 1.0);
    }

    #[test]
    fn test_equality_compares_value() {
        assert_eq!(Midi::new(5), Midi::new(5));
        assert_ne!(Midi::new(5), Midi::new(6));
        assert_eq!(Midi::new(300), Midi::new(127));
        assert!(Midi::new(5) < Midi::new(6));
    }

    #[test]
    fn test_try_new_and_try_set() {
        assert_eq!(Midi::try_new(127).map(Midi::get), Ok(127));
        assert_eq!(Midi::try_new(128), Err(BoundsError::OutOfRange));

        let mut v = Midi::new(10);
        assert_eq!(v.try_set(-1), Err(BoundsError::OutOfRange));
        assert_eq!(v.get(), 10);
        assert_eq!(v.try_set(0), Ok(()));
        assert_eq!(v.get(), 0);

        let mut f = Clamped::<f64, 0, 1>::new(0.5);
        assert_eq!(f.try_set(f64::NAN), Err(BoundsError::OutOfRange));
        assert_eq!(f.get(), 0.5);
    }

    #[test]
    fn test_bounds_accessors() {
        let v = Clamped::<u8, 10, 20>::new(15);
        assert_eq!(v.min(), 10);
        assert_eq!(v.max(), 20);
        assert_eq!(Clamped::<u8, 10, 20>::MIN_BOUND, 10);
        assert_eq!(Clamped::<u8, 10, 20>::MAX_BOUND, 20);
        assert_eq!(Clamped::<u8, 10, 20>::range(), ClosedInterval::new(10, 20));
        assert!(!Clamped::<u8, 10, 20>::is_wrapping());
        assert!(Wrapped::<u8, 10, 20>::is_wrapping());
    }

    #[test]
    fn test_from_primitive() {
        let v: Midi = 300.into();
        assert_eq!(v.get(), 127);
    }

    #[test]
    fn test_display_and_debug() {
        let v = MidiWrap::new(200);
        assert_eq!(format!("{}", v), "72");
        assert_eq!(
            format!("{:?}", v),
            "StaticallyBounded { value: 72, min: 0, max: 127, wrap: true }"
        );
        assert_eq!(format!("{:.2}", Clamped::<f32, 0, 1>::new(0.5)), "0.50");
    }
}
