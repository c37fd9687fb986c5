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

/// A trait for numeric types that carry the size of their smallest step.
///
/// Integral types count the points of a closed range, so `[0, 127]` holds
/// `127 - 0 + 1 = 128` values and the extra step is `1`. Continuous types
/// measure the range itself and the extra step is `0`.
///
/// # Examples
///
/// ```rust
/// # use tether_core::num::constants::Grain;
///
/// assert_eq!(<i32 as Grain>::GRAIN, 1);
/// assert_eq!(<f32 as Grain>::GRAIN, 0.0);
/// ```
pub trait Grain {
    /// The constant added to `max - min` to obtain the length of a closed range.
    const GRAIN: Self;
}

macro_rules! impl_const_for {
    ($t:ty, $grain:expr) => {
        impl Grain for $t {
            const GRAIN: Self = $grain;
        }
    };
}

macro_rules! impl_discrete_grain_for {
    ($t:ty) => {
        impl_const_for!($t, 1);
    };
}

macro_rules! impl_continuous_grain_for {
    ($t:ty) => {
        impl_const_for!($t, 0.0);
    };
}

impl_discrete_grain_for!(i8);
impl_discrete_grain_for!(u8);
impl_discrete_grain_for!(i16);
impl_discrete_grain_for!(u16);
impl_discrete_grain_for!(i32);
impl_discrete_grain_for!(u32);
impl_discrete_grain_for!(i64);
impl_discrete_grain_for!(u64);
impl_discrete_grain_for!(i128);
impl_discrete_grain_for!(u128);
impl_discrete_grain_for!(isize);
impl_discrete_grain_for!(usize);

impl_continuous_grain_for!(f32);
impl_continuous_grain_for!(f64);

#[cfg(test)]
mod tests {
    use super::Grain;

    #[test]
    fn test_integers_are_discrete() {
        assert_eq!(<u8 as Grain>::GRAIN, 1);
        assert_eq!(<i128 as Grain>::GRAIN, 1);
        assert_eq!(<usize as Grain>::GRAIN, 1);
    }

    #[test]
    fn test_floats_are_continuous() {
        assert_eq!(<f64 as Grain>::GRAIN, 0.0);
        assert_eq!(<f32 as Grain>::GRAIN, 0.0);
    }
}
