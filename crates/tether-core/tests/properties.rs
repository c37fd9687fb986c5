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

//! Property tests for the bound-enforcement algorithm and both bounded
//! value types.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use tether_core::algorithm::{clamp, wrap};
use tether_core::bounded::{
    dynamically::DynamicallyBounded,
    statically::{Clamped, Wrapped},
};
use tether_core::num::ops::modulo::ModuloVal;

fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 2_000,
        ..ProptestConfig::default()
    }
}

/// An ordered pair of bounds.
fn bounds_i32() -> impl Strategy<Value = (i32, i32)> {
    (-10_000_i32..10_000, 0_i32..5_000).prop_map(|(min, len)| (min, min + len))
}

fn bounds_u64() -> impl Strategy<Value = (u64, u64)> {
    (any::<u64>(), any::<u64>()).prop_map(|(a, b)| (a.min(b), a.max(b)))
}

fn bounds_i64() -> impl Strategy<Value = (i64, i64)> {
    (any::<i64>(), any::<i64>()).prop_map(|(a, b)| (a.min(b), a.max(b)))
}

fn bounds_f64() -> impl Strategy<Value = (f64, f64)> {
    (-1.0e6_f64..1.0e6, 0.0_f64..1.0e4).prop_map(|(min, len)| (min, min + len))
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn test_modulo_is_sign_correct(x in any::<i64>(), length in 1_i64..i64::MAX) {
        let r = x.modulo_val(length);
        prop_assert!(0 <= r && r < length);
        prop_assert_eq!((i128::from(x) - i128::from(r)) % i128::from(length), 0);
    }

    #[test]
    fn test_modulo_float_stays_in_period(x in any::<f64>(), length in 1.0e-6_f64..1.0e9) {
        let r = x.modulo_val(length);
        prop_assert!((0.0..length).contains(&r));
    }

    #[test]
    fn test_clamp_and_wrap_land_in_range(raw in any::<i64>(), (min, max) in bounds_i32()) {
        let (raw, min, max) = (i128::from(raw), i128::from(min), i128::from(max));
        let clamped = clamp(raw, min, max);
        let wrapped = wrap(raw, min, max);
        prop_assert!(min <= clamped && clamped <= max);
        prop_assert!(min <= wrapped && wrapped <= max);
    }

    #[test]
    fn test_wrap_preserves_congruence(raw in any::<i64>(), (min, max) in bounds_i32()) {
        let (raw, min, max) = (i128::from(raw), i128::from(min), i128::from(max));
        let length = max - min + 1;
        prop_assert_eq!((wrap(raw, min, max) - raw) % length, 0);
    }

    #[test]
    fn test_in_range_assignment_is_identity(v in 0_i32..=127) {
        prop_assert_eq!(Clamped::<i32, 0, 127>::new(v).get(), v);
        prop_assert_eq!(Wrapped::<i32, 0, 127>::new(v).get(), v);
    }

    #[test]
    fn test_static_clamp_correctness(v in any::<i32>()) {
        let stored = Clamped::<i32, 0, 127>::new(v).get();
        let expected = v.clamp(0, 127);
        prop_assert_eq!(stored, expected);
    }

    #[test]
    fn test_static_wrap_matches_rem_euclid(v in any::<i32>()) {
        let stored = Wrapped::<i32, 0, 127>::new(v).get();
        prop_assert_eq!(stored, v.rem_euclid(128));
    }

    #[test]
    fn test_compound_operations_keep_invariant(
        start in any::<u8>(),
        ops in prop::collection::vec((0_u8..6, any::<u8>()), 0..64),
    ) {
        let mut clamped = Clamped::<u8, 10, 200>::new(start);
        let mut wrapped = Wrapped::<u8, 10, 200>::new(start);
        for (op, operand) in ops {
            match op {
                0 => { clamped += operand; wrapped += operand; }
                1 => { clamped -= operand; wrapped -= operand; }
                2 => { clamped *= operand; wrapped *= operand; }
                3 => { clamped /= operand.max(1); wrapped /= operand.max(1); }
                4 => { clamped.increment(); wrapped.increment(); }
                _ => { clamped.post_decrement(); wrapped.post_decrement(); }
            }
            prop_assert!((10..=200).contains(&clamped.get()));
            prop_assert!((10..=200).contains(&wrapped.get()));
        }
    }

    #[test]
    fn test_dynamic_invariant_survives_bound_changes(
        (value, min, max) in (any::<i32>(), any::<i32>(), any::<i32>()),
        changes in prop::collection::vec((any::<bool>(), any::<i32>()), 0..32),
    ) {
        let mut v = DynamicallyBounded::<i32, true>::new(value, min, max);
        prop_assert!(v.min() <= v.max());
        prop_assert!(v.min() <= v.get() && v.get() <= v.max());

        for (lower, bound) in changes {
            let before = v;
            if lower { v.set_min(bound) } else { v.set_max(bound) }

            prop_assert!(v.min() <= v.max());
            prop_assert!(v.min() <= v.get() && v.get() <= v.max());
            let rejected = if lower { bound > before.max() } else { bound < before.min() };
            if rejected {
                prop_assert_eq!(v, before);
            }
        }
    }

    #[test]
    fn test_dynamic_float_assignment_in_range(raw in any::<f64>(), (min, max) in bounds_f64()) {
        let clamped = DynamicallyBounded::<f64>::new(raw, min, max).get();
        let wrapped = DynamicallyBounded::<f64, true>::new(raw, min, max).get();
        prop_assert!(min <= clamped && clamped <= max);
        prop_assert!(min <= wrapped && wrapped <= max);
    }

    #[test]
    fn test_normalize_in_unit_interval(raw in any::<i32>(), (min, max) in bounds_i32()) {
        let n = DynamicallyBounded::<i32>::new(raw, min, max).normalize();
        prop_assert!((0.0..=1.0).contains(&n));
    }

    #[test]
    fn test_compound_operations_full_range_u64(
        start in any::<u64>(),
        (min, max) in bounds_u64(),
        ops in prop::collection::vec((0_u8..4, any::<u64>()), 0..32),
    ) {
        let mut clamped = DynamicallyBounded::<u64>::new(start, min, max);
        let mut wrapped = DynamicallyBounded::<u64, true>::new(start, min, max);
        for (op, operand) in ops {
            match op {
                0 => { clamped += operand; wrapped += operand; }
                1 => { clamped -= operand; wrapped -= operand; }
                2 => { clamped *= operand; wrapped *= operand; }
                _ => { clamped /= operand.max(1); wrapped /= operand.max(1); }
            }
            prop_assert!(min <= clamped.get() && clamped.get() <= max);
            prop_assert!(min <= wrapped.get() && wrapped.get() <= max);
        }
    }

    #[test]
    fn test_compound_operations_full_range_i64(
        start in any::<i64>(),
        (min, max) in bounds_i64(),
        ops in prop::collection::vec((0_u8..4, any::<i64>()), 0..32),
    ) {
        let mut clamped = DynamicallyBounded::<i64>::new(start, min, max);
        let mut wrapped = DynamicallyBounded::<i64, true>::new(start, min, max);
        for (op, operand) in ops {
            let divisor = if operand == 0 { 1 } else { operand };
            match op {
                0 => { clamped += operand; wrapped += operand; }
                1 => { clamped -= operand; wrapped -= operand; }
                2 => { clamped *= operand; wrapped *= operand; }
                _ => { clamped /= divisor; wrapped /= divisor; }
            }
            prop_assert!(min <= clamped.get() && clamped.get() <= max);
            prop_assert!(min <= wrapped.get() && wrapped.get() <= max);
        }
    }

    #[test]
    fn test_u64_product_matches_exact_product(
        start in any::<u64>(),
        operand in any::<u64>(),
        (min, max) in bounds_u64(),
    ) {
        let mut clamped = DynamicallyBounded::<u64>::new(start, min, max);
        let mut wrapped = DynamicallyBounded::<u64, true>::new(start, min, max);
        let clamped_exact = u128::from(clamped.get()) * u128::from(operand);
        let wrapped_exact = u128::from(wrapped.get()) * u128::from(operand);
        clamped *= operand;
        wrapped *= operand;

        let (min, max) = (u128::from(min), u128::from(max));
        prop_assert_eq!(u128::from(clamped.get()), clamped_exact.clamp(min, max));

        let period = max - min + 1;
        prop_assert_eq!(u128::from(wrapped.get()) % period, wrapped_exact % period);
    }
}
