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

//! # Tether Core
//!
//! Bounded numeric values for parameters that must always stay within a
//! valid range, such as the control parameters of an audio engine. A value
//! either clamps to its bounds (a gain, a cutoff frequency) or wraps around
//! them (a phase, a hue, a step in a sequence).
//!
//! ## Modules
//!
//! - `bounded`: The value types. `StaticallyBounded` fixes its bounds in the
//!   type and stores nothing but the value; `DynamicallyBounded` stores its
//!   bounds and lets them move at runtime while keeping `min <= max`.
//! - `algorithm`: The shared clamp-or-wrap write path and `normalize`.
//! - `math`: `ClosedInterval<T>`, the inclusive `[min, max]` range.
//! - `num`: The `BoundedScalar` capability trait, the `Grain` constant trait
//!   telling discrete from continuous types, and the sign-correct modulo.
//!
//! ## Example
//!
//! ```rust
//! use tether_core::bounded::{dynamically::DynamicallyBounded, statically::Wrapped};
//!
//! let mut note = Wrapped::<u8, 0, 127>::new(120);
//! note += 10;
//! assert_eq!(note.get(), 2);
//!
//! let mut cutoff = DynamicallyBounded::<f32>::new(440.0, 20.0, 20_000.0);
//! cutoff *= 100.0;
//! assert_eq!(cutoff.get(), 20_000.0);
//! ```

pub mod algorithm;
pub mod bounded;
pub mod math;
pub mod num;
