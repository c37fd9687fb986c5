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

//! # Bounded Values
//!
//! Numeric values that keep themselves within a range on every write, while
//! reading like the primitive they wrap.
//!
//! ## Submodules
//!
//! - `statically`: `StaticallyBounded<T, MIN, MAX, WRAP>` with bounds fixed
//!   by the type, no storage beyond `T`, and the `Clamped`/`Wrapped` aliases.
//! - `dynamically`: `DynamicallyBounded<T, WRAP>` with bounds stored per
//!   value and movable at runtime without ever inverting.
//! - `error`: `BoundsError`, reported by the strict `try_*` operations.
//!
//! ## Semantics
//!
//! Both variants share one write path: a raw candidate, computed without
//! constraints, is clamped or wrapped into `[min, max]` (see
//! [`crate::algorithm`]). Out-of-range input is corrected, never rejected,
//! unless a `try_*` operation is used. Compound assignment (`+=`, `-=`, `*=`,
//! `/=`) and `increment`/`decrement` follow the same rule; the `post_*`
//! forms return the value held before the update.

pub mod dynamically;
pub mod error;
pub mod statically;
