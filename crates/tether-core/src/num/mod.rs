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

//! # Numeric Foundations
//!
//! Traits describing what a primitive must provide to be held by a bounded
//! value, together with the by-value operations the bound-enforcement
//! algorithm is built from.
//!
//! ## Submodules
//!
//! - `constants`: The `Grain` associated-constant trait, which tells integral
//!   types (closed ranges count points, extra step `1`) apart from continuous
//!   ones (extra step `0`).
//! - `ops`: By-value operation traits: the sign-correct modulo
//!   (`ModuloVal`, `CheckedModuloVal`, `MulModuloVal`) and overflow-aware
//!   products (`CheckedMulVal`, `SaturatingMulVal`).
//! - `scalar`: `BoundedScalar`, pairing every supported primitive with its
//!   wide working type.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod constants;
pub mod ops;
pub mod scalar;
