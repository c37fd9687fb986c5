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

use std::fmt::Display;

/// The reason a strict (`try_*`) operation on a bounded value was refused.
///
/// The regular API never fails: it clamps, wraps or ignores the request.
/// The strict variants report the same situations instead and leave the
/// value untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundsError {
    /// The requested lower bound exceeds the upper bound, or a bound is `NaN`.
    InvertedRange,
    /// The requested value lies outside the active range.
    OutOfRange,
}

impl Display for BoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundsError::InvertedRange => {
                write!(f, "invalid range: min must be less than or equal to max")
            }
            BoundsError::OutOfRange => write!(f, "value lies outside of the range"),
        }
    }
}

impl std::error::Error for BoundsError {}
