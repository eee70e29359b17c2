// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    str::FromStr,
};

use num_traits::Float;

/// Scalar filtration time carried by every simplex.
///
/// Any IEEE float qualifies; the loader and binary use `f64`.
pub trait Height: Float + Debug + Display + FromStr + Send + Sync + 'static {
    /// Ordering that treats incomparable values (NaN) as equal.
    ///
    /// NaN never reaches a complex (construction rejects it), so this is a
    /// total order on every height the crate actually stores.
    #[inline]
    fn order(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }

    /// Largest of an iterator of heights, `neg_infinity` when empty.
    fn max_of<I: IntoIterator<Item = Self>>(values: I) -> Self {
        values
            .into_iter()
            .fold(Self::neg_infinity(), |acc, h| if h > acc { h } else { acc })
    }
}

impl<T> Height for T where T: Float + Debug + Display + FromStr + Send + Sync + 'static {}
