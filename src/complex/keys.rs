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

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical identity of an edge: its two resolved vertex indices, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey(pub [usize; 2]);

impl EdgeKey {
    pub fn new(a: usize, b: usize) -> Self {
        if a < b { Self([a, b]) } else { Self([b, a]) }
    }

    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.0[0] == v || self.0[1] == v
    }

    /// True when both slots name the same vertex, i.e. the edge collapsed.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.0[0] == self.0[1]
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0[0], self.0[1])
    }
}

/// Canonical identity of a triangle: its three resolved vertex indices, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TriangleKey(pub [usize; 3]);

impl TriangleKey {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        let mut idx = [a, b, c];
        idx.sort_unstable();
        Self(idx)
    }

    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.0.contains(&v)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.0[0] == self.0[1] || self.0[1] == self.0[2]
    }

    /// Key obtained by substituting `to` for every occurrence of `from`.
    pub fn relabel(&self, from: usize, to: usize) -> Self {
        let [a, b, c] = self.0.map(|i| if i == from { to } else { i });
        Self::new(a, b, c)
    }

    /// The three edge keys bounding this triangle.
    pub fn edges(&self) -> [EdgeKey; 3] {
        let [a, b, c] = self.0;
        [EdgeKey::new(b, c), EdgeKey::new(a, c), EdgeKey::new(a, b)]
    }
}

impl fmt::Display for TriangleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0[0], self.0[1], self.0[2])
    }
}
