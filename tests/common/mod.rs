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

#![allow(dead_code)]

use ahash::AHashSet;
use simplex_contract::{Complex, EdgeKey};

/// Builds a complex from vertex heights and faces; every face edge is added
/// once with its default height, then every face with its default height.
pub fn build(heights: &[f64], faces: &[[usize; 3]]) -> Complex<f64> {
    let mut complex = Complex::new();
    for &h in heights {
        complex.add_vertex(h).unwrap();
    }
    let mut seen = AHashSet::new();
    for &[a, b, c] in faces {
        for (x, y) in [(a, b), (b, c), (a, c)] {
            if seen.insert(EdgeKey::new(x, y)) {
                complex.add_edge(x, y, None).unwrap();
            }
        }
    }
    for &[a, b, c] in faces {
        complex.add_triangle(a, b, c, None).unwrap();
    }
    complex
}

/// Vertices 0, 1, 2 at heights 0, 1, 2 with edges (0,1), (1,2), (0,2) in that order.
pub fn single_triangle() -> Complex<f64> {
    build(&[0.0, 1.0, 2.0], &[[0, 1, 2]])
}

pub const TETRAHEDRON: [[usize; 3]; 4] = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];

pub const OCTAHEDRON: [[usize; 3]; 8] = [
    [0, 1, 2],
    [0, 2, 3],
    [0, 3, 4],
    [0, 4, 1],
    [5, 2, 1],
    [5, 3, 2],
    [5, 4, 3],
    [5, 1, 4],
];

/// Faces of an `n` x `n` grid with opposite sides identified.
pub fn torus_faces(n: usize) -> Vec<[usize; 3]> {
    let id = |x: usize, y: usize| (y % n) * n + (x % n);
    let mut faces = Vec::with_capacity(2 * n * n);
    for y in 0..n {
        for x in 0..n {
            faces.push([id(x, y), id(x + 1, y), id(x + 1, y + 1)]);
            faces.push([id(x, y), id(x + 1, y + 1), id(x, y + 1)]);
        }
    }
    faces
}

pub fn live_counts(complex: &Complex<f64>) -> (usize, usize, usize) {
    (
        complex.live_vertices().count(),
        complex.live_edges().count(),
        complex.live_triangles().count(),
    )
}

pub fn euler_characteristic(complex: &Complex<f64>) -> i64 {
    let (v, e, t) = live_counts(complex);
    v as i64 - e as i64 + t as i64
}
