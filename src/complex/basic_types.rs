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

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::{
    complex::keys::{EdgeKey, TriangleKey},
    numeric::Height,
};

/// Union-find node plus the vertex's incidence index.
#[derive(Debug, Clone)]
pub struct Vertex<T: Height> {
    pub(crate) height: T,
    pub(crate) is_boundary: bool,
    /// Union-find parent; equal to the vertex's own id while it is a root.
    pub(crate) parent: usize,
    pub(crate) incident_edges: AHashMap<EdgeKey, usize>,
    pub(crate) incident_triangles: AHashMap<TriangleKey, usize>,
}

impl<T: Height> Vertex<T> {
    pub(crate) fn new(id: usize, height: T) -> Self {
        Self {
            height,
            is_boundary: false,
            parent: id,
            incident_edges: AHashMap::new(),
            incident_triangles: AHashMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Edge<T: Height> {
    /// Endpoint greater under the vertex order at load time.
    pub(crate) first: usize,
    pub(crate) second: usize,
    pub(crate) height: T,
    pub(crate) key: EdgeKey,
    /// Incident triangles by id; a triangle's id survives merges, its key does not.
    pub(crate) incident_triangles: SmallVec<[usize; 2]>,
    pub(crate) removed: bool, // set when a mirror absorbs this edge
}

#[derive(Debug, Clone)]
pub struct Triangle<T: Height> {
    pub(crate) edges: [usize; 3],
    pub(crate) vertices: [usize; 3],
    pub(crate) height: T,
    pub(crate) key: TriangleKey,
    pub(crate) removed: bool,
}

/// A filtered simplicial 2-complex under edge contraction.
///
/// Simplices are never deleted; they are flagged vanished and filtered at
/// export. Ids are positions in the three vectors and never change.
#[derive(Debug, Clone)]
pub struct Complex<T: Height> {
    pub(crate) vertices: Vec<Vertex<T>>,
    pub(crate) edges: Vec<Edge<T>>,
    pub(crate) triangles: Vec<Triangle<T>>,

    /// Load-time lookup used to resolve triangle input by vertex triple.
    pub(crate) edge_map: AHashMap<EdgeKey, usize>,
}

impl<T: Height> Default for Complex<T> {
    fn default() -> Self {
        Self::new()
    }
}
