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

use std::cmp::Ordering;

use crate::{
    complex::{
        basic_types::Complex,
        error::IncidenceError,
        keys::{EdgeKey, TriangleKey},
    },
    numeric::Height,
};

impl<T: Height> Complex<T> {
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Representative of `v`'s merge class, without path compression.
    #[inline]
    pub fn root(&self, v: usize) -> usize {
        let mut r = v;
        while self.vertices[r].parent != r {
            r = self.vertices[r].parent;
        }
        r
    }

    #[inline]
    pub fn vertex_has_vanished(&self, v: usize) -> bool {
        self.root(v) != v
    }

    /// Height of the vertex `v` currently resolves to.
    #[inline]
    pub fn vertex_height(&self, v: usize) -> T {
        self.vertices[self.root(v)].height
    }

    pub fn is_boundary(&self, v: usize) -> bool {
        self.vertices[self.root(v)].is_boundary
    }

    /// Order on resolved vertices: height ascending, then index ascending.
    ///
    /// The smaller vertex is the one that survives a union.
    pub fn vertex_order(&self, a: usize, b: usize) -> Ordering {
        let (ra, rb) = (self.root(a), self.root(b));
        self.vertices[ra]
            .height
            .order(&self.vertices[rb].height)
            .then(ra.cmp(&rb))
    }

    pub fn incident_edge_count(&self, v: usize) -> usize {
        self.vertices[self.root(v)].incident_edges.len()
    }

    pub fn incident_triangle_count(&self, v: usize) -> usize {
        self.vertices[self.root(v)].incident_triangles.len()
    }

    pub fn adjacent_to_edge(&self, v: usize, key: &EdgeKey) -> bool {
        self.vertices[self.root(v)].incident_edges.contains_key(key)
    }

    pub fn adjacent_to_triangle(&self, v: usize, key: &TriangleKey) -> bool {
        self.vertices[self.root(v)].incident_triangles.contains_key(key)
    }

    /// Live edge registered at `v` under `key`, if any.
    pub fn edge_at(&self, v: usize, key: &EdgeKey) -> Option<usize> {
        self.vertices[self.root(v)]
            .incident_edges
            .get(key)
            .copied()
            .filter(|&e| !self.edge_has_vanished(e))
    }

    /// Live triangle registered at `v` under `key`, if any.
    pub fn triangle_at(&self, v: usize, key: &TriangleKey) -> Option<usize> {
        self.vertices[self.root(v)]
            .incident_triangles
            .get(key)
            .copied()
            .filter(|&t| !self.triangle_has_vanished(t))
    }

    /// Snapshot of the edge ids registered at `v`, ascending.
    pub fn incident_edges(&self, v: usize) -> Vec<usize> {
        let mut out: Vec<usize> = self.vertices[self.root(v)]
            .incident_edges
            .values()
            .copied()
            .collect();
        out.sort_unstable();
        out
    }

    /// Snapshot of the triangle ids registered at `v`, ascending.
    pub fn incident_triangles(&self, v: usize) -> Vec<usize> {
        let mut out: Vec<usize> = self.vertices[self.root(v)]
            .incident_triangles
            .values()
            .copied()
            .collect();
        out.sort_unstable();
        out
    }

    pub(crate) fn register_edge(&mut self, v: usize, e: usize) -> Result<(), IncidenceError> {
        let v = self.root(v);
        let key = self.resolve_edge(e);
        if self.edge_has_vanished(e) {
            return Err(IncidenceError::Vanished(format!("edge {key}")));
        }
        if !key.contains(v) {
            return Err(IncidenceError::NotIncident { vertex: v, key: format!("edge {key}") });
        }
        if self.vertices[v].incident_edges.contains_key(&key) {
            return Err(IncidenceError::AlreadyRegistered { vertex: v, key: format!("edge {key}") });
        }
        self.vertices[v].incident_edges.insert(key, e);
        Ok(())
    }

    pub(crate) fn register_triangle(&mut self, v: usize, t: usize) -> Result<(), IncidenceError> {
        let v = self.root(v);
        let key = self.resolve_triangle(t);
        if self.triangle_has_vanished(t) {
            return Err(IncidenceError::Vanished(format!("triangle {key}")));
        }
        if !key.contains(v) {
            return Err(IncidenceError::NotIncident { vertex: v, key: format!("triangle {key}") });
        }
        if self.vertices[v].incident_triangles.contains_key(&key) {
            return Err(IncidenceError::AlreadyRegistered {
                vertex: v,
                key: format!("triangle {key}"),
            });
        }
        self.vertices[v].incident_triangles.insert(key, t);
        Ok(())
    }

    /// Drops `v`'s entry under `key` if (and only if) it still points at `e`.
    pub(crate) fn unregister_edge_key(&mut self, v: usize, key: &EdgeKey, e: usize) {
        let map = &mut self.vertices[v].incident_edges;
        if map.get(key) == Some(&e) {
            map.remove(key);
        }
    }

    pub(crate) fn unregister_triangle_key(&mut self, v: usize, key: &TriangleKey, t: usize) {
        let map = &mut self.vertices[v].incident_triangles;
        if map.get(key) == Some(&t) {
            map.remove(key);
        }
    }
}
