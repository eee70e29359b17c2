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
    complex::{basic_types::Complex, keys::EdgeKey},
    numeric::Height,
};

impl<T: Height> Complex<T> {
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_height(&self, e: usize) -> T {
        self.edges[e].height
    }

    /// Load order of the edge; the tie-break of the value order.
    pub fn edge_position(&self, e: usize) -> usize {
        e
    }

    #[inline]
    pub fn first_vertex(&self, e: usize) -> usize {
        self.root(self.edges[e].first)
    }

    #[inline]
    pub fn second_vertex(&self, e: usize) -> usize {
        self.root(self.edges[e].second)
    }

    /// Canonical key from the currently resolved endpoints.
    pub fn edge_key(&self, e: usize) -> EdgeKey {
        EdgeKey::new(self.first_vertex(e), self.second_vertex(e))
    }

    /// Re-resolves the endpoints (compressing their paths) and refreshes the stored key.
    ///
    /// Must run before the key is used as a map key after any union.
    pub fn resolve_edge(&mut self, e: usize) -> EdgeKey {
        let first = self.find(self.edges[e].first);
        let second = self.find(self.edges[e].second);
        let edge = &mut self.edges[e];
        edge.first = first;
        edge.second = second;
        edge.key = EdgeKey::new(first, second);
        edge.key
    }

    pub fn edge_has_vanished(&self, e: usize) -> bool {
        self.edges[e].removed || self.first_vertex(e) == self.second_vertex(e)
    }

    pub fn edge_contains_vertex(&self, e: usize, v: usize) -> bool {
        let v = self.root(v);
        self.first_vertex(e) == v || self.second_vertex(e) == v
    }

    /// The endpoint of `e` that is not `v`, or `None` when `v` is not an endpoint.
    pub fn other_vertex(&self, e: usize, v: usize) -> Option<usize> {
        let v = self.root(v);
        let (a, b) = (self.first_vertex(e), self.second_vertex(e));
        if a == v {
            Some(b)
        } else if b == v {
            Some(a)
        } else {
            None
        }
    }

    /// Endpoint smaller under the vertex order; it absorbs the other on contraction.
    pub fn surviving_vertex(&self, e: usize) -> usize {
        let (a, b) = (self.first_vertex(e), self.second_vertex(e));
        if self.vertex_order(a, b) == Ordering::Less { a } else { b }
    }

    pub fn perishing_vertex(&self, e: usize) -> usize {
        let (a, b) = (self.first_vertex(e), self.second_vertex(e));
        if self.vertex_order(a, b) == Ordering::Less { b } else { a }
    }

    /// Live triangles on `e`, by id.
    pub fn edge_triangles(&self, e: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges[e]
            .incident_triangles
            .iter()
            .copied()
            .filter(|&t| !self.triangle_has_vanished(t))
    }

    /// Start of the edge's existence window: the lower endpoint height.
    pub fn starting_time(&self, e: usize) -> T {
        self.vertex_height(self.first_vertex(e))
            .min(self.vertex_height(self.second_vertex(e)))
    }

    /// End of the edge's existence window: the highest live incident triangle,
    /// `neg_infinity` for a free edge.
    pub fn ending_time(&self, e: usize) -> T {
        T::max_of(self.edge_triangles(e).map(|t| self.triangles[t].height))
    }

    /// Height ascending, ties by load position.
    pub fn value_order(&self, a: usize, b: usize) -> Ordering {
        self.edges[a]
            .height
            .order(&self.edges[b].height)
            .then(self.edge_position(a).cmp(&self.edge_position(b)))
    }

    /// Ending time ascending; equal windows compare equal.
    pub fn persistence_order(&self, a: usize, b: usize) -> Ordering {
        self.ending_time(a).order(&self.ending_time(b))
    }

    pub(crate) fn add_incident_triangle(&mut self, e: usize, t: usize) {
        let list = &mut self.edges[e].incident_triangles;
        if !list.contains(&t) {
            list.push(t);
        }
    }
}
