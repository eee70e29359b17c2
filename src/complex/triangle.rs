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

use crate::{
    complex::{basic_types::Complex, error::IncidenceError, keys::TriangleKey},
    numeric::Height,
};

impl<T: Height> Complex<T> {
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    pub fn triangle_height(&self, t: usize) -> T {
        self.triangles[t].height
    }

    pub fn triangle_edges(&self, t: usize) -> [usize; 3] {
        self.triangles[t].edges
    }

    /// Resolved vertices, in construction order.
    pub fn triangle_vertices(&self, t: usize) -> [usize; 3] {
        self.triangles[t].vertices.map(|v| self.root(v))
    }

    pub fn triangle_key(&self, t: usize) -> TriangleKey {
        let [a, b, c] = self.triangle_vertices(t);
        TriangleKey::new(a, b, c)
    }

    /// Re-resolves the three vertices and refreshes the stored key.
    pub fn resolve_triangle(&mut self, t: usize) -> TriangleKey {
        let stored = self.triangles[t].vertices;
        let resolved = stored.map(|v| self.find(v));
        let [a, b, c] = resolved;
        let tri = &mut self.triangles[t];
        tri.vertices = resolved;
        tri.key = TriangleKey::new(a, b, c);
        tri.key
    }

    /// Explicitly removed, or two of the three vertices now coincide.
    pub fn triangle_has_vanished(&self, t: usize) -> bool {
        self.triangles[t].removed || self.triangle_key(t).is_degenerate()
    }

    pub fn triangle_contains_vertex(&self, t: usize, v: usize) -> bool {
        self.triangle_vertices(t).contains(&self.root(v))
    }

    pub fn triangle_contains_edge(&self, t: usize, e: usize) -> bool {
        self.triangles[t].edges.contains(&e)
    }

    /// Vertex of `t` that is not an endpoint of `e`.
    pub fn apex(&self, t: usize, e: usize) -> Option<usize> {
        let (a, b) = (self.first_vertex(e), self.second_vertex(e));
        self.triangle_vertices(t)
            .into_iter()
            .find(|&v| v != a && v != b)
    }

    fn mirror_through(&self, t: usize, e: usize, v: usize) -> Option<usize> {
        if !self.triangle_contains_edge(t, e) {
            return None;
        }
        self.triangles[t]
            .edges
            .iter()
            .copied()
            .find(|&m| m != e && self.edge_contains_vertex(m, v))
    }

    /// The other edge of `t` sharing `e`'s first vertex.
    pub fn first_mirror(&self, t: usize, e: usize) -> Option<usize> {
        self.mirror_through(t, e, self.first_vertex(e))
    }

    /// The other edge of `t` sharing `e`'s second vertex.
    pub fn second_mirror(&self, t: usize, e: usize) -> Option<usize> {
        self.mirror_through(t, e, self.second_vertex(e))
    }

    /// Lower of the two mirrors by height; the second mirror on a tie.
    pub fn surviving_mirror(&self, t: usize, e: usize) -> Option<usize> {
        let (m1, m2) = (self.first_mirror(t, e)?, self.second_mirror(t, e)?);
        if self.edges[m1].height < self.edges[m2].height {
            Some(m1)
        } else {
            Some(m2)
        }
    }

    /// Higher of the two mirrors by height; the first mirror on a tie.
    pub fn perishing_mirror(&self, t: usize, e: usize) -> Option<usize> {
        let (m1, m2) = (self.first_mirror(t, e)?, self.second_mirror(t, e)?);
        if self.edges[m1].height < self.edges[m2].height {
            Some(m2)
        } else {
            Some(m1)
        }
    }

    /// Substitutes vertex `new` for `old`, lifts the height over the
    /// (possibly changed) vertex heights and refreshes the key.
    pub fn replace_vertex(&mut self, t: usize, old: usize, new: usize) -> Result<TriangleKey, IncidenceError> {
        let Some(slot) = self.triangles[t].vertices.iter().position(|&v| v == old) else {
            return Err(IncidenceError::NotAConstituent {
                triangle: t,
                what: format!("vertex {old}"),
            });
        };
        self.triangles[t].vertices[slot] = new;

        let lifted = T::max_of(
            self.triangles[t]
                .vertices
                .map(|v| self.vertex_height(v))
                .into_iter()
                .chain(std::iter::once(self.triangles[t].height)),
        );
        self.triangles[t].height = lifted;
        Ok(self.resolve_triangle(t))
    }

    /// Substitutes edge `new` for constituent edge `old`.
    pub fn replace_edge(&mut self, t: usize, old: usize, new: usize) -> Result<(), IncidenceError> {
        match self.triangles[t].edges.iter().position(|&e| e == old) {
            Some(slot) => {
                self.triangles[t].edges[slot] = new;
                Ok(())
            }
            None => Err(IncidenceError::NotAConstituent {
                triangle: t,
                what: format!("edge {}", self.edge_key(old)),
            }),
        }
    }
}
