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

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::{
    complex::{
        basic_types::{Complex, Edge, Triangle, Vertex},
        error::ConstructionError,
        keys::{EdgeKey, TriangleKey},
    },
    numeric::Height,
};

fn below_face<T: Height>(what: String, height: T, face_height: T) -> ConstructionError {
    ConstructionError::HeightBelowFace {
        what,
        height: height.to_string(),
        face_height: face_height.to_string(),
    }
}

impl<T: Height> Complex<T> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            triangles: Vec::new(),
            edge_map: AHashMap::new(),
        }
    }

    /// Adds a vertex; its index is the number of vertices added before it.
    pub fn add_vertex(&mut self, height: T) -> Result<usize, ConstructionError> {
        let idx = self.vertices.len();
        if height.is_nan() {
            return Err(ConstructionError::NonFiniteHeight { what: format!("vertex {idx}") });
        }
        self.vertices.push(Vertex::new(idx, height));
        Ok(idx)
    }

    pub fn set_boundary(&mut self, v: usize) -> Result<(), ConstructionError> {
        if v >= self.vertices.len() {
            return Err(ConstructionError::MissingVertex(v));
        }
        let r = self.root(v);
        self.vertices[r].is_boundary = true;
        Ok(())
    }

    /// Adds the edge `{a, b}`. Without an explicit height it takes the higher endpoint's.
    pub fn add_edge(&mut self, a: usize, b: usize, height: Option<T>) -> Result<usize, ConstructionError> {
        for v in [a, b] {
            if v >= self.vertices.len() {
                return Err(ConstructionError::MissingVertex(v));
            }
        }
        if a == b {
            return Err(ConstructionError::DegenerateEdge(a));
        }
        let (a, b) = (self.root(a), self.root(b));
        let key = EdgeKey::new(a, b);
        if self.edge_map.contains_key(&key) || self.adjacent_to_edge(a, &key) {
            return Err(ConstructionError::DuplicateEdge(key));
        }

        // `first` is the endpoint that would perish.
        let (first, second) = match self.vertex_order(a, b) {
            Ordering::Less => (b, a),
            _ => (a, b),
        };
        let floor = self.vertex_height(first).max(self.vertex_height(second));
        let height = match height {
            None => floor,
            Some(h) if h.is_nan() => {
                return Err(ConstructionError::NonFiniteHeight { what: format!("edge {key}") });
            }
            Some(h) if h < floor => return Err(below_face(format!("edge {key}"), h, floor)),
            Some(h) => h,
        };

        let e = self.edges.len();
        self.edges.push(Edge {
            first,
            second,
            height,
            key,
            incident_triangles: SmallVec::new(),
            removed: false,
        });
        self.edge_map.insert(key, e);
        self.register_edge(first, e)?;
        self.register_edge(second, e)?;
        Ok(e)
    }

    /// Adds the triangle spanned by three vertices whose three edges already exist.
    pub fn add_triangle(
        &mut self,
        a: usize,
        b: usize,
        c: usize,
        height: Option<T>,
    ) -> Result<usize, ConstructionError> {
        for v in [a, b, c] {
            if v >= self.vertices.len() {
                return Err(ConstructionError::MissingVertex(v));
            }
        }
        let key = TriangleKey::new(a, b, c);
        let mut edges = [0usize; 3];
        for (slot, ek) in key.edges().into_iter().enumerate() {
            if ek.is_degenerate() {
                return Err(ConstructionError::DegenerateEdge(ek.0[0]));
            }
            edges[slot] = *self
                .edge_map
                .get(&ek)
                .ok_or(ConstructionError::MissingEdge(ek))?;
        }
        self.add_triangle_from_edges(edges, height)
    }

    /// Adds a triangle bounded by three existing, pairwise distinct edges that
    /// together span exactly three vertices. Without an explicit height it takes
    /// the highest edge's.
    pub fn add_triangle_from_edges(
        &mut self,
        edges: [usize; 3],
        height: Option<T>,
    ) -> Result<usize, ConstructionError> {
        let [e1, e2, e3] = edges;
        for e in edges {
            if e >= self.edges.len() {
                return Err(ConstructionError::UnknownEdge(e));
            }
        }
        if e1 == e2 || e1 == e3 {
            return Err(ConstructionError::RepeatedEdge(e1));
        }
        if e2 == e3 {
            return Err(ConstructionError::RepeatedEdge(e2));
        }

        let mut vertices: SmallVec<[usize; 6]> = SmallVec::new();
        for e in edges {
            for v in [self.first_vertex(e), self.second_vertex(e)] {
                if !vertices.contains(&v) {
                    vertices.push(v);
                }
            }
        }
        if vertices.len() != 3 {
            return Err(ConstructionError::NotATriangle(vertices.len()));
        }
        let vertices = [vertices[0], vertices[1], vertices[2]];
        let key = TriangleKey::new(vertices[0], vertices[1], vertices[2]);
        if vertices.iter().any(|&v| self.adjacent_to_triangle(v, &key)) {
            return Err(ConstructionError::DuplicateTriangle(key));
        }

        let floor = T::max_of(edges.map(|e| self.edges[e].height));
        let height = match height {
            None => floor,
            Some(h) if h.is_nan() => {
                return Err(ConstructionError::NonFiniteHeight { what: format!("triangle {key}") });
            }
            Some(h) if h < floor => return Err(below_face(format!("triangle {key}"), h, floor)),
            Some(h) => h,
        };

        let t = self.triangles.len();
        self.triangles.push(Triangle {
            edges,
            vertices,
            height,
            key,
            removed: false,
        });
        for v in vertices {
            self.register_triangle(v, t)?;
        }
        for e in edges {
            self.add_incident_triangle(e, t);
        }
        Ok(t)
    }

    /// Marks both endpoints of every edge with exactly one live triangle as boundary.
    ///
    /// Returns how many vertices were newly marked.
    pub fn detect_boundary(&mut self) -> usize {
        let mut marked = 0;
        for e in 0..self.edges.len() {
            if self.edge_has_vanished(e) || self.edge_triangles(e).count() != 1 {
                continue;
            }
            for v in [self.first_vertex(e), self.second_vertex(e)] {
                if !self.vertices[v].is_boundary {
                    self.vertices[v].is_boundary = true;
                    marked += 1;
                }
            }
        }
        marked
    }

    /// Total number of simplices ever added, vanished or not.
    pub fn simplex_count(&self) -> usize {
        self.vertices.len() + self.edges.len() + self.triangles.len()
    }
}
