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

use crate::{
    complex::{
        basic_types::Complex,
        error::{IncidenceError, ValidationError},
        keys::{EdgeKey, TriangleKey},
    },
    numeric::Height,
};

impl<T: Height> Complex<T> {
    /// Checks the structural invariants over every live simplex:
    /// filtration monotonicity, key uniqueness, and that each live edge and
    /// triangle is registered at all of its resolved vertices under its
    /// current key.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut edge_keys: AHashMap<EdgeKey, usize> = AHashMap::new();
        for e in 0..self.edges.len() {
            if self.edge_has_vanished(e) {
                continue;
            }
            let key = self.edge_key(e);
            if edge_keys.insert(key, e).is_some() {
                return Err(ValidationError::DuplicateKey { kind: "edge", key: key.to_string() });
            }

            let h = self.edges[e].height;
            for v in key.0 {
                if h < self.vertex_height(v) {
                    return Err(ValidationError::NotMonotone(format!(
                        "edge {key} ({h}) below vertex {v} ({})",
                        self.vertex_height(v)
                    )));
                }
                if self.vertices[v].incident_edges.get(&key) != Some(&e) {
                    return Err(IncidenceError::NotIncident {
                        vertex: v,
                        key: format!("edge {key} (not registered)"),
                    }
                    .into());
                }
            }
        }

        let mut triangle_keys: AHashMap<TriangleKey, usize> = AHashMap::new();
        for t in 0..self.triangles.len() {
            if self.triangle_has_vanished(t) {
                continue;
            }
            let key = self.triangle_key(t);
            if triangle_keys.insert(key, t).is_some() {
                return Err(ValidationError::DuplicateKey { kind: "triangle", key: key.to_string() });
            }

            let h = self.triangles[t].height;
            for e in self.triangles[t].edges {
                if self.edge_has_vanished(e) {
                    return Err(IncidenceError::Vanished(format!("edge {} of triangle {key}", self.edge_key(e))).into());
                }
                if !self.edges[e].incident_triangles.contains(&t) {
                    return Err(IncidenceError::NotIncident {
                        vertex: self.first_vertex(e),
                        key: format!("triangle {key} (missing on edge {})", self.edge_key(e)),
                    }
                    .into());
                }
                if h < self.edges[e].height {
                    return Err(ValidationError::NotMonotone(format!(
                        "triangle {key} ({h}) below edge {} ({})",
                        self.edge_key(e),
                        self.edges[e].height
                    )));
                }
            }
            for v in key.0 {
                if self.vertices[v].incident_triangles.get(&key) != Some(&t) {
                    return Err(IncidenceError::NotIncident {
                        vertex: v,
                        key: format!("triangle {key} (not registered)"),
                    }
                    .into());
                }
            }
        }
        Ok(())
    }
}
