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

use tracing::trace;

use crate::{
    complex::{
        basic_types::Complex,
        error::IncidenceError,
        keys::{EdgeKey, TriangleKey},
    },
    numeric::Height,
};

impl<T: Height> Complex<T> {
    /// Representative of `v`'s merge class. Every vertex on the walked path is
    /// re-parented directly onto the root.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not a vertex id of this complex.
    pub fn find(&mut self, v: usize) -> usize {
        let root = self.root(v);
        let mut cur = v;
        while self.vertices[cur].parent != root && cur != root {
            let next = self.vertices[cur].parent;
            self.vertices[cur].parent = root;
            cur = next;
        }
        root
    }

    /// Merges the classes of `a` and `b` and repairs the incidence structure.
    ///
    /// The smaller root under [`Complex::vertex_order`] survives. Edges and
    /// triangles of the perishing root are re-keyed onto the survivor; when a
    /// re-keyed simplex lands on a key the survivor already holds, the two are
    /// mirrors and the one with the larger height vanishes (ties keep the one
    /// already registered). Returns the surviving root.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is not a vertex id of this complex.
    pub fn union(&mut self, a: usize, b: usize) -> Result<usize, IncidenceError> {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return Ok(ra);
        }
        let (surviving, perishing) = match self.vertex_order(ra, rb) {
            Ordering::Less => (ra, rb),
            _ => (rb, ra),
        };
        self.vertices[perishing].parent = surviving;

        self.merge_incident_edges(surviving, perishing)?;
        self.merge_incident_triangles(surviving, perishing)?;
        Ok(surviving)
    }

    fn merge_incident_edges(&mut self, surviving: usize, perishing: usize) -> Result<(), IncidenceError> {
        let mut incident: Vec<(EdgeKey, usize)> =
            std::mem::take(&mut self.vertices[perishing].incident_edges)
                .into_iter()
                .collect();
        incident.sort_unstable_by_key(|&(_, e)| e);

        for (old_key, e) in incident {
            let new_key = self.resolve_edge(e);
            if self.edge_has_vanished(e) {
                // The contracted edge itself (or a stale entry).
                self.unregister_edge_key(surviving, &old_key, e);
                continue;
            }
            let Some(other) = self.other_vertex(e, surviving) else {
                return Err(IncidenceError::NotIncident {
                    vertex: surviving,
                    key: format!("edge {new_key}"),
                });
            };
            self.unregister_edge_key(other, &old_key, e);

            match self.edge_at(surviving, &new_key) {
                Some(mirror) if mirror != e => {
                    let (keep, drop) = if self.edges[mirror].height > self.edges[e].height {
                        (e, mirror)
                    } else {
                        (mirror, e)
                    };
                    trace!(edge = %new_key, keep, drop, "mirrored edges collapsed");
                    self.edges[drop].removed = true;
                    self.vertices[surviving].incident_edges.insert(new_key, keep);
                    self.vertices[other].incident_edges.insert(new_key, keep);
                    self.transfer_triangles(drop, keep)?;
                }
                _ => {
                    self.vertices[surviving].incident_edges.insert(new_key, e);
                    self.vertices[other].incident_edges.insert(new_key, e);
                }
            }
        }
        Ok(())
    }

    /// Moves the live triangles of a vanishing mirror edge onto the surviving one.
    fn transfer_triangles(&mut self, drop: usize, keep: usize) -> Result<(), IncidenceError> {
        let triangles = std::mem::take(&mut self.edges[drop].incident_triangles);
        for t in triangles {
            if self.triangle_has_vanished(t) {
                continue;
            }
            // Vertex slots are left for the triangle pass of the same union.
            self.replace_edge(t, drop, keep)?;
            self.add_incident_triangle(keep, t);
        }
        Ok(())
    }

    fn merge_incident_triangles(&mut self, surviving: usize, perishing: usize) -> Result<(), IncidenceError> {
        let mut incident: Vec<(TriangleKey, usize)> =
            std::mem::take(&mut self.vertices[perishing].incident_triangles)
                .into_iter()
                .collect();
        incident.sort_unstable_by_key(|&(_, t)| t);

        for (old_key, t) in incident {
            if self.triangles[t].removed {
                continue;
            }
            let new_key = self.replace_vertex(t, perishing, surviving)?;
            let resolved = self.triangle_vertices(t);

            if new_key.is_degenerate() {
                // Spanned the contracted edge; it collapses with it.
                for v in resolved {
                    self.unregister_triangle_key(v, &old_key, t);
                }
                continue;
            }

            for v in resolved {
                if v != surviving {
                    self.unregister_triangle_key(v, &old_key, t);
                }
            }

            let winner = match self.triangle_at(surviving, &new_key) {
                Some(registered) if registered != t => {
                    // Lower height is born earlier and stays canonical.
                    let (keep, drop) = if self.triangles[t].height < self.triangles[registered].height {
                        (t, registered)
                    } else {
                        (registered, t)
                    };
                    trace!(triangle = %new_key, keep, drop, "mirrored triangles collapsed");
                    self.triangles[drop].removed = true;
                    keep
                }
                _ => t,
            };
            for v in resolved {
                self.vertices[v].incident_triangles.insert(new_key, winner);
            }
        }
        Ok(())
    }
}
