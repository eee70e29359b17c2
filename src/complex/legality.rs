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

use smallvec::SmallVec;

use crate::{
    complex::{
        basic_types::Complex,
        error::IncidenceError,
        keys::EdgeKey,
    },
    numeric::Height,
};

/// Why an edge may not be contracted right now. These are expected outcomes,
/// not errors: the engine simply skips the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractReject {
    /// Already merged away or absorbed by a mirror.
    Vanished,
    /// An endpoint lies on the boundary.
    Boundary,
    /// Contraction would change the topology of the surface.
    LinkCondition,
    /// Contraction would shift some simplex by more than epsilon.
    EpsilonBound,
}

impl fmt::Display for ContractReject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vanished => write!(f, "edge has vanished"),
            Self::Boundary => write!(f, "edge touches the boundary"),
            Self::LinkCondition => write!(f, "link condition violated"),
            Self::EpsilonBound => write!(f, "epsilon bound exceeded"),
        }
    }
}

impl<T: Height> Complex<T> {
    /// Boundary edges are never contracted.
    pub fn is_viable(&self, e: usize) -> bool {
        !self.is_boundary(self.first_vertex(e)) && !self.is_boundary(self.second_vertex(e))
    }

    /// True iff contracting `e` keeps the underlying surface's topology.
    ///
    /// With `v` the endpoint of lower edge degree and `w` the other:
    /// - every neighbour `o` of `v` that `w` also reaches must be the apex of a
    ///   live triangle on `e` (otherwise the merge creates a double edge);
    /// - no live triangle at `v` may, relabelled `v -> w`, coincide with a
    ///   triangle `w` already has (that would flatten a 2-cycle).
    pub fn link_condition(&self, e: usize) -> bool {
        let (a, b) = (self.first_vertex(e), self.second_vertex(e));
        let (v, w) = if self.incident_edge_count(a) < self.incident_edge_count(b) {
            (a, b)
        } else {
            (b, a)
        };

        let apexes: SmallVec<[usize; 2]> = self
            .edge_triangles(e)
            .filter_map(|t| self.apex(t, e))
            .collect();

        for f in self.incident_edges(v) {
            if self.edge_has_vanished(f) {
                continue;
            }
            let Some(o) = self.other_vertex(f, v) else { continue };
            if o == w || apexes.contains(&o) {
                continue;
            }
            if self.edge_at(w, &EdgeKey::new(w, o)).is_some() {
                return false;
            }
        }

        for t in self.incident_triangles(v) {
            if self.triangle_has_vanished(t) || self.triangle_contains_vertex(t, w) {
                continue;
            }
            let relabelled = self.triangle_key(t).relabel(v, w);
            if self.triangle_at(w, &relabelled).is_some() {
                return false;
            }
        }

        true
    }

    /// Whether contracting `e` shifts nothing by more than `epsilon`: neither
    /// the perishing endpoint relative to `e`, nor, for each live triangle on
    /// `e`, its perishing mirror relative to the triangle.
    pub fn is_epsilon_sat(&self, e: usize, epsilon: T) -> bool {
        let perishing = self.perishing_vertex(e);
        if self.edges[e].height - self.vertex_height(perishing) > epsilon {
            return false;
        }
        for t in self.edge_triangles(e) {
            let Some(mirror) = self.perishing_mirror(t, e) else {
                debug_assert!(false, "triangle {t} is registered on edge {e} but does not contain it");
                return false;
            };
            if self.triangles[t].height - self.edges[mirror].height > epsilon {
                return false;
            }
        }
        true
    }

    /// The single gate the engine consults; checks run cheapest first.
    pub fn check_contractible(&self, e: usize, epsilon: T) -> Result<(), ContractReject> {
        if self.edge_has_vanished(e) {
            return Err(ContractReject::Vanished);
        }
        if !self.is_viable(e) {
            return Err(ContractReject::Boundary);
        }
        if !self.link_condition(e) {
            return Err(ContractReject::LinkCondition);
        }
        if !self.is_epsilon_sat(e, epsilon) {
            return Err(ContractReject::EpsilonBound);
        }
        Ok(())
    }

    pub fn is_contractible(&self, e: usize, epsilon: T) -> bool {
        self.check_contractible(e, epsilon).is_ok()
    }

    /// Merges the endpoints of `e`. Returns the surviving vertex.
    ///
    /// PRE: [`Complex::is_contractible`] held for `e` in the current state.
    ///
    /// # Panics
    ///
    /// Panics if `e` is not an edge id of this complex.
    pub fn contract(&mut self, e: usize) -> Result<usize, IncidenceError> {
        let (a, b) = (self.first_vertex(e), self.second_vertex(e));
        self.union(a, b)
    }
}
