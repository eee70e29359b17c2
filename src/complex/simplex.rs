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

use crate::{
    complex::{
        basic_types::Complex,
        keys::{EdgeKey, TriangleKey},
    },
    numeric::Height,
};

/// What every vertex, edge and triangle exposes.
pub trait Simplex<T: Height> {
    fn height(&self) -> T;
    /// 0 for a vertex, 1 for an edge, 2 for a triangle.
    fn dimension(&self) -> usize;
    fn has_vanished(&self) -> bool;
}

#[derive(Clone, Copy)]
pub struct VertexView<'a, T: Height> {
    complex: &'a Complex<T>,
    id: usize,
}

#[derive(Clone, Copy)]
pub struct EdgeView<'a, T: Height> {
    complex: &'a Complex<T>,
    id: usize,
}

#[derive(Clone, Copy)]
pub struct TriangleView<'a, T: Height> {
    complex: &'a Complex<T>,
    id: usize,
}

impl<T: Height> Complex<T> {
    pub fn vertex(&self, v: usize) -> VertexView<'_, T> {
        VertexView { complex: self, id: v }
    }

    pub fn edge(&self, e: usize) -> EdgeView<'_, T> {
        EdgeView { complex: self, id: e }
    }

    pub fn triangle(&self, t: usize) -> TriangleView<'_, T> {
        TriangleView { complex: self, id: t }
    }

    pub fn live_vertices(&self) -> impl Iterator<Item = VertexView<'_, T>> + '_ {
        (0..self.vertices.len())
            .map(|v| self.vertex(v))
            .filter(|v| !v.has_vanished())
    }

    pub fn live_edges(&self) -> impl Iterator<Item = EdgeView<'_, T>> + '_ {
        (0..self.edges.len())
            .map(|e| self.edge(e))
            .filter(|e| !e.has_vanished())
    }

    pub fn live_triangles(&self) -> impl Iterator<Item = TriangleView<'_, T>> + '_ {
        (0..self.triangles.len())
            .map(|t| self.triangle(t))
            .filter(|t| !t.has_vanished())
    }
}

impl<'a, T: Height> VertexView<'a, T> {
    pub fn id(&self) -> usize {
        self.id
    }

    /// Index of the vertex this one resolves to.
    pub fn index(&self) -> usize {
        self.complex.root(self.id)
    }

    pub fn is_boundary(&self) -> bool {
        self.complex.is_boundary(self.id)
    }
}

impl<'a, T: Height> EdgeView<'a, T> {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn key(&self) -> EdgeKey {
        self.complex.edge_key(self.id)
    }

    pub fn starting_time(&self) -> T {
        self.complex.starting_time(self.id)
    }

    pub fn ending_time(&self) -> T {
        self.complex.ending_time(self.id)
    }
}

impl<'a, T: Height> TriangleView<'a, T> {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn key(&self) -> TriangleKey {
        self.complex.triangle_key(self.id)
    }
}

impl<T: Height> Simplex<T> for VertexView<'_, T> {
    fn height(&self) -> T {
        self.complex.vertex_height(self.id)
    }
    fn dimension(&self) -> usize {
        0
    }
    fn has_vanished(&self) -> bool {
        self.complex.vertex_has_vanished(self.id)
    }
}

impl<T: Height> Simplex<T> for EdgeView<'_, T> {
    fn height(&self) -> T {
        self.complex.edge_height(self.id)
    }
    fn dimension(&self) -> usize {
        1
    }
    fn has_vanished(&self) -> bool {
        self.complex.edge_has_vanished(self.id)
    }
}

impl<T: Height> Simplex<T> for TriangleView<'_, T> {
    fn height(&self) -> T {
        self.complex.triangle_height(self.id)
    }
    fn dimension(&self) -> usize {
        2
    }
    fn has_vanished(&self) -> bool {
        self.complex.triangle_has_vanished(self.id)
    }
}

// Textual forms are the resolved canonical keys.

impl<T: Height> fmt::Display for VertexView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

impl<T: Height> fmt::Display for EdgeView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl<T: Height> fmt::Display for TriangleView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
