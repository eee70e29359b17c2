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

use thiserror::Error;

use crate::complex::keys::{EdgeKey, TriangleKey};

/// Malformed input handed to one of the `add_*` constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("height of {what} is NaN")]
    NonFiniteHeight { what: String },

    #[error("vertex {0} does not exist")]
    MissingVertex(usize),

    #[error("edge {0} does not exist")]
    MissingEdge(EdgeKey),

    #[error("edge id {0} does not exist")]
    UnknownEdge(usize),

    #[error("the vertices that make up an edge have to be different (got {0} twice)")]
    DegenerateEdge(usize),

    #[error("edge {0} already exists")]
    DuplicateEdge(EdgeKey),

    #[error("triangle edges must be distinct (edge {0} repeated)")]
    RepeatedEdge(usize),

    #[error("edges must collectively contain three vertices, found {0}")]
    NotATriangle(usize),

    #[error("triangle {0} already exists")]
    DuplicateTriangle(TriangleKey),

    /// A simplex was given a height lower than one of its faces.
    #[error("{what} has height {height} below the height {face_height} of a face")]
    HeightBelowFace {
        what: String,
        height: String,
        face_height: String,
    },

    #[error(transparent)]
    Incidence(#[from] IncidenceError),
}

/// Broken incidence bookkeeping. Indicates a corrupted load or an engine bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IncidenceError {
    #[error("vertex {vertex} is already incident to {key}")]
    AlreadyRegistered { vertex: usize, key: String },

    #[error("{key} does not touch vertex {vertex}")]
    NotIncident { vertex: usize, key: String },

    #[error("cannot register vanished {0}")]
    Vanished(String),

    #[error("triangle {triangle} does not contain {what}")]
    NotAConstituent { triangle: usize, what: String },
}

/// A broken invariant found by [`crate::complex::basic_types::Complex::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("filtration is not monotone: {0}")]
    NotMonotone(String),

    #[error("two live {kind}s share key {key}")]
    DuplicateKey { kind: &'static str, key: String },

    #[error("{0}")]
    Incidence(#[from] IncidenceError),
}
