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

//! Topology-preserving edge contraction of filtered simplicial 2-complexes.
//!
//! Each pass of [`contraction::run`] contracts a maximal set of edges whose
//! existence windows are pairwise disjoint and whose contraction moves no
//! simplex by more than `epsilon` in the filtration, so the persistence of the
//! result stays within `epsilon` times the number of passes of the input.

pub mod complex;
pub mod contraction;
pub mod io;
pub mod numeric;

pub use complex::{Complex, ContractReject, EdgeKey, Simplex, TriangleKey};
pub use contraction::{ContractionParams, ContractionReport, run};
pub use numeric::Height;
