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

use std::{
    io,
    path::PathBuf,
};

use crate::{
    complex::Complex,
    io::delimited::{LoadError, load_complex, save_complex},
    numeric::Height,
};

/// A named complex stored as `<dir>/<name>/<name>{Data,Edges,Triangles}.txt`.
///
/// Results go next to the input as `<name>Contracted{Data,Edges,Triangles}.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub dir: PathBuf,
    pub name: String,
}

impl Dataset {
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
        }
    }

    pub fn folder(&self) -> PathBuf {
        self.dir.join(&self.name)
    }

    fn file(&self, suffix: &str) -> PathBuf {
        self.folder().join(format!("{}{}.txt", self.name, suffix))
    }

    pub fn vertex_path(&self) -> PathBuf {
        self.file("Data")
    }

    pub fn edge_path(&self) -> PathBuf {
        self.file("Edges")
    }

    pub fn triangle_path(&self) -> PathBuf {
        self.file("Triangles")
    }

    pub fn contracted_vertex_path(&self) -> PathBuf {
        self.file("ContractedData")
    }

    pub fn contracted_edge_path(&self) -> PathBuf {
        self.file("ContractedEdges")
    }

    pub fn contracted_triangle_path(&self) -> PathBuf {
        self.file("ContractedTriangles")
    }

    pub fn load<T: Height>(&self) -> Result<Complex<T>, LoadError> {
        load_complex(&self.vertex_path(), &self.edge_path(), &self.triangle_path())
    }

    pub fn save<T: Height>(&self, complex: &Complex<T>) -> io::Result<()> {
        save_complex(
            complex,
            &self.contracted_vertex_path(),
            &self.contracted_edge_path(),
            &self.contracted_triangle_path(),
        )
    }

    pub fn exists(&self) -> bool {
        [self.vertex_path(), self.edge_path(), self.triangle_path()]
            .iter()
            .all(|p| p.is_file())
    }
}
