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
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use crate::{
    complex::{Complex, ConstructionError, Simplex},
    numeric::Height,
};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path}:{line}: {message}")]
    Malformed {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("{path}:{line}: {source}")]
    Construction {
        path: PathBuf,
        line: usize,
        #[source]
        source: ConstructionError,
    },
}

/// One parsed line of an edge or triangle file.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplexRecord<T> {
    /// 1-based line number in the source file.
    pub line: usize,
    pub vertices: SmallVec<[usize; 3]>,
    pub height: Option<T>,
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })
}

fn malformed(origin: &Path, line: usize, message: impl Into<String>) -> LoadError {
    LoadError::Malformed {
        path: origin.to_path_buf(),
        line,
        message: message.into(),
    }
}

/// Non-blank lines with their 1-based numbers, split on commas.
fn records<R: BufRead>(
    reader: R,
    origin: &Path,
) -> impl Iterator<Item = Result<(usize, Vec<String>), LoadError>> {
    reader.lines().enumerate().filter_map(move |(i, line)| {
        let line = match line {
            Ok(l) => l,
            Err(source) => return Some(Err(LoadError::Io { path: origin.to_path_buf(), source })),
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Ok((i + 1, trimmed.split(',').map(|f| f.trim().to_string()).collect())))
    })
}

/// Reads one vertex per line; the last comma-separated field is the height,
/// any fields before it are ignored.
pub fn read_vertex_heights<T: Height, R: BufRead>(reader: R, origin: &Path) -> Result<Vec<T>, LoadError> {
    let mut heights = Vec::new();
    for rec in records(reader, origin) {
        let (line, fields) = rec?;
        let last = fields.last().map(String::as_str).unwrap_or("");
        let h = last
            .parse::<T>()
            .map_err(|_| malformed(origin, line, format!("bad height '{last}'")))?;
        heights.push(h);
    }
    Ok(heights)
}

/// Reads `arity` vertex indices per line, optionally followed by a height.
pub fn read_simplices<T: Height, R: BufRead>(
    reader: R,
    origin: &Path,
    arity: usize,
) -> Result<Vec<SimplexRecord<T>>, LoadError> {
    let mut out = Vec::new();
    for rec in records(reader, origin) {
        let (line, fields) = rec?;
        if fields.len() < arity || fields.len() > arity + 1 {
            return Err(malformed(
                origin,
                line,
                format!("expected {arity} indices and an optional height, got {} fields", fields.len()),
            ));
        }
        let vertices = fields[..arity]
            .iter()
            .map(|f| {
                f.parse::<usize>()
                    .map_err(|_| malformed(origin, line, format!("bad vertex index '{f}'")))
            })
            .collect::<Result<SmallVec<[usize; 3]>, _>>()?;
        let height = match fields.get(arity) {
            None => None,
            Some(f) => Some(
                f.parse::<T>()
                    .map_err(|_| malformed(origin, line, format!("bad height '{f}'")))?,
            ),
        };
        out.push(SimplexRecord { line, vertices, height });
    }
    Ok(out)
}

/// Builds a complex from the three delimited files.
pub fn load_complex<T: Height>(
    vertex_path: &Path,
    edge_path: &Path,
    triangle_path: &Path,
) -> Result<Complex<T>, LoadError> {
    let mut complex = Complex::new();

    let heights: Vec<T> = read_vertex_heights(open(vertex_path)?, vertex_path)?;
    for (i, h) in heights.into_iter().enumerate() {
        complex.add_vertex(h).map_err(|source| LoadError::Construction {
            path: vertex_path.to_path_buf(),
            line: i + 1,
            source,
        })?;
    }

    for rec in read_simplices::<T, _>(open(edge_path)?, edge_path, 2)? {
        complex
            .add_edge(rec.vertices[0], rec.vertices[1], rec.height)
            .map_err(|source| LoadError::Construction {
                path: edge_path.to_path_buf(),
                line: rec.line,
                source,
            })?;
    }

    for rec in read_simplices::<T, _>(open(triangle_path)?, triangle_path, 3)? {
        complex
            .add_triangle(rec.vertices[0], rec.vertices[1], rec.vertices[2], rec.height)
            .map_err(|source| LoadError::Construction {
                path: triangle_path.to_path_buf(),
                line: rec.line,
                source,
            })?;
    }

    debug!(
        vertices = complex.num_vertices(),
        edges = complex.num_edges(),
        triangles = complex.num_triangles(),
        "complex loaded"
    );
    Ok(complex)
}

/// `index,height` per live vertex, in load order.
pub fn write_vertices<T: Height, W: Write>(complex: &Complex<T>, out: &mut W) -> io::Result<()> {
    for v in complex.live_vertices() {
        writeln!(out, "{},{}", v, v.height())?;
    }
    Ok(())
}

/// `i,j` per live edge, in load order.
pub fn write_edges<T: Height, W: Write>(complex: &Complex<T>, out: &mut W) -> io::Result<()> {
    for e in complex.live_edges() {
        writeln!(out, "{e}")?;
    }
    Ok(())
}

/// `i,j,k` per live triangle, in load order.
pub fn write_triangles<T: Height, W: Write>(complex: &Complex<T>, out: &mut W) -> io::Result<()> {
    for t in complex.live_triangles() {
        writeln!(out, "{t}")?;
    }
    Ok(())
}

/// Writes the live part of the complex to three files.
pub fn save_complex<T: Height>(
    complex: &Complex<T>,
    vertex_path: &Path,
    edge_path: &Path,
    triangle_path: &Path,
) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(vertex_path)?);
    write_vertices(complex, &mut out)?;
    out.flush()?;

    let mut out = BufWriter::new(File::create(edge_path)?);
    write_edges(complex, &mut out)?;
    out.flush()?;

    let mut out = BufWriter::new(File::create(triangle_path)?);
    write_triangles(complex, &mut out)?;
    out.flush()
}
