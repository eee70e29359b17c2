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

mod common;

use simplex_contract::{
    Complex, EdgeKey, Simplex, TriangleKey,
    complex::{ConstructionError, ValidationError},
};

use common::{build, single_triangle};

#[test]
fn test_vertex_indices_follow_insertion_order() {
    let mut complex: Complex<f64> = Complex::new();
    assert_eq!(complex.add_vertex(3.0), Ok(0));
    assert_eq!(complex.add_vertex(1.0), Ok(1));
    assert_eq!(complex.num_vertices(), 2);
    assert!(matches!(
        complex.add_vertex(f64::NAN),
        Err(ConstructionError::NonFiniteHeight { .. })
    ));
    assert_eq!(complex.num_vertices(), 2);
}

#[test]
fn test_add_edge_rejects_bad_input() {
    let mut complex: Complex<f64> = Complex::new();
    complex.add_vertex(0.0).unwrap();
    complex.add_vertex(2.0).unwrap();

    assert_eq!(complex.add_edge(0, 5, None), Err(ConstructionError::MissingVertex(5)));
    assert_eq!(complex.add_edge(1, 1, None), Err(ConstructionError::DegenerateEdge(1)));
    assert!(matches!(
        complex.add_edge(0, 1, Some(1.0)),
        Err(ConstructionError::HeightBelowFace { .. })
    ));
    assert!(matches!(
        complex.add_edge(0, 1, Some(f64::NAN)),
        Err(ConstructionError::NonFiniteHeight { .. })
    ));

    let e = complex.add_edge(0, 1, None).unwrap();
    assert_eq!(complex.add_edge(1, 0, None), Err(ConstructionError::DuplicateEdge(EdgeKey::new(0, 1))));
    assert_eq!(complex.num_edges(), 1);
    assert_eq!(complex.edge_key(e), EdgeKey::new(0, 1));
}

#[test]
fn test_edge_defaults_and_endpoint_roles() {
    let mut complex: Complex<f64> = Complex::new();
    complex.add_vertex(0.0).unwrap();
    complex.add_vertex(1.5).unwrap();
    complex.add_vertex(1.5).unwrap();

    let e = complex.add_edge(0, 1, None).unwrap();
    assert_eq!(complex.edge_height(e), 1.5);
    // The higher endpoint is listed first and perishes.
    assert_eq!(complex.first_vertex(e), 1);
    assert_eq!(complex.second_vertex(e), 0);
    assert_eq!(complex.perishing_vertex(e), 1);
    assert_eq!(complex.surviving_vertex(e), 0);
    assert_eq!(complex.other_vertex(e, 0), Some(1));
    assert_eq!(complex.other_vertex(e, 2), None);

    // Equal heights: the larger index perishes.
    let f = complex.add_edge(2, 1, Some(4.0)).unwrap();
    assert_eq!(complex.edge_height(f), 4.0);
    assert_eq!(complex.perishing_vertex(f), 2);
    assert_eq!(complex.surviving_vertex(f), 1);
}

#[test]
fn test_add_triangle_rejects_bad_input() {
    let mut complex: Complex<f64> = Complex::new();
    for h in [0.0, 1.0, 2.0, 3.0] {
        complex.add_vertex(h).unwrap();
    }
    let e01 = complex.add_edge(0, 1, None).unwrap();
    let e12 = complex.add_edge(1, 2, None).unwrap();
    let e23 = complex.add_edge(2, 3, None).unwrap();

    assert!(matches!(
        complex.add_triangle(0, 1, 2, None),
        Err(ConstructionError::MissingEdge(_))
    ));
    assert_eq!(complex.add_triangle(0, 1, 9, None), Err(ConstructionError::MissingVertex(9)));
    assert_eq!(
        complex.add_triangle_from_edges([e01, e12, e01], None),
        Err(ConstructionError::RepeatedEdge(e01))
    );
    assert_eq!(
        complex.add_triangle_from_edges([e01, e12, 42], None),
        Err(ConstructionError::UnknownEdge(42))
    );

    let e02 = complex.add_edge(0, 2, None).unwrap();
    assert_eq!(
        complex.add_triangle_from_edges([e01, e23, e02], None),
        Err(ConstructionError::NotATriangle(4))
    );
    assert!(matches!(
        complex.add_triangle(0, 1, 2, Some(1.0)),
        Err(ConstructionError::HeightBelowFace { .. })
    ));

    let t = complex.add_triangle_from_edges([e01, e12, e02], None).unwrap();
    assert_eq!(complex.triangle_height(t), 2.0);
    assert_eq!(complex.triangle_key(t), TriangleKey::new(0, 1, 2));
    assert_eq!(
        complex.add_triangle(2, 0, 1, None),
        Err(ConstructionError::DuplicateTriangle(TriangleKey::new(0, 1, 2)))
    );
}

#[test]
fn test_triangle_incidence_after_construction() {
    let complex = single_triangle();
    assert_eq!(complex.simplex_count(), 7);
    assert_eq!(complex.incident_edge_count(0), 2);
    assert_eq!(complex.incident_triangle_count(2), 1);
    assert!(complex.adjacent_to_triangle(1, &TriangleKey::new(0, 1, 2)));
    assert_eq!(complex.edge_at(2, &EdgeKey::new(0, 2)), Some(2));
    assert_eq!(complex.incident_edges(1), vec![0, 1]);

    assert_eq!(complex.edge_triangles(0).collect::<Vec<_>>(), vec![0]);
    assert_eq!(complex.starting_time(1), 1.0);
    assert_eq!(complex.ending_time(1), 2.0);
    assert!(complex.triangle_contains_edge(0, 2));
    assert!(complex.triangle_contains_vertex(0, 1));
    assert_eq!(complex.apex(0, 0), Some(2));

    // (0,1): first vertex 1 reaches mirror (1,2), second vertex 0 reaches (0,2).
    assert_eq!(complex.first_mirror(0, 0), Some(1));
    assert_eq!(complex.second_mirror(0, 0), Some(2));
    assert_eq!(complex.perishing_mirror(0, 0), Some(1));
    assert_eq!(complex.surviving_mirror(0, 0), Some(2));

    assert_eq!(complex.validate(), Ok(()));
}

#[test]
fn test_free_edge_never_ends() {
    let mut complex: Complex<f64> = Complex::new();
    complex.add_vertex(0.0).unwrap();
    complex.add_vertex(1.0).unwrap();
    let e = complex.add_edge(0, 1, None).unwrap();
    assert_eq!(complex.ending_time(e), f64::NEG_INFINITY);
    assert_eq!(complex.edge(e).ending_time(), f64::NEG_INFINITY);
}

#[test]
fn test_union_keeps_lowest_vertex() {
    let mut complex: Complex<f64> = Complex::new();
    for h in [3.0, 1.0, 2.0, 0.0] {
        complex.add_vertex(h).unwrap();
    }

    assert_eq!(complex.union(0, 1), Ok(1));
    assert_eq!(complex.root(0), 1);
    assert!(complex.vertex_has_vanished(0));
    assert_eq!(complex.vertex_height(0), 1.0);

    assert_eq!(complex.union(2, 0), Ok(1));
    assert_eq!(complex.union(2, 3), Ok(3));
    for v in 0..4 {
        assert_eq!(complex.find(v), 3);
        assert_eq!(complex.find(v), complex.root(v));
    }
    assert_eq!(complex.vertex_height(2), 0.0);
    assert_eq!(complex.live_vertices().map(|v| v.id()).collect::<Vec<_>>(), vec![3]);

    // Already merged.
    assert_eq!(complex.union(0, 2), Ok(3));
}

#[test]
fn test_union_ties_keep_smaller_index() {
    let mut complex: Complex<f64> = Complex::new();
    for _ in 0..3 {
        complex.add_vertex(1.0).unwrap();
    }
    assert_eq!(complex.union(2, 1), Ok(1));
    assert_eq!(complex.union(1, 0), Ok(0));
    assert_eq!(complex.vertex(2).index(), 0);
}

#[test]
fn test_union_collapses_mirror_edges() {
    // Path 1 - 0 - 2 plus edge 1 - 2 at a greater height.
    let mut complex: Complex<f64> = Complex::new();
    for h in [0.0, 1.0, 1.0] {
        complex.add_vertex(h).unwrap();
    }
    let e01 = complex.add_edge(0, 1, None).unwrap();
    let e02 = complex.add_edge(0, 2, Some(5.0)).unwrap();
    let e12 = complex.add_edge(1, 2, Some(3.0)).unwrap();

    assert_eq!(complex.union(0, 1), Ok(0));
    assert!(complex.edge_has_vanished(e01));
    // (1,2) becomes (0,2); the lower of the two stays.
    assert!(complex.edge_has_vanished(e02));
    assert!(!complex.edge_has_vanished(e12));
    assert_eq!(complex.edge_key(e12), EdgeKey::new(0, 2));
    assert_eq!(complex.edge_at(0, &EdgeKey::new(0, 2)), Some(e12));
    assert_eq!(complex.edge_at(2, &EdgeKey::new(0, 2)), Some(e12));
    assert_eq!(complex.validate(), Ok(()));
}

#[test]
fn test_detect_boundary_marks_open_edges() {
    let mut complex = build(&[0.0, 1.0, 2.0, 3.0], &[[0, 1, 2], [0, 2, 3]]);
    // The diagonal (0,2) has two triangles, all four rim edges one.
    assert_eq!(complex.detect_boundary(), 4);
    assert!(complex.is_boundary(0));
    assert!(complex.vertex(3).is_boundary());
    assert_eq!(complex.detect_boundary(), 0);

    let mut closed = build(&[0.0, 1.0, 2.0, 3.0], &common::TETRAHEDRON);
    assert_eq!(closed.detect_boundary(), 0);
    assert_eq!(closed.set_boundary(7), Err(ConstructionError::MissingVertex(7)));
    assert_eq!(closed.set_boundary(2), Ok(()));
    assert!(closed.is_boundary(2));
}

#[test]
fn test_validate_reports_nothing_on_fresh_complexes() {
    let complex = build(&[0.0, 1.0, 2.0, 3.0], &common::TETRAHEDRON);
    let result: Result<(), ValidationError> = complex.validate();
    assert!(result.is_ok());
    assert_eq!(complex.live_triangles().count(), 4);
    assert_eq!(complex.triangle(3).dimension(), 2);
    assert_eq!(complex.triangle(3).to_string(), "1,2,3");
}

/// Tetrahedron whose faces (0,2,3) and (1,2,3) carry the given heights.
fn tetrahedron_with_heights(h023: f64, h123: f64) -> Complex<f64> {
    let mut complex: Complex<f64> = Complex::new();
    for h in [0.0, 1.0, 2.0, 3.0] {
        complex.add_vertex(h).unwrap();
    }
    for (a, b) in [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)] {
        complex.add_edge(a, b, None).unwrap();
    }
    complex.add_triangle(0, 1, 2, None).unwrap();
    complex.add_triangle(0, 1, 3, None).unwrap();
    complex.add_triangle(0, 2, 3, Some(h023)).unwrap();
    complex.add_triangle(1, 2, 3, Some(h123)).unwrap();
    complex
}

#[test]
fn test_union_collapses_mirror_triangles() {
    // (1,2,3) lands on (0,2,3); the lower one stays, ties keep the registered one.
    for (h023, h123, survivor) in [(9.0, 4.0, 3), (4.0, 9.0, 2), (5.0, 5.0, 2)] {
        let mut complex = tetrahedron_with_heights(h023, h123);
        assert_eq!(complex.union(0, 1), Ok(0));

        let live: Vec<_> = complex.live_triangles().map(|t| (t.id(), t.key())).collect();
        assert_eq!(live, vec![(survivor, TriangleKey::new(0, 2, 3))], "heights {h023} / {h123}");
        assert_eq!(complex.triangle_at(0, &TriangleKey::new(0, 2, 3)), Some(survivor));
        assert_eq!(complex.triangle_at(2, &TriangleKey::new(0, 2, 3)), Some(survivor));
        assert_eq!(complex.validate(), Ok(()));
    }
}

#[test]
#[should_panic]
fn test_union_with_unknown_vertex_panics() {
    let mut complex: Complex<f64> = Complex::new();
    complex.add_vertex(0.0).unwrap();
    complex.add_vertex(1.0).unwrap();
    let _ = complex.union(0, 7);
}

#[test]
#[should_panic]
fn test_contract_unknown_edge_panics() {
    let mut complex = single_triangle();
    let _ = complex.contract(42);
}
