// tests/test_legality.rs

mod common;

use simplex_contract::{Complex, ContractReject, EdgeKey, TriangleKey};

use common::{TETRAHEDRON, build, single_triangle};

#[test]
fn test_triangle_edges_are_contractible() {
    let complex = single_triangle();
    for e in 0..3 {
        assert!(complex.is_viable(e));
        assert!(complex.link_condition(e), "edge {}", complex.edge_key(e));
        assert!(complex.is_epsilon_sat(e, 0.0));
        assert_eq!(complex.check_contractible(e, 10.0), Ok(()));
    }
}

#[test]
fn test_tetrahedron_edges_fail_link_condition() {
    let complex = build(&[0.0, 1.0, 2.0, 3.0], &TETRAHEDRON);
    for e in 0..complex.num_edges() {
        assert!(!complex.link_condition(e));
        assert_eq!(complex.check_contractible(e, 100.0), Err(ContractReject::LinkCondition));
    }
}

#[test]
fn test_shared_neighbour_outside_the_edge_blocks_contraction() {
    // Triangle (0,1,2) plus a bare 3-cycle 0 - 1 - 3.
    let mut complex = single_triangle();
    complex.add_vertex(3.0).unwrap();
    complex.add_edge(0, 3, None).unwrap();
    complex.add_edge(1, 3, None).unwrap();

    assert!(!complex.link_condition(0));
    assert_eq!(complex.check_contractible(0, 10.0), Err(ContractReject::LinkCondition));

    // Filling the cycle turns 3 into an apex of (0,1).
    complex.add_triangle(0, 1, 3, None).unwrap();
    assert!(complex.link_condition(0));
}

#[test]
fn test_epsilon_bounds_the_perishing_vertex() {
    let mut complex: Complex<f64> = Complex::new();
    complex.add_vertex(0.0).unwrap();
    complex.add_vertex(0.5).unwrap();
    let e = complex.add_edge(0, 1, Some(5.0)).unwrap();

    // Vertex 1 perishes and would be shifted from 0.5 to 5.
    assert!(!complex.is_epsilon_sat(e, 4.0));
    assert_eq!(complex.check_contractible(e, 4.0), Err(ContractReject::EpsilonBound));
    assert!(complex.is_epsilon_sat(e, 4.5));
    assert!(complex.is_contractible(e, 4.5));
}

#[test]
fn test_epsilon_bounds_the_perishing_mirror() {
    let mut complex: Complex<f64> = Complex::new();
    for h in [0.0, 1.0, 2.0] {
        complex.add_vertex(h).unwrap();
    }
    let e01 = complex.add_edge(0, 1, None).unwrap();
    complex.add_edge(1, 2, None).unwrap();
    complex.add_edge(0, 2, None).unwrap();
    complex.add_triangle(0, 1, 2, Some(7.0)).unwrap();

    // Both mirrors sit at 2; the triangle at 7 shifts by 5.
    assert!(!complex.is_epsilon_sat(e01, 4.9));
    assert!(complex.is_epsilon_sat(e01, 5.0));
}

#[test]
fn test_boundary_edges_are_not_viable() {
    let mut complex = single_triangle();
    complex.set_boundary(1).unwrap();
    assert!(!complex.is_viable(0));
    assert_eq!(complex.check_contractible(0, 10.0), Err(ContractReject::Boundary));
    // (0,2) avoids vertex 1.
    assert!(complex.is_viable(2));
}

#[test]
fn test_contract_merges_into_lower_endpoint() {
    let mut complex = single_triangle();
    assert_eq!(complex.contract(0), Ok(0));

    assert_eq!(complex.check_contractible(0, 10.0), Err(ContractReject::Vanished));
    // (1,2) landed on (0,2) at the same height; the registered one stays.
    assert!(complex.edge_has_vanished(1));
    assert!(!complex.edge_has_vanished(2));
    assert_eq!(complex.check_contractible(1, 10.0), Err(ContractReject::Vanished));
    assert!(complex.triangle_has_vanished(0));
    assert_eq!(complex.edge_at(0, &EdgeKey::new(0, 2)), Some(2));
    assert_eq!(complex.incident_triangle_count(0), 0);
    assert_eq!(complex.incident_triangle_count(2), 0);
    assert_eq!(complex.validate(), Ok(()));
}

#[test]
fn test_contraction_lifts_triangle_heights() {
    // Square 0-1-2-3 with diagonal (1,3); vertex 1 merges into 0.
    let mut complex = build(&[0.0, 1.0, 4.0, 3.0], &[[0, 1, 3], [1, 2, 3]]);
    let e01 = complex
        .edge_at(0, &EdgeKey::new(0, 1))
        .expect("edge (0,1)");
    assert_eq!(complex.contract(e01), Ok(0));

    let live: Vec<_> = complex.live_triangles().map(|t| t.key()).collect();
    assert_eq!(live, vec![TriangleKey::new(0, 2, 3)]);
    assert_eq!(complex.triangle_height(1), 4.0);
    assert_eq!(complex.validate(), Ok(()));
}
