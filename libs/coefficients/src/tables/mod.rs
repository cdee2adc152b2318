//! Literal change-of-basis data, stored row-major
//!
//! Row `i` produces the `i`-th interior control point of the entity; column `j` weighs the
//! `j`-th interpolation node of its closure (vertices, then edges, then faces, then interior).

mod curve;
mod edge;
mod tet;
mod triangle;

use topology::{Family, Topology};

/// Literal table for one (topology, order, family) combination
///
/// Only literal data lives here. Gregory triangles are derived from the Bezier triangles and
/// Gregory edges reuse the Bezier edges; neither has an entry.
pub fn literal(topology: Topology, order: usize, family: Family) -> Option<&'static [f64]> {
    match (topology, family, order) {
        (Topology::Edge, Family::Bezier, 2) => Some(edge::EDGE_P2),
        (Topology::Edge, Family::Bezier, 3) => Some(edge::EDGE_P3),
        (Topology::Edge, Family::Bezier, 4) => Some(edge::EDGE_P4),
        (Topology::Edge, Family::Bezier, 5) => Some(edge::EDGE_P5),
        (Topology::Edge, Family::Bezier, 6) => Some(edge::EDGE_P6),

        (Topology::Edge, Family::Blended, 2) => Some(curve::CURVE_P2),
        (Topology::Edge, Family::Blended, 3) => Some(curve::CURVE_P3),
        (Topology::Edge, Family::Blended, 4) => Some(curve::CURVE_P4),
        (Topology::Edge, Family::Blended, 5) => Some(curve::CURVE_P5),
        (Topology::Edge, Family::Blended, 6) => Some(curve::CURVE_P6),

        (Topology::Triangle, Family::Bezier, 3) => Some(triangle::TRIANGLE_P3),
        (Topology::Triangle, Family::Bezier, 4) => Some(triangle::TRIANGLE_P4),
        (Topology::Triangle, Family::Bezier, 5) => Some(triangle::TRIANGLE_P5),
        (Topology::Triangle, Family::Bezier, 6) => Some(triangle::TRIANGLE_P6),

        (Topology::Tet, Family::Bezier, 4) => Some(tet::TET_P4),
        (Topology::Tet, Family::Gregory, 4) => Some(tet::GREGORY_TET_P4),

        _ => None,
    }
}

/// Range of orders with literal data, as shown in diagnostics
pub fn expected_orders(topology: Topology) -> &'static str {
    match topology {
        Topology::Edge => "2 <= P <= 6",
        Topology::Triangle => "3 <= P <= 6",
        Topology::Tet => "P == 4",
        Topology::Vertex => "no order",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_exist_where_expected() {
        for order in 2..=6 {
            assert!(literal(Topology::Edge, order, Family::Bezier).is_some());
            assert!(literal(Topology::Edge, order, Family::Blended).is_some());
        }
        for order in 3..=6 {
            assert!(literal(Topology::Triangle, order, Family::Bezier).is_some());
        }
        assert!(literal(Topology::Edge, 1, Family::Bezier).is_none());
        assert!(literal(Topology::Triangle, 2, Family::Bezier).is_none());
        assert!(literal(Topology::Triangle, 4, Family::Gregory).is_none());
        assert!(literal(Topology::Tet, 5, Family::Bezier).is_none());
        assert!(literal(Topology::Vertex, 1, Family::Bezier).is_none());
    }

    #[test]
    fn gregory_tet_face_blocks_are_zero_past_bezier_nodes() {
        let data = literal(Topology::Tet, 4, Family::Gregory).unwrap();
        // 4 vertices and 6 edges (3 nodes each) come first, then 4 faces of 6 nodes
        for face in 0..4 {
            let start = 4 + 18 + face * 6;
            assert!(data[start + 3..start + 6].iter().all(|c| *c == 0.0));
        }
    }
}
