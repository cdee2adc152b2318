extern crate nalgebra;
extern crate topology;

mod edge;
mod orbit;

pub use edge::EdgeNodes;
pub use orbit::{count_interior, interior_orbits, locate, Orbit};

use nalgebra::Vector3;
use topology::{
    interior_node_count, CrvError, CrvResult, Family, Topology, MAX_ORDER, TET_ORDER,
};

/// Parametric coordinate of an entity's `node`-th interior node
///
/// `Blended` entities use the curve node layout on edges; `Bezier` and `Gregory` entities use
/// the interpolating layout.
pub fn node_xi(
    topology: Topology,
    order: usize,
    family: Family,
    node: usize,
) -> CrvResult<Vector3<f64>> {
    match family {
        Family::Blended => bezier_curve_node_xi(topology, order, node),
        Family::Bezier | Family::Gregory => bezier_node_xi(topology, order, node),
    }
}

/// Interior node placement for blended Bezier curves
///
/// Only edges above linear order have a distinct curve layout; everything else falls back to
/// [bezier_node_xi].
pub fn bezier_curve_node_xi(topology: Topology, order: usize, node: usize) -> CrvResult<Vector3<f64>> {
    match topology {
        Topology::Edge if order > 1 => edge_xi(EdgeNodes::Curve, order, node),
        _ => bezier_node_xi(topology, order, node),
    }
}

/// Interior interpolation node placement
///
/// * Edge: `(xi, 0, 0)` with `xi` in (-1.0, +1.0)
/// * Triangle: `(x, y, 1 - x - y)`, only for `4 <= P <= 6`
/// * Tet: the centroid `(0.25, 0.25, 0.25)`, only for `P == 4`
/// * Vertex: the origin
pub fn bezier_node_xi(topology: Topology, order: usize, node: usize) -> CrvResult<Vector3<f64>> {
    match topology {
        Topology::Vertex => vertex_xi(order, node),
        Topology::Edge => edge_xi(EdgeNodes::Interpolating, order, node),
        Topology::Triangle => triangle_xi(order, node),
        Topology::Tet => tet_xi(order, node),
    }
}

/// Every interior node of an order-`order` triangle, in node order
pub fn triangle_interior_nodes(order: usize) -> CrvResult<Vec<Vector3<f64>>> {
    let count = interior_node_count(Topology::Triangle, Family::Bezier, order)?;
    (0..count).map(|node| triangle_xi(order, node)).collect()
}

fn vertex_xi(order: usize, node: usize) -> CrvResult<Vector3<f64>> {
    let count = interior_node_count(Topology::Vertex, Family::Bezier, order)?;
    check_node(Topology::Vertex, order, node, count)?;
    Ok(Vector3::zeros())
}

fn edge_xi(nodes: EdgeNodes, order: usize, node: usize) -> CrvResult<Vector3<f64>> {
    let xs = nodes.abscissas(order).ok_or(CrvError::UnsupportedOrder {
        topology: Topology::Edge,
        family: match nodes {
            EdgeNodes::Interpolating => Family::Bezier,
            EdgeNodes::Curve => Family::Blended,
        },
        order,
        expected: "1 <= P <= 6",
    })?;
    check_node(Topology::Edge, order, node, xs.len())?;

    Ok(Vector3::new(xs[node], 0.0, 0.0))
}

fn triangle_xi(order: usize, node: usize) -> CrvResult<Vector3<f64>> {
    if order < 4 || order > MAX_ORDER {
        return Err(CrvError::UnsupportedOrder {
            topology: Topology::Triangle,
            family: Family::Bezier,
            order,
            expected: if order < 4 { "P >= 4" } else { "P <= 6" },
        });
    }
    let count = interior_node_count(Topology::Triangle, Family::Bezier, order)?;
    check_node(Topology::Triangle, order, node, count)?;

    let (family, rotation) = locate(order, node).ok_or(CrvError::InvalidNodeIndex {
        topology: Topology::Triangle,
        order,
        node,
        count,
    })?;
    Ok(family.member(rotation))
}

fn tet_xi(order: usize, node: usize) -> CrvResult<Vector3<f64>> {
    if order != TET_ORDER {
        return Err(CrvError::UnsupportedOrder {
            topology: Topology::Tet,
            family: Family::Bezier,
            order,
            expected: "P == 4",
        });
    }
    check_node(Topology::Tet, order, node, 1)?;

    Ok(Vector3::new(0.25, 0.25, 0.25))
}

fn check_node(topology: Topology, order: usize, node: usize, count: usize) -> CrvResult<()> {
    if node < count {
        Ok(())
    } else {
        Err(CrvError::InvalidNodeIndex {
            topology,
            order,
            node,
            count,
        })
    }
}
