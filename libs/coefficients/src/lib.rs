extern crate log;
extern crate nalgebra;
extern crate topology;

mod gregory;
mod tables;

pub use gregory::GREGORY_ROW_MAP;

use log::trace;
use nalgebra::DMatrix;
use topology::{
    interior_node_count, total_node_count, BlendingOrder, CrvError, CrvResult, Family, Topology,
    MAX_GREGORY_ORDER, MIN_GREGORY_ORDER, TET_ORDER,
};

/// Interpolation-to-Bezier coefficients for the plain family
///
/// Follows the mesh-level dispatch rule: on a 2D parametric domain (`dim == 2`) with blending
/// engaged, the blended curve table of order `order` is returned whatever `topology` is.
/// Otherwise the table is chosen by topology. Tets reject an engaged blending order.
pub fn transformation_coefficients(
    dim: usize,
    order: usize,
    topology: Topology,
    blending: BlendingOrder,
) -> CrvResult<DMatrix<f64>> {
    if dim == 2 && blending.is_engaged() {
        return table(Topology::Edge, order, Family::Blended);
    }

    match topology {
        Topology::Vertex => Err(CrvError::UnsupportedTopology {
            topology,
            family: Family::Bezier,
        }),
        Topology::Edge | Topology::Triangle => table(topology, order, Family::Bezier),
        Topology::Tet => tet_table(order, Family::Bezier, blending),
    }
}

/// Interpolation-to-Gregory coefficients
///
/// Only orders 3 and 4 exist. Edges share the Bezier edge table, triangles expand the Bezier
/// triangle table and tets have their own quartic table.
pub fn gregory_transformation_coefficients(
    order: usize,
    topology: Topology,
) -> CrvResult<DMatrix<f64>> {
    if !(MIN_GREGORY_ORDER..=MAX_GREGORY_ORDER).contains(&order) {
        return Err(CrvError::UnsupportedOrder {
            topology,
            family: Family::Gregory,
            order,
            expected: "P in 3..=4",
        });
    }

    match topology {
        Topology::Vertex => Err(CrvError::UnsupportedTopology {
            topology,
            family: Family::Gregory,
        }),
        Topology::Edge => table(Topology::Edge, order, Family::Bezier),
        Topology::Triangle => {
            let bezier = table(Topology::Triangle, order, Family::Bezier)?;
            let c = gregory::expand_triangle(order, &bezier)?;
            trace!("gregory triangle P = {} expanded to {:?}", order, c.shape());
            Ok(c)
        }
        Topology::Tet => tet_table(order, Family::Gregory, BlendingOrder::OFF),
    }
}

/// Coefficients keyed directly by representation family
///
/// * `Bezier`: chosen by topology; an engaged `blending` switches edges to the curve table and
///   is rejected on tets
/// * `Blended`: the curve table (edges only)
/// * `Gregory`: see [gregory_transformation_coefficients]
pub fn coefficients(
    topology: Topology,
    order: usize,
    family: Family,
    blending: BlendingOrder,
) -> CrvResult<DMatrix<f64>> {
    match (family, topology) {
        (Family::Gregory, _) => gregory_transformation_coefficients(order, topology),
        (_, Topology::Vertex) => Err(CrvError::UnsupportedTopology { topology, family }),
        (Family::Blended, Topology::Edge) => table(topology, order, Family::Blended),
        (Family::Blended, _) => Err(CrvError::UnsupportedTopology { topology, family }),
        (Family::Bezier, Topology::Edge) if blending.is_engaged() => {
            table(topology, order, Family::Blended)
        }
        (Family::Bezier, Topology::Tet) => tet_table(order, Family::Bezier, blending),
        (Family::Bezier, _) => table(topology, order, Family::Bezier),
    }
}

/// Every (topology, order, family) combination with coefficient data
pub fn supported_tables() -> Vec<(Topology, usize, Family)> {
    let mut supported = Vec::new();
    for order in 2..=6 {
        supported.push((Topology::Edge, order, Family::Bezier));
        supported.push((Topology::Edge, order, Family::Blended));
    }
    for order in 3..=6 {
        supported.push((Topology::Triangle, order, Family::Bezier));
    }
    supported.push((Topology::Tet, TET_ORDER, Family::Bezier));

    for order in MIN_GREGORY_ORDER..=MAX_GREGORY_ORDER {
        supported.push((Topology::Edge, order, Family::Gregory));
        supported.push((Topology::Triangle, order, Family::Gregory));
    }
    supported.push((Topology::Tet, TET_ORDER, Family::Gregory));

    supported
}

fn tet_table(order: usize, family: Family, blending: BlendingOrder) -> CrvResult<DMatrix<f64>> {
    if blending.is_engaged() {
        return Err(CrvError::BlendingEngaged {
            topology: Topology::Tet,
            blending,
        });
    }
    table(Topology::Tet, order, family)
}

// literal data shaped by the node count tables
fn table(topology: Topology, order: usize, family: Family) -> CrvResult<DMatrix<f64>> {
    let data = tables::literal(topology, order, family).ok_or(CrvError::UnsupportedOrder {
        topology,
        family,
        order,
        expected: tables::expected_orders(topology),
    })?;

    // blended curves carry the plain Bezier node counts
    let counted = match family {
        Family::Blended => Family::Bezier,
        _ => family,
    };
    let nb = interior_node_count(topology, counted, order)?;
    let ni = total_node_count(topology, counted, order)?;
    debug_assert_eq!(nb * ni, data.len(), "{} {} P = {}", family, topology, order);

    trace!("{} {} P = {}: {} x {} table", family, topology, order, nb, ni);
    Ok(DMatrix::from_row_slice(nb, ni, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW_SUM_TOL: f64 = 1e-9;

    fn rows_sum_to_one(c: &DMatrix<f64>) -> bool {
        c.row_iter().all(|row| (row.sum() - 1.0).abs() < ROW_SUM_TOL)
    }

    #[test]
    fn shapes_match_node_counts() {
        for (topology, order, family) in supported_tables() {
            let c = coefficients(topology, order, family, BlendingOrder::OFF).unwrap();
            let counted = if family == Family::Blended { Family::Bezier } else { family };
            assert_eq!(
                c.shape(),
                (
                    interior_node_count(topology, counted, order).unwrap(),
                    total_node_count(topology, counted, order).unwrap()
                ),
                "{} {} P = {}",
                family,
                topology,
                order
            );
        }
    }

    #[test]
    fn control_points_are_affine_combinations() {
        // constant fields must map to the same constant
        for (topology, order, family) in supported_tables() {
            let c = coefficients(topology, order, family, BlendingOrder::OFF).unwrap();
            assert!(rows_sum_to_one(&c), "{} {} P = {}", family, topology, order);
        }
    }

    #[test]
    fn quadratic_edge_table() {
        let c = transformation_coefficients(1, 2, Topology::Edge, BlendingOrder::OFF).unwrap();
        assert_eq!(c.shape(), (1, 3));
        assert!((c[(0, 0)] + 0.5).abs() < 1e-15);
        assert!((c[(0, 1)] + 0.5).abs() < 1e-15);
        assert!((c[(0, 2)] - 2.0).abs() < 1e-15);
    }

    #[test]
    fn blending_switches_planar_lookups_to_curves() {
        let curve = coefficients(Topology::Edge, 4, Family::Blended, BlendingOrder::OFF).unwrap();

        let planar = transformation_coefficients(2, 4, Topology::Triangle, BlendingOrder::new(2));
        assert_eq!(planar.unwrap(), curve);
        let planar = transformation_coefficients(2, 4, Topology::Edge, BlendingOrder::new(1));
        assert_eq!(planar.unwrap(), curve);

        let plain = transformation_coefficients(2, 4, Topology::Edge, BlendingOrder::OFF).unwrap();
        assert_ne!(plain, curve);
        let solid = transformation_coefficients(3, 4, Topology::Triangle, BlendingOrder::new(2));
        assert_eq!(solid.unwrap().shape(), (3, 15));
    }

    #[test]
    fn tets_reject_blending() {
        assert_eq!(
            transformation_coefficients(3, 4, Topology::Tet, BlendingOrder::new(1)),
            Err(CrvError::BlendingEngaged {
                topology: Topology::Tet,
                blending: BlendingOrder::new(1)
            })
        );
        assert!(coefficients(Topology::Tet, 4, Family::Bezier, BlendingOrder::new(3)).is_err());
        assert!(transformation_coefficients(3, 4, Topology::Tet, BlendingOrder::OFF).is_ok());
    }

    #[test]
    fn unsupported_orders_fail() {
        let err = transformation_coefficients(3, 5, Topology::Tet, BlendingOrder::OFF).unwrap_err();
        assert!(err.to_string().contains("P == 4"));
        assert!(transformation_coefficients(1, 7, Topology::Edge, BlendingOrder::OFF).is_err());
        assert!(transformation_coefficients(2, 2, Topology::Triangle, BlendingOrder::OFF).is_err());
        assert!(matches!(
            transformation_coefficients(0, 1, Topology::Vertex, BlendingOrder::OFF),
            Err(CrvError::UnsupportedTopology { .. })
        ));
    }

    #[test]
    fn gregory_order_is_bounded() {
        for order in [1, 2, 5, 6] {
            let err = gregory_transformation_coefficients(order, Topology::Triangle).unwrap_err();
            assert!(err.to_string().contains("P in 3..=4"), "{}", err);
        }
        assert!(gregory_transformation_coefficients(3, Topology::Tet).is_err());
    }

    #[test]
    fn gregory_edges_are_bezier_edges() {
        for order in 3..=4 {
            assert_eq!(
                gregory_transformation_coefficients(order, Topology::Edge).unwrap(),
                transformation_coefficients(1, order, Topology::Edge, BlendingOrder::OFF).unwrap()
            );
        }
    }

    #[test]
    fn cubic_gregory_triangle_repeats_interior_row() {
        let bezier = transformation_coefficients(2, 3, Topology::Triangle, BlendingOrder::OFF).unwrap();
        let gregory = gregory_transformation_coefficients(3, Topology::Triangle).unwrap();
        assert_eq!(gregory.shape(), (3, 12));

        for i in 0..3 {
            for j in 0..10 {
                assert_eq!(gregory[(i, j)], bezier[(0, j)]);
            }
            assert_eq!(gregory[(i, 10)], 0.0);
            assert_eq!(gregory[(i, 11)], 0.0);
        }
    }

    #[test]
    fn quartic_gregory_triangle_permutes_rows() {
        let bezier = transformation_coefficients(2, 4, Topology::Triangle, BlendingOrder::OFF).unwrap();
        let gregory = gregory_transformation_coefficients(4, Topology::Triangle).unwrap();
        assert_eq!(gregory.shape(), (6, 18));

        for i in 0..6 {
            let src = if i < 3 { i } else { GREGORY_ROW_MAP[i - 3] };
            for j in 0..15 {
                assert_eq!(gregory[(i, j)], bezier[(src, j)]);
            }
            for j in 15..18 {
                assert_eq!(gregory[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn blended_family_is_edge_only() {
        assert!(matches!(
            coefficients(Topology::Triangle, 4, Family::Blended, BlendingOrder::OFF),
            Err(CrvError::UnsupportedTopology { .. })
        ));
        assert_eq!(
            coefficients(Topology::Edge, 3, Family::Bezier, BlendingOrder::new(1)),
            coefficients(Topology::Edge, 3, Family::Blended, BlendingOrder::OFF)
        );
    }
}
