use crate::{CrvError, CrvResult, Family, Topology, MAX_GREGORY_ORDER, MAX_ORDER};

// node counts indexed by P - 1

const EDGE_INTERNAL: [usize; MAX_ORDER] = [0, 1, 2, 3, 4, 5];
const EDGE_TOTAL: [usize; MAX_ORDER] = [2, 3, 4, 5, 6, 7];

const FACE_INTERNAL: [usize; MAX_ORDER] = [0, 0, 1, 3, 6, 10];
const FACE_TOTAL: [usize; MAX_ORDER] = [3, 6, 10, 15, 21, 28];
const GREGORY_FACE_INTERNAL: [usize; MAX_GREGORY_ORDER] = [0, 0, 3, 6];
const GREGORY_FACE_TOTAL: [usize; MAX_GREGORY_ORDER] = [3, 6, 12, 18];

const TET_INTERNAL: [usize; MAX_ORDER] = [0, 0, 0, 1, 4, 10];
const TET_TOTAL: [usize; MAX_ORDER] = [4, 10, 20, 35, 56, 84];
const GREGORY_TET_INTERNAL: [usize; MAX_GREGORY_ORDER] = [0, 0, 0, 1];
const GREGORY_TET_TOTAL: [usize; MAX_GREGORY_ORDER] = [4, 10, 28, 47];

/// Number of nodes owned by the entity itself (not shared with any sub-entity)
pub fn interior_node_count(topology: Topology, family: Family, order: usize) -> CrvResult<usize> {
    let p = checked_index(topology, family, order)?;
    Ok(match (topology, family) {
        (Topology::Vertex, _) => 1,
        (Topology::Edge, _) => EDGE_INTERNAL[p],
        (Topology::Triangle, Family::Gregory) => GREGORY_FACE_INTERNAL[p],
        (Topology::Triangle, _) => FACE_INTERNAL[p],
        (Topology::Tet, Family::Gregory) => GREGORY_TET_INTERNAL[p],
        (Topology::Tet, _) => TET_INTERNAL[p],
    })
}

/// Number of nodes on the closure of the entity (its own nodes plus all boundary nodes)
pub fn total_node_count(topology: Topology, family: Family, order: usize) -> CrvResult<usize> {
    let p = checked_index(topology, family, order)?;
    Ok(match (topology, family) {
        (Topology::Vertex, _) => 1,
        (Topology::Edge, _) => EDGE_TOTAL[p],
        (Topology::Triangle, Family::Gregory) => GREGORY_FACE_TOTAL[p],
        (Topology::Triangle, _) => FACE_TOTAL[p],
        (Topology::Tet, Family::Gregory) => GREGORY_TET_TOTAL[p],
        (Topology::Tet, _) => TET_TOTAL[p],
    })
}

fn checked_index(topology: Topology, family: Family, order: usize) -> CrvResult<usize> {
    let max = match family {
        Family::Gregory => MAX_GREGORY_ORDER,
        Family::Bezier | Family::Blended => MAX_ORDER,
    };
    if order == 0 || order > max {
        Err(CrvError::UnsupportedOrder {
            topology,
            family,
            order,
            expected: match family {
                Family::Gregory => "1 <= P <= 4",
                Family::Bezier | Family::Blended => "1 <= P <= 6",
            },
        })
    } else {
        Ok(order - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // total = sum over the closure of each sub-entity's interior count
    fn closure_total(topology: Topology, family: Family, order: usize) -> usize {
        (0..=topology.dimension())
            .map(|d| {
                let sub = Topology::of_dimension(d).unwrap();
                topology.count_downward(d) * interior_node_count(sub, family, order).unwrap()
            })
            .sum()
    }

    #[test]
    fn totals_match_closures() {
        for order in 1..=MAX_ORDER {
            for topology in Topology::ALL {
                assert_eq!(
                    total_node_count(topology, Family::Bezier, order).unwrap(),
                    closure_total(topology, Family::Bezier, order),
                    "{} P = {}",
                    topology,
                    order
                );
            }
        }

        for order in 1..=MAX_GREGORY_ORDER {
            for topology in Topology::ALL {
                assert_eq!(
                    total_node_count(topology, Family::Gregory, order).unwrap(),
                    closure_total(topology, Family::Gregory, order),
                    "gregory {} P = {}",
                    topology,
                    order
                );
            }
        }
    }

    #[test]
    fn bezier_counts_are_simplex_numbers() {
        for order in 1..=MAX_ORDER {
            let p = order;
            assert_eq!(total_node_count(Topology::Edge, Family::Bezier, p).unwrap(), p + 1);
            assert_eq!(
                total_node_count(Topology::Triangle, Family::Bezier, p).unwrap(),
                (p + 1) * (p + 2) / 2
            );
            assert_eq!(
                total_node_count(Topology::Tet, Family::Bezier, p).unwrap(),
                (p + 1) * (p + 2) * (p + 3) / 6
            );
        }
    }

    #[test]
    fn gregory_orders_are_bounded() {
        assert_eq!(total_node_count(Topology::Tet, Family::Gregory, 4), Ok(47));
        assert_eq!(interior_node_count(Topology::Triangle, Family::Gregory, 3), Ok(3));
        assert!(matches!(
            interior_node_count(Topology::Triangle, Family::Gregory, 5),
            Err(CrvError::UnsupportedOrder { order: 5, .. })
        ));
        assert!(total_node_count(Topology::Edge, Family::Bezier, 0).is_err());
        assert!(total_node_count(Topology::Edge, Family::Blended, 7).is_err());
    }
}
