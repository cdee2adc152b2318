use log::{debug, trace};
use nalgebra::{DMatrix, Vector3};
use rayon::prelude::*;
use smallvec::SmallVec;
use std::fmt::Debug;
use topology::{CrvError, CrvResult, Topology};

/// Downward adjacency of one entity at one dimension (a tet has at most 6 edges)
pub type Adjacent<E> = SmallVec<[E; 6]>;

/// A field shape: node ownership, node placement and basis evaluation
pub trait FieldShape {
    /// Polynomial order of the field
    fn order(&self) -> usize;

    /// Number of nodes owned by an entity of `topology`
    fn count_nodes_on(&self, topology: Topology) -> CrvResult<usize>;

    /// Parametric coordinate of an entity's `node`-th owned node, in the entity's own space
    fn node_xi(&self, topology: Topology, node: usize) -> CrvResult<Vector3<f64>>;

    /// Number of basis functions of an element of `topology`
    fn count_element_nodes(&self, topology: Topology) -> CrvResult<usize>;

    /// Every basis function of a `topology` element, evaluated at `xi`
    fn values(&self, topology: Topology, xi: &Vector3<f64>) -> Vec<f64>;
}

/// The mesh queries needed to assemble an element transformation
pub trait CurvedMesh {
    type Entity: Copy + Debug;
    type Shape: FieldShape;

    fn shape(&self) -> &Self::Shape;

    /// Any one entity of `topology`, or `None` if the mesh has none
    fn first(&self, topology: Topology) -> Option<Self::Entity>;

    fn topology_of(&self, entity: Self::Entity) -> Topology;

    /// Sub-entities of dimension `dim`, in adjacency order
    ///
    /// An entity is its own sole sub-entity at its own dimension.
    fn downward(&self, entity: Self::Entity, dim: usize) -> Adjacent<Self::Entity>;

    /// Map a point `xi` of `boundary`'s parametric space into `element`'s parametric space
    fn boundary_to_element_xi(
        &self,
        boundary: Self::Entity,
        element: Self::Entity,
        xi: &Vector3<f64>,
    ) -> Vector3<f64>;
}

/// Build the `n x n` matrix taking control values to nodal values on a `topology` element
///
/// Row `r` holds every element basis function evaluated at the element's `r`-th node. Nodes
/// are visited by increasing sub-entity dimension, then in adjacency order, then by local
/// node index, so the element's own interior nodes fill the final rows.
///
/// The matrix only depends on the topology and the shape, so the first element of `topology`
/// in the mesh is sampled.
pub fn transformation_matrix<M: CurvedMesh>(mesh: &M, topology: Topology) -> CrvResult<DMatrix<f64>> {
    let element = mesh.first(topology).ok_or(CrvError::NoSampleElement(topology))?;
    let shape = mesh.shape();
    let n = shape.count_element_nodes(topology)?;
    debug!(
        "assembling {} x {} {} transformation (P = {}) from {:?}",
        n,
        n,
        topology,
        shape.order(),
        element
    );

    let found = count_closure_nodes(mesh, element, topology)?;
    if found != n {
        return Err(CrvError::NodeCountMismatch {
            topology,
            expected: n,
            found,
        });
    }

    let mut a = DMatrix::zeros(n, n);
    let mut row = 0;
    for dim in 0..=topology.dimension() {
        for boundary in mesh.downward(element, dim) {
            let boundary_topology = mesh.topology_of(boundary);
            let owned = shape.count_nodes_on(boundary_topology)?;
            trace!("{} {:?}: {} nodes from row {}", boundary_topology, boundary, owned, row);

            for node in 0..owned {
                let xi = shape.node_xi(boundary_topology, node)?;
                let element_xi = mesh.boundary_to_element_xi(boundary, element, &xi);
                let values = shape.values(topology, &element_xi);
                if values.len() != n {
                    return Err(CrvError::NodeCountMismatch {
                        topology,
                        expected: n,
                        found: values.len(),
                    });
                }

                for (col, value) in values.into_iter().enumerate() {
                    a[(row, col)] = value;
                }
                row += 1;
            }
        }
    }
    debug_assert_eq!(row, n);

    Ok(a)
}

/// Assemble the transformation matrices of several element topologies in parallel
///
/// Results are returned in the order of `topologies`; the first failure is returned instead.
pub fn transformation_matrices<M>(mesh: &M, topologies: &[Topology]) -> CrvResult<Vec<DMatrix<f64>>>
where
    M: CurvedMesh + Sync,
{
    topologies
        .par_iter()
        .map(|topology| transformation_matrix(mesh, *topology))
        .collect()
}

fn count_closure_nodes<M: CurvedMesh>(
    mesh: &M,
    element: M::Entity,
    topology: Topology,
) -> CrvResult<usize> {
    let mut count = 0;
    for dim in 0..=topology.dimension() {
        for boundary in mesh.downward(element, dim) {
            count += mesh.shape().count_nodes_on(mesh.topology_of(boundary))?;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{BezierShape, SimplexMesh};

    #[test]
    fn linear_elements_give_identity() {
        for topology in [Topology::Edge, Topology::Triangle, Topology::Tet] {
            let mesh = SimplexMesh::new(topology, BezierShape::new(1).unwrap());
            let a = transformation_matrix(&mesh, topology).unwrap();
            let n = topology.count_vertices();
            assert_eq!(a.shape(), (n, n));
            assert!((a - DMatrix::<f64>::identity(n, n)).norm() < 1e-14);
        }
    }

    #[test]
    fn missing_element_is_reported() {
        let mesh = SimplexMesh::new(Topology::Triangle, BezierShape::new(2).unwrap());
        assert_eq!(
            transformation_matrix(&mesh, Topology::Tet),
            Err(CrvError::NoSampleElement(Topology::Tet))
        );
    }

    #[test]
    fn boundary_entities_assemble_too() {
        // the edges of a triangle mesh are elements in their own right
        let mesh = SimplexMesh::new(Topology::Triangle, BezierShape::new(3).unwrap());
        let a = transformation_matrix(&mesh, Topology::Edge).unwrap();
        assert_eq!(a.shape(), (4, 4));
    }

    #[test]
    fn unsupported_node_layout_propagates() {
        // cubic triangles have an interior node but no interior placement
        let mesh = SimplexMesh::new(Topology::Triangle, BezierShape::new(3).unwrap());
        assert!(matches!(
            transformation_matrix(&mesh, Topology::Triangle),
            Err(CrvError::UnsupportedOrder { topology: Topology::Triangle, .. })
        ));
    }

    // a Bezier shape that misreports its element size or its basis length
    struct Miscounted {
        inner: BezierShape,
        extra_element_nodes: usize,
        extra_values: usize,
    }

    impl FieldShape for Miscounted {
        fn order(&self) -> usize {
            self.inner.order()
        }

        fn count_nodes_on(&self, topology: Topology) -> CrvResult<usize> {
            self.inner.count_nodes_on(topology)
        }

        fn node_xi(&self, topology: Topology, node: usize) -> CrvResult<Vector3<f64>> {
            self.inner.node_xi(topology, node)
        }

        fn count_element_nodes(&self, topology: Topology) -> CrvResult<usize> {
            Ok(self.inner.count_element_nodes(topology)? + self.extra_element_nodes)
        }

        fn values(&self, topology: Topology, xi: &Vector3<f64>) -> Vec<f64> {
            let mut values = self.inner.values(topology, xi);
            values.resize(values.len() + self.extra_values, 0.0);
            values
        }
    }

    #[test]
    fn element_size_must_match_closure() {
        let shape = Miscounted {
            inner: BezierShape::new(2).unwrap(),
            extra_element_nodes: 1,
            extra_values: 0,
        };
        let mesh = SimplexMesh::new(Topology::Triangle, shape);
        assert_eq!(
            transformation_matrix(&mesh, Topology::Triangle),
            Err(CrvError::NodeCountMismatch {
                topology: Topology::Triangle,
                expected: 7,
                found: 6
            })
        );
    }

    #[test]
    fn basis_length_must_match_element_size() {
        let shape = Miscounted {
            inner: BezierShape::new(1).unwrap(),
            extra_element_nodes: 0,
            extra_values: 2,
        };
        let mesh = SimplexMesh::new(Topology::Tet, shape);
        assert_eq!(
            transformation_matrix(&mesh, Topology::Tet),
            Err(CrvError::NodeCountMismatch {
                topology: Topology::Tet,
                expected: 4,
                found: 6
            })
        );
    }

    #[test]
    fn parallel_matches_sequential() {
        let mesh = SimplexMesh::new(Topology::Tet, BezierShape::new(4).unwrap());
        let topologies = [Topology::Edge, Topology::Triangle, Topology::Tet];
        let batch = transformation_matrices(&mesh, &topologies).unwrap();

        for (topology, a) in topologies.iter().zip(batch.iter()) {
            assert_eq!(a, &transformation_matrix(&mesh, *topology).unwrap());
        }
    }
}
