use crate::transform::{Adjacent, CurvedMesh, FieldShape};
use nalgebra::Vector3;
use smallvec::{smallvec, SmallVec};
use topology::{
    interior_node_count, total_node_count, CrvError, CrvResult, Family, Topology, MAX_ORDER,
};

/// Barycentric weights or Bernstein multi-indices over an entity's vertices
type Bary<T> = SmallVec<[T; 4]>;

// ----------------------------------------------------------------------------------------------------
// Bernstein Shape
// ----------------------------------------------------------------------------------------------------

/// Bernstein (Bezier) field shape of order P
///
/// Basis functions of each element are ordered vertices, edges, faces, interior, with sub-entities
/// in their canonical local order. An edge's control points run from its first vertex toward its
/// second; a face's interior control points are listed ring by ring, starting next to its first
/// vertex and turning toward the second, then the third.
///
/// Owned nodes are placed by the interpolating node layout, or by the curve layout on edges when
/// built with [BezierShape::curve].
#[derive(Clone, Debug)]
pub struct BezierShape {
    order: usize,
    nodes: Family,
    indices: [Vec<Bary<usize>>; 4],
}

impl BezierShape {
    pub fn new(order: usize) -> CrvResult<Self> {
        Self::with_nodes(order, Family::Bezier)
    }

    /// A shape whose edge nodes follow the blended curve layout
    pub fn curve(order: usize) -> CrvResult<Self> {
        Self::with_nodes(order, Family::Blended)
    }

    fn with_nodes(order: usize, nodes: Family) -> CrvResult<Self> {
        if order == 0 || order > MAX_ORDER {
            return Err(CrvError::UnsupportedShapeOrder {
                family: nodes,
                order,
                expected: "1 <= P <= 6",
            });
        }

        Ok(Self {
            order,
            nodes,
            indices: Topology::ALL.map(|topology| control_indices(topology, order)),
        })
    }

    /// Bernstein multi-indices of a `topology` element's control points, in basis order
    pub fn control_indices(&self, topology: Topology) -> &[Bary<usize>] {
        &self.indices[topology.dimension()]
    }
}

impl FieldShape for BezierShape {
    fn order(&self) -> usize {
        self.order
    }

    fn count_nodes_on(&self, topology: Topology) -> CrvResult<usize> {
        interior_node_count(topology, Family::Bezier, self.order)
    }

    fn node_xi(&self, topology: Topology, node: usize) -> CrvResult<Vector3<f64>> {
        node_xi::node_xi(topology, self.order, self.nodes, node)
    }

    fn count_element_nodes(&self, topology: Topology) -> CrvResult<usize> {
        total_node_count(topology, Family::Bezier, self.order)
    }

    fn values(&self, topology: Topology, xi: &Vector3<f64>) -> Vec<f64> {
        let lambda = barycentric(topology, xi);
        self.control_indices(topology)
            .iter()
            .map(|alpha| bernstein(self.order, alpha, &lambda))
            .collect()
    }
}

fn bernstein(order: usize, alpha: &[usize], lambda: &[f64]) -> f64 {
    let mut value = factorial(order);
    for (a, l) in alpha.iter().zip(lambda.iter()) {
        value *= l.powi(*a as i32) / factorial(*a);
    }
    value
}

fn factorial(n: usize) -> f64 {
    (1..=n).map(|k| k as f64).product()
}

fn control_indices(topology: Topology, order: usize) -> Vec<Bary<usize>> {
    let n_verts = topology.count_vertices();
    let mut indices = Vec::new();

    for dim in 0..=topology.dimension() {
        for sub in 0..topology.count_downward(dim) {
            let verts = match topology.local_verts(dim, sub) {
                Some(verts) => verts,
                None => continue,
            };
            for local in owned_indices(dim, order) {
                let mut alpha: Bary<usize> = smallvec![0; n_verts];
                for (v, a) in verts.iter().zip(local.iter()) {
                    alpha[*v] = *a;
                }
                indices.push(alpha);
            }
        }
    }

    indices
}

// multi-indices owned by a simplex of dimension `dim` (all components >= 1)
fn owned_indices(dim: usize, order: usize) -> Vec<Bary<usize>> {
    match dim {
        0 => vec![smallvec![order]],
        1 => (1..order).map(|k| smallvec![order - k, k]).collect(),
        2 if order >= 3 => ring_indices(order - 3)
            .into_iter()
            .map(|[i, j, k]| smallvec![i + 1, j + 1, k + 1])
            .collect(),
        3 if order >= 4 => {
            let q = order - 4;
            let mut indices = Vec::new();
            for i in (0..=q).rev() {
                for j in (0..=q - i).rev() {
                    for k in (0..=q - i - j).rev() {
                        indices.push(smallvec![i + 1, j + 1, k + 1, q - i - j - k + 1]);
                    }
                }
            }
            indices
        }
        _ => Vec::new(),
    }
}

// triples summing to `q`, outermost ring first
fn ring_indices(q: usize) -> Vec<[usize; 3]> {
    if q == 0 {
        return vec![[0, 0, 0]];
    }

    let mut ring = Vec::with_capacity(3 * q);
    for m in 0..q {
        ring.push([q - m, m, 0]);
    }
    for m in 0..q {
        ring.push([0, q - m, m]);
    }
    for m in 0..q {
        ring.push([m, 0, q - m]);
    }

    if q >= 3 {
        ring.extend(
            ring_indices(q - 3)
                .into_iter()
                .map(|[i, j, k]| [i + 1, j + 1, k + 1]),
        );
    }
    ring
}

// ----------------------------------------------------------------------------------------------------
// Parametric Coordinates
// ----------------------------------------------------------------------------------------------------

/// Barycentric weights of a point in an entity's parametric space
///
/// * Edge: `xi` in [-1, +1] along the first coordinate
/// * Triangle: `(x, y, _)` weighs the vertices as `(1 - x - y, x, y)`
/// * Tet: `(x, y, z)` weighs the vertices as `(1 - x - y - z, x, y, z)`
pub fn barycentric(topology: Topology, xi: &Vector3<f64>) -> Bary<f64> {
    match topology {
        Topology::Vertex => smallvec![1.0],
        Topology::Edge => {
            let t = (1.0 + xi[0]) / 2.0;
            smallvec![1.0 - t, t]
        }
        Topology::Triangle => smallvec![1.0 - xi[0] - xi[1], xi[0], xi[1]],
        Topology::Tet => smallvec![1.0 - xi[0] - xi[1] - xi[2], xi[0], xi[1], xi[2]],
    }
}

/// Inverse of [barycentric]
///
/// Triangles keep their first weight in the third coordinate, matching the interior node layout.
pub fn from_barycentric(topology: Topology, lambda: &[f64]) -> Vector3<f64> {
    match topology {
        Topology::Vertex => Vector3::zeros(),
        Topology::Edge => Vector3::new(lambda[1] - lambda[0], 0.0, 0.0),
        Topology::Triangle => Vector3::new(lambda[1], lambda[2], lambda[0]),
        Topology::Tet => Vector3::new(lambda[1], lambda[2], lambda[3]),
    }
}

// ----------------------------------------------------------------------------------------------------
// Single Simplex Mesh
// ----------------------------------------------------------------------------------------------------

#[derive(Clone, Debug)]
struct SimplexEntity {
    topology: Topology,
    verts: Bary<usize>,
}

/// A mesh made of one reference simplex and its full closure
///
/// Entities are identified by their index. Sub-entities are created in canonical local order,
/// so adjacency queries on the element return them in that order.
#[derive(Clone, Debug)]
pub struct SimplexMesh<S: FieldShape> {
    shape: S,
    entities: Vec<SimplexEntity>,
}

impl<S: FieldShape> SimplexMesh<S> {
    pub fn new(element: Topology, shape: S) -> Self {
        let mut entities = Vec::new();
        for dim in 0..=element.dimension() {
            let topology = match Topology::of_dimension(dim) {
                Some(topology) => topology,
                None => continue,
            };
            for index in 0..element.count_downward(dim) {
                if let Some(verts) = element.local_verts(dim, index) {
                    entities.push(SimplexEntity {
                        topology,
                        verts: verts.into_iter().collect(),
                    });
                }
            }
        }

        Self { shape, entities }
    }

    pub fn num_entities(&self) -> usize {
        self.entities.len()
    }
}

impl<S: FieldShape> CurvedMesh for SimplexMesh<S> {
    type Entity = usize;
    type Shape = S;

    fn shape(&self) -> &S {
        &self.shape
    }

    fn first(&self, topology: Topology) -> Option<usize> {
        self.entities.iter().position(|e| e.topology == topology)
    }

    fn topology_of(&self, entity: usize) -> Topology {
        self.entities[entity].topology
    }

    fn downward(&self, entity: usize, dim: usize) -> Adjacent<usize> {
        let verts = &self.entities[entity].verts;
        if dim == 0 {
            return verts
                .iter()
                .filter_map(|v| self.entities.iter().position(|e| e.verts.as_slice() == [*v]))
                .collect();
        }

        self.entities
            .iter()
            .enumerate()
            .filter(|(_, e)| e.topology.dimension() == dim)
            .filter(|(_, e)| e.verts.iter().all(|v| verts.contains(v)))
            .map(|(id, _)| id)
            .collect()
    }

    fn boundary_to_element_xi(&self, boundary: usize, element: usize, xi: &Vector3<f64>) -> Vector3<f64> {
        let boundary = &self.entities[boundary];
        let element = &self.entities[element];

        let mut lambda: Bary<f64> = smallvec![0.0; element.verts.len()];
        for (v, weight) in boundary
            .verts
            .iter()
            .zip(barycentric(boundary.topology, xi).into_iter())
        {
            if let Some(local) = element.verts.iter().position(|ev| ev == v) {
                lambda[local] += weight;
            }
        }

        from_barycentric(element.topology, &lambda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHAPE_TOL: f64 = 1e-12;

    #[test]
    fn ring_order() {
        assert_eq!(ring_indices(0), vec![[0, 0, 0]]);
        assert_eq!(ring_indices(1), vec![[1, 0, 0], [0, 1, 0], [0, 0, 1]]);

        let p6 = owned_indices(2, 6);
        assert_eq!(p6.len(), 10);
        assert_eq!(p6[0].as_slice(), &[4, 1, 1]);
        assert_eq!(p6[4].as_slice(), &[1, 3, 2]);
        assert_eq!(p6[8].as_slice(), &[3, 1, 2]);
        assert_eq!(p6[9].as_slice(), &[2, 2, 2]);
    }

    #[test]
    fn shape_order_is_bounded() {
        for order in [0, MAX_ORDER + 1] {
            assert_eq!(
                BezierShape::new(order).unwrap_err(),
                CrvError::UnsupportedShapeOrder {
                    family: Family::Bezier,
                    order,
                    expected: "1 <= P <= 6",
                }
            );
        }
        let err = BezierShape::curve(7).unwrap_err();
        assert_eq!(err.to_string(), "no blended field shape of order P = 7; expected 1 <= P <= 6");
    }

    #[test]
    fn control_index_counts() {
        for order in 1..=MAX_ORDER {
            let shape = BezierShape::new(order).unwrap();
            for topology in Topology::ALL {
                let indices = shape.control_indices(topology);
                assert_eq!(indices.len(), shape.count_element_nodes(topology).unwrap());
                assert!(indices.iter().all(|alpha| alpha.iter().sum::<usize>() == order));
            }
        }
    }

    #[test]
    fn edge_control_points_follow_vertices() {
        let shape = BezierShape::new(3).unwrap();
        let tri = shape.control_indices(Topology::Triangle);
        // vertices, then edge {1, 2} starting next to vertex 1
        assert_eq!(tri[0].as_slice(), &[3, 0, 0]);
        assert_eq!(tri[5].as_slice(), &[0, 2, 1]);
        assert_eq!(tri[7].as_slice(), &[1, 0, 2]);
        assert_eq!(tri[9].as_slice(), &[1, 1, 1]);
    }

    #[test]
    fn bernstein_partition_of_unity() {
        let shape = BezierShape::new(5).unwrap();
        let xi = Vector3::new(0.2, 0.3, 0.1);
        for topology in [Topology::Edge, Topology::Triangle, Topology::Tet] {
            let sum: f64 = shape.values(topology, &xi).iter().sum();
            assert!((sum - 1.0).abs() < SHAPE_TOL, "{}: {}", topology, sum);
        }
    }

    #[test]
    fn barycentric_round_trip() {
        let xi = Vector3::new(0.2, 0.3, 0.5);
        let tri = from_barycentric(Topology::Triangle, &barycentric(Topology::Triangle, &xi));
        assert!((tri - xi).norm() < SHAPE_TOL);

        let xi = Vector3::new(-0.4, 0.0, 0.0);
        let edge = from_barycentric(Topology::Edge, &barycentric(Topology::Edge, &xi));
        assert!((edge - xi).norm() < SHAPE_TOL);
    }

    #[test]
    fn tet_adjacency_is_canonical() {
        let mesh = SimplexMesh::new(Topology::Tet, BezierShape::new(1).unwrap());
        assert_eq!(mesh.num_entities(), 15);

        let tet = mesh.first(Topology::Tet).unwrap();
        assert_eq!(mesh.downward(tet, 0).as_slice(), &[0, 1, 2, 3]);
        assert_eq!(mesh.downward(tet, 3).as_slice(), &[tet]);

        let edges = mesh.downward(tet, 1);
        assert_eq!(edges.len(), 6);
        assert_eq!(mesh.entities[edges[2]].verts.as_slice(), &[2, 0]);
        let faces = mesh.downward(tet, 2);
        assert_eq!(mesh.entities[faces[3]].verts.as_slice(), &[0, 2, 3]);

        // edge {2, 0} lists its vertices in its own order
        assert_eq!(mesh.downward(edges[2], 0).as_slice(), &[2, 0]);
    }

    #[test]
    fn boundary_points_map_onto_element() {
        let mesh = SimplexMesh::new(Topology::Tet, BezierShape::new(1).unwrap());
        let tet = mesh.first(Topology::Tet).unwrap();

        // midpoint of edge {2, 3}
        let edge = mesh.downward(tet, 1)[5];
        let xi = mesh.boundary_to_element_xi(edge, tet, &Vector3::zeros());
        assert!((xi - Vector3::new(0.0, 0.5, 0.5)).norm() < SHAPE_TOL);

        // vertex 1
        let vertex = mesh.downward(tet, 0)[1];
        let xi = mesh.boundary_to_element_xi(vertex, tet, &Vector3::zeros());
        assert!((xi - Vector3::new(1.0, 0.0, 0.0)).norm() < SHAPE_TOL);

        // centroid of face {1, 2, 3}
        let face = mesh.downward(tet, 2)[2];
        let third = 1.0 / 3.0;
        let xi = mesh.boundary_to_element_xi(face, tet, &Vector3::new(third, third, third));
        assert!((xi - Vector3::new(third, third, third)).norm() < SHAPE_TOL);
    }
}
