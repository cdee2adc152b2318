//! Node placement and interpolation-to-control transformations for curved finite elements
//!
//! * [node_xi]: parametric placement of the interpolation nodes owned by edges, triangles and tets
//! * [coefficients]: precomputed tables taking nodal values to Bezier or Gregory control points
//! * [transformation_matrix]: assembly of the full element matrix from a mesh and a field shape

extern crate coefficients;
extern crate log;
extern crate nalgebra;
extern crate node_xi;
extern crate rayon;
extern crate smallvec;
extern crate topology;

#[cfg(feature = "json_export")]
extern crate json;

/// Nodal values to control points
pub mod convert;
/// A single reference simplex with a Bernstein field shape
pub mod reference;
/// Element transformation assembly and the mesh/shape interfaces it consumes
pub mod transform;

#[cfg(feature = "json_export")]
pub mod export;

pub use coefficients::{
    coefficients, gregory_transformation_coefficients, supported_tables,
    transformation_coefficients, GREGORY_ROW_MAP,
};
pub use node_xi::{
    bezier_curve_node_xi, bezier_node_xi, node_xi, triangle_interior_nodes, EdgeNodes, Orbit,
};
pub use topology::{
    interior_node_count, total_node_count, BlendingOrder, CrvError, CrvResult, Family, Topology,
    MAX_GREGORY_ORDER, MAX_ORDER, MIN_GREGORY_ORDER, TET_ORDER,
};
pub use transform::{transformation_matrices, transformation_matrix, CurvedMesh, FieldShape};
