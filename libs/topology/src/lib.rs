extern crate thiserror;

mod counts;
mod entity;
mod error;
mod family;

pub use counts::{interior_node_count, total_node_count};
pub use entity::{Topology, TET_EDGE_VERTS, TET_TRI_VERTS, TRI_EDGE_VERTS};
pub use error::{CrvError, CrvResult};
pub use family::{BlendingOrder, Family};

/// Highest polynomial order with node and coefficient data
pub const MAX_ORDER: usize = 6;

/// The only polynomial order supported on tetrahedra
pub const TET_ORDER: usize = 4;

/// Lowest polynomial order of the Gregory family
pub const MIN_GREGORY_ORDER: usize = 3;

/// Highest polynomial order of the Gregory family
pub const MAX_GREGORY_ORDER: usize = 4;
