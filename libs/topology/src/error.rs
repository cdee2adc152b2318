use crate::{BlendingOrder, Family, Topology};
use thiserror::Error;

/// Precondition violations reported by the node, coefficient and assembly lookups
///
/// None of these are recoverable: they flag a request for a (topology, order, family)
/// combination that has no data, and callers are expected to treat them as fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CrvError {
    #[error("expected {expected} for {family} {topology}; got P = {order}")]
    UnsupportedOrder {
        topology: Topology,
        family: Family,
        order: usize,
        expected: &'static str,
    },

    #[error("no {family} field shape of order P = {order}; expected {expected}")]
    UnsupportedShapeOrder {
        family: Family,
        order: usize,
        expected: &'static str,
    },

    #[error("node {node} is out of range for a P = {order} {topology} ({count} nodes)")]
    InvalidNodeIndex {
        topology: Topology,
        order: usize,
        node: usize,
        count: usize,
    },

    #[error("{topology} coefficients do not exist with blending order {blending} engaged")]
    BlendingEngaged {
        topology: Topology,
        blending: BlendingOrder,
    },

    #[error("no {family} transformation exists for a {topology}")]
    UnsupportedTopology { topology: Topology, family: Family },

    #[error("mesh has no {0} to sample; cannot build a transformation matrix")]
    NoSampleElement(Topology),

    #[error("{topology} has {expected} nodes but its sub-entities produced {found}")]
    NodeCountMismatch {
        topology: Topology,
        expected: usize,
        found: usize,
    },

    #[error("{0} transformation matrix is singular; cannot invert")]
    SingularTransform(Topology),
}

pub type CrvResult<T> = Result<T, CrvError>;
