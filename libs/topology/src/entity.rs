use std::fmt;

/// Local vertex pairs of a triangle's edges, in adjacency order
pub const TRI_EDGE_VERTS: [[usize; 2]; 3] = [[0, 1], [1, 2], [2, 0]];

/// Local vertex pairs of a tetrahedron's edges, in adjacency order
pub const TET_EDGE_VERTS: [[usize; 2]; 6] = [[0, 1], [1, 2], [2, 0], [0, 3], [1, 3], [2, 3]];

/// Local vertex triples of a tetrahedron's faces, in adjacency order
pub const TET_TRI_VERTS: [[usize; 3]; 4] = [[0, 1, 2], [0, 1, 3], [1, 2, 3], [0, 2, 3]];

/// Topology of a mesh entity
///
/// Each topology has a fixed parametric dimension and a fixed number of downward
/// sub-entities of each lower dimension:
///
/// ```text
///              vertices  edges  faces
///  Vertex          1       -      -
///  Edge            2       1      -
///  Triangle        3       3      1
///  Tet             4       6      4
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Topology {
    Vertex,
    Edge,
    Triangle,
    Tet,
}

impl Topology {
    pub const ALL: [Self; 4] = [Self::Vertex, Self::Edge, Self::Triangle, Self::Tet];

    /// Dimension of the entity's own parametric space
    pub const fn dimension(&self) -> usize {
        match self {
            Self::Vertex => 0,
            Self::Edge => 1,
            Self::Triangle => 2,
            Self::Tet => 3,
        }
    }

    /// The simplex topology of a given dimension
    pub const fn of_dimension(dim: usize) -> Option<Self> {
        match dim {
            0 => Some(Self::Vertex),
            1 => Some(Self::Edge),
            2 => Some(Self::Triangle),
            3 => Some(Self::Tet),
            _ => None,
        }
    }

    /// Number of downward sub-entities of dimension `dim`
    ///
    /// An entity counts itself as its only sub-entity of its own dimension
    pub const fn count_downward(&self, dim: usize) -> usize {
        match (self, dim) {
            (_, 0) => self.count_vertices(),
            (Self::Edge, 1) | (Self::Triangle, 2) | (Self::Tet, 3) => 1,
            (Self::Triangle, 1) => 3,
            (Self::Tet, 1) => 6,
            (Self::Tet, 2) => 4,
            (_, _) => 0,
        }
    }

    pub const fn count_vertices(&self) -> usize {
        self.dimension() + 1
    }

    /// Local vertex indices of the `index`-th sub-entity of dimension `dim`
    ///
    /// Returns `None` if `index` is out of range or if `dim` exceeds this entity's dimension
    pub fn local_verts(&self, dim: usize, index: usize) -> Option<Vec<usize>> {
        if index >= self.count_downward(dim) {
            return None;
        }
        match (self, dim) {
            (_, 0) => Some(vec![index]),
            (t, d) if t.dimension() == d => Some((0..t.count_vertices()).collect()),
            (Self::Triangle, 1) => Some(TRI_EDGE_VERTS[index].to_vec()),
            (Self::Tet, 1) => Some(TET_EDGE_VERTS[index].to_vec()),
            (Self::Tet, 2) => Some(TET_TRI_VERTS[index].to_vec()),
            (_, _) => None,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Edge => "edge",
            Self::Triangle => "triangle",
            Self::Tet => "tet",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
