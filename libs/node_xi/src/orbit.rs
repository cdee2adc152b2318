use nalgebra::Vector3;

/// Symmetric families of interior interpolation points on a triangle
///
/// Each family is a canonical barycentric weight triple `[lead, trail, far]`. The three members
/// of a family are its cyclic rotations: rotation `r` puts `lead` on coordinate `r`, `trail` on
/// `r + 1` and `far` on `r + 2` (mod 3).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Orbit {
    /// The single fixed point of every rotation
    Centroid,
    /// P = 4: leaning toward a vertex
    Quartic,
    /// P = 5: leaning toward a vertex
    QuinticVertex,
    /// P = 5: leaning toward an edge midpoint
    QuinticEdge,
    /// P = 6: leaning toward a vertex
    SexticVertex,
    /// P = 6: off-axis, first of a mirror pair
    SexticScalene,
    /// P = 6: off-axis, reflection of [Orbit::SexticScalene]
    SexticMirror,
}

impl Orbit {
    /// Canonical weights `[lead, trail, far]`
    pub fn weights(&self) -> [f64; 3] {
        match self {
            Self::Centroid => [1.0 / 3.0; 3],
            Self::Quartic => [0.22088805, 0.22088805, 0.5582239],
            Self::QuinticVertex => [0.15251715, 0.15251715, 0.6949657],
            Self::QuinticEdge => [0.4168658, 0.1662684, 0.4168658],
            Self::SexticVertex => [0.10971385, 0.10971385, 0.7805723],
            Self::SexticScalene => [0.3157892, 0.1256031, 0.5586077],
            Self::SexticMirror => [0.5586077, 0.1256031, 0.3157892],
        }
    }

    /// Number of distinct points in the family
    pub fn size(&self) -> usize {
        match self {
            Self::Centroid => 1,
            _ => 3,
        }
    }

    /// The `rotation`-th member of the family
    pub fn member(&self, rotation: usize) -> Vector3<f64> {
        let [lead, trail, far] = self.weights();
        let mut xi = Vector3::zeros();
        xi[rotation % 3] = lead;
        xi[(rotation + 1) % 3] = trail;
        xi[(rotation + 2) % 3] = far;
        xi
    }
}

const QUARTIC: &[Orbit] = &[Orbit::Quartic];
const QUINTIC: &[Orbit] = &[Orbit::QuinticVertex, Orbit::QuinticEdge];
const SEXTIC: &[Orbit] = &[Orbit::SexticVertex, Orbit::SexticScalene, Orbit::SexticMirror];

/// The rotating families of an order-`order` triangle, in the order they interleave
///
/// Interior node `n` belongs to family `n % len` with rotation `n / len`. Orders that are a
/// multiple of three carry one extra node at the centroid after all rotating nodes.
pub fn interior_orbits(order: usize) -> Option<&'static [Orbit]> {
    match order {
        4 => Some(QUARTIC),
        5 => Some(QUINTIC),
        6 => Some(SEXTIC),
        _ => None,
    }
}

/// Number of interior nodes the orbit layout of `order` generates
pub fn count_interior(order: usize) -> Option<usize> {
    interior_orbits(order).map(|families| {
        3 * families.len() + if order % 3 == 0 { 1 } else { 0 }
    })
}

/// Find the family and rotation that generate interior node `node`
///
/// Returns `None` for orders without an orbit layout or for nodes past the end of the layout
pub fn locate(order: usize, node: usize) -> Option<(Orbit, usize)> {
    let families = interior_orbits(order)?;
    let rotating = 3 * families.len();

    if node < rotating {
        Some((families[node % families.len()], node / families.len()))
    } else if node == rotating && order % 3 == 0 {
        Some((Orbit::Centroid, 0))
    } else {
        None
    }
}
