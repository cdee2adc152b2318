/// The two families of precomputed edge node abscissas (defined over (-1.0, +1.0))
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeNodes {
    /// Interpolation points of plain Bezier edges
    Interpolating,
    /// Interpolation points of blended Bezier curves
    Curve,
}

const NO_NODES: &[f64] = &[];

const INTERPOLATING_P2: &[f64] = &[0.0];
const INTERPOLATING_P3: &[f64] = &[-0.4503914, 0.4503914];
const INTERPOLATING_P4: &[f64] = &[-0.6612048, 0.0, 0.6612048];
const INTERPOLATING_P5: &[f64] = &[-0.7732854, -0.2863522, 0.2863522, 0.7732854];
const INTERPOLATING_P6: &[f64] = &[-0.8388042, -0.469821, 0.0, 0.469821, 0.8388042];

const CURVE_P2: &[f64] = &[0.0];
const CURVE_P3: &[f64] = &[-0.4306648, 0.4306648];
const CURVE_P4: &[f64] = &[-0.6363260, 0.0, 0.6363260];
const CURVE_P5: &[f64] = &[-0.7485748, -0.2765187, 0.2765187, 0.7485748];
const CURVE_P6: &[f64] = &[-0.8161268, -0.4568660, 0.0, 0.4568660, 0.8161268];

impl EdgeNodes {
    /// Interior node abscissas of an edge of order `order`, sorted in ascending order
    ///
    /// Linear edges have no interior nodes. Returns `None` for unsupported orders.
    pub fn abscissas(&self, order: usize) -> Option<&'static [f64]> {
        match (self, order) {
            (_, 1) => Some(NO_NODES),
            (Self::Interpolating, 2) => Some(INTERPOLATING_P2),
            (Self::Interpolating, 3) => Some(INTERPOLATING_P3),
            (Self::Interpolating, 4) => Some(INTERPOLATING_P4),
            (Self::Interpolating, 5) => Some(INTERPOLATING_P5),
            (Self::Interpolating, 6) => Some(INTERPOLATING_P6),
            (Self::Curve, 2) => Some(CURVE_P2),
            (Self::Curve, 3) => Some(CURVE_P3),
            (Self::Curve, 4) => Some(CURVE_P4),
            (Self::Curve, 5) => Some(CURVE_P5),
            (Self::Curve, 6) => Some(CURVE_P6),
            (_, _) => None,
        }
    }
}
