use nalgebra::{DMatrix, Vector3};
use topology::{CrvError, CrvResult, Topology};

/// Interior control points of one entity from the nodal points of its closure
///
/// `coefficients` is an `nb x ni` table (see [coefficients::transformation_coefficients]) and
/// `nodal` holds the `ni` nodal points in closure order.
pub fn interp_to_control(
    topology: Topology,
    coefficients: &DMatrix<f64>,
    nodal: &[Vector3<f64>],
) -> CrvResult<Vec<Vector3<f64>>> {
    if nodal.len() != coefficients.ncols() {
        return Err(CrvError::NodeCountMismatch {
            topology,
            expected: coefficients.ncols(),
            found: nodal.len(),
        });
    }

    Ok(coefficients
        .row_iter()
        .map(|row| {
            row.iter()
                .zip(nodal.iter())
                .fold(Vector3::zeros(), |acc, (c, p)| acc + p * *c)
        })
        .collect())
}

/// Invert an element transformation matrix, giving the nodal-to-control map
pub fn invert_transformation(topology: Topology, a: DMatrix<f64>) -> CrvResult<DMatrix<f64>> {
    a.try_inverse().ok_or(CrvError::SingularTransform(topology))
}

/// Every control point of an element, solving `A c = nodal`
pub fn element_control_points(
    topology: Topology,
    a: &DMatrix<f64>,
    nodal: &[Vector3<f64>],
) -> CrvResult<Vec<Vector3<f64>>> {
    if nodal.len() != a.nrows() {
        return Err(CrvError::NodeCountMismatch {
            topology,
            expected: a.nrows(),
            found: nodal.len(),
        });
    }

    let rhs = DMatrix::from_fn(nodal.len(), 3, |i, j| nodal[i][j]);
    let c = a
        .clone()
        .lu()
        .solve(&rhs)
        .ok_or(CrvError::SingularTransform(topology))?;

    Ok((0..c.nrows())
        .map(|i| Vector3::new(c[(i, 0)], c[(i, 1)], c[(i, 2)]))
        .collect())
}
