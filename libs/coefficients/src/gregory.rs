use nalgebra::DMatrix;
use topology::{interior_node_count, total_node_count, CrvResult, Family, Topology};

/// Bezier row copied into each extra quartic Gregory row
pub const GREGORY_ROW_MAP: [usize; 3] = [1, 2, 0];

/// Expand a Bezier triangle matrix to the Gregory layout
///
/// The Bezier rows and columns are kept in place. Columns for the Gregory-only nodes are zero,
/// and each extra row copies a Bezier row: the lone interior row for P = 3, or row
/// `GREGORY_ROW_MAP[k]` for the k-th extra row when P = 4.
pub(crate) fn expand_triangle(order: usize, bezier: &DMatrix<f64>) -> CrvResult<DMatrix<f64>> {
    let nb = interior_node_count(Topology::Triangle, Family::Gregory, order)?;
    let ni = total_node_count(Topology::Triangle, Family::Gregory, order)?;
    let nb_bezier = bezier.nrows();
    debug_assert!(nb >= nb_bezier && ni >= bezier.ncols());

    let mut c = DMatrix::zeros(nb, ni);
    for i in 0..nb {
        let src = source_row(order, i, nb_bezier);
        for j in 0..bezier.ncols() {
            c[(i, j)] = bezier[(src, j)];
        }
    }

    Ok(c)
}

fn source_row(order: usize, row: usize, nb_bezier: usize) -> usize {
    if row < nb_bezier {
        row
    } else if order == 3 {
        0
    } else {
        debug_assert!(row - nb_bezier < GREGORY_ROW_MAP.len());
        GREGORY_ROW_MAP[row - nb_bezier]
    }
}
