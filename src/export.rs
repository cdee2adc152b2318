use coefficients::{coefficients, supported_tables};
use json::{object, JsonValue};
use nalgebra::DMatrix;
use std::fs::File;
use std::io::{BufWriter, Error, ErrorKind};
use topology::{BlendingOrder, CrvResult, Family, Topology};

/// Every supported coefficient table, with its topology, order, family and shape
///
/// Tables are looked up with the given `blending` order. Bezier tets are skipped while blending
/// is engaged since none exist in that mode; Gregory tets do not depend on blending.
pub fn coefficients_to_json(blending: BlendingOrder) -> CrvResult<JsonValue> {
    let mut tables = Vec::new();
    for (topology, order, family) in supported_tables() {
        if blending.is_engaged() && (topology, family) == (Topology::Tet, Family::Bezier) {
            continue;
        }
        let c = coefficients(topology, order, family, blending)?;

        tables.push(object! {
            "topology": topology.name(),
            "order": order,
            "family": family.name(),
            "rows": c.nrows(),
            "cols": c.ncols(),
            "coefficients": matrix_rows(&c),
        });
    }

    Ok(object! {
        "blending_order": blending.value(),
        "tables": JsonValue::from(tables),
    })
}

/// Print every supported coefficient table to a JSON file specified by path
pub fn export_coefficients(path: impl AsRef<str>, blending: BlendingOrder) -> std::io::Result<()> {
    let tables =
        coefficients_to_json(blending).map_err(|err| Error::new(ErrorKind::InvalidInput, err))?;

    let f = File::create(path.as_ref())?;
    let mut w = BufWriter::new(&f);
    tables.write_pretty(&mut w, 4)?;

    Ok(())
}

fn matrix_rows(c: &DMatrix<f64>) -> JsonValue {
    JsonValue::from(
        c.row_iter()
            .map(|row| JsonValue::from(row.iter().cloned().collect::<Vec<f64>>()))
            .collect::<Vec<_>>(),
    )
}
