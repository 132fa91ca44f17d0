use crate::error::InvalidArgument;
use crate::gravity::field::Field;
use anyhow::Result;
use ndarray as nd;

/// Checks shapes and counts of the array inputs and parses the field identifier.
///
/// Array ranks are fixed by the view types. Nothing is computed here.
pub fn check_inputs(
    coordinates: nd::ArrayView2<f64>,
    polygons: &[nd::Array2<f64>],
    thicknesses: nd::ArrayView2<f64>,
    density: nd::ArrayView1<f64>,
    field: &str,
) -> Result<Field> {
    let field: Field = field.parse()?;

    anyhow::ensure!(
        coordinates.nrows() == 3,
        InvalidArgument(format!(
            "Number of lines in coordinates ({}) not equal to 3",
            coordinates.nrows()
        ))
    );
    anyhow::ensure!(
        thicknesses.ncols() == 2,
        InvalidArgument(format!(
            "Number of columns in thicknesses ({}) not equal to 2",
            thicknesses.ncols()
        ))
    );
    anyhow::ensure!(
        thicknesses.nrows() == polygons.len(),
        InvalidArgument(format!(
            "Number of polygons ({}) and thicknesses ({}) are different",
            polygons.len(),
            thicknesses.nrows()
        ))
    );
    anyhow::ensure!(
        thicknesses.nrows() == density.len(),
        InvalidArgument(format!(
            "Number of polygons ({}) and density ({}) are different",
            thicknesses.nrows(),
            density.len()
        ))
    );
    for (m, poly) in polygons.iter().enumerate() {
        anyhow::ensure!(
            poly.nrows() == 2,
            InvalidArgument(format!(
                "Number of lines in polygon {m} ({}) not equal to 2",
                poly.nrows()
            ))
        );
        anyhow::ensure!(
            poly.ncols() >= 2,
            InvalidArgument(format!(
                "Polygon {m} has {} vertices, at least 2 are needed",
                poly.ncols()
            ))
        );
    }

    Ok(field)
}
