use crate::Point;
use crate::error::InvalidArgument;
use anyhow::Result;
use ndarray as nd;

/// Packs points into a 3×N array (one column per point).
pub fn points_to_array(points: &[Point]) -> nd::Array2<f64> {
    let mut arr = nd::Array2::from_elem((3, points.len()), 0.);

    for (i, p) in points.iter().enumerate() {
        arr[[0, i]] = p.x;
        arr[[1, i]] = p.y;
        arr[[2, i]] = p.z;
    }

    arr
}

/// Unpacks a 3×N coordinate array into points, keeping column order.
pub fn array_to_points(arr: nd::ArrayView2<f64>) -> Result<Vec<Point>> {
    anyhow::ensure!(
        arr.nrows() == 3,
        InvalidArgument(format!(
            "Number of lines in coordinates ({}) not equal to 3",
            arr.nrows()
        ))
    );

    let pts = arr
        .columns()
        .into_iter()
        .map(|c| Point::new(c[0], c[1], c[2]))
        .collect();

    Ok(pts)
}
