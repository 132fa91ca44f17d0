//! Gravitational field of vertical polygonal prisms.
//!
//! Uses the analytical solution of Plouff (1976) with the modified arctangent
//! of Fukushima (2020, eq. 72).
//!
//! References:
//! - Plouff, D., 1976, Gravity and magnetic fields of polygonal prisms and
//!   applications to magnetic terrain corrections, Geophysics, 41(4), 727-741.
//! - Fukushima, T., 2020, Speed and accuracy improvements in standard algorithm
//!   for prismatic gravitational field, Geophysical Journal International,
//!   222(3), 1898-1908.
use crate::Point;
use crate::geom::point::convert::array_to_points;
use crate::geom::polygon::Polygon;
use crate::geom::prism::Prism;
use anyhow::Result;
use ndarray as nd;

pub mod config;
pub mod engine;
pub mod field;
pub mod kernel;
pub mod point_mass;
pub mod safe;
pub mod validate;

use config::GravityConfig;
use engine::accumulate;
use field::Field;
use validate::check_inputs;

/// Gravitational constant in m^3 kg^-1 s^-2.
pub const GRAVITATIONAL_CONST: f64 = 6.673e-11;

/// Computes a field component of polygonal prisms at the observation points.
///
/// - `coordinates`: 3×N array, one column per observation point
/// - `polygons`: one 2×k array of vertices per prism
/// - `thicknesses`: M×2 array with the top and bottom of each prism
/// - `density`: one density per prism (kg/m^3)
/// - `field`: component name, e.g. `"gz"`
///
/// Returns one value per observation point (mGal for `"gz"`).
pub fn gravitational(
    coordinates: nd::ArrayView2<f64>,
    polygons: &[nd::Array2<f64>],
    thicknesses: nd::ArrayView2<f64>,
    density: nd::ArrayView1<f64>,
    field: &str,
) -> Result<nd::Array1<f64>> {
    gravitational_with_config(
        coordinates,
        polygons,
        thicknesses,
        density,
        field,
        &GravityConfig::default(),
    )
}

/// Same as [`gravitational`], with custom scaling.
pub fn gravitational_with_config(
    coordinates: nd::ArrayView2<f64>,
    polygons: &[nd::Array2<f64>],
    thicknesses: nd::ArrayView2<f64>,
    density: nd::ArrayView1<f64>,
    field: &str,
    config: &GravityConfig,
) -> Result<nd::Array1<f64>> {
    let field = check_inputs(coordinates, polygons, thicknesses, density, field)?;

    let points = array_to_points(coordinates)?;
    let mut prisms: Vec<Prism> = Vec::with_capacity(polygons.len());
    for (m, poly) in polygons.iter().enumerate() {
        let polygon = Polygon::from_array(poly.view())?;
        prisms.push(Prism::new(
            polygon,
            thicknesses[[m, 0]],
            thicknesses[[m, 1]],
            density[m],
        ));
    }

    let out = gravitational_field(&points, &prisms, field, config);
    Ok(nd::Array1::from(out))
}

/// Computes a field component of `prisms` at every point in `points`.
///
/// Polygons are not closed implicitly. An open polygon is logged and
/// computed without its closing edge.
pub fn gravitational_field(
    points: &[Point],
    prisms: &[Prism],
    field: Field,
    config: &GravityConfig,
) -> Vec<f64> {
    log::debug!(
        "Computing {} at {} points from {} prisms",
        field,
        points.len(),
        prisms.len()
    );
    for (m, prism) in prisms.iter().enumerate() {
        if !prism.polygon.is_closed() {
            log::warn!(
                "Polygon {} is open, the edge from its last to its first vertex is omitted",
                m
            );
        }
    }

    let mut out = accumulate(points, prisms, field);

    for v in out.iter_mut() {
        *v *= config.gravitational_const;
    }
    if config.convert_units {
        let factor = field.unit_factor();
        for v in out.iter_mut() {
            *v *= factor;
        }
    }

    out
}
