use crate::Point;
use crate::gravity::config::GravityConfig;
use crate::gravity::field::Field;

/// Downward attraction of a point mass located at `center`, seen from `point`.
///
/// Used as the far-field reference of a prism: `G * mass * dz / d^3`,
/// which reduces to `G * mass / d^2` directly above the mass.
pub fn point_mass_gz(point: Point, center: Point, mass: f64, config: &GravityConfig) -> f64 {
    let d = point.distance(&center);
    let dz = center.z - point.z;
    let mut gz = config.gravitational_const * mass * dz / d.powi(3);
    if config.convert_units {
        gz *= Field::Gz.unit_factor();
    }
    gz
}
