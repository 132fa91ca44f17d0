use crate::Point;
use crate::geom::prism::Prism;
use crate::gravity::field::Field;

/// Sums density-weighted edge contributions of all prisms at every point.
///
/// Returns one raw value per point (no gravitational constant, no unit conversion).
/// Summation order is point, then prism, then edge, so results are reproducible
/// bit for bit.
pub fn accumulate(points: &[Point], prisms: &[Prism], field: Field) -> Vec<f64> {
    let kernel = field.kernel();
    let mut out = vec![0.; points.len()];

    for (l, pt) in points.iter().enumerate() {
        for prism in prisms.iter() {
            let z1 = prism.top - pt.z;
            let z2 = prism.bottom - pt.z;
            for (v1, v2) in prism.polygon.edges() {
                let y1 = v1.x - pt.x;
                let y2 = v2.x - pt.x;
                let x1 = v1.y - pt.y;
                let x2 = v2.y - pt.y;
                out[l] += prism.density * kernel(y1, y2, x1, x2, z1, z2);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::polygon::{Polygon, Vertex};
    use approx::assert_relative_eq;

    fn make_cube(density: f64) -> Prism {
        let poly = Polygon::new(vec![
            Vertex::new(-1., -1.),
            Vertex::new(-1., 1.),
            Vertex::new(1., 1.),
            Vertex::new(1., -1.),
            Vertex::new(-1., -1.),
        ])
        .unwrap();
        Prism::new(poly, 1., 3., density)
    }

    #[test]
    fn test_no_points() {
        assert!(accumulate(&[], &[make_cube(1.)], Field::Gz).is_empty());
    }

    #[test]
    fn test_no_prisms() {
        let pts = [Point::new(0., 0., 0.), Point::new(1., 1., 0.)];
        assert_eq!(accumulate(&pts, &[], Field::Gz), vec![0., 0.]);
    }

    #[test]
    fn test_cube() {
        let out = accumulate(&[Point::new(0., 0., 0.)], &[make_cube(1.)], Field::Gz);
        assert_relative_eq!(out[0], 1.8859955243856747, max_relative = 1e-12);
    }

    #[test]
    fn test_density_scales_linearly() {
        let pts = [Point::new(0.4, 2., -1.)];
        let one = accumulate(&pts, &[make_cube(1.)], Field::Gz);
        let many = accumulate(&pts, &[make_cube(2670.)], Field::Gz);
        assert_relative_eq!(many[0], 2670. * one[0], max_relative = 1e-12);
        assert_relative_eq!(one[0], 0.5037228142738082, max_relative = 1e-12);
    }

    #[test]
    fn test_output_follows_point_order() {
        let a = Point::new(0., 0., 0.);
        let b = Point::new(0.4, 2., -1.);
        let ab = accumulate(&[a, b], &[make_cube(1.)], Field::Gz);
        let ba = accumulate(&[b, a], &[make_cube(1.)], Field::Gz);
        assert_eq!(ab[0], ba[1]);
        assert_eq!(ab[1], ba[0]);
    }

    #[test]
    fn test_reproducible() {
        let pts = [Point::new(0.3, -0.7, -0.5), Point::new(5., 2., 0.)];
        let prisms = [make_cube(1.), make_cube(-0.5)];
        let a = accumulate(&pts, &prisms, Field::Gz);
        let b = accumulate(&pts, &prisms, Field::Gz);
        assert_eq!(a, b);
    }
}
