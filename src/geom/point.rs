use crate::geom::EPS;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod convert;

/// Observation point.
///
/// `x` and `y` are the horizontal coordinates (rows 0 and 1 of a coordinate array),
/// `z` is the vertical coordinate, positive downward like prism depths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns true if both points are very close to each other.
    pub fn is_close(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < EPS
            && (self.y - other.y).abs() < EPS
            && (self.z - other.z).abs() < EPS
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(2); // Default 2 decimals
        write!(
            f,
            "Point({:.prec$}, {:.prec$}, {:.prec$})",
            self.x,
            self.y,
            self.z,
            prec = prec
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_close() {
        let pa = Point::new(5., 5., 5.);
        let pb = Point::new(5.00000000000001, 5., 5.);
        let pc = Point::new(5.0001, 5., 5.);
        assert!(pa.is_close(&pb));
        assert!(!pa.is_close(&pc));
    }

    #[test]
    fn test_distance() {
        let p0 = Point::new(0., 0., 0.);
        let p1 = Point::new(3., 4., 12.);
        assert_eq!(p0.distance(&p1), 13.);
        assert_eq!(p1.distance(&p0), 13.);
    }

    #[test]
    fn test_display() {
        let p = Point::new(1., 2.5, -3.);
        assert_eq!(format!("{}", p), "Point(1.00, 2.50, -3.00)");
        assert_eq!(format!("{:.1}", p), "Point(1.0, 2.5, -3.0)");
    }
}
