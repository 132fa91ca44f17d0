use crate::Point;
use crate::geom::polygon::Polygon;
use serde::{Deserialize, Serialize};

/// Vertical prism with a polygonal cross-section and uniform density.
///
/// `top` and `bottom` are depths on the same vertical axis as [`Point::z`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prism {
    pub polygon: Polygon,
    pub top: f64,
    pub bottom: f64,
    pub density: f64,
}

impl Prism {
    pub fn new(polygon: Polygon, top: f64, bottom: f64, density: f64) -> Self {
        Self {
            polygon,
            top,
            bottom,
            density,
        }
    }

    pub fn thickness(&self) -> f64 {
        self.bottom - self.top
    }

    /// Volume of the prism, using the closed cross-section.
    pub fn volume(&self) -> f64 {
        self.polygon.area().abs() * self.thickness().abs()
    }

    pub fn mass(&self) -> f64 {
        self.volume() * self.density
    }

    /// Center of mass (cross-section centroid at mid-depth).
    pub fn center(&self) -> Point {
        let c = self.polygon.centroid();
        Point::new(c.x, c.y, 0.5 * (self.top + self.bottom))
    }
}
