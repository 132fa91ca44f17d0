pub mod point;
pub mod polygon;
pub mod prism;

/// Geometric precision
const EPS: f64 = 1e-13;
