//! Edge kernels for the field of a polygonal prism (Plouff, 1976).
//!
//! Every kernel takes the coordinates of one polygon edge relative to the
//! observation point: `y1`, `y2` are the first horizontal coordinates of the edge
//! endpoints, `x1`, `x2` the second ones, and `z1`, `z2` are the top and bottom
//! depths of the prism.
use crate::gravity::safe::{safe_atan2, safe_log};

/// Signature shared by all edge kernels: `(y1, y2, x1, x2, z1, z2) -> contribution`.
pub type EdgeKernel = fn(f64, f64, f64, f64, f64, f64) -> f64;

/// Contribution of one edge to the downward component of gravitational acceleration.
///
/// The result is unscaled: it must be multiplied by density and the gravitational constant.
/// Its sign follows the edge orientation, so a closed clockwise polygon in the
/// (y, x) plane gives a positive field for mass below the observation point.
///
/// The observation point lying exactly on an edge endpoint (horizontally) makes
/// the log prefactors divide by zero. This case is not guarded.
pub fn kernel_gz(y1: f64, y2: f64, x1: f64, x2: f64, z1: f64, z2: f64) -> f64 {
    let z1_sqr = z1 * z1;
    let z2_sqr = z2 * z2;

    // Orientation term
    let p = x1 * y2 - x2 * y1;
    let p_sqr = p * p;

    // Projections of the endpoints onto the edge direction
    let q1 = (y2 - y1) * y1 + (x2 - x1) * x1;
    let q2 = (y2 - y1) * y2 + (x2 - x1) * x2;

    // Horizontal distances (squared for now)
    let a1_sqr = x1 * x1 + y1 * y1;
    let a2_sqr = x2 * x2 + y2 * y2;

    // Slant distances: r<depth><endpoint>
    let r11 = (a1_sqr + z1_sqr).sqrt();
    let r12 = (a2_sqr + z1_sqr).sqrt();
    let r21 = (a1_sqr + z2_sqr).sqrt();
    let r22 = (a2_sqr + z2_sqr).sqrt();

    let a1 = a1_sqr.sqrt();
    let a2 = a2_sqr.sqrt();

    let b1 = (q1 * q1 + p_sqr).sqrt();
    let b2 = (q2 * q2 + p_sqr).sqrt();

    let e11 = r11 * b1;
    let e12 = r12 * b2;
    let e21 = r21 * b1;
    let e22 = r22 * b2;
    let c1 = q1 * a1;
    let c2 = q2 * a2;

    let t1 = (z2 - z1) * (safe_atan2(q2, p) - safe_atan2(q1, p));
    let t2 = z2 * (safe_atan2(z2 * q1, r21 * p) - safe_atan2(z2 * q2, r22 * p));
    let t3 = z1 * (safe_atan2(z1 * q2, r12 * p) - safe_atan2(z1 * q1, r11 * p));

    let t4 = (0.5 * p * a1 / b1)
        * safe_log(((e11 - c1) * (e21 + c1)) / ((e11 + c1) * (e21 - c1)));
    let t5 = (0.5 * p * a2 / b2)
        * safe_log(((e22 - c2) * (e12 + c2)) / ((e22 + c2) * (e12 - c2)));

    t1 + t2 + t3 + t4 + t5
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SQUARE_CW: [(f64, f64); 5] = [
        (-1., -1.),
        (-1., 1.),
        (1., 1.),
        (1., -1.),
        (-1., -1.),
    ];

    fn square_sum(kernel: EdgeKernel, z1: f64, z2: f64) -> f64 {
        SQUARE_CW
            .windows(2)
            .map(|w| kernel(w[0].0, w[1].0, w[0].1, w[1].1, z1, z2))
            .sum()
    }

    #[test]
    fn test_square_under_origin() {
        let gz = square_sum(kernel_gz, 1., 3.);
        assert_relative_eq!(gz, 1.8859955243856747, max_relative = 1e-12);
    }

    #[test]
    fn test_edge_reversal_negates() {
        let fwd = kernel_gz(0.3, -1.2, 2.0, 0.7, 0.5, 2.5);
        let rev = kernel_gz(-1.2, 0.3, 0.7, 2.0, 0.5, 2.5);
        assert!(fwd.is_finite());
        assert_relative_eq!(fwd, -rev, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_thickness() {
        assert_eq!(kernel_gz(0.3, -1.2, 2.0, 0.7, 1.5, 1.5), 0.);
    }

    #[test]
    fn test_point_on_edge_extension() {
        // Observation point on the line through the edge: p == 0
        assert_eq!(kernel_gz(1., 2., 0., 0., 1., 2.), 0.);
        assert_eq!(kernel_gz(-2., -1., 0., 0., 1., 2.), 0.);
        assert_eq!(kernel_gz(1., 2., 0., 0., -1., -2.), 0.);
    }

    #[test]
    fn test_swapped_depths_negate() {
        let gz = square_sum(kernel_gz, 1., 3.);
        let swapped = square_sum(kernel_gz, 3., 1.);
        assert_relative_eq!(gz, -swapped, max_relative = 1e-12);
    }

    #[test]
    fn test_vertical_split_is_additive() {
        let whole = square_sum(kernel_gz, 1., 3.);
        let split = square_sum(kernel_gz, 1., 2.) + square_sum(kernel_gz, 2., 3.);
        assert_relative_eq!(whole, split, max_relative = 1e-12);
    }
}
