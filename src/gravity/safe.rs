//! Singularity-safe transcendental functions used by the edge kernels.
use std::f64::consts::FRAC_PI_2;

/// Arguments of `safe_log()` smaller than this (in magnitude) are treated as zero.
pub const LOG_EPS: f64 = 1e-10;

/// Principal value of the arctangent of `y / x` as a two-argument function.
///
/// Unlike `f64::atan2()` the result is confined to [-pi/2, pi/2]:
/// `atan(y / x)` for `x != 0`, and `sign(y) * pi/2` (or 0 when `y == 0`) for `x == 0`.
/// The four-quadrant variant breaks the symmetry of the prism field
/// (Fukushima, 2020, eq. 72).
pub fn safe_atan2(y: f64, x: f64) -> f64 {
    if x != 0. {
        (y / x).atan()
    } else if y > 0. {
        FRAC_PI_2
    } else if y < 0. {
        -FRAC_PI_2
    } else {
        0.
    }
}

/// Natural logarithm that returns 0 for arguments within `LOG_EPS` of zero.
///
/// The argument must be positive otherwise. No sign check is made.
pub fn safe_log(x: f64) -> f64 {
    if x.abs() < LOG_EPS { 0. } else { x.ln() }
}
