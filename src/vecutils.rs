//! Slice utility functions like flip(), roll(), almost_equal()

/// Roll vector or array forward by k. It modifies the collection in-place.
pub fn roll<T>(v: &mut [T], k: usize) {
    v.rotate_right(k);
}

/// Reverses `v` and returns it as a new vector.
pub fn flip<T: Clone>(v: &[T]) -> Vec<T> {
    let mut reversed: Vec<T> = Vec::new();
    for i in (0..v.len()).rev() {
        reversed.push(v[i].clone());
    }
    reversed
}

/// Checks if two arrays or vectors are almost equal.
///
/// Elements in both containers must be in the same order.
pub fn almost_equal(a: &[f64], b: &[f64], eps: f64) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(&x, &y)| (x - y).abs() <= eps)
}

/// Like `almost_equal()`, but `eps` is relative to the larger magnitude of each pair.
pub fn almost_equal_rel(a: &[f64], b: &[f64], eps: f64) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b.iter())
        .all(|(&x, &y)| (x - y).abs() <= eps * x.abs().max(y.abs()))
}
