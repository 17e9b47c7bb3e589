//! Test data generators for creating synthetic grid axes.
//!
//! These generators create predictable, verifiable coordinate sequences
//! that can be used across the test suite.

/// Creates an ascending axis with regular spacing.
///
/// # Arguments
///
/// * `start` - Coordinate of the first point
/// * `step` - Spacing between points (positive)
/// * `n` - Number of points
///
/// # Returns
///
/// A `Vec<f64>` of `n` strictly ascending coordinate values.
///
/// # Example
///
/// ```
/// use test_utils::ascending_axis;
///
/// let axis = ascending_axis(0.0, 10.0, 3);
/// assert_eq!(axis, vec![0.0, 10.0, 20.0]);
/// ```
pub fn ascending_axis(start: f64, step: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| start + step * i as f64).collect()
}

/// Creates a descending axis with regular spacing.
///
/// Descending latitude axes are common in model output (north to south
/// scan order), so grid code must handle both directions.
///
/// # Arguments
///
/// * `start` - Coordinate of the first point (the largest value)
/// * `step` - Spacing between points (positive; applied downward)
/// * `n` - Number of points
///
/// # Returns
///
/// A `Vec<f64>` of `n` strictly descending coordinate values.
pub fn descending_axis(start: f64, step: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| start - step * i as f64).collect()
}

/// Creates the wide-cell wrapping longitude axis used by the wraparound
/// tests.
///
/// Four points at [-179, -1, 1, 179] degrees; a query at 181 degrees must
/// normalize to -179 and land on index 0.
pub fn wide_wrapping_lon_axis() -> Vec<f64> {
    vec![-179.0, -1.0, 1.0, 179.0]
}

/// Creates an irregularly spaced ascending axis.
///
/// Spacing grows with index (Gaussian-latitude style), exercising the
/// midpoint-boundary search rather than constant-step index arithmetic.
///
/// # Arguments
///
/// * `start` - Coordinate of the first point
/// * `n` - Number of points
///
/// # Returns
///
/// A `Vec<f64>` of `n` strictly ascending, unevenly spaced values.
pub fn irregular_axis(start: f64, n: usize) -> Vec<f64> {
    let mut values = Vec::with_capacity(n);
    let mut v = start;
    for i in 0..n {
        values.push(v);
        // Spacing 1.0, 1.5, 2.0, ...
        v += 1.0 + 0.5 * i as f64;
    }
    values
}
