//! Shared utilities for integration tests
#![allow(dead_code)]

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-12;

/// Lane values that stay clear of integer overflow in products and sums
pub fn small_ints(len: usize) -> Vec<i32> {
    (0..len).map(|i| (i as i32 * 7 % 19) - 9).collect()
}

/// Floating-point lane values with mixed signs and magnitudes
pub fn mixed_floats(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| ((i as f64 + 0.5) * 1.3).sin() * 10f64.powi(i as i32 % 3))
        .collect()
}

/// Assert two lane slices are equal within tolerance
pub fn assert_lanes_close(actual: &[f64], expected: &[f64], context: &str) {
    assert_eq!(actual.len(), expected.len(), "lane count mismatch for {context}");
    for (&a, &e) in actual.iter().zip(expected.iter()) {
        assert_relative_eq!(a, e, epsilon = EPSILON, max_relative = EPSILON);
    }
}
