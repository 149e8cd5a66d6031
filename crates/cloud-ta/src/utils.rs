//! Utility functions for cloud-ta.
//!
//! Floating-point comparison helpers used by the test-suite and exposed for
//! downstream parity harnesses.
//!
//! # Example
//!
//! ```
//! use cloud_ta::utils::{series_match, PARITY_ATOL, PARITY_RTOL};
//!
//! let ours = vec![f64::NAN, 1.0, 2.0 + 1e-14];
//! let reference = vec![f64::NAN, 1.0, 2.0];
//! assert!(series_match(&ours, &reference, PARITY_RTOL, PARITY_ATOL));
//! ```

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Relative tolerance used when diffing a kernel against a reference implementation.
pub const PARITY_RTOL: f64 = 1e-10;

/// Absolute tolerance used when diffing a kernel against a reference implementation.
pub const PARITY_ATOL: f64 = 1e-12;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other,
/// or if both are NaN.
///
/// ```
/// use cloud_ta::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Tolerance check in the `allclose` form: `|a - b| <= atol + rtol * |b|`.
///
/// `b` is the reference value. Two NaNs compare equal, a single NaN does not.
#[inline]
#[must_use]
pub fn approx_eq_tol<T: SeriesElement>(a: T, b: T, rtol: T, atol: T) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    (a - b).abs() <= atol + rtol * b.abs()
}

/// Parity comparison of two indicator series.
///
/// Both series must have the same length, be undefined (NaN) at exactly the
/// same positions, and agree elsewhere under [`approx_eq_tol`].
#[must_use]
pub fn series_match<T: SeriesElement>(actual: &[T], expected: &[T], rtol: T, atol: T) -> bool {
    actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected)
            .all(|(&a, &b)| approx_eq_tol(a, b, rtol, atol))
}

/// Count the number of NaN values in a slice.
///
/// ```
/// use cloud_ta::utils::count_nans;
///
/// assert_eq!(count_nans(&[f64::NAN, 1.0, f64::NAN]), 2);
/// ```
#[inline]
#[must_use]
pub fn count_nans<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().filter(|x| x.is_nan()).count()
}

/// Count the number of NaN values at the beginning of a slice.
///
/// This is the observed warm-up length of a NaN-sentinel indicator.
#[inline]
#[must_use]
pub fn count_nan_prefix<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().take_while(|x| x.is_nan()).count()
}
