//! Weighted Moving Average (WMA) indicator.
//!
//! The Weighted Moving Average assigns linearly decreasing weights to older
//! prices, giving more importance to recent data than a simple moving average.
//! It is also the building block of the Hull moving average.
//!
//! # Formula
//!
//! ```text
//! WMA = (P₁ × n + P₂ × (n-1) + ... + Pₙ × 1) / (n × (n+1) / 2)
//! ```
//!
//! Where `P₁` is the most recent price (highest weight) and `Pₙ` is the oldest.
//!
//! # Algorithm
//!
//! Every window is summed directly with precomputed weights
//! ([`LinearWeights`]). This is O(n × period), but each output is computed
//! from its own window only, so there is no running-sum drift between
//! windows and a NaN only poisons the windows that contain it.
//!
//! # Warm-up
//!
//! - Input shorter than `period`: every output is NaN.
//! - Otherwise the first `period - 1` outputs are NaN.
//!
//! # Example
//!
//! ```
//! use cloud_ta::indicators::wma::wma;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = wma(&data, 3).unwrap();
//!
//! assert!(result[0].is_nan());
//! assert!(result[1].is_nan());
//! // WMA[2] = (1×1 + 2×2 + 3×3) / 6 = 14/6
//! assert!((result[2] - 14.0 / 6.0).abs() < 1e-12);
//! ```

use crate::error::Result;
use crate::kernels::weighted_sum::LinearWeights;
use crate::traits::{validate_output_len, SeriesElement};

/// Returns the lookback period for WMA: `period - 1`.
///
/// ```
/// use cloud_ta::indicators::wma::wma_lookback;
///
/// assert_eq!(wma_lookback(5), 4);
/// assert_eq!(wma_lookback(0), 0);
/// ```
#[inline]
#[must_use]
pub const fn wma_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Returns the minimum input length for WMA to produce a defined value.
#[inline]
#[must_use]
pub const fn wma_min_len(period: usize) -> usize {
    period
}

/// Computes the Weighted Moving Average of a series.
///
/// Returns a vector of the same length as the input. If the input is shorter
/// than `period` (or `period` is zero) every value is NaN.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if the weights cannot be represented in `T`.
///
/// # Example
///
/// ```
/// use cloud_ta::indicators::wma::wma;
///
/// let result = wma(&[10.0_f64, 11.0, 12.0, 13.0, 14.0], 3).unwrap();
/// // WMA[2] = (10×1 + 11×2 + 12×3) / 6 = 68/6
/// assert!((result[2] - 68.0 / 6.0).abs() < 1e-12);
///
/// let short = wma(&[1.0_f64, 2.0], 5).unwrap();
/// assert!(short.iter().all(|v| v.is_nan()));
/// ```
#[must_use = "this returns a Result with the WMA values, which should be used"]
pub fn wma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); data.len()];
    wma_into(data, period, &mut output)?;
    Ok(output)
}

/// Computes the Weighted Moving Average into a pre-allocated output buffer.
///
/// Only the first `data.len()` elements of `output` are written. Returns the
/// number of defined (non-warm-up) values written.
///
/// # Errors
///
/// - `Error::BufferTooSmall` if `output` is shorter than `data`
/// - `Error::NumericConversion` if the weights cannot be represented in `T`
///
/// # Example
///
/// ```
/// use cloud_ta::indicators::wma::wma_into;
///
/// let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
/// let mut output = vec![0.0_f64; 5];
/// let valid = wma_into(&data, 3, &mut output).unwrap();
///
/// assert_eq!(valid, 3);
/// assert!(output[0].is_nan());
/// ```
#[must_use = "this returns a Result with the count of valid WMA values"]
pub fn wma_into<T: SeriesElement>(data: &[T], period: usize, output: &mut [T]) -> Result<usize> {
    validate_output_len(output, data.len(), "wma")?;
    let n = data.len();
    let output = &mut output[..n];

    if period == 0 || n < period {
        tracing::trace!(len = n, period, "wma: insufficient data, NaN series");
        output.fill(T::nan());
        return Ok(0);
    }

    let weights = LinearWeights::new(period)?;

    output[..period - 1].fill(T::nan());
    for (out, window) in output[period - 1..].iter_mut().zip(data.windows(period)) {
        *out = weights.average(window);
    }

    Ok(n - period + 1)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::error::Error;
    use crate::utils::approx_eq;

    const EPSILON: f64 = 1e-10;
    const EPSILON_F32: f32 = 1e-5;

    // ==================== Lookback and Min Len Tests ====================

    #[test]
    fn test_wma_lookback() {
        assert_eq!(wma_lookback(1), 0);
        assert_eq!(wma_lookback(5), 4);
        assert_eq!(wma_lookback(14), 13);
    }

    #[test]
    fn test_wma_min_len() {
        assert_eq!(wma_min_len(1), 1);
        assert_eq!(wma_min_len(14), 14);
    }

    // ==================== Basic Functionality Tests ====================

    #[test]
    fn test_wma_basic() {
        let result = wma(&[1.0_f64, 2.0, 3.0, 4.0, 5.0], 3).unwrap();

        assert_eq!(result.len(), 5);
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        // (1×1 + 2×2 + 3×3) / 6
        assert!(approx_eq(result[2], 14.0 / 6.0, EPSILON));
        // (2×1 + 3×2 + 4×3) / 6
        assert!(approx_eq(result[3], 20.0 / 6.0, EPSILON));
        // (3×1 + 4×2 + 5×3) / 6
        assert!(approx_eq(result[4], 26.0 / 6.0, EPSILON));
    }

    #[test]
    fn test_wma_f32() {
        let result = wma(&[1.0_f32, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
        assert!(result[1].is_nan());
        assert!(approx_eq(result[2], 14.0_f32 / 6.0, EPSILON_F32));
    }

    #[test]
    fn test_wma_period_one_is_identity() {
        let data = vec![3.5_f64, -1.0, 8.25];
        assert_eq!(wma(&data, 1).unwrap(), data);
    }

    #[test]
    fn test_wma_period_two() {
        let result = wma(&[2.0_f64, 4.0, 8.0], 2).unwrap();
        assert!(result[0].is_nan());
        // (2×1 + 4×2) / 3
        assert!(approx_eq(result[1], 10.0 / 3.0, EPSILON));
        // (4×1 + 8×2) / 3
        assert!(approx_eq(result[2], 20.0 / 3.0, EPSILON));
    }

    #[test]
    fn test_wma_period_equals_length() {
        let result = wma(&[1.0_f64, 2.0, 3.0, 4.0], 4).unwrap();
        assert_eq!(result.iter().filter(|v| v.is_nan()).count(), 3);
        // (1 + 4 + 9 + 16) / 10
        assert!(approx_eq(result[3], 3.0, EPSILON));
    }

    #[test]
    fn test_wma_emphasizes_recent_values() {
        let rising = wma(&[1.0_f64, 1.0, 1.0, 10.0], 4).unwrap();
        let falling = wma(&[10.0_f64, 1.0, 1.0, 1.0], 4).unwrap();
        assert!(rising[3] > falling[3]);
    }

    #[test]
    fn test_wma_constant_values() {
        let result = wma(&[42.0_f64; 20], 7).unwrap();
        for v in &result[6..] {
            assert!(approx_eq(*v, 42.0, EPSILON));
        }
    }

    // ==================== Edge Cases ====================

    #[test]
    fn test_wma_empty_input() {
        let result = wma::<f64>(&[], 3).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_wma_zero_period_is_all_nan() {
        let result = wma(&[1.0_f64, 2.0, 3.0], 0).unwrap();
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_wma_period_exceeds_length_is_all_nan() {
        let result = wma(&[1.0_f64, 2.0, 3.0], 5).unwrap();
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_wma_nan_only_poisons_its_windows() {
        let data = vec![1.0_f64, 2.0, f64::NAN, 4.0, 5.0, 6.0, 7.0];
        let result = wma(&data, 3).unwrap();
        // windows ending at 2, 3, 4 contain the NaN
        assert!(result[2].is_nan());
        assert!(result[3].is_nan());
        assert!(result[4].is_nan());
        // (4×1 + 5×2 + 6×3) / 6
        assert!(approx_eq(result[5], 32.0 / 6.0, EPSILON));
        assert!(approx_eq(result[6], 38.0 / 6.0, EPSILON));
    }

    #[test]
    fn test_wma_leading_nan_prefix() {
        // Shape of the intermediate series HullMA feeds back into WMA.
        let data = vec![f64::NAN, f64::NAN, 1.0, 2.0, 3.0];
        let result = wma(&data, 2).unwrap();
        assert!(result[..3].iter().all(|v| v.is_nan()));
        assert!(approx_eq(result[3], 5.0 / 3.0, EPSILON));
        assert!(approx_eq(result[4], 8.0 / 3.0, EPSILON));
    }

    #[test]
    fn test_wma_negative_values() {
        let result = wma(&[-1.0_f64, -2.0, -3.0], 3).unwrap();
        assert!(approx_eq(result[2], -14.0 / 6.0, EPSILON));
    }

    // ==================== _into Variant ====================

    #[test]
    fn test_wma_into_matches_wma() {
        let data: Vec<f64> = (0..50).map(|i| 100.0 + (i as f64 * 0.3).sin()).collect();
        let expected = wma(&data, 9).unwrap();
        let mut output = vec![0.0_f64; data.len()];
        let valid = wma_into(&data, 9, &mut output).unwrap();
        assert_eq!(valid, 42);
        for (a, b) in output.iter().zip(&expected) {
            assert!((a.is_nan() && b.is_nan()) || a == b);
        }
    }

    #[test]
    fn test_wma_into_larger_buffer_untouched_tail() {
        let mut output = vec![-1.0_f64; 6];
        let valid = wma_into(&[1.0, 2.0, 3.0, 4.0], 2, &mut output).unwrap();
        assert_eq!(valid, 3);
        assert!(output[0].is_nan());
        assert_eq!(output[4], -1.0);
        assert_eq!(output[5], -1.0);
    }

    #[test]
    fn test_wma_into_buffer_reuse() {
        let mut output = vec![0.0_f64; 4];
        wma_into(&[1.0, 2.0, 3.0, 4.0], 2, &mut output).unwrap();
        let valid = wma_into(&[1.0, 2.0, 3.0, 4.0], 5, &mut output).unwrap();
        assert_eq!(valid, 0);
        assert!(output.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_wma_into_insufficient_output() {
        let mut output = vec![0.0_f64; 2];
        let result = wma_into(&[1.0, 2.0, 3.0], 2, &mut output);
        assert_eq!(
            result,
            Err(Error::BufferTooSmall {
                required: 3,
                actual: 2,
                indicator: "wma"
            })
        );
    }
}
