//! Hull Moving Average (HullMA) indicator.
//!
//! A cascade of three weighted moving averages that cancels most of the lag of
//! a plain moving average while staying smooth.
//!
//! # Formula
//!
//! ```text
//! half     = max(2, period / 2)
//! sqrt_p   = max(2, floor(sqrt(period)))
//! raw[i]   = 2 × WMA(half)[i] − WMA(period)[i]      (NaN if either is NaN)
//! HullMA   = WMA(raw, sqrt_p)
//! ```
//!
//! # Warm-up
//!
//! Input shorter than `period` short-circuits to an all-NaN series. Otherwise
//! NaN propagates through the three WMA stages, giving a NaN prefix of
//! [`hullma_lookback`] positions (or the whole series if it is shorter).
//!
//! # Example
//!
//! ```
//! use cloud_ta::indicators::hull::{hullma, hullma_lookback};
//!
//! let prices: Vec<f64> = (1..=20).map(f64::from).collect();
//! let hma = hullma(&prices, 9).unwrap();
//!
//! assert_eq!(hullma_lookback(9), 10);
//! assert!(hma[9].is_nan());
//! // On a straight line the Hull average has no lag.
//! assert!((hma[10] - prices[10]).abs() < 1e-9);
//! ```

use crate::error::Result;
use crate::indicators::wma::wma;
use crate::traits::SeriesElement;

/// Period of the fast WMA stage: `max(2, period / 2)`.
#[inline]
#[must_use]
pub const fn hull_half_period(period: usize) -> usize {
    let half = period / 2;
    if half < 2 {
        2
    } else {
        half
    }
}

/// Period of the final smoothing stage: `max(2, floor(sqrt(period)))`.
#[inline]
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn hull_sqrt_period(period: usize) -> usize {
    ((period as f64).sqrt() as usize).max(2)
}

/// Number of leading NaN values HullMA produces on a long enough input.
///
/// The raw series is defined once both the fast and the slow WMA are, and the
/// final WMA needs `sqrt_p` raw values on top of that.
///
/// ```
/// use cloud_ta::indicators::hull::hullma_lookback;
///
/// assert_eq!(hullma_lookback(4), 4);
/// assert_eq!(hullma_lookback(20), 22);
/// ```
#[inline]
#[must_use]
pub fn hullma_lookback(period: usize) -> usize {
    if period == 0 {
        return 0;
    }
    hull_half_period(period).max(period) - 1 + hull_sqrt_period(period) - 1
}

/// Minimum input length for HullMA to produce at least one defined value.
#[inline]
#[must_use]
pub fn hullma_min_len(period: usize) -> usize {
    hullma_lookback(period) + 1
}

/// Computes the Hull Moving Average of a series.
///
/// Returns a vector of the same length as the input. If the input is shorter
/// than `period` (or `period` is zero) every value is NaN.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if the WMA weights cannot be represented in `T`.
#[must_use = "this returns a Result with the HullMA values, which should be used"]
pub fn hullma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let n = data.len();
    if period == 0 || n < period {
        tracing::trace!(len = n, period, "hullma: insufficient data, NaN series");
        return Ok(vec![T::nan(); n]);
    }

    let wma_half = wma(data, hull_half_period(period))?;
    let wma_full = wma(data, period)?;

    let two = T::two();
    let raw: Vec<T> = wma_half
        .iter()
        .zip(&wma_full)
        .map(|(&fast, &slow)| {
            if fast.is_nan() || slow.is_nan() {
                T::nan()
            } else {
                two * fast - slow
            }
        })
        .collect();

    wma(&raw, hull_sqrt_period(period))
}
