//! Average True Range (ATR) indicator.
//!
//! The Average True Range measures volatility by decomposing the full range of
//! each bar, including gaps from the previous close. It was developed by
//! J. Welles Wilder Jr.
//!
//! # Formula
//!
//! ```text
//! TR[0] = High[0] - Low[0]                   (no previous close yet)
//! TR[i] = max(
//!     High[i] - Low[i],
//!     |High[i] - Close[i-1]|,
//!     |Low[i] - Close[i-1]|
//! )
//!
//! ATR[period-1] = mean(TR[0..period])         (plain average seed)
//! ATR[i]        = ((period-1) × ATR[i-1] + TR[i]) / period
//! ```
//!
//! # Warm-up
//!
//! ATR uses zero, not NaN, as its undefined sentinel: positions before
//! `period - 1` stay at zero, and an input shorter than `period` yields an
//! all-zero series.
//!
//! # Example
//!
//! ```
//! use cloud_ta::indicators::atr::atr;
//!
//! let high = vec![10.0_f64, 11.0, 12.0, 11.0];
//! let low = vec![9.0_f64, 10.0, 10.0, 9.0];
//! let close = vec![9.5_f64, 10.5, 11.5, 10.0];
//!
//! let result = atr(&high, &low, &close, 2).unwrap();
//! assert_eq!(result[0], 0.0);
//! assert_eq!(result[1], 1.25); // mean(1.0, 1.5)
//! ```

use crate::error::Result;
use crate::traits::{validate_high_low_close, validate_output_len, SeriesElement};

/// Default ATR period.
pub const DEFAULT_ATR_PERIOD: usize = 14;

/// Number of leading zero-sentinel positions: `period - 1`.
///
/// ```
/// use cloud_ta::indicators::atr::atr_lookback;
///
/// assert_eq!(atr_lookback(14), 13);
/// ```
#[inline]
#[must_use]
pub const fn atr_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Minimum input length for ATR to produce a defined value.
#[inline]
#[must_use]
pub const fn atr_min_len(period: usize) -> usize {
    period
}

#[inline]
fn bar_true_range<T: SeriesElement>(high: T, low: T, prev_close: T) -> T {
    let hl = high - low;
    let hpc = (high - prev_close).abs();
    let lpc = (low - prev_close).abs();
    hl.max(hpc).max(lpc)
}

/// Computes the True Range series.
///
/// The first bar has no previous close, so `TR[0] = High[0] - Low[0]`.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `high`, `low` and `close` differ in length.
///
/// ```
/// use cloud_ta::indicators::atr::true_range;
///
/// let tr = true_range(&[10.0_f64, 12.0], &[9.0, 11.5], &[9.5, 12.0]).unwrap();
/// assert_eq!(tr, vec![1.0, 2.5]); // gap up: 12.0 - 9.5
/// ```
pub fn true_range<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
    validate_high_low_close(high, low, close)?;

    let Some((&h0, _)) = high.split_first() else {
        return Ok(Vec::new());
    };

    let mut tr = Vec::with_capacity(high.len());
    tr.push(h0 - low[0]);
    tr.extend(
        high.iter()
            .zip(low)
            .skip(1)
            .zip(close)
            .map(|((&h, &l), &prev_close)| bar_true_range(h, l, prev_close)),
    );
    Ok(tr)
}

/// Computes the Average True Range with Wilder's smoothing.
///
/// The output has the same length as the inputs. Positions before
/// `period - 1` are zero; if `period` is zero or longer than the inputs, the
/// whole output is zero.
///
/// # Errors
///
/// - `Error::LengthMismatch` if `high`, `low` and `close` differ in length
/// - `Error::NumericConversion` if `period` cannot be represented in `T`
#[must_use = "this returns a Result with the ATR values, which should be used"]
pub fn atr<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::zero(); high.len()];
    atr_into(high, low, close, period, &mut output)?;
    Ok(output)
}

/// Computes the Average True Range into a pre-allocated output buffer.
///
/// Returns the number of defined (seeded or smoothed) values written.
///
/// # Errors
///
/// - `Error::LengthMismatch` if `high`, `low` and `close` differ in length
/// - `Error::BufferTooSmall` if `output` is shorter than the inputs
/// - `Error::NumericConversion` if `period` cannot be represented in `T`
#[must_use = "this returns a Result with the count of valid ATR values"]
pub fn atr_into<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
    output: &mut [T],
) -> Result<usize> {
    let tr = true_range(high, low, close)?;
    let n = tr.len();
    validate_output_len(output, n, "atr")?;

    let output = &mut output[..n];
    output.fill(T::zero());

    if period == 0 || period > n {
        tracing::trace!(len = n, period, "atr: insufficient data, zero series");
        return Ok(0);
    }

    let period_t = T::from_usize(period)?;
    let seed = tr[..period].iter().fold(T::zero(), |acc, &v| acc + v) / period_t;
    output[period - 1] = seed;

    let carry = period_t - T::one();
    let mut prev = seed;
    for (out, &range) in output[period..].iter_mut().zip(&tr[period..]) {
        prev = (carry * prev + range) / period_t;
        *out = prev;
    }

    Ok(n - period + 1)
}

/// ATR configuration with fluent builder API.
///
/// Defaults to Wilder's standard period of 14.
///
/// # Example
///
/// ```
/// use cloud_ta::indicators::atr::Atr;
///
/// let high = vec![10.0_f64, 11.0, 12.0, 11.0];
/// let low = vec![9.0_f64, 10.0, 10.0, 9.0];
/// let close = vec![9.5_f64, 10.5, 11.5, 10.0];
///
/// // Default period (14) is longer than the data: all zeros
/// let result = Atr::default().compute(&high, &low, &close).unwrap();
/// assert!(result.iter().all(|&v| v == 0.0));
///
/// let result = Atr::new().period(2).compute(&high, &low, &close).unwrap();
/// assert_eq!(result[1], 1.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Atr {
    period: usize,
}

impl Default for Atr {
    /// Creates an ATR configuration with the standard period (14).
    fn default() -> Self {
        Self {
            period: DEFAULT_ATR_PERIOD,
        }
    }
}

impl Atr {
    /// Creates an ATR configuration with the standard period (14).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the smoothing period.
    ///
    /// Default: 14
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Returns the period.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the number of zero-sentinel positions for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        atr_lookback(self.period)
    }

    /// Computes ATR using the configured period.
    ///
    /// # Errors
    ///
    /// See [`atr`].
    pub fn compute<T: SeriesElement>(&self, high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
        atr(high, low, close, self.period)
    }
}
