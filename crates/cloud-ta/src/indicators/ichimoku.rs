//! Ichimoku Kinko Hyo lines.
//!
//! Every classic Ichimoku line is the midpoint of the highest high and the
//! lowest low over a rolling window. The standard component set combines three
//! of them:
//!
//! ```text
//! Line(p)[i] = (max(High[i-p+1..=i]) + min(Low[i-p+1..=i])) / 2
//!
//! Tenkan-sen    = Line(9)
//! Kijun-sen     = Line(26)
//! Senkou Span A = (Tenkan + Kijun) / 2
//! Senkou Span B = Line(52)
//! ```
//!
//! Unlike the moving averages in this crate, the line has no NaN warm-up:
//! the first `period - 1` positions are back-filled with the first computed
//! value, and an input shorter than `period` gives an all-zero series.
//!
//! No forward displacement is applied; the spans are aligned with the bar they
//! were computed on.
//!
//! # Example
//!
//! ```
//! use cloud_ta::indicators::ichimoku::ichimoku_line;
//!
//! let high = [5.0_f64, 7.0, 6.0, 9.0];
//! let low = [1.0_f64, 2.0, 2.0, 3.0];
//!
//! let line = ichimoku_line(&high, &low, 3).unwrap();
//! assert_eq!(line, vec![4.0, 4.0, 4.0, 5.5]);
//! ```

use crate::error::Result;
use crate::indicators::ichimoku_hull::ichimoku_components_hull;
use crate::kernels::rolling_extrema::rolling_high_low;
use crate::traits::{validate_high_low, validate_output_len, SeriesElement};

/// Default Tenkan-sen (conversion line) period.
pub const DEFAULT_TENKAN_PERIOD: usize = 9;
/// Default Kijun-sen (base line) period.
pub const DEFAULT_KIJUN_PERIOD: usize = 26;
/// Default Senkou Span B period.
pub const DEFAULT_SENKOU_B_PERIOD: usize = 52;

/// Number of leading positions that are back-filled: `period - 1`.
///
/// ```
/// use cloud_ta::indicators::ichimoku::ichimoku_line_lookback;
///
/// assert_eq!(ichimoku_line_lookback(26), 25);
/// assert_eq!(ichimoku_line_lookback(0), 0);
/// ```
#[inline]
#[must_use]
pub const fn ichimoku_line_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// The four Ichimoku component series.
///
/// All vectors have the length of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct IchimokuOutput<T> {
    /// Tenkan-sen (conversion line).
    pub tenkan: Vec<T>,
    /// Kijun-sen (base line).
    pub kijun: Vec<T>,
    /// Senkou Span A, the midpoint of Tenkan and Kijun.
    pub senkou_a: Vec<T>,
    /// Senkou Span B.
    pub senkou_b: Vec<T>,
}

impl<T> IchimokuOutput<T> {
    /// Returns the length of the output series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tenkan.len()
    }

    /// Returns true if the output series are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tenkan.is_empty()
    }
}

/// Computes one Ichimoku line, the rolling high/low midpoint.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `high` and `low` differ in length.
#[must_use = "this returns a Result with the line values, which should be used"]
pub fn ichimoku_line<T: SeriesElement>(high: &[T], low: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::zero(); high.len()];
    ichimoku_line_into(high, low, period, &mut output)?;
    Ok(output)
}

/// Computes one Ichimoku line into a pre-allocated output buffer.
///
/// Returns the number of positions computed from a full window (the
/// back-filled prefix is not counted).
///
/// # Errors
///
/// - `Error::LengthMismatch` if `high` and `low` differ in length
/// - `Error::BufferTooSmall` if `output` is shorter than the inputs
pub fn ichimoku_line_into<T: SeriesElement>(
    high: &[T],
    low: &[T],
    period: usize,
    output: &mut [T],
) -> Result<usize> {
    validate_high_low(high, low)?;
    let n = high.len();
    validate_output_len(output, n, "ichimoku_line")?;

    let output = &mut output[..n];
    output.fill(T::zero());

    if period == 0 || n < period {
        tracing::trace!(len = n, period, "ichimoku_line: insufficient data, zero series");
        return Ok(0);
    }

    let extrema = rolling_high_low(high, low, period)?;
    let two = T::two();
    let start = period - 1;
    for ((out, &hi), &lo) in output[start..]
        .iter_mut()
        .zip(&extrema.max[start..])
        .zip(&extrema.min[start..])
    {
        *out = (hi + lo) / two;
    }

    let first = output[start];
    output[..start].fill(first);

    Ok(n - start)
}

/// Computes the classic Ichimoku component set.
///
/// `senkou_a` is the plain elementwise midpoint of `tenkan` and `kijun`.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `high` and `low` differ in length.
///
/// # Example
///
/// ```
/// use cloud_ta::indicators::ichimoku::ichimoku_components;
///
/// let high: Vec<f64> = (0..60).map(|i| 101.0 + i as f64).collect();
/// let low: Vec<f64> = (0..60).map(|i| 99.0 + i as f64).collect();
///
/// let cloud = ichimoku_components(&high, &low, 9, 26, 52).unwrap();
/// assert_eq!(cloud.len(), 60);
/// assert_eq!(cloud.senkou_a[59], (cloud.tenkan[59] + cloud.kijun[59]) / 2.0);
/// ```
pub fn ichimoku_components<T: SeriesElement>(
    high: &[T],
    low: &[T],
    tenkan_period: usize,
    kijun_period: usize,
    senkou_b_period: usize,
) -> Result<IchimokuOutput<T>> {
    let tenkan = ichimoku_line(high, low, tenkan_period)?;
    let kijun = ichimoku_line(high, low, kijun_period)?;
    let senkou_b = ichimoku_line(high, low, senkou_b_period)?;

    let two = T::two();
    let senkou_a = tenkan
        .iter()
        .zip(&kijun)
        .map(|(&t, &k)| (t + k) / two)
        .collect();

    Ok(IchimokuOutput {
        tenkan,
        kijun,
        senkou_a,
        senkou_b,
    })
}

/// Ichimoku configuration with fluent builder API.
///
/// Defaults to the traditional 9 / 26 / 52 periods.
///
/// # Example
///
/// ```
/// use cloud_ta::indicators::ichimoku::Ichimoku;
///
/// let high: Vec<f64> = (0..80).map(|i| 100.0 + (i as f64 * 0.2).sin()).collect();
/// let low: Vec<f64> = high.iter().map(|h| h - 1.5).collect();
///
/// let classic = Ichimoku::default().compute(&high, &low).unwrap();
/// assert!(classic.tenkan.iter().all(|v| !v.is_nan()));
///
/// let hull = Ichimoku::new().tenkan(7).compute_hull(&high, &low).unwrap();
/// assert!(hull.tenkan[0].is_nan());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ichimoku {
    tenkan: usize,
    kijun: usize,
    senkou_b: usize,
}

impl Default for Ichimoku {
    fn default() -> Self {
        Self {
            tenkan: DEFAULT_TENKAN_PERIOD,
            kijun: DEFAULT_KIJUN_PERIOD,
            senkou_b: DEFAULT_SENKOU_B_PERIOD,
        }
    }
}

impl Ichimoku {
    /// Creates a configuration with the traditional periods.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Tenkan-sen period.
    ///
    /// Default: 9
    #[must_use]
    pub const fn tenkan(mut self, period: usize) -> Self {
        self.tenkan = period;
        self
    }

    /// Sets the Kijun-sen period.
    ///
    /// Default: 26
    #[must_use]
    pub const fn kijun(mut self, period: usize) -> Self {
        self.kijun = period;
        self
    }

    /// Sets the Senkou Span B period.
    ///
    /// Default: 52
    #[must_use]
    pub const fn senkou_b(mut self, period: usize) -> Self {
        self.senkou_b = period;
        self
    }

    /// Returns the Tenkan-sen period.
    #[must_use]
    pub const fn get_tenkan(&self) -> usize {
        self.tenkan
    }

    /// Returns the Kijun-sen period.
    #[must_use]
    pub const fn get_kijun(&self) -> usize {
        self.kijun
    }

    /// Returns the Senkou Span B period.
    #[must_use]
    pub const fn get_senkou_b(&self) -> usize {
        self.senkou_b
    }

    /// Computes the classic component set with rolling-midpoint lines.
    ///
    /// # Errors
    ///
    /// See [`ichimoku_components`].
    pub fn compute<T: SeriesElement>(&self, high: &[T], low: &[T]) -> Result<IchimokuOutput<T>> {
        ichimoku_components(high, low, self.tenkan, self.kijun, self.senkou_b)
    }

    /// Computes the Hull-smoothed component set.
    ///
    /// # Errors
    ///
    /// See [`ichimoku_components_hull`].
    pub fn compute_hull<T: SeriesElement>(
        &self,
        high: &[T],
        low: &[T],
    ) -> Result<IchimokuOutput<T>> {
        ichimoku_components_hull(high, low, self.tenkan, self.kijun, self.senkou_b)
    }
}
