//! Trading signals derived from Hull moving averages.
//!
//! Each signal looks only at the last one or two points of its inputs and
//! holds no state between calls. Short or undefined inputs never fail: they
//! produce the neutral value of the signal.
//!
//! - [`hullma_trend`]: direction of a fast Hull average relative to a slow one
//! - [`hullma_pullback`]: whether price has pulled back close to the slow average
//! - [`hullma_bounce`]: whether the last one-bar return exceeds a dead zone
//!
//! # Example
//!
//! ```
//! use cloud_ta::indicators::signals::{hullma_bounce, hullma_trend, Trend};
//!
//! assert_eq!(hullma_trend(&[1.0_f64, 2.0], &[1.0, 1.5]), Trend::Bullish);
//!
//! let bounce = hullma_bounce(&[100.0_f64, 101.0], 0.002);
//! assert!(bounce.is_bounce_up);
//! assert!((bounce.strength - 0.01).abs() < 1e-12);
//! ```

use crate::error::Result;
use crate::indicators::hull::hullma;
use crate::traits::SeriesElement;

/// Default short (fast) Hull period.
pub const DEFAULT_SHORT_PERIOD: usize = 20;
/// Default long (slow) Hull period.
pub const DEFAULT_LONG_PERIOD: usize = 60;
/// Default maximum distance ratio for a pullback.
pub const DEFAULT_PULLBACK_THRESHOLD: f64 = 0.03;
/// Default one-bar return dead zone for a bounce.
pub const DEFAULT_BOUNCE_THRESHOLD: f64 = 0.002;

/// Direction of the fast average relative to the slow one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Trend {
    /// Fast average below the slow one.
    Bearish = -1,
    /// Equal averages, or not enough data.
    #[default]
    Neutral = 0,
    /// Fast average above the slow one.
    Bullish = 1,
}

impl Trend {
    /// Returns the trend as `-1`, `0` or `1`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }
}

impl From<Trend> for i32 {
    fn from(trend: Trend) -> Self {
        trend.as_i32()
    }
}

/// Result of [`hullma_pullback`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullbackSignal<T> {
    /// True when the distance ratio is within the threshold.
    pub is_pullback: bool,
    /// `|price - hull| / hull`, zero when undefined.
    pub distance_ratio: T,
}

impl<T: SeriesElement> PullbackSignal<T> {
    fn none() -> Self {
        Self {
            is_pullback: false,
            distance_ratio: T::zero(),
        }
    }
}

/// Result of [`hullma_bounce`].
///
/// The two flags are never both set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceSignal<T> {
    /// Last return above `threshold`.
    pub is_bounce_up: bool,
    /// Last return below `-threshold`.
    pub is_bounce_down: bool,
    /// Absolute value of the last return.
    pub strength: T,
}

impl<T: SeriesElement> BounceSignal<T> {
    fn none() -> Self {
        Self {
            is_bounce_up: false,
            is_bounce_down: false,
            strength: T::zero(),
        }
    }
}

/// Compares the last values of a short and a long Hull series.
///
/// Returns [`Trend::Neutral`] if either series has fewer than two points or
/// ends in NaN.
#[must_use]
pub fn hullma_trend<T: SeriesElement>(short: &[T], long: &[T]) -> Trend {
    if short.len() < 2 || long.len() < 2 {
        return Trend::Neutral;
    }
    let (Some(&s), Some(&l)) = (short.last(), long.last()) else {
        return Trend::Neutral;
    };
    if s.is_nan() || l.is_nan() {
        return Trend::Neutral;
    }

    if s > l {
        Trend::Bullish
    } else if s < l {
        Trend::Bearish
    } else {
        Trend::Neutral
    }
}

/// Checks whether the last price sits within `threshold` of the long Hull average.
///
/// The distance is relative to the Hull value. Empty inputs, a NaN at the end
/// of either series, or a non-positive Hull value give no signal.
///
/// ```
/// use cloud_ta::indicators::signals::hullma_pullback;
///
/// let signal = hullma_pullback(&[102.0_f64], &[100.0], 0.03);
/// assert!(signal.is_pullback);
/// assert!((signal.distance_ratio - 0.02).abs() < 1e-12);
/// ```
#[must_use]
pub fn hullma_pullback<T: SeriesElement>(
    prices: &[T],
    hull_long: &[T],
    threshold: T,
) -> PullbackSignal<T> {
    let (Some(&price), Some(&hull)) = (prices.last(), hull_long.last()) else {
        return PullbackSignal::none();
    };
    if price.is_nan() || hull.is_nan() || hull <= T::zero() {
        return PullbackSignal::none();
    }

    let distance_ratio = (price - hull).abs() / hull;
    PullbackSignal {
        is_pullback: distance_ratio <= threshold,
        distance_ratio,
    }
}

/// Classifies the last one-bar return against a symmetric dead zone.
///
/// Fewer than two prices give no signal.
#[must_use]
pub fn hullma_bounce<T: SeriesElement>(prices: &[T], threshold: T) -> BounceSignal<T> {
    let [.., prev, last] = prices else {
        return BounceSignal::none();
    };

    let ret = *last / *prev - T::one();
    BounceSignal {
        is_bounce_up: ret > threshold,
        is_bounce_down: ret < -threshold,
        strength: ret.abs(),
    }
}

/// All three signals evaluated on one price series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullSignalSnapshot<T> {
    /// Short versus long Hull trend.
    pub trend: Trend,
    /// Pullback to the long Hull average.
    pub pullback: PullbackSignal<T>,
    /// Last-bar bounce.
    pub bounce: BounceSignal<T>,
}

/// Hull signal configuration with fluent builder API.
///
/// # Example
///
/// ```
/// use cloud_ta::indicators::signals::{HullSignals, Trend};
///
/// let prices: Vec<f64> = (0..120).map(|i| 100.0 + i as f64 * 0.5).collect();
/// let snapshot = HullSignals::default().evaluate(&prices).unwrap();
///
/// assert_eq!(snapshot.trend, Trend::Bullish);
/// assert!(!snapshot.bounce.is_bounce_down);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullSignals {
    short_period: usize,
    long_period: usize,
    pullback_threshold: f64,
    bounce_threshold: f64,
}

impl Default for HullSignals {
    fn default() -> Self {
        Self {
            short_period: DEFAULT_SHORT_PERIOD,
            long_period: DEFAULT_LONG_PERIOD,
            pullback_threshold: DEFAULT_PULLBACK_THRESHOLD,
            bounce_threshold: DEFAULT_BOUNCE_THRESHOLD,
        }
    }
}

impl HullSignals {
    /// Creates a configuration with the default periods and thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the short Hull period.
    ///
    /// Default: 20
    #[must_use]
    pub const fn short_period(mut self, period: usize) -> Self {
        self.short_period = period;
        self
    }

    /// Sets the long Hull period.
    ///
    /// Default: 60
    #[must_use]
    pub const fn long_period(mut self, period: usize) -> Self {
        self.long_period = period;
        self
    }

    /// Sets the pullback distance threshold.
    ///
    /// Default: 0.03
    #[must_use]
    pub const fn pullback_threshold(mut self, threshold: f64) -> Self {
        self.pullback_threshold = threshold;
        self
    }

    /// Sets the bounce return threshold.
    ///
    /// Default: 0.002
    #[must_use]
    pub const fn bounce_threshold(mut self, threshold: f64) -> Self {
        self.bounce_threshold = threshold;
        self
    }

    /// Returns the short Hull period.
    #[must_use]
    pub const fn get_short_period(&self) -> usize {
        self.short_period
    }

    /// Returns the long Hull period.
    #[must_use]
    pub const fn get_long_period(&self) -> usize {
        self.long_period
    }

    /// Returns the pullback distance threshold.
    #[must_use]
    pub const fn get_pullback_threshold(&self) -> f64 {
        self.pullback_threshold
    }

    /// Returns the bounce return threshold.
    #[must_use]
    pub const fn get_bounce_threshold(&self) -> f64 {
        self.bounce_threshold
    }

    /// Computes the short and long Hull averages of `prices` and evaluates
    /// every signal on them.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if a period or threshold cannot be
    /// represented in `T`.
    pub fn evaluate<T: SeriesElement>(&self, prices: &[T]) -> Result<HullSignalSnapshot<T>> {
        let short = hullma(prices, self.short_period)?;
        let long = hullma(prices, self.long_period)?;

        Ok(HullSignalSnapshot {
            trend: hullma_trend(&short, &long),
            pullback: hullma_pullback(prices, &long, T::from_f64(self.pullback_threshold)?),
            bounce: hullma_bounce(prices, T::from_f64(self.bounce_threshold)?),
        })
    }
}
