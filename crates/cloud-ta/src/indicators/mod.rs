//! Technical analysis indicators.
//!
//! # Overview
//!
//! Every indicator is a batch function over whole slices and returns a series
//! of the same length as its input. Short inputs never fail; each indicator
//! has its own warm-up sentinel:
//!
//! | Indicator | Warm-up | Input shorter than `period` |
//! |-----------|---------|------------------------------|
//! | [`wma`], [`hullma`] | NaN | all NaN |
//! | [`ema`] | none, seeded with the first sample | defined |
//! | [`atr`] | zero | all zero |
//! | [`ichimoku_line`] | back-filled with the first value | all zero |
//! | [`ichimoku_line_hull`] | NaN (Hull cascade) | all NaN |
//!
//! Errors are reserved for inputs outside the contract: mismatched
//! high/low/close lengths, an undersized `_into` buffer, or a period that
//! cannot be represented in the element type.
//!
//! # Moving Averages
//!
//! - [`wma`] - Weighted Moving Average with linear weights
//! - [`hullma`] - Hull Moving Average, a three-stage WMA cascade
//! - [`ema`] - Exponential Moving Average seeded with the first sample
//!
//! # Volatility
//!
//! - [`atr`] - Average True Range with Wilder smoothing
//! - [`true_range`] - per-bar True Range
//!
//! # Ichimoku
//!
//! - [`ichimoku_line`] / [`ichimoku_components`] - classic rolling-midpoint lines
//! - [`ichimoku_line_hull`] / [`ichimoku_components_hull`] - Hull-smoothed lines
//!
//! # Signals
//!
//! - [`hullma_trend`], [`hullma_pullback`], [`hullma_bounce`]
//!
//! # Example
//!
//! ```
//! use cloud_ta::indicators::{hullma, hullma_trend, Trend};
//!
//! let prices: Vec<f64> = (0..100).map(|i| 100.0 + i as f64).collect();
//! let fast = hullma(&prices, 9).unwrap();
//! let slow = hullma(&prices, 36).unwrap();
//!
//! assert_eq!(hullma_trend(&fast, &slow), Trend::Bullish);
//! ```

pub mod atr;
pub mod ema;
pub mod hull;
pub mod ichimoku;
pub mod ichimoku_hull;
pub mod signals;
pub mod wma;

pub use atr::{atr, atr_into, atr_lookback, atr_min_len, true_range, Atr};
pub use ema::{ema, ema_alpha, ema_into};
pub use hull::{hull_half_period, hull_sqrt_period, hullma, hullma_lookback, hullma_min_len};
pub use ichimoku::{
    ichimoku_components, ichimoku_line, ichimoku_line_into, ichimoku_line_lookback, Ichimoku,
    IchimokuOutput,
};
pub use ichimoku_hull::{ichimoku_components_hull, ichimoku_line_hull};
pub use signals::{
    hullma_bounce, hullma_pullback, hullma_trend, BounceSignal, HullSignalSnapshot, HullSignals,
    PullbackSignal, Trend,
};
pub use wma::{wma, wma_into, wma_lookback, wma_min_len};
