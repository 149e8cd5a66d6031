//! cloud-ta: Ichimoku cloud and Hull moving average indicators
//!
//! This crate computes a small, exact set of technical analysis indicators
//! over price series and derives simple trading signals from them.
//!
//! # Features
//!
//! - **Deterministic**: pure batch functions with documented warm-up shapes
//! - **Generics**: works with both `f32` and `f64` data types
//! - **Total**: short and empty inputs return sentinel series, never errors
//!
//! # Quick Start
//!
//! ```
//! use cloud_ta::prelude::*;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = wma(&data, 3).unwrap();
//!
//! // First 2 values are NaN (lookback period)
//! assert!(result[0].is_nan());
//! assert!(result[1].is_nan());
//! assert!((result[2] - 14.0 / 6.0).abs() < 1e-10);
//! ```
//!
//! # Available Indicators
//!
//! ## Moving Averages
//! - [`indicators::wma()`]: Weighted Moving Average
//! - [`indicators::hullma()`]: Hull Moving Average
//! - [`indicators::ema()`]: Exponential Moving Average
//!
//! ## Volatility
//! - [`indicators::atr()`]: Average True Range
//!
//! ## Ichimoku
//! - [`indicators::ichimoku_components()`]: Tenkan, Kijun, Senkou A and B
//! - [`indicators::ichimoku_components_hull()`]: the same lines smoothed by HullMA
//!
//! ## Signals
//! - [`indicators::hullma_trend()`], [`indicators::hullma_pullback()`],
//!   [`indicators::hullma_bounce()`]
//!
//! # Error Handling
//!
//! Insufficient data is not an error:
//!
//! ```
//! use cloud_ta::prelude::*;
//!
//! let short_data = vec![1.0_f64, 2.0];
//! let result = wma(&short_data, 10).unwrap();
//! assert!(result.iter().all(|v| v.is_nan()));
//!
//! // Mismatched high/low lengths are.
//! let result = ichimoku_line(&[1.0_f64, 2.0], &[1.0], 1);
//! assert!(result.is_err());
//! ```
//!
//! # Logging
//!
//! Sentinel paths emit `tracing` events at `trace` and `debug` level. The
//! crate never installs a subscriber.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod indicators;
pub mod kernels;
pub mod prelude;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use traits::SeriesElement;
pub use utils::{approx_eq, count_nan_prefix, count_nans, series_match, EPSILON};
