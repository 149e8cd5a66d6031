//! Commonly used types and functions for convenient importing.
//!
//! # Usage
//!
//! ```
//! use cloud_ta::prelude::*;
//!
//! let high = vec![5.0_f64, 7.0, 6.0, 9.0];
//! let low = vec![1.0_f64, 2.0, 2.0, 3.0];
//!
//! let line = ichimoku_line(&high, &low, 3).unwrap();
//! assert_eq!(line[0], 4.0);
//!
//! let smoothed = wma(&high, 3).unwrap();
//! assert!(smoothed[1].is_nan());
//! ```

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::SeriesElement;

// Indicator functions
pub use crate::indicators::{
    atr, ema, hullma, ichimoku_components, ichimoku_components_hull, ichimoku_line,
    ichimoku_line_hull, true_range, wma,
};

// _into API for pre-allocated buffers
pub use crate::indicators::{atr_into, ema_into, ichimoku_line_into, wma_into};

// Signals
pub use crate::indicators::{
    hullma_bounce, hullma_pullback, hullma_trend, BounceSignal, HullSignalSnapshot,
    PullbackSignal, Trend,
};

// Multi-output and configuration types
pub use crate::indicators::{Atr, HullSignals, Ichimoku, IchimokuOutput};

// Lookback functions
pub use crate::indicators::{
    atr_lookback, atr_min_len, hullma_lookback, hullma_min_len, ichimoku_line_lookback,
    wma_lookback, wma_min_len,
};
