//! Rolling window primitives shared by the indicators.
//!
//! - [`weighted_sum`]: linearly weighted window sums (WMA and everything built on it)
//! - [`rolling_extrema`]: monotonic-deque rolling max/min (Ichimoku line)

pub mod rolling_extrema;
pub mod weighted_sum;

pub use rolling_extrema::{
    rolling_high_low, rolling_max, rolling_max_naive, rolling_min, rolling_min_naive,
    MonotonicDeque, RollingExtremaOutput,
};
pub use weighted_sum::{linear_weight_sum, LinearWeights};
