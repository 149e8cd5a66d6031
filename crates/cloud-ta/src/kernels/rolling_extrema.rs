//! Rolling extrema using monotonic deques for O(n) rolling max/min.
//!
//! This is the windowed min/max primitive behind the Ichimoku line: for a
//! window of width `period` ending at `i`, the highest high and the lowest low
//! over `[i - period + 1, i]`.
//!
//! # Algorithm
//!
//! The monotonic deque keeps indices whose values are ordered (decreasing for
//! max, increasing for min), so the front of the deque is always the extremum
//! of the current window. Each index is pushed and popped at most once.
//!
//! Only the extreme *value* is ever read, never its index, so the choice of
//! which tied index survives in the deque cannot change the output. The naive
//! O(n×k) rescans are kept alongside and must agree exactly.
//!
//! # Example
//!
//! ```
//! use cloud_ta::kernels::rolling_extrema::{rolling_max, rolling_min};
//!
//! let data = vec![3.0_f64, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
//!
//! let max_result = rolling_max(&data, 3);
//! assert_eq!(max_result[2], 4.0); // max of [3, 1, 4]
//! assert_eq!(max_result[5], 9.0); // max of [1, 5, 9]
//!
//! let min_result = rolling_min(&data, 3);
//! assert_eq!(min_result[2], 1.0); // min of [3, 1, 4]
//! assert_eq!(min_result[5], 1.0); // min of [1, 5, 9]
//! ```

use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::error::Result;
use crate::traits::{validate_high_low, SeriesElement};

/// A monotonic deque for efficiently tracking rolling extrema.
///
/// Stores indices into the data array; the values at those indices are kept
/// monotonically ordered (decreasing for max, increasing for min).
#[derive(Debug, Clone)]
pub struct MonotonicDeque<T> {
    deque: VecDeque<usize>,
    period: usize,
    _phantom: PhantomData<T>,
}

impl<T: SeriesElement> MonotonicDeque<T> {
    /// Creates a new monotonic deque with the specified window size.
    ///
    /// ```
    /// use cloud_ta::kernels::rolling_extrema::MonotonicDeque;
    ///
    /// let deque: MonotonicDeque<f64> = MonotonicDeque::new(5);
    /// assert!(deque.is_empty());
    /// ```
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self {
            deque: VecDeque::with_capacity(period),
            period,
            _phantom: PhantomData,
        }
    }

    /// Returns the window size.
    #[must_use]
    pub const fn period(&self) -> usize {
        self.period
    }

    /// Returns true if the deque is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// Pushes `data[index]` for computing a rolling maximum.
    ///
    /// NaN values are never admitted as a maximum.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for `data`.
    #[inline]
    pub fn push_max(&mut self, index: usize, data: &[T]) {
        let value = data[index];
        if !value.is_nan() {
            while let Some(&back_idx) = self.deque.back() {
                let back_val = data[back_idx];
                if back_val.is_nan() || value >= back_val {
                    self.deque.pop_back();
                } else {
                    break;
                }
            }
            self.deque.push_back(index);
        }
        self.remove_expired(index);
    }

    /// Pushes `data[index]` for computing a rolling minimum.
    ///
    /// NaN values are never admitted as a minimum.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for `data`.
    #[inline]
    pub fn push_min(&mut self, index: usize, data: &[T]) {
        let value = data[index];
        if !value.is_nan() {
            while let Some(&back_idx) = self.deque.back() {
                let back_val = data[back_idx];
                if back_val.is_nan() || value <= back_val {
                    self.deque.pop_back();
                } else {
                    break;
                }
            }
            self.deque.push_back(index);
        }
        self.remove_expired(index);
    }

    /// Drops indices that have slid out of the window ending at `current_index`.
    #[inline]
    fn remove_expired(&mut self, current_index: usize) {
        if current_index >= self.period {
            let window_start = current_index + 1 - self.period;
            while let Some(&front_idx) = self.deque.front() {
                if front_idx < window_start {
                    self.deque.pop_front();
                } else {
                    break;
                }
            }
        }
    }

    /// Returns the index of the current extremum, or `None` if the deque is empty.
    #[inline]
    #[must_use]
    pub fn front_index(&self) -> Option<usize> {
        self.deque.front().copied()
    }

    /// Returns the current extremum value, or NaN if the deque is empty.
    #[inline]
    pub fn get_extremum(&self, data: &[T]) -> T {
        self.front_index().map_or_else(T::nan, |idx| data[idx])
    }
}

/// Rolling highest-high and lowest-low series.
///
/// Both vectors have the length of the input. The first `period - 1` values
/// are NaN.
#[derive(Debug, Clone)]
pub struct RollingExtremaOutput<T> {
    /// Rolling maximum of the `high` series.
    pub max: Vec<T>,
    /// Rolling minimum of the `low` series.
    pub min: Vec<T>,
}

/// True when no window of width `period` fits in `len` samples.
#[inline]
const fn window_unavailable(len: usize, period: usize) -> bool {
    period == 0 || len < period
}

/// Computes the rolling maximum using a monotonic deque.
///
/// Returns an all-NaN series when `period` is zero or longer than the input.
///
/// ```
/// use cloud_ta::kernels::rolling_extrema::rolling_max;
///
/// let result = rolling_max(&[1.0_f64, 3.0, 2.0, 5.0, 4.0], 3);
/// assert!(result[1].is_nan());
/// assert_eq!(result[2], 3.0);
/// assert_eq!(result[3], 5.0);
/// ```
#[must_use]
pub fn rolling_max<T: SeriesElement>(data: &[T], period: usize) -> Vec<T> {
    let mut result = vec![T::nan(); data.len()];
    if window_unavailable(data.len(), period) {
        return result;
    }

    let mut deque: MonotonicDeque<T> = MonotonicDeque::new(period);
    for i in 0..data.len() {
        deque.push_max(i, data);
        if i + 1 >= period {
            result[i] = deque.get_extremum(data);
        }
    }
    result
}

/// Computes the rolling minimum using a monotonic deque.
///
/// Returns an all-NaN series when `period` is zero or longer than the input.
#[must_use]
pub fn rolling_min<T: SeriesElement>(data: &[T], period: usize) -> Vec<T> {
    let mut result = vec![T::nan(); data.len()];
    if window_unavailable(data.len(), period) {
        return result;
    }

    let mut deque: MonotonicDeque<T> = MonotonicDeque::new(period);
    for i in 0..data.len() {
        deque.push_min(i, data);
        if i + 1 >= period {
            result[i] = deque.get_extremum(data);
        }
    }
    result
}

/// Computes the rolling max of `high` and rolling min of `low` in a single pass.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `high` and `low` differ in length.
///
/// ```
/// use cloud_ta::kernels::rolling_extrema::rolling_high_low;
///
/// let high = [5.0_f64, 7.0, 6.0, 9.0];
/// let low = [1.0_f64, 2.0, 2.0, 3.0];
/// let out = rolling_high_low(&high, &low, 3).unwrap();
/// assert_eq!((out.max[2], out.min[2]), (7.0, 1.0));
/// assert_eq!((out.max[3], out.min[3]), (9.0, 2.0));
/// ```
pub fn rolling_high_low<T: SeriesElement>(
    high: &[T],
    low: &[T],
    period: usize,
) -> Result<RollingExtremaOutput<T>> {
    validate_high_low(high, low)?;

    let n = high.len();
    let mut output = RollingExtremaOutput {
        max: vec![T::nan(); n],
        min: vec![T::nan(); n],
    };
    if window_unavailable(n, period) {
        return Ok(output);
    }

    let mut max_deque: MonotonicDeque<T> = MonotonicDeque::new(period);
    let mut min_deque: MonotonicDeque<T> = MonotonicDeque::new(period);
    for i in 0..n {
        max_deque.push_max(i, high);
        min_deque.push_min(i, low);
        if i + 1 >= period {
            output.max[i] = max_deque.get_extremum(high);
            output.min[i] = min_deque.get_extremum(low);
        }
    }
    Ok(output)
}

/// Rolling maximum by rescanning every window (O(n×k)).
///
/// Reference implementation for verifying [`rolling_max`].
#[must_use]
pub fn rolling_max_naive<T: SeriesElement>(data: &[T], period: usize) -> Vec<T> {
    let mut result = vec![T::nan(); data.len()];
    if window_unavailable(data.len(), period) {
        return result;
    }

    for (i, window) in data.windows(period).enumerate() {
        let mut max_val = window[0];
        for &value in &window[1..] {
            if value > max_val || max_val.is_nan() {
                max_val = value;
            }
        }
        result[i + period - 1] = max_val;
    }
    result
}

/// Rolling minimum by rescanning every window (O(n×k)).
///
/// Reference implementation for verifying [`rolling_min`].
#[must_use]
pub fn rolling_min_naive<T: SeriesElement>(data: &[T], period: usize) -> Vec<T> {
    let mut result = vec![T::nan(); data.len()];
    if window_unavailable(data.len(), period) {
        return result;
    }

    for (i, window) in data.windows(period).enumerate() {
        let mut min_val = window[0];
        for &value in &window[1..] {
            if value < min_val || min_val.is_nan() {
                min_val = value;
            }
        }
        result[i + period - 1] = min_val;
    }
    result
}
