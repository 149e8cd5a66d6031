//! Linearly weighted window sums, the primitive behind WMA.
//!
//! For a window of width `period`, the sample `j` positions back from the
//! newest one gets weight `period - j`: the newest sample weighs `period`, the
//! oldest weighs 1. The normalising divisor is the fixed weight sum
//! `period * (period + 1) / 2`.
//!
//! Weights and divisor are converted to the element type once, when the
//! [`LinearWeights`] is built, and then reused for every window of a call.

use crate::error::Result;
use crate::traits::SeriesElement;

/// Sum of the linear weights `1 + 2 + ... + period`.
///
/// ```
/// use cloud_ta::kernels::weighted_sum::linear_weight_sum;
///
/// assert_eq!(linear_weight_sum(3), 6);
/// assert_eq!(linear_weight_sum(10), 55);
/// ```
#[inline]
#[must_use]
pub const fn linear_weight_sum(period: usize) -> usize {
    period * (period + 1) / 2
}

/// Precomputed linear weights for one window width.
#[derive(Debug, Clone)]
pub struct LinearWeights<T> {
    /// Weights in window order (oldest first): `1, 2, ..., period`.
    weights: Vec<T>,
    weight_sum: T,
}

impl<T: SeriesElement> LinearWeights<T> {
    /// Builds the weights and divisor for windows of width `period`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if a weight cannot be represented in `T`.
    pub fn new(period: usize) -> Result<Self> {
        let weights = (1..=period)
            .map(T::from_usize)
            .collect::<Result<Vec<T>>>()?;
        Ok(Self {
            weights,
            weight_sum: T::from_usize(linear_weight_sum(period))?,
        })
    }

    /// Window width these weights apply to.
    #[inline]
    #[must_use]
    pub fn period(&self) -> usize {
        self.weights.len()
    }

    /// The normalising divisor `period * (period + 1) / 2`.
    #[inline]
    #[must_use]
    pub fn weight_sum(&self) -> T {
        self.weight_sum
    }

    /// Weighted sum of a window given oldest first.
    ///
    /// Accumulates from the newest sample backwards. A NaN anywhere in the
    /// window yields NaN.
    #[inline]
    #[must_use]
    pub fn weighted_sum(&self, window: &[T]) -> T {
        debug_assert_eq!(window.len(), self.weights.len());
        window
            .iter()
            .zip(&self.weights)
            .rev()
            .fold(T::zero(), |acc, (&value, &weight)| acc + weight * value)
    }

    /// Weighted average of a window given oldest first.
    #[inline]
    #[must_use]
    pub fn average(&self, window: &[T]) -> T {
        self.weighted_sum(window) / self.weight_sum
    }
}
