//! Core traits for cloud-ta numeric operations.
//!
//! The primary trait is [`SeriesElement`], which abstracts the indicator
//! kernels over `f32` and `f64`. The module also hosts the small validation
//! helpers shared by the multi-series kernels.
//!
//! # Example
//!
//! ```
//! use cloud_ta::traits::SeriesElement;
//!
//! fn mean<T: SeriesElement>(data: &[T]) -> cloud_ta::Result<T> {
//!     let n = T::from_usize(data.len())?;
//!     Ok(data.iter().fold(T::zero(), |acc, &x| acc + x) / n)
//! }
//!
//! let m = mean(&[1.0_f64, 2.0, 3.0]).unwrap();
//! assert!((m - 2.0).abs() < 1e-12);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a price or indicator series.
///
/// It extends `num_traits::Float` with the conversions the kernels need to turn
/// periods and thresholds into the element type.
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// Used to turn periods and weights into the element type.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Returns the constant 2 as this type.
    ///
    /// Used by every midpoint (`(a + b) / 2`) and by the EMA smoothing factor.
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Validates that `high` and `low` describe the same number of bars.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the lengths differ.
#[inline]
pub fn validate_high_low<T>(high: &[T], low: &[T]) -> Result<()> {
    if high.len() == low.len() {
        Ok(())
    } else {
        Err(Error::LengthMismatch {
            description: format!("high has {} elements, low has {}", high.len(), low.len()),
        })
    }
}

/// Validates that `high`, `low` and `close` describe the same number of bars.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if any of the lengths differ.
#[inline]
pub fn validate_high_low_close<T>(high: &[T], low: &[T], close: &[T]) -> Result<()> {
    validate_high_low(high, low)?;
    if high.len() == close.len() {
        Ok(())
    } else {
        Err(Error::LengthMismatch {
            description: format!(
                "high has {} elements, close has {}",
                high.len(),
                close.len()
            ),
        })
    }
}

/// Validates that an output buffer can hold `required` elements.
///
/// # Errors
///
/// Returns `Error::BufferTooSmall` if `output` is shorter than `required`.
#[inline]
pub fn validate_output_len<T>(
    output: &[T],
    required: usize,
    indicator: &'static str,
) -> Result<()> {
    if output.len() < required {
        Err(Error::BufferTooSmall {
            required,
            actual: output.len(),
            indicator,
        })
    } else {
        Ok(())
    }
}
