//! Exponential Moving Average (EMA) indicator.
//!
//! The Exponential Moving Average gives geometrically decaying weight to older
//! prices. This variant is seeded with the first sample, so it has no warm-up
//! gap: every output position is defined.
//!
//! # Formula
//!
//! ```text
//! α      = 2 / (period + 1)
//! EMA[0] = Price[0]
//! EMA[i] = α × Price[i] + (1 - α) × EMA[i-1]
//! ```
//!
//! A period of zero is not rejected: it gives `α = 2`, a degenerate filter
//! that callers should not rely on.
//!
//! # Example
//!
//! ```
//! use cloud_ta::indicators::ema::ema;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let result = ema(&data, 3).unwrap();
//!
//! assert_eq!(result[0], 1.0);
//! // α = 0.5: 0.5 × 2 + 0.5 × 1
//! assert!((result[1] - 1.5).abs() < 1e-12);
//! ```

use crate::error::Result;
use crate::traits::{validate_output_len, SeriesElement};

/// Smoothing factor `α = 2 / (period + 1)`.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if `period` cannot be represented in `T`.
#[inline]
pub fn ema_alpha<T: SeriesElement>(period: usize) -> Result<T> {
    Ok(T::two() / (T::from_usize(period)? + T::one()))
}

/// Computes the Exponential Moving Average seeded with the first sample.
///
/// The output has the same length as the input; an empty input yields an
/// empty output.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if `period` cannot be represented in `T`.
///
/// # Example
///
/// ```
/// use cloud_ta::indicators::ema::ema;
///
/// let result = ema(&[10.0_f64, 10.0, 10.0], 14).unwrap();
/// assert!(result.iter().all(|&v| (v - 10.0).abs() < 1e-12));
/// ```
#[must_use = "this returns a Result with the EMA values, which should be used"]
pub fn ema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let mut output = vec![T::zero(); data.len()];
    ema_into(data, period, &mut output)?;
    Ok(output)
}

/// Computes the EMA into a pre-allocated output buffer.
///
/// Returns the number of values written, which is `data.len()`.
///
/// # Errors
///
/// - `Error::BufferTooSmall` if `output` is shorter than `data`
/// - `Error::NumericConversion` if `period` cannot be represented in `T`
#[must_use = "this returns a Result with the count of EMA values"]
pub fn ema_into<T: SeriesElement>(data: &[T], period: usize, output: &mut [T]) -> Result<usize> {
    validate_output_len(output, data.len(), "ema")?;

    let Some((&first, rest)) = data.split_first() else {
        return Ok(0);
    };
    if period == 0 {
        tracing::debug!("ema: period 0 gives alpha = 2");
    }

    let alpha = ema_alpha::<T>(period)?;
    let decay = T::one() - alpha;

    output[0] = first;
    let mut prev = first;
    for (out, &value) in output[1..].iter_mut().zip(rest) {
        prev = alpha * value + decay * prev;
        *out = prev;
    }

    Ok(data.len())
}
