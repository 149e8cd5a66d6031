//! Hull-smoothed Ichimoku lines.
//!
//! Replaces the rolling high/low midpoint with a Hull moving average of the
//! median price `(High + Low) / 2`. The lines react faster than the classic
//! ones and inherit HullMA's NaN warm-up instead of the flat back-fill.
//!
//! # Example
//!
//! ```
//! use cloud_ta::indicators::hull::hullma_lookback;
//! use cloud_ta::indicators::ichimoku_hull::ichimoku_line_hull;
//!
//! let high: Vec<f64> = (0..30).map(|i| 11.0 + i as f64).collect();
//! let low: Vec<f64> = (0..30).map(|i| 9.0 + i as f64).collect();
//!
//! let line = ichimoku_line_hull(&high, &low, 9).unwrap();
//! assert!(line[hullma_lookback(9) - 1].is_nan());
//! assert!(!line[hullma_lookback(9)].is_nan());
//! ```

use crate::error::Result;
use crate::indicators::hull::hullma;
use crate::indicators::ichimoku::IchimokuOutput;
use crate::traits::{validate_high_low, SeriesElement};

/// Median price series `(high[i] + low[i]) / 2`.
fn median_price<T: SeriesElement>(high: &[T], low: &[T]) -> Vec<T> {
    let two = T::two();
    high.iter().zip(low).map(|(&h, &l)| (h + l) / two).collect()
}

/// Computes one Hull-smoothed Ichimoku line: `HullMA(median price, period)`.
///
/// # Errors
///
/// - `Error::LengthMismatch` if `high` and `low` differ in length
/// - `Error::NumericConversion` if the WMA weights cannot be represented in `T`
pub fn ichimoku_line_hull<T: SeriesElement>(
    high: &[T],
    low: &[T],
    period: usize,
) -> Result<Vec<T>> {
    validate_high_low(high, low)?;
    hullma(&median_price(high, low), period)
}

/// Computes the Ichimoku component set from Hull-smoothed lines.
///
/// `senkou_a` is NaN wherever `tenkan` or `kijun` is still warming up.
///
/// # Errors
///
/// See [`ichimoku_line_hull`].
pub fn ichimoku_components_hull<T: SeriesElement>(
    high: &[T],
    low: &[T],
    tenkan_period: usize,
    kijun_period: usize,
    senkou_b_period: usize,
) -> Result<IchimokuOutput<T>> {
    validate_high_low(high, low)?;
    let mid = median_price(high, low);

    let tenkan = hullma(&mid, tenkan_period)?;
    let kijun = hullma(&mid, kijun_period)?;
    let senkou_b = hullma(&mid, senkou_b_period)?;

    let two = T::two();
    let senkou_a = tenkan
        .iter()
        .zip(&kijun)
        .map(|(&t, &k)| {
            if t.is_nan() || k.is_nan() {
                T::nan()
            } else {
                (t + k) / two
            }
        })
        .collect();

    Ok(IchimokuOutput {
        tenkan,
        kijun,
        senkou_a,
        senkou_b,
    })
}
