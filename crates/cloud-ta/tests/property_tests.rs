//! Property-based tests for all indicators using proptest.
//!
//! These tests verify invariant properties that must hold for all valid inputs,
//! using randomly generated test data to find edge cases.

#![allow(clippy::float_cmp)]

use proptest::prelude::*;

use cloud_ta::indicators::{
    atr::{atr, true_range},
    ema::ema,
    hull::{hullma, hullma_lookback},
    ichimoku::{ichimoku_components, ichimoku_line},
    ichimoku_hull::ichimoku_components_hull,
    signals::{hullma_bounce, hullma_pullback, hullma_trend, Trend},
    wma::wma,
};
use cloud_ta::kernels::rolling_extrema::{
    rolling_max, rolling_max_naive, rolling_min, rolling_min_naive,
};
use cloud_ta::utils::count_nan_prefix;

// ==================== Test Data Generators ====================

/// Generate a random price series (all positive values)
fn arb_price_series(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0..1000.0_f64, min_len..=max_len)
}

/// Generate a random OHLC series with valid constraints (high >= close >= low)
fn arb_ohlc_series(
    min_len: usize,
    max_len: usize,
) -> impl Strategy<Value = (Vec<f64>, Vec<f64>, Vec<f64>)> {
    prop::collection::vec(
        (1.0..1000.0_f64, 0.0..0.1_f64, 0.0..0.1_f64),
        min_len..=max_len,
    )
    .prop_map(|data| {
        let mut high = Vec::with_capacity(data.len());
        let mut low = Vec::with_capacity(data.len());
        let mut close = Vec::with_capacity(data.len());

        for (base, high_pct, low_pct) in data {
            high.push(base * (1.0 + high_pct));
            low.push(base * (1.0 - low_pct));
            close.push(base);
        }

        (high, low, close)
    })
}

// ==================== Shape Preservation ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every kernel returns a series of the input length
    #[test]
    fn prop_output_length(
        (high, low, close) in arb_ohlc_series(0, 80),
        period in 1usize..=30,
    ) {
        let n = close.len();
        prop_assert_eq!(wma(&close, period).unwrap().len(), n);
        prop_assert_eq!(hullma(&close, period).unwrap().len(), n);
        prop_assert_eq!(ema(&close, period).unwrap().len(), n);
        prop_assert_eq!(atr(&high, &low, &close, period).unwrap().len(), n);
        prop_assert_eq!(ichimoku_line(&high, &low, period).unwrap().len(), n);
        let cloud = ichimoku_components(&high, &low, period, period + 1, period + 2).unwrap();
        prop_assert_eq!(cloud.len(), n);
        prop_assert_eq!(cloud.senkou_b.len(), n);
    }

    /// Inputs shorter than the period give the documented sentinel series
    #[test]
    fn prop_insufficient_data_sentinels(
        (high, low, close) in arb_ohlc_series(0, 20),
        extra in 1usize..10,
    ) {
        let period = close.len() + extra;
        prop_assert!(wma(&close, period).unwrap().iter().all(|v| v.is_nan()));
        prop_assert!(hullma(&close, period).unwrap().iter().all(|v| v.is_nan()));
        prop_assert!(ichimoku_line(&high, &low, period).unwrap().iter().all(|&v| v == 0.0));
        prop_assert!(atr(&high, &low, &close, period).unwrap().iter().all(|&v| v == 0.0));
    }
}

// ==================== WMA / HullMA Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// WMA has exactly period-1 leading NaN values on finite input
    #[test]
    fn prop_wma_nan_prefix(data in arb_price_series(1, 100), period in 1usize..=20) {
        prop_assume!(data.len() >= period);
        let result = wma(&data, period).unwrap();
        prop_assert_eq!(count_nan_prefix(&result), period - 1);
        prop_assert!(result[period - 1..].iter().all(|v| v.is_finite()));
    }

    /// WMA stays within the window's min and max
    #[test]
    fn prop_wma_bounded_by_window(data in arb_price_series(1, 100), period in 1usize..=20) {
        prop_assume!(data.len() >= period);
        let result = wma(&data, period).unwrap();
        for i in period - 1..data.len() {
            let window = &data[i + 1 - period..=i];
            let lo = window.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(result[i] >= lo - 1e-9 && result[i] <= hi + 1e-9);
        }
    }

    /// HullMA warm-up length equals its lookback when the input is long enough
    #[test]
    fn prop_hullma_nan_prefix(data in arb_price_series(1, 150), period in 2usize..=40) {
        prop_assume!(data.len() > hullma_lookback(period));
        let result = hullma(&data, period).unwrap();
        prop_assert_eq!(count_nan_prefix(&result), hullma_lookback(period));
        prop_assert!(result[hullma_lookback(period)..].iter().all(|v| v.is_finite()));
    }

    /// HullMA of a constant series is that constant
    #[test]
    fn prop_hullma_constant_input(constant in 1.0..1000.0_f64, len in 1usize..80, period in 2usize..=20) {
        let data = vec![constant; len];
        let result = hullma(&data, period).unwrap();
        for v in result.iter().filter(|v| !v.is_nan()) {
            prop_assert!((v - constant).abs() <= 1e-9 * constant);
        }
    }
}

// ==================== EMA / ATR Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// EMA is seeded with the first sample exactly
    #[test]
    fn prop_ema_seed(data in arb_price_series(1, 100), period in 0usize..=50) {
        let result = ema(&data, period).unwrap();
        prop_assert_eq!(result[0], data[0]);
    }

    /// EMA with a positive period stays within the input range
    #[test]
    fn prop_ema_bounded(data in arb_price_series(1, 100), period in 1usize..=50) {
        let result = ema(&data, period).unwrap();
        let lo = data.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        for v in &result {
            prop_assert!(*v >= lo - 1e-9 && *v <= hi + 1e-9);
        }
    }

    /// ATR seed is the plain mean of the first `period` true ranges
    #[test]
    fn prop_atr_seed_is_mean(
        (high, low, close) in arb_ohlc_series(1, 80),
        period in 1usize..=30,
    ) {
        prop_assume!(close.len() >= period);
        let tr = true_range(&high, &low, &close).unwrap();
        let result = atr(&high, &low, &close, period).unwrap();
        let mean = tr[..period].iter().sum::<f64>() / period as f64;
        prop_assert_eq!(result[period - 1], mean);
        prop_assert!(result[..period - 1].iter().all(|&v| v == 0.0));
    }

    /// True range and ATR are never negative
    #[test]
    fn prop_atr_non_negative(
        (high, low, close) in arb_ohlc_series(1, 80),
        period in 1usize..=30,
    ) {
        prop_assert!(true_range(&high, &low, &close).unwrap().iter().all(|&v| v >= 0.0));
        prop_assert!(atr(&high, &low, &close, period).unwrap().iter().all(|&v| v >= 0.0));
    }
}

// ==================== Ichimoku Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Back-filled prefix equals the first full-window value
    #[test]
    fn prop_line_back_fill(
        (high, low, _close) in arb_ohlc_series(1, 80),
        period in 1usize..=30,
    ) {
        prop_assume!(high.len() >= period);
        let result = ichimoku_line(&high, &low, period).unwrap();
        for v in &result[..period] {
            prop_assert_eq!(*v, result[period - 1]);
        }
    }

    /// Line values stay between the lowest low and the highest high
    #[test]
    fn prop_line_within_range(
        (high, low, _close) in arb_ohlc_series(1, 80),
        period in 1usize..=30,
    ) {
        prop_assume!(high.len() >= period);
        let hi = high.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let lo = low.iter().copied().fold(f64::INFINITY, f64::min);
        for v in ichimoku_line(&high, &low, period).unwrap() {
            prop_assert!(v >= lo && v <= hi);
        }
    }

    /// Classic Senkou A is the unguarded midpoint; Hull Senkou A is NaN where either input is
    #[test]
    fn prop_senkou_a(
        (high, low, _close) in arb_ohlc_series(1, 120),
        tenkan in 2usize..=12,
        kijun in 12usize..=40,
    ) {
        let classic = ichimoku_components(&high, &low, tenkan, kijun, 52).unwrap();
        for i in 0..classic.len() {
            prop_assert_eq!(classic.senkou_a[i], (classic.tenkan[i] + classic.kijun[i]) / 2.0);
        }

        let hull = ichimoku_components_hull(&high, &low, tenkan, kijun, 52).unwrap();
        for i in 0..hull.len() {
            let undefined = hull.tenkan[i].is_nan() || hull.kijun[i].is_nan();
            prop_assert_eq!(hull.senkou_a[i].is_nan(), undefined);
        }
    }

    /// Monotonic deque extrema equal the naive rescan
    #[test]
    fn prop_rolling_extrema_match_naive(data in arb_price_series(0, 100), period in 1usize..=20) {
        let fast_max = rolling_max(&data, period);
        let naive_max = rolling_max_naive(&data, period);
        let fast_min = rolling_min(&data, period);
        let naive_min = rolling_min_naive(&data, period);
        for i in 0..data.len() {
            prop_assert!(fast_max[i] == naive_max[i] || (fast_max[i].is_nan() && naive_max[i].is_nan()));
            prop_assert!(fast_min[i] == naive_min[i] || (fast_min[i].is_nan() && naive_min[i].is_nan()));
        }
    }
}

// ==================== Signal Properties ====================

fn arb_maybe_nan() -> impl Strategy<Value = f64> {
    prop_oneof![
        9 => 1.0..1000.0_f64,
        1 => Just(f64::NAN),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Trend is neutral on short series or NaN last values, else follows the comparison
    #[test]
    fn prop_trend(
        short in prop::collection::vec(arb_maybe_nan(), 0..5),
        long in prop::collection::vec(arb_maybe_nan(), 0..5),
    ) {
        let trend = hullma_trend(&short, &long);
        prop_assert!([-1, 0, 1].contains(&trend.as_i32()));
        if short.len() < 2 || long.len() < 2 {
            prop_assert_eq!(trend, Trend::Neutral);
        } else {
            let (s, l) = (short[short.len() - 1], long[long.len() - 1]);
            if s.is_nan() || l.is_nan() || s == l {
                prop_assert_eq!(trend, Trend::Neutral);
            } else if s > l {
                prop_assert_eq!(trend, Trend::Bullish);
            } else {
                prop_assert_eq!(trend, Trend::Bearish);
            }
        }
    }

    /// Pullback distance is non-negative and the flag is exactly `dr <= threshold`
    #[test]
    fn prop_pullback(
        prices in prop::collection::vec(arb_maybe_nan(), 0..4),
        hull in prop::collection::vec(arb_maybe_nan(), 0..4),
        threshold in 0.0..0.2_f64,
    ) {
        let signal = hullma_pullback(&prices, &hull, threshold);
        prop_assert!(signal.distance_ratio >= 0.0);
        let defined = match (prices.last(), hull.last()) {
            (Some(p), Some(h)) => !p.is_nan() && !h.is_nan() && *h > 0.0,
            _ => false,
        };
        if defined {
            prop_assert_eq!(signal.is_pullback, signal.distance_ratio <= threshold);
        } else {
            prop_assert!(!signal.is_pullback);
            prop_assert_eq!(signal.distance_ratio, 0.0);
        }
    }

    /// A price sitting on the Hull line is always a pullback
    #[test]
    fn prop_pullback_on_the_line(price in 1.0..1000.0_f64, threshold in 0.0..0.2_f64) {
        let signal = hullma_pullback(&[price], &[price], threshold);
        prop_assert_eq!(signal.distance_ratio, 0.0);
        prop_assert!(signal.is_pullback);
    }

    /// Bounce flags are exclusive, and both clear exactly inside the dead zone
    #[test]
    fn prop_bounce(prices in arb_price_series(0, 5), threshold in 0.0..0.05_f64) {
        let signal = hullma_bounce(&prices, threshold);
        prop_assert!(!(signal.is_bounce_up && signal.is_bounce_down));
        if prices.len() >= 2 {
            let neither = !signal.is_bounce_up && !signal.is_bounce_down;
            prop_assert_eq!(neither, signal.strength <= threshold);
        }
    }
}
