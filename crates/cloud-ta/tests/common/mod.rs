//! Shared test utilities for cloud-ta integration tests.
//!
//! Holds seeded market data generators and straightforward loop-based
//! reference kernels. The reference kernels are written for clarity, not
//! speed, and are what the library output is diffed against.

#![allow(dead_code)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of bars in the standard parity data set.
pub const PARITY_LEN: usize = 200;

/// Seed for the standard parity data set.
pub const PARITY_SEED: u64 = 42;

/// High, low and close series of equal length.
#[derive(Debug, Clone)]
pub struct Bars {
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
}

impl Bars {
    pub fn len(&self) -> usize {
        self.close.len()
    }
}

/// Standard normal sample via the Box-Muller transform.
fn standard_normal(rng: &mut ChaCha8Rng) -> f64 {
    // Shift u1 away from zero so ln() stays finite.
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Generates an additive random walk around 100 with high/low wicks.
///
/// `close = 100 + cumsum(z × 0.5)`, `high = close + |z' × 0.3|`,
/// `low = close - |z'' × 0.3|`.
pub fn random_walk_bars(n: usize, seed: u64) -> Bars {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut close = Vec::with_capacity(n);
    let mut level = 100.0;
    for _ in 0..n {
        level += standard_normal(&mut rng) * 0.5;
        close.push(level);
    }
    let high: Vec<f64> = close
        .iter()
        .map(|c| c + (standard_normal(&mut rng) * 0.3).abs())
        .collect();
    let low: Vec<f64> = close
        .iter()
        .map(|c| c - (standard_normal(&mut rng) * 0.3).abs())
        .collect();

    Bars { high, low, close }
}

/// The standard parity data set.
pub fn parity_bars() -> Bars {
    random_walk_bars(PARITY_LEN, PARITY_SEED)
}

// ==================== Reference Kernels ====================

pub fn ref_wma(prices: &[f64], period: usize) -> Vec<f64> {
    let n = prices.len();
    let mut wma = vec![f64::NAN; n];
    if n < period || period == 0 {
        return wma;
    }
    let weight_sum = (period * (period + 1)) as f64 / 2.0;
    for i in period - 1..n {
        let mut total = 0.0;
        for j in 0..period {
            let weight = (period - j) as f64;
            total += prices[i - j] * weight;
        }
        wma[i] = total / weight_sum;
    }
    wma
}

pub fn ref_hullma(prices: &[f64], period: usize) -> Vec<f64> {
    let n = prices.len();
    if n < period || period == 0 {
        return vec![f64::NAN; n];
    }
    let half_period = (period / 2).max(2);
    let wma_half = ref_wma(prices, half_period);
    let wma_full = ref_wma(prices, period);
    let mut raw = vec![f64::NAN; n];
    for i in 0..n {
        if !wma_half[i].is_nan() && !wma_full[i].is_nan() {
            raw[i] = 2.0 * wma_half[i] - wma_full[i];
        }
    }
    let sqrt_period = ((period as f64).sqrt() as usize).max(2);
    ref_wma(&raw, sqrt_period)
}

pub fn ref_hullma_trend(short: &[f64], long: &[f64]) -> i32 {
    if short.len() < 2 || long.len() < 2 {
        return 0;
    }
    let s = short[short.len() - 1];
    let l = long[long.len() - 1];
    if s.is_nan() || l.is_nan() {
        return 0;
    }
    if s > l {
        1
    } else if s < l {
        -1
    } else {
        0
    }
}

pub fn ref_hullma_pullback(prices: &[f64], hull_long: &[f64], threshold: f64) -> (bool, f64) {
    if prices.is_empty() || hull_long.is_empty() {
        return (false, 0.0);
    }
    let price = prices[prices.len() - 1];
    let hull = hull_long[hull_long.len() - 1];
    if price.is_nan() || hull.is_nan() || hull <= 0.0 {
        return (false, 0.0);
    }
    let dr = (price - hull).abs() / hull;
    (dr <= threshold, dr)
}

pub fn ref_hullma_bounce(prices: &[f64], threshold: f64) -> (bool, bool, f64) {
    if prices.len() < 2 {
        return (false, false, 0.0);
    }
    let ret = prices[prices.len() - 1] / prices[prices.len() - 2] - 1.0;
    (ret > threshold, ret < -threshold, ret.abs())
}

pub fn ref_ichimoku_line(high: &[f64], low: &[f64], period: usize) -> Vec<f64> {
    let n = high.len();
    let mut result = vec![0.0; n];
    if n < period || period == 0 {
        return result;
    }
    for i in period - 1..n {
        let mut max_high = high[i + 1 - period];
        let mut min_low = low[i + 1 - period];
        for j in i + 2 - period..=i {
            max_high = max_high.max(high[j]);
            min_low = min_low.min(low[j]);
        }
        result[i] = (max_high + min_low) / 2.0;
    }
    if period > 1 {
        let initial = result[period - 1];
        for v in &mut result[..period - 1] {
            *v = initial;
        }
    }
    result
}

pub fn ref_ichimoku_components(
    high: &[f64],
    low: &[f64],
    tp: usize,
    kp: usize,
    sp: usize,
) -> [Vec<f64>; 4] {
    let tenkan = ref_ichimoku_line(high, low, tp);
    let kijun = ref_ichimoku_line(high, low, kp);
    let senkou_a = tenkan.iter().zip(&kijun).map(|(t, k)| (t + k) / 2.0).collect();
    let senkou_b = ref_ichimoku_line(high, low, sp);
    [tenkan, kijun, senkou_a, senkou_b]
}

pub fn ref_ichimoku_line_hull(high: &[f64], low: &[f64], period: usize) -> Vec<f64> {
    let median: Vec<f64> = high.iter().zip(low).map(|(h, l)| (h + l) / 2.0).collect();
    ref_hullma(&median, period)
}

pub fn ref_ichimoku_components_hull(
    high: &[f64],
    low: &[f64],
    tp: usize,
    kp: usize,
    sp: usize,
) -> [Vec<f64>; 4] {
    let tenkan = ref_ichimoku_line_hull(high, low, tp);
    let kijun = ref_ichimoku_line_hull(high, low, kp);
    let senkou_a = tenkan
        .iter()
        .zip(&kijun)
        .map(|(t, k)| {
            if t.is_nan() || k.is_nan() {
                f64::NAN
            } else {
                (t + k) / 2.0
            }
        })
        .collect();
    let senkou_b = ref_ichimoku_line_hull(high, low, sp);
    [tenkan, kijun, senkou_a, senkou_b]
}

pub fn ref_ema(data: &[f64], period: usize) -> Vec<f64> {
    let n = data.len();
    let mut ema = vec![0.0; n];
    if n == 0 {
        return ema;
    }
    let alpha = 2.0 / (period as f64 + 1.0);
    ema[0] = data[0];
    for i in 1..n {
        ema[i] = alpha * data[i] + (1.0 - alpha) * ema[i - 1];
    }
    ema
}

pub fn ref_true_range(high: &[f64], low: &[f64], close: &[f64]) -> Vec<f64> {
    let n = high.len();
    let mut tr = vec![0.0; n];
    if n == 0 {
        return tr;
    }
    tr[0] = high[0] - low[0];
    for i in 1..n {
        let hl = high[i] - low[i];
        let hc = (high[i] - close[i - 1]).abs();
        let lc = (low[i] - close[i - 1]).abs();
        tr[i] = hl.max(hc).max(lc);
    }
    tr
}

pub fn ref_atr(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Vec<f64> {
    let n = high.len();
    let tr = ref_true_range(high, low, close);
    let mut atr = vec![0.0; n];
    if period == 0 || period > n {
        return atr;
    }
    atr[period - 1] = tr[..period].iter().sum::<f64>() / period as f64;
    for i in period..n {
        atr[i] = ((period - 1) as f64 * atr[i - 1] + tr[i]) / period as f64;
    }
    atr
}
