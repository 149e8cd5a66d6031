//! Ichimoku Cloud Example
//!
//! This example compares the classic Ichimoku lines with their Hull-smoothed
//! counterparts on the same bars.
//!
//! Run with: `cargo run --example ichimoku_cloud`

#![allow(clippy::cast_precision_loss)]

use cloud_ta::indicators::ichimoku::{ichimoku_line_lookback, Ichimoku};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let n = 90;
    let close: Vec<f64> = (0..n)
        .map(|i| 100.0 + (i as f64 * 0.15).sin() * 8.0 + i as f64 * 0.1)
        .collect();
    let high: Vec<f64> = close.iter().map(|c| c + 0.8).collect();
    let low: Vec<f64> = close.iter().map(|c| c - 0.8).collect();

    let config = Ichimoku::default();
    println!(
        "Ichimoku periods: tenkan={} kijun={} senkou_b={}",
        config.get_tenkan(),
        config.get_kijun(),
        config.get_senkou_b()
    );
    println!(
        "Classic kijun back-fills its first {} values",
        ichimoku_line_lookback(config.get_kijun())
    );
    println!();

    let classic = config.compute(&high, &low)?;
    let hull = config.compute_hull(&high, &low)?;

    println!(
        "  {:>5} {:>9} {:>9} {:>9} {:>9} {:>9}",
        "Index", "Close", "SpanA", "SpanB", "HullA", "HullB"
    );
    for i in (0..n).step_by(10) {
        println!(
            "  {:>5} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>9.3}",
            i, close[i], classic.senkou_a[i], classic.senkou_b[i], hull.senkou_a[i], hull.senkou_b[i]
        );
    }
    println!();

    let last = n - 1;
    let (top, bottom) = if classic.senkou_a[last] >= classic.senkou_b[last] {
        (classic.senkou_a[last], classic.senkou_b[last])
    } else {
        (classic.senkou_b[last], classic.senkou_a[last])
    };
    let position = if close[last] > top {
        "above"
    } else if close[last] < bottom {
        "below"
    } else {
        "inside"
    };
    println!("Last close {:.3} is {position} the cloud [{bottom:.3}, {top:.3}]", close[last]);

    Ok(())
}
