//! Hull Signals Example
//!
//! This example walks a price series bar by bar and prints the trend,
//! pullback and bounce signals derived from two Hull moving averages.
//!
//! Run with: `cargo run --example hull_signals`

#![allow(clippy::cast_precision_loss)]

use cloud_ta::indicators::hull::hullma_min_len;
use cloud_ta::indicators::signals::{HullSignals, Trend};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let prices: Vec<f64> = (0..160)
        .map(|i| 50.0 + i as f64 * 0.05 + (i as f64 * 0.09).sin() * 3.0)
        .collect();

    let config = HullSignals::new().short_period(20).long_period(60);
    let warm = hullma_min_len(config.get_long_period());
    println!(
        "Long Hull average needs {warm} bars; signals before that are neutral."
    );
    println!();

    println!(
        "  {:>5} {:>8} {:>8} {:>9} {:>7}",
        "Bar", "Price", "Trend", "Pullback", "Bounce"
    );
    for end in (warm - 5..=prices.len()).step_by(10) {
        let window = &prices[..end];
        let snapshot = config.evaluate(window)?;

        let trend = match snapshot.trend {
            Trend::Bullish => "up",
            Trend::Bearish => "down",
            Trend::Neutral => "-",
        };
        let bounce = if snapshot.bounce.is_bounce_up {
            "up"
        } else if snapshot.bounce.is_bounce_down {
            "down"
        } else {
            "-"
        };
        println!(
            "  {:>5} {:>8.3} {:>8} {:>9} {:>7}",
            end - 1,
            window[end - 1],
            trend,
            if snapshot.pullback.is_pullback {
                format!("{:.4}", snapshot.pullback.distance_ratio)
            } else {
                "-".to_owned()
            },
            bounce
        );
    }

    Ok(())
}
