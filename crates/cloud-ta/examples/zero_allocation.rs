//! Zero-Allocation Example
//!
//! This example demonstrates how to use the `_into` variants to reuse output
//! buffers across many computations.
//!
//! Run with: `cargo run --example zero_allocation`

#![allow(clippy::cast_precision_loss)]

use cloud_ta::indicators::{
    atr::atr_into, ema::ema_into, ichimoku::ichimoku_line_into, wma::wma_into,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data_size = 1000;

    println!("Processing {data_size} bars with pre-allocated buffers");
    println!();

    // Pre-allocate all buffers once
    let mut wma_output = vec![0.0_f64; data_size];
    let mut ema_output = vec![0.0_f64; data_size];
    let mut atr_output = vec![0.0_f64; data_size];
    let mut line_output = vec![0.0_f64; data_size];

    for batch in 0..5 {
        let offset = batch as f64 * 10.0;
        let close: Vec<f64> = (0..data_size)
            .map(|i| 100.0 + offset + (i as f64 * 0.05).sin() * 5.0)
            .collect();
        let high: Vec<f64> = close.iter().map(|c| c + 1.0).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 1.0).collect();

        let wma_valid = wma_into(&close, 20, &mut wma_output)?;
        let ema_valid = ema_into(&close, 20, &mut ema_output)?;
        let atr_valid = atr_into(&high, &low, &close, 14, &mut atr_output)?;
        let line_valid = ichimoku_line_into(&high, &low, 26, &mut line_output)?;

        println!(
            "Batch {batch}: wma={wma_valid} ema={ema_valid} atr={atr_valid} line={line_valid} \
             last wma={:.3} atr={:.3}",
            wma_output[data_size - 1],
            atr_output[data_size - 1]
        );
    }

    Ok(())
}
