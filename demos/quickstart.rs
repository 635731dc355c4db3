//! Quickstart example: prepare a quarterly GDP series and extract its cycle.
//!
//! Run with: cargo run --example quickstart

use chrono::NaiveDate;
use macro_transforms::core::{Frequency, Table};
use macro_transforms::filter::HPFilter;
use macro_transforms::transform::{deflate, difflog_column, loggrowth_to_pct_annualized, per_capita};

fn main() {
    println!("=== macro-transforms Quickstart ===\n");

    // 1. Build a quarterly table of nominal GDP, deflator and population
    let n = 40;
    let dates: Vec<NaiveDate> = (0..n)
        .map(|i| {
            let months = i as i32 * 3;
            NaiveDate::from_ymd_opt(2010 + months / 12, (months % 12) as u32 + 1, 1).unwrap()
        })
        .collect();

    let nominal: Vec<f64> = (0..n)
        .map(|i| {
            let t = i as f64;
            15000.0 * (0.012 * t).exp() * (1.0 + 0.01 * (t * 0.5).sin())
        })
        .collect();
    let deflator: Vec<f64> = (0..n).map(|i| (0.005 * i as f64).exp()).collect();
    let population: Vec<f64> = (0..n).map(|i| 250.0 * (0.002 * i as f64).exp()).collect();

    let mut table = Table::with_dates(dates)
        .and_then(|t| t.with_column("GDP", nominal))
        .and_then(|t| t.with_column("GDPDEF", deflator))
        .and_then(|t| t.with_column("CNP16OV", population))
        .unwrap();

    let frequency = table.infer_frequency(0.9).unwrap();
    println!("Inferred frequency: {:?}", frequency);

    // 2. Real per-capita output
    deflate(&mut table, "GDP", "GDPDEF", "RGDP").unwrap();
    per_capita(&mut table, "RGDP", "CNP16OV", "RGDP_pc").unwrap();

    // 3. HP filter the log level
    let log_level: Vec<f64> = table
        .column("RGDP_pc")
        .unwrap()
        .iter()
        .map(|x| 100.0 * x.ln())
        .collect();
    let result = HPFilter::for_frequency(Frequency::Quarterly)
        .filter(&log_level)
        .unwrap();

    println!("\n--- Output gap (percent) ---");
    for (i, c) in result.cycle.iter().enumerate().step_by(4) {
        println!("  t={:2}: {:+.3}", i, c);
    }
    println!("Trend strength: {:.4}", result.trend_strength());

    // 4. Annualized growth of real per-capita output
    difflog_column(&mut table, "RGDP_pc", "dlRGDP_pc").unwrap();
    let growth: Vec<f64> = table
        .column("dlRGDP_pc")
        .unwrap()
        .iter()
        .map(|d| 100.0 * d)
        .collect();
    let annualized = loggrowth_to_pct_annualized(&growth);

    println!("\n--- Annualized growth (percent) ---");
    for (i, g) in annualized.iter().enumerate().skip(1).take(4) {
        println!("  t={:2}: {:.3}", i, g);
    }
}
