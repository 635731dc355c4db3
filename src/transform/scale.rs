//! Frequency conversion by elementwise scaling.
//!
//! Annualized quarterly rates are divided by four to give per-quarter rates,
//! and multiplied by four to go back.

/// Convert an annual rate to a quarterly rate.
pub fn annual_to_quarter(v: f64) -> f64 {
    v / 4.0
}

/// Convert a quarterly rate to an annual rate.
pub fn quarter_to_annual(v: f64) -> f64 {
    4.0 * v
}

/// Convert a quarterly rate in decimal units to an annual rate in percent.
pub fn quarter_to_annual_percent(v: f64) -> f64 {
    400.0 * v
}

/// Apply [`annual_to_quarter`] to every element.
pub fn annual_to_quarter_series(series: &[f64]) -> Vec<f64> {
    series.iter().map(|&v| annual_to_quarter(v)).collect()
}

/// Apply [`quarter_to_annual`] to every element.
pub fn quarter_to_annual_series(series: &[f64]) -> Vec<f64> {
    series.iter().map(|&v| quarter_to_annual(v)).collect()
}

/// Apply [`quarter_to_annual_percent`] to every element.
pub fn quarter_to_annual_percent_series(series: &[f64]) -> Vec<f64> {
    series.iter().map(|&v| quarter_to_annual_percent(v)).collect()
}
