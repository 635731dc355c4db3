//! Reverse transforms from log growth/log level data to percent changes.
//!
//! Model observables are often stored as `100 * log` levels or quarterly
//! `100 * log` growth rates. These functions map them back to percent changes,
//! optionally annualized (`100 * (exp(·)^4 - 1)`) and optionally adjusted by a
//! quarterly population log-growth series to move from per-capita to aggregate
//! terms.

use crate::error::{Result, TransformError};

fn check_lengths(series: &[f64], population_growth: &[f64]) -> Result<()> {
    if population_growth.len() != series.len() {
        return Err(TransformError::DimensionMismatch {
            expected: series.len(),
            got: population_growth.len(),
        });
    }
    Ok(())
}

fn annualize(quarterly_log_growth: f64) -> f64 {
    100.0 * (quarterly_log_growth.exp().powi(4) - 1.0)
}

/// Lag `series` by one period, using `y0` as the value before the first.
fn lagged(series: &[f64], y0: f64) -> impl Iterator<Item = f64> + '_ {
    std::iter::once(y0).chain(series.iter().copied())
}

/// Quarterly log growth (in percent) to quarterly percent change.
///
/// `100 * (exp(y / 100) - 1)`
pub fn loggrowth_to_pct(series: &[f64]) -> Vec<f64> {
    series
        .iter()
        .map(|&y| 100.0 * ((y / 100.0).exp() - 1.0))
        .collect()
}

/// Per-capita quarterly log growth (in percent) to aggregate quarterly
/// percent change.
///
/// `100 * (exp(y / 100 + pop) - 1)`, where `pop` is quarterly population
/// log growth in decimal units.
///
/// # Errors
/// Returns [`TransformError::DimensionMismatch`] if the population series has
/// a different length.
pub fn loggrowth_to_pct_percapita(series: &[f64], population_growth: &[f64]) -> Result<Vec<f64>> {
    check_lengths(series, population_growth)?;
    Ok(series
        .iter()
        .zip(population_growth.iter())
        .map(|(&y, &pop)| 100.0 * ((y / 100.0 + pop).exp() - 1.0))
        .collect())
}

/// Quarterly log growth (in percent) to annualized percent change.
///
/// `100 * (exp(y / 100)^4 - 1)`
pub fn loggrowth_to_pct_annualized(series: &[f64]) -> Vec<f64> {
    series.iter().map(|&y| annualize(y / 100.0)).collect()
}

/// Per-capita quarterly log growth (in percent) to aggregate annualized
/// percent change.
///
/// `100 * (exp(y / 100 + pop)^4 - 1)`, where `pop` is quarterly population
/// log growth in decimal units.
///
/// # Errors
/// Returns [`TransformError::DimensionMismatch`] if the population series has
/// a different length.
pub fn loggrowth_to_pct_annualized_percapita(
    series: &[f64],
    population_growth: &[f64],
) -> Result<Vec<f64>> {
    check_lengths(series, population_growth)?;
    Ok(series
        .iter()
        .zip(population_growth.iter())
        .map(|(&y, &pop)| annualize(y / 100.0 + pop))
        .collect())
}

/// Log level (in percent, `100 * ln x`) to annualized percent change.
///
/// `100 * (exp(y[t] / 100 - y[t-1] / 100)^4 - 1)` with `y[-1] = y0`. Pass
/// `f64::NAN` as `y0` when the previous level is unknown.
pub fn loglevel_to_pct_annualized(series: &[f64], y0: f64) -> Vec<f64> {
    series
        .iter()
        .zip(lagged(series, y0))
        .map(|(&y, prev)| annualize(y / 100.0 - prev / 100.0))
        .collect()
}

/// Per-capita log level (in percent) to aggregate annualized percent change.
///
/// `100 * (exp(y[t] / 100 - y[t-1] / 100 + pop[t])^4 - 1)` with `y[-1] = y0`.
///
/// # Errors
/// Returns [`TransformError::DimensionMismatch`] if the population series has
/// a different length.
pub fn loglevel_to_pct_annualized_percapita(
    series: &[f64],
    y0: f64,
    population_growth: &[f64],
) -> Result<Vec<f64>> {
    check_lengths(series, population_growth)?;
    Ok(series
        .iter()
        .zip(lagged(series, y0))
        .zip(population_growth.iter())
        .map(|((&y, prev), &pop)| annualize(y / 100.0 - prev / 100.0 + pop))
        .collect())
}
