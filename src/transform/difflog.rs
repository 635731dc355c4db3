//! Log-differencing and its inverse.

/// First difference of logs: `ln(x[t]) - ln(x[t-1])`.
///
/// The first element has no predecessor and is NaN; the output has the same
/// length as the input.
pub fn difflog(series: &[f64]) -> Vec<f64> {
    if series.is_empty() {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(series.len());
    result.push(f64::NAN);
    result.extend(series.windows(2).map(|w| w[1].ln() - w[0].ln()));
    result
}

/// Quarter-over-quarter log growth in percent: `100 * difflog(series)`.
pub fn one_qtr_pct_change(series: &[f64]) -> Vec<f64> {
    difflog(series).into_iter().map(|d| 100.0 * d).collect()
}

/// Running sum that skips NaN values.
///
/// NaN positions stay NaN in the output and do not reset the accumulator.
pub fn cumulative_sum(series: &[f64]) -> Vec<f64> {
    let mut acc = 0.0;
    series
        .iter()
        .map(|&x| {
            if x.is_nan() {
                f64::NAN
            } else {
                acc += x;
                acc
            }
        })
        .collect()
}

/// Rebuild levels from log differences, starting at level `x0`.
///
/// `differences[0]` is ignored (it is NaN in [`difflog`] output), so
/// `integrate_difflog(&difflog(x), x[0])` reconstructs `x`.
pub fn integrate_difflog(differences: &[f64], x0: f64) -> Vec<f64> {
    if differences.is_empty() {
        return Vec::new();
    }

    let mut log_level = x0.ln();
    let mut result = Vec::with_capacity(differences.len());
    result.push(x0);
    for &d in &differences[1..] {
        log_level += d;
        result.push(log_level.exp());
    }
    result
}
