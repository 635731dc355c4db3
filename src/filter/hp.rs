//! Hodrick-Prescott trend/cycle decomposition.

use super::penalty::{
    second_difference, second_difference_adjoint, PentadiagonalMatrix, MIN_PENALTY_DIM,
};
use super::solver::solve_banded_spd;
use super::trim::{trim_boundaries, Trimmed};
use crate::core::Frequency;
use crate::error::{Result, TransformError};
use rayon::prelude::*;

/// Smoothing level above which the trend is recovered through `I + λ·D·Dᵀ`.
///
/// For large λ the pivots of `I + λ·DᵀD` lose the identity term and cancel
/// against the null space of `DᵀD` (constants and linear trends).
pub const DUAL_SOLVE_LAMBDA: f64 = 1e6;

/// Result of an HP filter decomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct HPResult {
    /// Smooth trend component.
    pub trend: Vec<f64>,
    /// Cyclical component (`series - trend`).
    pub cycle: Vec<f64>,
}

impl HPResult {
    /// Number of observations (equal to the input length).
    pub fn len(&self) -> usize {
        self.trend.len()
    }

    /// Whether the decomposition has no observations.
    pub fn is_empty(&self) -> bool {
        self.trend.is_empty()
    }

    /// Whether every position of both components is NaN.
    pub fn is_fully_missing(&self) -> bool {
        self.trend.iter().chain(self.cycle.iter()).all(|x| x.is_nan())
    }

    /// Trend strength (0 to 1) measured as `1 - Var(cycle) / Var(series)`.
    ///
    /// NaN positions are skipped.
    pub fn trend_strength(&self) -> f64 {
        let (series, cycle): (Vec<f64>, Vec<f64>) = self
            .trend
            .iter()
            .zip(self.cycle.iter())
            .filter(|(t, c)| !t.is_nan() && !c.is_nan())
            .map(|(t, c)| (t + c, *c))
            .unzip();

        let var_series = variance(&series);
        if var_series < 1e-10 {
            return 0.0;
        }
        (1.0 - variance(&cycle) / var_series).max(0.0)
    }
}

/// HP filter configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HPFilter {
    /// Smoothing parameter.
    lambda: f64,
}

impl HPFilter {
    /// Create a filter with smoothing parameter `lambda`.
    pub fn new(lambda: f64) -> Self {
        Self { lambda }
    }

    /// Create a filter with the conventional smoothing parameter for `frequency`.
    pub fn for_frequency(frequency: Frequency) -> Self {
        Self::new(frequency.hp_lambda())
    }

    /// Set a custom smoothing parameter.
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    /// Smoothing parameter.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Check the configuration and the series shape before any matrix is built.
    ///
    /// Returns the trimmed view on success.
    ///
    /// # Errors
    /// * [`TransformError::InvalidParameter`] if lambda is negative or not finite.
    /// * [`TransformError::EmptySeries`] if the series has no defined value.
    /// * [`TransformError::SeriesTooShort`] if fewer than 5 observations remain
    ///   after trimming.
    pub fn validate<'a>(&self, series: &'a [f64]) -> Result<Trimmed<'a>> {
        if !self.lambda.is_finite() || self.lambda < 0.0 {
            return Err(TransformError::InvalidParameter(format!(
                "lambda must be finite and non-negative, got {}",
                self.lambda
            )));
        }

        let trimmed = trim_boundaries(series)?;
        if trimmed.len() < MIN_PENALTY_DIM {
            return Err(TransformError::SeriesTooShort {
                needed: MIN_PENALTY_DIM,
                got: trimmed.len(),
            });
        }
        Ok(trimmed)
    }

    /// Decompose `series` into trend and cycle.
    ///
    /// Leading and trailing NaN runs are removed before filtering and put back
    /// into both outputs. A NaN strictly inside the defined range is not
    /// rejected: it passes through the linear solve and turns every trimmed
    /// position of both outputs into NaN.
    pub fn filter(&self, series: &[f64]) -> Result<HPResult> {
        let trimmed = self.validate(series)?;
        log::debug!(
            "hp filter: n={}, trimmed=[{}..{}), lambda={}",
            series.len(),
            trimmed.leading,
            trimmed.leading + trimmed.len(),
            self.lambda
        );
        if trimmed.has_interior_missing() {
            log::warn!(
                "hp filter: NaN inside defined range of length {}; trimmed output will be all NaN",
                trimmed.len()
            );
        }

        let (trend, cycle) = if self.lambda > DUAL_SOLVE_LAMBDA {
            decompose_dual(trimmed.values, self.lambda)?
        } else {
            decompose_primal(trimmed.values, self.lambda)?
        };

        Ok(reassemble(&trimmed, trend, cycle))
    }
}

/// Decompose `series` with smoothing parameter `lambda`.
///
/// # Example
///
/// ```
/// use macro_transforms::filter::hp_filter;
///
/// let y = vec![f64::NAN, 1.0, 2.0, 3.0, 4.0, 5.0, 4.0, 3.0];
/// let result = hp_filter(&y, 1600.0).unwrap();
///
/// assert_eq!(result.len(), y.len());
/// assert!(result.trend[0].is_nan());
/// assert!((result.trend[1] + result.cycle[1] - 1.0).abs() < 1e-9);
/// ```
pub fn hp_filter(series: &[f64], lambda: f64) -> Result<HPResult> {
    HPFilter::new(lambda).filter(series)
}

/// Filter many independent series in parallel.
///
/// Each series gets its own result; one failing series does not affect the others.
pub fn hp_filter_columns<S>(columns: &[S], lambda: f64) -> Vec<Result<HPResult>>
where
    S: AsRef<[f64]> + Sync,
{
    log::debug!("hp filter: {} columns in parallel", columns.len());
    let filter = HPFilter::new(lambda);
    columns
        .par_iter()
        .map(|column| filter.filter(column.as_ref()))
        .collect()
}

/// Solve `(I + λ·DᵀD)·trend = y` directly.
fn decompose_primal(values: &[f64], lambda: f64) -> Result<(Vec<f64>, Vec<f64>)> {
    let penalty = PentadiagonalMatrix::hp_penalty(values.len(), lambda)?;
    let trend = solve_banded_spd(&penalty, values)?;
    let cycle = values.iter().zip(trend.iter()).map(|(y, t)| y - t).collect();
    Ok((trend, cycle))
}

/// Same decomposition through `(I + λ·D·Dᵀ)·z = D·y`, `cycle = λ·Dᵀ·z`.
///
/// Equivalent to [`decompose_primal`] by the Woodbury identity, but the
/// system stays well conditioned as λ grows.
fn decompose_dual(values: &[f64], lambda: f64) -> Result<(Vec<f64>, Vec<f64>)> {
    log::debug!("hp filter: lambda={} above {}, using dual system", lambda, DUAL_SOLVE_LAMBDA);
    let penalty = PentadiagonalMatrix::hp_dual(values.len(), lambda)?;
    let z = solve_banded_spd(&penalty, &second_difference(values))?;
    let cycle: Vec<f64> = second_difference_adjoint(&z)
        .into_iter()
        .map(|v| lambda * v)
        .collect();
    let trend = values.iter().zip(cycle.iter()).map(|(y, c)| y - c).collect();
    Ok((trend, cycle))
}

/// Pad trimmed components back to the original length with NaN.
fn reassemble(trimmed: &Trimmed<'_>, trend: Vec<f64>, cycle: Vec<f64>) -> HPResult {
    let pad = |core: Vec<f64>| -> Vec<f64> {
        let mut full = Vec::with_capacity(trimmed.original_len());
        full.extend(std::iter::repeat_n(f64::NAN, trimmed.leading));
        full.extend(core);
        full.extend(std::iter::repeat_n(f64::NAN, trimmed.trailing));
        full
    };

    HPResult {
        trend: pad(trend),
        cycle: pad(cycle),
    }
}

fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64
}
