//! Boundary trimming of leading and trailing missing values.

use crate::error::{Result, TransformError};

/// Interior view of a series with its leading/trailing NaN runs removed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trimmed<'a> {
    /// Values from the first to the last defined observation (inclusive).
    pub values: &'a [f64],
    /// Number of NaN positions before the first defined value.
    pub leading: usize,
    /// Number of NaN positions after the last defined value.
    pub trailing: usize,
}

impl Trimmed<'_> {
    /// Length of the trimmed range.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the trimmed range is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Length of the untrimmed series this view was taken from.
    pub fn original_len(&self) -> usize {
        self.leading + self.values.len() + self.trailing
    }

    /// Whether any NaN remains strictly inside the trimmed range.
    pub fn has_interior_missing(&self) -> bool {
        self.values.iter().any(|x| x.is_nan())
    }
}

/// Locate the maximal sub-range of `series` free of leading/trailing NaN.
///
/// Only the two ends are scanned; NaN values strictly inside the returned
/// range are passed through untouched.
///
/// # Errors
/// Returns [`TransformError::EmptySeries`] if the series is empty or all NaN.
pub fn trim_boundaries(series: &[f64]) -> Result<Trimmed<'_>> {
    let first = series
        .iter()
        .position(|x| !x.is_nan())
        .ok_or(TransformError::EmptySeries)?;
    let last = series
        .iter()
        .rposition(|x| !x.is_nan())
        .ok_or(TransformError::EmptySeries)?;

    Ok(Trimmed {
        values: &series[first..=last],
        leading: first,
        trailing: series.len() - 1 - last,
    })
}
