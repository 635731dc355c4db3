//! Conversion of loosely shaped input into a flat series.

use crate::error::{Result, TransformError};

/// Flatten a nested vector into a series.
///
/// Accepts a single row (`1×n`) or a single column (`n×1`). Anything with
/// more than one row and more than one column, or with ragged rows, is not a
/// series.
pub fn to_series(matrix: &[Vec<f64>]) -> Result<Vec<f64>> {
    match matrix {
        [] => Ok(Vec::new()),
        [row] => Ok(row.clone()),
        rows => {
            if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != 1) {
                return Err(TransformError::NotConvertibleToSeries(format!(
                    "{} rows with row {} of width {}; expected a single row or column",
                    rows.len(),
                    i,
                    row.len()
                )));
            }
            Ok(rows.iter().map(|r| r[0]).collect())
        }
    }
}

/// Parse text fields into a series.
///
/// Empty fields and the markers `NaN`, `NA` and `.` (any case) are read as
/// missing values.
pub fn parse_series<S: AsRef<str>>(fields: &[S]) -> Result<Vec<f64>> {
    fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let text = field.as_ref().trim();
            if is_missing_marker(text) {
                return Ok(f64::NAN);
            }
            text.parse::<f64>().map_err(|_| {
                TransformError::NotConvertibleToSeries(format!(
                    "field {} ('{}') is not a number",
                    i, text
                ))
            })
        })
        .collect()
}

fn is_missing_marker(text: &str) -> bool {
    text.is_empty()
        || text == "."
        || text.eq_ignore_ascii_case("nan")
        || text.eq_ignore_ascii_case("na")
}
