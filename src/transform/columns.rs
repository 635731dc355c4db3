//! Column-level transforms on a [`Table`].
//!
//! Each function reads named input columns, derives a new column and writes it
//! back under `output`. An existing column with that name is replaced.

use super::difflog::difflog;
use super::scale::{annual_to_quarter_series, quarter_to_annual_series};
use crate::core::Table;
use crate::error::{Result, TransformError};
use crate::filter::{hp_filter, hp_filter_columns, HPResult};

/// Elementwise ratio of two aligned series: `series / reference`.
///
/// Used for deflation (reference = price index) and per-capita
/// normalization (reference = population).
///
/// # Errors
/// Returns [`TransformError::DimensionMismatch`] if the lengths differ.
pub fn divide_series(series: &[f64], reference: &[f64]) -> Result<Vec<f64>> {
    if reference.len() != series.len() {
        return Err(TransformError::DimensionMismatch {
            expected: series.len(),
            got: reference.len(),
        });
    }
    Ok(series
        .iter()
        .zip(reference.iter())
        .map(|(n, d)| n / d)
        .collect())
}

/// Deflate a nominal column by a price index column: `column / deflator`.
pub fn deflate(table: &mut Table, column: &str, deflator: &str, output: &str) -> Result<()> {
    let real = divide_series(table.column(column)?, table.column(deflator)?)?;
    table.insert(output, real)
}

/// Normalize a column by population: `column / population`.
pub fn per_capita(table: &mut Table, column: &str, population: &str, output: &str) -> Result<()> {
    let normalized = divide_series(table.column(column)?, table.column(population)?)?;
    table.insert(output, normalized)
}

/// Log-difference a column. The first row of the output is NaN.
pub fn difflog_column(table: &mut Table, column: &str, output: &str) -> Result<()> {
    let differenced = difflog(table.column(column)?);
    table.insert(output, differenced)
}

/// Divide an annualized column by four.
pub fn annual_to_quarter_column(table: &mut Table, column: &str, output: &str) -> Result<()> {
    let quarterly = annual_to_quarter_series(table.column(column)?);
    table.insert(output, quarterly)
}

/// Multiply a quarterly column by four.
pub fn quarter_to_annual_column(table: &mut Table, column: &str, output: &str) -> Result<()> {
    let annual = quarter_to_annual_series(table.column(column)?);
    table.insert(output, annual)
}

/// HP-filter a column and store `{column}_trend` and `{column}_cycle`.
pub fn hp_filter_column(table: &mut Table, column: &str, lambda: f64) -> Result<HPResult> {
    let result = hp_filter(table.column(column)?, lambda)?;
    table.insert(format!("{}_trend", column), result.trend.clone())?;
    table.insert(format!("{}_cycle", column), result.cycle.clone())?;
    Ok(result)
}

/// HP-filter several columns in parallel and store their trend and cycle.
///
/// All columns are looked up before any filtering. The first filter error is
/// returned and the table is left unchanged.
pub fn hp_filter_table(table: &mut Table, columns: &[&str], lambda: f64) -> Result<()> {
    let inputs: Vec<&[f64]> = columns
        .iter()
        .map(|name| table.column(name))
        .collect::<Result<_>>()?;

    let results: Vec<HPResult> = hp_filter_columns(&inputs, lambda)
        .into_iter()
        .collect::<Result<_>>()?;

    for (name, result) in columns.iter().zip(results) {
        table.insert(format!("{}_trend", name), result.trend)?;
        table.insert(format!("{}_cycle", name), result.cycle)?;
    }
    Ok(())
}
