//! Row-aligned table of named columns.

use super::Frequency;
use crate::error::{Result, TransformError};
use chrono::NaiveDate;

/// A set of equally long named columns with an optional date index.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    len: usize,
    dates: Option<Vec<NaiveDate>>,
    /// Column names, in insertion order.
    labels: Vec<String>,
    /// Values stored column-major: `values[column][row]`.
    values: Vec<Vec<f64>>,
}

impl Table {
    /// Create an empty table with `len` rows and no date index.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            dates: None,
            labels: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Create an empty table indexed by `dates`.
    ///
    /// # Errors
    /// Returns [`TransformError::InvalidParameter`] if dates are not strictly increasing.
    pub fn with_dates(dates: Vec<NaiveDate>) -> Result<Self> {
        if dates.windows(2).any(|w| w[1] <= w[0]) {
            return Err(TransformError::InvalidParameter(
                "dates must be strictly increasing".to_string(),
            ));
        }
        Ok(Self {
            len: dates.len(),
            dates: Some(dates),
            labels: Vec::new(),
            values: Vec::new(),
        })
    }

    /// Build a table from row-major data.
    ///
    /// # Errors
    /// Returns [`TransformError::NotConvertibleToSeries`] if a row's width
    /// differs from the number of labels.
    pub fn from_rows(labels: Vec<String>, rows: &[Vec<f64>]) -> Result<Self> {
        let width = labels.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(TransformError::NotConvertibleToSeries(format!(
                "row {} has {} values, expected {}",
                i,
                row.len(),
                width
            )));
        }

        let values = (0..width)
            .map(|c| rows.iter().map(|row| row[c]).collect())
            .collect();

        Ok(Self {
            len: rows.len(),
            dates: None,
            labels,
            values,
        })
    }

    /// Builder-style column insertion.
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        self.insert(name, values)?;
        Ok(self)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn dates(&self) -> Option<&[NaiveDate]> {
        self.dates.as_deref()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l == name)
    }

    /// Values of the named column.
    ///
    /// # Errors
    /// Returns [`TransformError::MissingColumn`] if no such column exists.
    pub fn column(&self, name: &str) -> Result<&[f64]> {
        self.labels
            .iter()
            .position(|l| l == name)
            .map(|i| self.values[i].as_slice())
            .ok_or_else(|| TransformError::MissingColumn(name.to_string()))
    }

    /// Insert a column, replacing any existing column with the same name.
    ///
    /// # Errors
    /// Returns [`TransformError::DimensionMismatch`] if the length differs from the table.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        if values.len() != self.len {
            return Err(TransformError::DimensionMismatch {
                expected: self.len,
                got: values.len(),
            });
        }

        let name = name.into();
        match self.labels.iter().position(|l| *l == name) {
            Some(i) => self.values[i] = values,
            None => {
                self.labels.push(name);
                self.values.push(values);
            }
        }
        Ok(())
    }

    /// Remove a column and return its values.
    pub fn remove(&mut self, name: &str) -> Result<Vec<f64>> {
        let i = self
            .labels
            .iter()
            .position(|l| l == name)
            .ok_or_else(|| TransformError::MissingColumn(name.to_string()))?;
        self.labels.remove(i);
        Ok(self.values.remove(i))
    }

    /// Rows `start..end` of every column.
    pub fn slice(&self, start: usize, end: usize) -> Result<Table> {
        if start > end || end > self.len {
            return Err(TransformError::InvalidParameter(format!(
                "invalid row range {}..{} for table of {} rows",
                start, end, self.len
            )));
        }

        Ok(Table {
            len: end - start,
            dates: self.dates.as_ref().map(|d| d[start..end].to_vec()),
            labels: self.labels.clone(),
            values: self.values.iter().map(|v| v[start..end].to_vec()).collect(),
        })
    }

    /// Infer the sampling frequency from the date index.
    pub fn infer_frequency(&self, tolerance: f64) -> Result<Frequency> {
        let dates = self.dates.as_deref().ok_or_else(|| {
            TransformError::FrequencyInference("table has no date index".to_string())
        })?;
        Frequency::infer(dates, tolerance)
    }
}
