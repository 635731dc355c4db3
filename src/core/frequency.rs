//! Observation frequency of macroeconomic series.

use crate::error::{Result, TransformError};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// Sampling frequency of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Annual,
    Quarterly,
    Monthly,
}

impl Frequency {
    /// Conventional HP smoothing parameter for this frequency.
    pub fn hp_lambda(&self) -> f64 {
        match self {
            Frequency::Annual => 100.0,
            Frequency::Quarterly => 1600.0,
            Frequency::Monthly => 14400.0,
        }
    }

    /// Number of observations per year.
    pub fn periods_per_year(&self) -> usize {
        match self {
            Frequency::Annual => 1,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }

    /// Spacing between consecutive observations in calendar months.
    pub fn months(&self) -> i32 {
        12 / self.periods_per_year() as i32
    }

    fn from_months(months: i32) -> Option<Self> {
        match months {
            12 => Some(Frequency::Annual),
            3 => Some(Frequency::Quarterly),
            1 => Some(Frequency::Monthly),
            _ => None,
        }
    }

    /// Infer the frequency from a date index using the modal month spacing.
    ///
    /// `tolerance` is the minimum share of gaps that must equal the modal spacing.
    pub fn infer(dates: &[NaiveDate], tolerance: f64) -> Result<Self> {
        if dates.len() < 2 {
            return Err(TransformError::FrequencyInference(format!(
                "need at least 2 dates, got {}",
                dates.len()
            )));
        }

        let mut counts: HashMap<i32, usize> = HashMap::new();
        for w in dates.windows(2) {
            *counts.entry(month_index(&w[1]) - month_index(&w[0])).or_insert(0) += 1;
        }

        let (modal_gap, modal_count) = counts
            .iter()
            .max_by_key(|(&gap, &count)| (count, -gap))
            .map(|(&gap, &count)| (gap, count))
            .ok_or(TransformError::FrequencyInference(
                "empty spacing data".to_string(),
            ))?;

        let modal_ratio = modal_count as f64 / (dates.len() - 1) as f64;
        if modal_ratio < tolerance {
            return Err(TransformError::FrequencyInference(
                "no unique modal spacing found".to_string(),
            ));
        }

        Self::from_months(modal_gap).ok_or_else(|| {
            TransformError::FrequencyInference(format!(
                "unsupported spacing of {} months",
                modal_gap
            ))
        })
    }
}

fn month_index(date: &NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quarter_starts(n: usize) -> Vec<NaiveDate> {
        (0..n)
            .map(|i| {
                let months = i as i32 * 3;
                NaiveDate::from_ymd_opt(1990 + months / 12, (months % 12) as u32 + 1, 1).unwrap()
            })
            .collect()
    }

    #[test]
    fn conventional_lambdas() {
        assert_eq!(Frequency::Annual.hp_lambda(), 100.0);
        assert_eq!(Frequency::Quarterly.hp_lambda(), 1600.0);
        assert_eq!(Frequency::Monthly.hp_lambda(), 14400.0);
    }

    #[test]
    fn periods_and_months() {
        assert_eq!(Frequency::Quarterly.periods_per_year(), 4);
        assert_eq!(Frequency::Quarterly.months(), 3);
        assert_eq!(Frequency::Monthly.months(), 1);
        assert_eq!(Frequency::Annual.months(), 12);
    }

    #[test]
    fn infers_quarterly() {
        let dates = quarter_starts(12);
        assert_eq!(Frequency::infer(&dates, 0.5), Ok(Frequency::Quarterly));
    }

    #[test]
    fn infers_annual_despite_day_offsets() {
        let dates: Vec<NaiveDate> = (0..5)
            .map(|i| NaiveDate::from_ymd_opt(2000 + i, 12, 31).unwrap())
            .collect();
        assert_eq!(Frequency::infer(&dates, 0.5), Ok(Frequency::Annual));
    }

    #[test]
    fn inference_needs_two_dates() {
        let dates = quarter_starts(1);
        assert!(matches!(
            Frequency::infer(&dates, 0.5),
            Err(TransformError::FrequencyInference(_))
        ));
    }

    #[test]
    fn inference_rejects_unsupported_spacing() {
        let dates: Vec<NaiveDate> = (0..4)
            .map(|i| NaiveDate::from_ymd_opt(2000, 1 + 2 * i, 1).unwrap())
            .collect();
        assert!(matches!(
            Frequency::infer(&dates, 0.5),
            Err(TransformError::FrequencyInference(_))
        ));
    }

    #[test]
    fn inference_respects_tolerance() {
        let mut dates = quarter_starts(3);
        dates.push(NaiveDate::from_ymd_opt(1991, 1, 1).unwrap());
        dates.push(NaiveDate::from_ymd_opt(1991, 2, 1).unwrap());
        // Gaps: 3, 3, 6, 1 -> modal share 0.5
        assert!(Frequency::infer(&dates, 0.9).is_err());
        assert_eq!(Frequency::infer(&dates, 0.5), Ok(Frequency::Quarterly));
    }
}
