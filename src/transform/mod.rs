//! Collaborator transforms applied before and after HP filtering.
//!
//! Provides frequency scaling, log-differencing, percent-change reverse
//! transforms, and named-column versions operating on a [`Table`](crate::core::Table).
//!
//! # Example
//!
//! ```
//! use macro_transforms::transform::{difflog, loggrowth_to_pct_annualized, quarter_to_annual_percent};
//!
//! let gdp = vec![100.0, 101.0, 102.5];
//! let growth = difflog(&gdp);
//! assert!(growth[0].is_nan());
//!
//! let annualized = loggrowth_to_pct_annualized(&[0.5, 0.75]);
//! assert_eq!(annualized.len(), 2);
//! assert_eq!(quarter_to_annual_percent(0.01), 4.0);
//! ```

pub mod columns;
pub mod difflog;
pub mod growth;
pub mod scale;

pub use columns::{
    annual_to_quarter_column, deflate, difflog_column, divide_series, hp_filter_column,
    hp_filter_table, per_capita, quarter_to_annual_column,
};

pub use difflog::{cumulative_sum, difflog, integrate_difflog, one_qtr_pct_change};

pub use growth::{
    loggrowth_to_pct, loggrowth_to_pct_annualized, loggrowth_to_pct_annualized_percapita,
    loggrowth_to_pct_percapita, loglevel_to_pct_annualized, loglevel_to_pct_annualized_percapita,
};

pub use scale::{
    annual_to_quarter, annual_to_quarter_series, quarter_to_annual, quarter_to_annual_percent,
    quarter_to_annual_percent_series, quarter_to_annual_series,
};
