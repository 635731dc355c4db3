//! Hodrick-Prescott filtering.
//!
//! The filter runs in four steps:
//! - trim leading/trailing NaN runs ([`trim_boundaries`])
//! - build the pentadiagonal penalty matrix `I + λ·DᵀD` ([`PentadiagonalMatrix`])
//! - solve the banded system for the trend ([`solve_banded_spd`]); above
//!   [`DUAL_SOLVE_LAMBDA`] the equivalent system `I + λ·D·Dᵀ` is solved instead
//! - pad trend and cycle back to the input length
//!
//! # Example
//!
//! ```
//! use macro_transforms::core::Frequency;
//! use macro_transforms::filter::HPFilter;
//!
//! let gdp = vec![100.0, 101.2, 102.1, 101.8, 103.0, 104.4, 105.1, 104.9];
//! let result = HPFilter::for_frequency(Frequency::Quarterly)
//!     .filter(&gdp)
//!     .unwrap();
//!
//! assert_eq!(result.trend.len(), gdp.len());
//! ```

mod hp;
mod penalty;
mod solver;
mod trim;

pub use hp::{hp_filter, hp_filter_columns, HPFilter, HPResult, DUAL_SOLVE_LAMBDA};
pub use penalty::{
    second_difference, second_difference_adjoint, PentadiagonalMatrix, MIN_PENALTY_DIM,
};
pub use solver::{solve_banded_spd, BandedLdl};
pub use trim::{trim_boundaries, Trimmed};
