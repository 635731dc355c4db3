//! # macro-transforms
//!
//! Hodrick-Prescott filtering and series transforms for macroeconomic
//! forecasting pipelines.
//!
//! The core is the HP filter, which splits a series into a smooth trend and a
//! cyclical residual by solving a pentadiagonal system. Around it sit the
//! elementwise transforms used to prepare observables and read model output:
//! frequency scaling, deflation, per-capita normalization, log-differencing,
//! and annualized percent-change conversions.

#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod error;
pub mod filter;
pub mod transform;

pub use error::{Result, TransformError};

pub mod prelude {
    pub use crate::core::{Frequency, Table};
    pub use crate::error::{Result, TransformError};
    pub use crate::filter::{hp_filter, HPFilter, HPResult};
}
