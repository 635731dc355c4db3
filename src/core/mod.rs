//! Core data structures for macroeconomic series.

mod frequency;
mod series;
mod table;

pub use frequency::Frequency;
pub use series::{parse_series, to_series};
pub use table::Table;
