//! Error types for the macro-transforms library.

use thiserror::Error;

/// Result type alias for filter and transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;

/// Errors that can occur while filtering or transforming series.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// Input cannot be read as a flat ordered numeric sequence.
    #[error("input is not convertible to a series: {0}")]
    NotConvertibleToSeries(String),

    /// Series has no defined (non-NaN) value.
    #[error("series contains no defined values")]
    EmptySeries,

    /// Trimmed series is shorter than the filter stencil allows.
    #[error("series too short: need at least {needed}, got {got}")]
    SeriesTooShort { needed: usize, got: usize },

    /// Auxiliary series length differs from the primary series.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Named column is not present in the table.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// Frequency inference failed.
    #[error("could not infer frequency: {0}")]
    FrequencyInference(String),

    /// Computation error (e.g., numerical issues).
    #[error("computation error: {0}")]
    ComputationError(String),
}
