// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for chart construction; every variant is raised before drawing.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// Empty dataset, non-finite values, or a zero value range.
    #[error("degenerate dataset: {0}")]
    DegenerateDataset(String),

    #[error("invalid canvas dimensions {width}x{height}: both must be finite and positive")]
    InvalidDimension { width: f64, height: f64 },

    #[error("configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
