//! Error types for regioning-region

use thiserror::Error;

/// Errors that can occur during region labeling
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error (shape and dimension checks)
    #[error("core error: {0}")]
    Core(#[from] regioning_core::Error),

    /// The raster has more pixels than the label space can number
    #[error("label capacity exceeded: {width}x{height} raster needs more than u32::MAX labels")]
    CapacityOverflow { width: u32, height: u32 },

    /// A label outside the disjoint set was looked up
    #[error("label out of range: {label} >= {len}")]
    LabelOutOfRange { label: u32, len: usize },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
