//! Error types for regioning-core
//!
//! Provides a unified error type for raster construction and access.
//! Shape errors raised here are the only failures the labeling engine
//! reports before it starts mutating anything.

use thiserror::Error;

/// Regioning core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Input array is not two-dimensional
    #[error("invalid shape: expected a 2-dimensional array, got {ndim} dimension(s)")]
    InvalidShape { ndim: usize },

    /// Buffer length does not match the declared dimensions
    #[error("data length mismatch: expected {expected} values, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("index out of bounds: ({x}, {y}) outside {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
