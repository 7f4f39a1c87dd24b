//! Regioning Core - Raster containers for connected-component labeling
//!
//! This crate provides the data structures shared by the regioning crates:
//!
//! - [`Raster`] - A 2D grid of `u16` samples (the binary input mask)
//! - [`RgbRaster`] - An H x W x 3 grid of `u16` channels (the colorized output)
//! - [`Rgb`] - A single color triple
//!
//! Both rasters are row-major: row 0 first, each row left to right.

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{RGB_CHANNELS, Raster, Rgb, RgbRaster};
