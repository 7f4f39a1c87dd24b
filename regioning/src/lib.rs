//! Regioning - Sequential connected-component labeling for Rust
//!
//! Labels the connected foreground regions of a binary mask with a
//! two-pass raster scan and renders each region in a seeded pseudo-random
//! color.
//!
//! # Overview
//!
//! - Mask and colorized-image containers
//! - 4-way and 8-way connectivity
//! - Union-find equivalence resolution
//! - Deterministic per-region colors from a seed
//! - PNG mask input and colorized PNG output
//!
//! # Example
//!
//! ```
//! use regioning::{Raster, RegioningOptions, sequential_regioning};
//!
//! let mask = Raster::from_shape(&[2, 3], vec![1, 0, 1, 1, 0, 1]).unwrap();
//! let result = sequential_regioning(&mask, &RegioningOptions::from_n8(false)).unwrap();
//! assert_eq!(result.region_count, 2);
//! assert_eq!(result.image.shape(), [2, 3, 3]);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use regioning_core::*;

// Re-export the labeling entry points at the top level
pub use regioning_region::{
    ConnectivityType, DEFAULT_SEED, RegionError, RegionResult, Regioning, RegioningObserver,
    RegioningOptions, RegioningReport, count_regions, label_regions, sequential_regioning,
    sequential_regioning_observed,
};

// Re-export domain crates as modules to avoid name conflicts
pub use regioning_io as io;
pub use regioning_region as region;
