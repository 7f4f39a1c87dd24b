//! regioning-region - Connected-component labeling for regioning
//!
//! This crate labels the connected regions of a binary mask and renders
//! each region in a stable pseudo-random color:
//!
//! - **Disjoint set** - Union-find over provisional labels with path compression
//! - **Scan pass** - Raster-order provisional labeling with collision recording
//! - **Equivalence resolution** - Folding collisions into the disjoint set
//! - **Relabel and colorize** - Canonical regions, seeded colors, region count
//!
//! # Examples
//!
//! ## Labeling and coloring regions
//!
//! ```
//! use regioning_core::Raster;
//! use regioning_region::{ConnectivityType, RegioningOptions, sequential_regioning};
//!
//! let mut mask = Raster::new(100, 100).unwrap();
//! mask.set(10, 10, 1).unwrap();
//! mask.set(11, 10, 1).unwrap();
//! mask.set(50, 50, 1).unwrap();
//!
//! let options = RegioningOptions::new(ConnectivityType::FourWay).with_seed(20);
//! let result = sequential_regioning(&mask, &options).unwrap();
//! assert_eq!(result.region_count, 2);
//! assert_eq!(result.image.shape(), [100, 100, 3]);
//! ```
//!
//! ## Counting only
//!
//! ```
//! use regioning_core::Raster;
//! use regioning_region::{ConnectivityType, count_regions};
//!
//! let mask = Raster::from_vec(3, 1, vec![1, 0, 1]).unwrap();
//! assert_eq!(count_regions(&mask, ConnectivityType::EightWay).unwrap(), 2);
//! ```

pub mod colorize;
pub mod conncomp;
pub mod error;
pub mod label;
pub mod observer;
pub mod resolve;
pub mod scan;
pub mod sequential;
pub mod union_find;

// Re-export core types
pub use regioning_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use conncomp::ConnectivityType;
pub use union_find::DisjointSet;

// Re-export pass types and functions
pub use colorize::{COLOR_MAX, COLOR_MIN, ColorTable, Colorized, relabel_and_colorize};
pub use resolve::resolve_equivalences;
pub use scan::{
    Equivalence, EquivalenceRecord, FIRST_LABEL, ProvisionalLabels, ScanOutcome,
    check_label_capacity, scan_and_label,
};

// Re-export label types and functions
pub use label::{LabelMap, count_regions, label_regions, relabel};

// Re-export the entry operation
pub use observer::{LogObserver, NoopObserver, RegioningObserver, RegioningReport};
pub use sequential::{
    DEFAULT_SEED, Regioning, RegioningOptions, sequential_regioning, sequential_regioning_observed,
};
