//! regioning-test - Regression test framework for regioning
//!
//! This crate provides a regression test framework with three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! It also carries the pieces every regioning test needs: text fixtures,
//! generated masks, and an independent flood-fill region counter that
//! serves as the correctness oracle for the labeling engine.
//!
//! # Usage
//!
//! ```ignore
//! use regioning_test::{RegParams, reference_region_count};
//!
//! let mut rp = RegParams::new("regioning");
//! rp.compare_values(reference_region_count(&mask, true) as f64, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
pub mod fixtures;
mod oracle;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::mask_from_str;
pub use oracle::reference_region_count;
pub use params::{RegParams, RegTestMode};

/// Load a test mask from the test data directory
///
/// # Arguments
///
/// * `name` - Mask filename (e.g., "blobs.png")
pub fn load_test_mask(name: &str) -> TestResult<regioning_core::Raster> {
    let path = test_data_path(name);
    regioning_io::read_mask(&path).map_err(|e| TestError::MaskLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // regioning-test is at crates/regioning-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/masks/{}", workspace_root(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
