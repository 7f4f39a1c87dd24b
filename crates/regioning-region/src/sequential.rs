//! Sequential regioning
//!
//! The single entry operation: label the connected regions of a binary mask
//! and render each region in its own color.
//!
//! The three stages run strictly in sequence on state owned by the call:
//!
//! 1. [`scan_and_label`] assigns provisional labels and records collisions
//! 2. [`resolve_equivalences`] folds the collisions into a disjoint set
//! 3. [`relabel_and_colorize`] maps labels to canonical regions and colors
//!
//! Nothing is shared between calls. The color generator is seeded from
//! [`RegioningOptions::seed`] on every call, so concurrent calls on separate
//! inputs produce the same output as sequential ones.

use crate::colorize::relabel_and_colorize;
use crate::conncomp::ConnectivityType;
use crate::error::RegionResult;
use crate::label::LabelMap;
use crate::observer::{NoopObserver, RegioningObserver, RegioningReport};
use crate::resolve::resolve_equivalences;
use crate::scan::scan_and_label;
use regioning_core::{Raster, Rgb, RgbRaster};
use std::time::Instant;

/// Default seed for the color generator
pub const DEFAULT_SEED: u64 = 20;

/// Options for sequential regioning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegioningOptions {
    /// Connectivity type (4-way or 8-way)
    pub connectivity: ConnectivityType,
    /// Seed for the color generator
    pub seed: u64,
}

impl Default for RegioningOptions {
    fn default() -> Self {
        Self {
            connectivity: ConnectivityType::FourWay,
            seed: DEFAULT_SEED,
        }
    }
}

impl RegioningOptions {
    /// Create options with the specified connectivity
    pub fn new(connectivity: ConnectivityType) -> Self {
        Self {
            connectivity,
            ..Default::default()
        }
    }

    /// Create options from an 8-connectivity switch
    pub fn from_n8(n8: bool) -> Self {
        Self::new(ConnectivityType::from_n8(n8))
    }

    /// Set the color seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the connectivity
    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = connectivity;
        self
    }
}

/// Result of sequential regioning
#[derive(Debug, Clone)]
pub struct Regioning {
    /// Colorized H x W x 3 image; background is black
    pub image: RgbRaster,
    /// Canonical region of every pixel, `0` for background
    pub labels: LabelMap,
    /// Color of region `i` at index `i - 1`
    pub palette: Vec<Rgb>,
    /// Number of distinct regions
    pub region_count: usize,
}

/// Label and colorize the regions of a binary mask
///
/// # Arguments
///
/// * `raster` - Binary mask (`0` background, `1` foreground)
/// * `options` - Connectivity and color seed
///
/// # Returns
///
/// The colorized image, the label map, the palette and the region count.
///
/// # Errors
///
/// Returns [`RegionError::CapacityOverflow`](crate::RegionError::CapacityOverflow)
/// if the raster is too large to label.
///
/// # Examples
///
/// ```
/// use regioning_core::Raster;
/// use regioning_region::{RegioningOptions, sequential_regioning};
///
/// let mask = Raster::from_vec(2, 2, vec![1, 0, 0, 1]).unwrap();
///
/// let four = sequential_regioning(&mask, &RegioningOptions::from_n8(false)).unwrap();
/// assert_eq!(four.region_count, 2);
///
/// let eight = sequential_regioning(&mask, &RegioningOptions::from_n8(true)).unwrap();
/// assert_eq!(eight.region_count, 1);
/// ```
pub fn sequential_regioning(raster: &Raster, options: &RegioningOptions) -> RegionResult<Regioning> {
    sequential_regioning_observed(raster, options, &mut NoopObserver)
}

/// Label and colorize the regions of a binary mask, reporting to `observer`
///
/// Identical to [`sequential_regioning`]; the observer is notified once the
/// result is complete and has no influence on it.
pub fn sequential_regioning_observed(
    raster: &Raster,
    options: &RegioningOptions,
    observer: &mut dyn RegioningObserver,
) -> RegionResult<Regioning> {
    let start = Instant::now();

    let outcome = scan_and_label(raster, options.connectivity)?;
    let mut set = resolve_equivalences(&outcome.equivalences, outcome.capacity());
    let colorized = relabel_and_colorize(&outcome.labels, &mut set, options.seed)?;

    observer.on_complete(&RegioningReport {
        width: raster.width(),
        height: raster.height(),
        provisional_labels: outcome.provisional_count(),
        equivalences: outcome.equivalences.len(),
        region_count: colorized.region_count,
        elapsed: start.elapsed(),
    });

    Ok(Regioning {
        image: colorized.image,
        labels: colorized.labels,
        palette: colorized.palette,
        region_count: colorized.region_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorize::{COLOR_MAX, COLOR_MIN};

    fn mask(rows: &[&str]) -> Raster {
        let rows: Vec<Vec<u16>> = rows
            .iter()
            .map(|r| r.bytes().map(|b| u16::from(b == b'#')).collect())
            .collect();
        Raster::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_default_options() {
        let opts = RegioningOptions::default();
        assert_eq!(opts.seed, 20);
        assert_eq!(opts.connectivity, ConnectivityType::FourWay);

        let opts = RegioningOptions::from_n8(true).with_seed(3);
        assert_eq!(opts.connectivity, ConnectivityType::EightWay);
        assert_eq!(opts.seed, 3);
    }

    #[test]
    fn test_all_background() {
        let raster = mask(&[".....", ".....", "....."]);
        let out = sequential_regioning(&raster, &RegioningOptions::default()).unwrap();
        assert_eq!(out.region_count, 0);
        assert!(out.image.data().iter().all(|&c| c == 0));
        assert_eq!(out.image.shape(), [3, 5, 3]);
        assert!(out.palette.is_empty());
    }

    #[test]
    fn test_zero_height_mask() {
        let raster = Raster::from_shape(&[0, 5], vec![]).unwrap();
        let out = sequential_regioning(&raster, &RegioningOptions::from_n8(true)).unwrap();
        assert_eq!(out.image.shape(), [0, 5, 3]);
        assert!(out.image.data().is_empty());
        assert_eq!(out.region_count, 0);
        assert!(out.palette.is_empty());
    }

    #[test]
    fn test_single_pixel() {
        let raster = mask(&["...", ".#.", "..."]);
        let out = sequential_regioning(&raster, &RegioningOptions::default()).unwrap();
        assert_eq!(out.region_count, 1);

        let color = out.image.get(1, 1).unwrap();
        for c in color.channels() {
            assert!((COLOR_MIN..=COLOR_MAX).contains(&c));
        }
        assert_eq!(out.image.get(0, 0), Some(Rgb::BLACK));
        assert_eq!(out.palette, vec![color]);
    }

    #[test]
    fn test_diagonal_pair() {
        let raster = mask(&["#.", ".#"]);

        let eight = sequential_regioning(&raster, &RegioningOptions::from_n8(true)).unwrap();
        assert_eq!(eight.region_count, 1);
        assert_eq!(eight.image.get(0, 0), eight.image.get(1, 1));

        let four = sequential_regioning(&raster, &RegioningOptions::from_n8(false)).unwrap();
        assert_eq!(four.region_count, 2);
        assert_eq!(four.labels.get(0, 0), Some(1));
        assert_eq!(four.labels.get(1, 1), Some(2));
    }

    #[test]
    fn test_merged_region_has_one_color() {
        // Labels 2 and 3 collide in the last row
        let raster = mask(&["#...#", "#...#", "#####"]);
        let out = sequential_regioning(&raster, &RegioningOptions::default()).unwrap();
        assert_eq!(out.region_count, 1);
        let color = out.image.get(0, 0).unwrap();
        for (x, y) in [(4, 0), (4, 1), (2, 2)] {
            assert_eq!(out.image.get(x, y), Some(color));
        }
    }

    #[test]
    fn test_region_count_not_label_count() {
        // A comb: one provisional label per tooth, one region
        let raster = mask(&["#.#.#.#", "#######"]);
        let mut report = None;
        let out = sequential_regioning_observed(
            &raster,
            &RegioningOptions::default(),
            &mut |r: &RegioningReport| report = Some(r.clone()),
        )
        .unwrap();
        let report = report.unwrap();
        assert_eq!(out.region_count, 1);
        assert_eq!(report.provisional_labels, 4);
        assert_eq!(report.equivalences, 3);
        assert_eq!(report.region_count, 1);
        assert_eq!((report.width, report.height), (7, 2));
    }

    #[test]
    fn test_deterministic() {
        let raster = mask(&["##..#", "#..##", "..#..", "##..#"]);
        let opts = RegioningOptions::from_n8(true).with_seed(99);
        let a = sequential_regioning(&raster, &opts).unwrap();
        let b = sequential_regioning(&raster, &opts).unwrap();
        assert_eq!(a.image, b.image);
        assert_eq!(a.labels, b.labels);
        assert_eq!(a.region_count, b.region_count);
    }

    #[test]
    fn test_seed_changes_colors_not_count() {
        let raster = mask(&["#.#.#", ".....", "#.#.#"]);
        let a = sequential_regioning(&raster, &RegioningOptions::default()).unwrap();
        let b = sequential_regioning(&raster, &RegioningOptions::default().with_seed(1234)).unwrap();
        assert_eq!(a.region_count, 6);
        assert_eq!(a.region_count, b.region_count);
        assert_eq!(a.labels, b.labels);
        assert_ne!(a.palette, b.palette);
    }

    #[test]
    fn test_observer_does_not_change_output() {
        let raster = mask(&["#.#", "###", "..#"]);
        let opts = RegioningOptions::default();
        let plain = sequential_regioning(&raster, &opts).unwrap();
        let mut calls = 0;
        let observed =
            sequential_regioning_observed(&raster, &opts, &mut |_: &RegioningReport| calls += 1)
                .unwrap();
        assert_eq!(calls, 1);
        assert_eq!(plain.image, observed.image);
    }
}
