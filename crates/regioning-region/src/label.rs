//! Region label maps
//!
//! This module provides the canonical label map produced by the second pass
//! and the high-level labeling functions that skip colorization.
//!
//! Regions are numbered `1..=region_count` in the order their canonical root
//! is first met in raster order. This is also the order in which colors are
//! drawn, so region `i` has palette entry `i - 1`.

use crate::conncomp::ConnectivityType;
use crate::error::RegionResult;
use crate::resolve::resolve_equivalences;
use crate::scan::{MARKER, ProvisionalLabels, scan_and_label};
use crate::union_find::DisjointSet;
use regioning_core::Raster;

/// Map from canonical root to compact region number, filled lazily.
#[derive(Debug, Clone)]
pub(crate) struct RegionIndex {
    region_of_root: Vec<u32>,
    count: u32,
}

impl RegionIndex {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            region_of_root: vec![0; capacity],
            count: 0,
        }
    }

    /// Region number of `root`, and whether this call created it.
    pub(crate) fn region_of(&mut self, root: u32) -> (u32, bool) {
        let slot = &mut self.region_of_root[root as usize];
        if *slot != 0 {
            return (*slot, false);
        }
        self.count += 1;
        *slot = self.count;
        (self.count, true)
    }

    pub(crate) fn count(&self) -> usize {
        self.count as usize
    }
}

/// Canonical region labels, `0` for background
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    width: u32,
    height: u32,
    data: Vec<u32>,
    region_count: usize,
}

impl LabelMap {
    pub(crate) fn new(width: u32, height: u32, data: Vec<u32>, region_count: usize) -> Self {
        Self {
            width,
            height,
            data,
            region_count,
        }
    }

    /// Get the map width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the map height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of distinct regions.
    pub fn region_count(&self) -> usize {
        self.region_count
    }

    /// Get the region at (x, y), or `None` if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Get raw access to the row-major labels.
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Pixel count of each region; index `i` holds region `i + 1`.
    pub fn region_sizes(&self) -> Vec<u32> {
        let mut sizes = vec![0u32; self.region_count];
        for &label in self.data.iter().filter(|&&l| l > 0) {
            sizes[label as usize - 1] += 1;
        }
        sizes
    }

    /// Extract one region as a binary mask.
    ///
    /// Returns an all-background mask if `region` is 0 or not present.
    pub fn extract_region(&self, region: u32) -> RegionResult<Raster> {
        let data = self
            .data
            .iter()
            .map(|&l| u16::from(region != 0 && l == region))
            .collect();
        Ok(Raster::from_vec(self.width, self.height, data)?)
    }
}

/// Second pass without colors: map every provisional label to its region.
pub fn relabel(labels: &ProvisionalLabels, set: &mut DisjointSet) -> LabelMap {
    let mut index = RegionIndex::new(set.len());
    let data = labels
        .data()
        .iter()
        .map(|&label| {
            if label > MARKER {
                index.region_of(set.find(label)).0
            } else {
                0
            }
        })
        .collect();

    LabelMap::new(labels.width(), labels.height(), data, index.count())
}

/// Label the regions of a binary mask
///
/// # Arguments
///
/// * `raster` - Binary mask (`0` background, `1` foreground)
/// * `connectivity` - Connectivity type (4-way or 8-way)
///
/// # Returns
///
/// The canonical label map; its `region_count` is the number of regions.
pub fn label_regions(raster: &Raster, connectivity: ConnectivityType) -> RegionResult<LabelMap> {
    let outcome = scan_and_label(raster, connectivity)?;
    let mut set = resolve_equivalences(&outcome.equivalences, outcome.capacity());
    Ok(relabel(&outcome.labels, &mut set))
}

/// Count the regions of a binary mask
pub fn count_regions(raster: &Raster, connectivity: ConnectivityType) -> RegionResult<usize> {
    Ok(label_regions(raster, connectivity)?.region_count())
}
