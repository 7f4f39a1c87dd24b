//! Second raster pass: canonical regions and colors
//!
//! Each provisional label is mapped to its canonical root. The first time a
//! root is met, three channel values are drawn from the seeded generator
//! (red, then green, then blue), each uniform over `[COLOR_MIN, COLOR_MAX]`.
//! Later pixels of the same region reuse that color. With the scan order
//! fixed, the seed alone determines every output color.

use crate::error::{RegionError, RegionResult};
use crate::label::{LabelMap, RegionIndex};
use crate::scan::{MARKER, ProvisionalLabels};
use crate::union_find::DisjointSet;
use rand::SeedableRng;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use regioning_core::{Rgb, RgbRaster};

/// Smallest channel value drawn for a region
pub const COLOR_MIN: u16 = 50;

/// Largest channel value drawn for a region
pub const COLOR_MAX: u16 = 255;

/// Lazily populated map from canonical root to region color
#[derive(Debug)]
pub struct ColorTable {
    rng: StdRng,
    channel: Uniform<u16>,
    index: RegionIndex,
    palette: Vec<Rgb>,
}

impl ColorTable {
    /// Create an empty table for roots in `0..capacity`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if the channel
    /// distribution cannot be built.
    pub fn new(seed: u64, capacity: usize) -> RegionResult<Self> {
        let channel = Uniform::new_inclusive(COLOR_MIN, COLOR_MAX)
            .map_err(|e| RegionError::InvalidParameters(format!("color range: {e}")))?;
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            channel,
            index: RegionIndex::new(capacity),
            palette: Vec::new(),
        })
    }

    /// Region number and color of `root`, drawing a color on first sight.
    ///
    /// # Panics
    ///
    /// Panics if `root >= capacity`.
    pub fn lookup(&mut self, root: u32) -> (u32, Rgb) {
        let (region, is_new) = self.index.region_of(root);
        if is_new {
            let r = self.channel.sample(&mut self.rng);
            let g = self.channel.sample(&mut self.rng);
            let b = self.channel.sample(&mut self.rng);
            self.palette.push(Rgb::new(r, g, b));
        }
        (region, self.palette[region as usize - 1])
    }

    /// Number of distinct roots seen so far.
    pub fn region_count(&self) -> usize {
        self.index.count()
    }

    /// Colors in region order.
    pub fn palette(&self) -> &[Rgb] {
        &self.palette
    }

    /// Consume the table and return its colors in region order.
    pub fn into_palette(self) -> Vec<Rgb> {
        self.palette
    }
}

/// Output of the second pass
#[derive(Debug, Clone)]
pub struct Colorized {
    /// H x W x 3 image; background is black
    pub image: RgbRaster,
    /// Canonical region of every pixel
    pub labels: LabelMap,
    /// Color of region `i` at index `i - 1`
    pub palette: Vec<Rgb>,
    /// Number of distinct canonical roots met
    pub region_count: usize,
}

/// Run the second raster pass.
///
/// # Arguments
///
/// * `labels` - Working buffer from the first pass
/// * `set` - Disjoint set holding the resolved equivalences
/// * `seed` - Seed for the color generator
///
/// # Errors
///
/// Returns an error if the output raster cannot be allocated or a label
/// falls outside `set`.
pub fn relabel_and_colorize(
    labels: &ProvisionalLabels,
    set: &mut DisjointSet,
    seed: u64,
) -> RegionResult<Colorized> {
    let mut table = ColorTable::new(seed, set.len())?;
    let mut image = RgbRaster::new(labels.width(), labels.height())?;
    let mut regions = vec![0u32; labels.data().len()];

    for (pixel, &label) in labels.data().iter().enumerate() {
        if label <= MARKER {
            continue;
        }
        let root = set.try_find(label)?;
        let (region, color) = table.lookup(root);
        image.set_at(pixel, color);
        regions[pixel] = region;
    }

    let region_count = table.region_count();
    Ok(Colorized {
        image,
        labels: LabelMap::new(labels.width(), labels.height(), regions, region_count),
        palette: table.into_palette(),
        region_count,
    })
}
