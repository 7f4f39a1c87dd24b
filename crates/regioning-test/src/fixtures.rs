//! Mask fixtures
//!
//! Text fixtures use `#` for foreground and `.` for background, one string
//! per row. The generated masks cover the shapes that stress a two-pass
//! labeler: many short-lived provisional labels, long merge chains, and
//! diagonal-only contacts.

use crate::error::{TestError, TestResult};
use rand::SeedableRng;
use rand::distr::{Bernoulli, Distribution};
use rand::rngs::StdRng;
use regioning_core::Raster;

/// Build a mask from text rows.
pub fn mask_from_str(rows: &[&str]) -> TestResult<Raster> {
    let mut parsed = Vec::with_capacity(rows.len());
    for (y, row) in rows.iter().enumerate() {
        let samples = row
            .chars()
            .map(|c| match c {
                '#' => Ok(1u16),
                '.' => Ok(0u16),
                other => Err(TestError::InvalidFixture(format!(
                    "unexpected {other:?} in row {y}"
                ))),
            })
            .collect::<TestResult<Vec<u16>>>()?;
        parsed.push(samples);
    }
    Raster::from_rows(&parsed).map_err(|e| TestError::InvalidFixture(e.to_string()))
}

/// Checkerboard with foreground on even `x + y`.
///
/// Every foreground pixel is its own region under 4-way connectivity and
/// all of them form one region under 8-way connectivity.
pub fn checkerboard(width: u32, height: u32) -> TestResult<Raster> {
    let data = (0..height)
        .flat_map(|y| (0..width).map(move |x| u16::from((x + y) % 2 == 0)))
        .collect();
    Raster::from_vec(width, height, data).map_err(|e| TestError::InvalidFixture(e.to_string()))
}

/// One 4-connected path snaking down the raster.
///
/// Even rows are fully set; odd rows connect them at alternating ends. Each
/// full row after the first starts a fresh provisional label that only
/// merges at its far end.
pub fn serpentine(width: u32, height: u32) -> TestResult<Raster> {
    let mut mask =
        Raster::new(width, height).map_err(|e| TestError::InvalidFixture(e.to_string()))?;
    for y in 0..height {
        if y % 2 == 0 {
            for x in 0..width {
                mask.set(x, y, 1)
                    .map_err(|e| TestError::InvalidFixture(e.to_string()))?;
            }
        } else {
            let x = if y % 4 == 1 { width - 1 } else { 0 };
            mask.set(x, y, 1)
                .map_err(|e| TestError::InvalidFixture(e.to_string()))?;
        }
    }
    Ok(mask)
}

/// Random mask with each pixel set with probability `density`.
///
/// The same seed always yields the same mask.
pub fn random_mask(width: u32, height: u32, density: f64, seed: u64) -> TestResult<Raster> {
    let coin = Bernoulli::new(density).map_err(|e| TestError::InvalidFixture(e.to_string()))?;
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width as usize * height as usize)
        .map(|_| u16::from(coin.sample(&mut rng)))
        .collect();
    Raster::from_vec(width, height, data).map_err(|e| TestError::InvalidFixture(e.to_string()))
}
