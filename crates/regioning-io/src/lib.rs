//! regioning-io - Mask and label-image I/O
//!
//! Reads binary masks from PNG files and writes colorized region images
//! back out:
//!
//! - [`read_mask_png`] / [`read_mask`] - Any grayscale, gray+alpha, RGB,
//!   RGBA or indexed PNG, binarised so that every non-zero pixel becomes `1`
//! - [`write_rgb_png`] / [`write_rgb`] - 16-bit RGB, lossless for the
//!   `u16` channels of an [`RgbRaster`]
//! - [`read_rgb_png`] / [`read_rgb`] - Colorized images back into an
//!   [`RgbRaster`]
//! - [`write_mask_png`] / [`write_mask`] - 8-bit grayscale, foreground white

mod error;
pub mod png;

pub use error::{IoError, IoResult};
pub use self::png::{read_mask_png, read_rgb_png, write_mask_png, write_rgb_png};

use regioning_core::{Raster, RgbRaster};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Read a binary mask from a PNG file.
pub fn read_mask<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let file = File::open(path)?;
    read_mask_png(BufReader::new(file))
}

/// Read a colorized image from an RGB or RGBA PNG file.
pub fn read_rgb<P: AsRef<Path>>(path: P) -> IoResult<RgbRaster> {
    let file = File::open(path)?;
    read_rgb_png(BufReader::new(file))
}

/// Write a colorized image to a 16-bit RGB PNG file.
pub fn write_rgb<P: AsRef<Path>>(image: &RgbRaster, path: P) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_rgb_png(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a binary mask to an 8-bit grayscale PNG file.
pub fn write_mask<P: AsRef<Path>>(mask: &Raster, path: P) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_mask_png(mask, &mut writer)?;
    writer.flush()?;
    Ok(())
}
