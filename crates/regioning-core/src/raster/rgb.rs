//! RGB output raster
//!
//! Channels are stored interleaved (`r, g, b` per pixel) as `u16`, so the
//! flat buffer has the same layout as an `[height, width, 3]` array.

use super::checked_dimensions;
use crate::error::{Error, Result};

/// A color triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

impl Rgb {
    /// Background color
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Create a color from its channels.
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Rgb { r, g, b }
    }

    /// Channels as an array in `[r, g, b]` order.
    #[inline]
    pub fn channels(self) -> [u16; 3] {
        [self.r, self.g, self.b]
    }
}

/// Number of channels per pixel
pub const RGB_CHANNELS: usize = 3;

/// An H x W x 3 raster of `u16` channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbRaster {
    width: u32,
    height: u32,
    data: Vec<u16>,
}

impl RgbRaster {
    /// Create a new all-black raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the pixel count overflows.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let (width, height, len) = checked_dimensions(width as usize, height as usize)?;
        Ok(RgbRaster {
            width,
            height,
            data: vec![0; len * RGB_CHANNELS],
        })
    }

    /// Create a raster from an interleaved channel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`] if `data.len() != width * height * 3`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u16>) -> Result<Self> {
        let (width, height, len) = checked_dimensions(width as usize, height as usize)?;
        if data.len() != len * RGB_CHANNELS {
            return Err(Error::DataLengthMismatch {
                expected: len * RGB_CHANNELS,
                actual: data.len(),
            });
        }
        Ok(RgbRaster {
            width,
            height,
            data,
        })
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the array shape, `[height, width, 3]`.
    #[inline]
    pub fn shape(&self) -> [usize; 3] {
        [self.height as usize, self.width as usize, RGB_CHANNELS]
    }

    /// Get the color at (x, y), or `None` if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        Some(Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Set the color at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let i = self.index(x, y);
        self.data[i..i + RGB_CHANNELS].copy_from_slice(&color.channels());
        Ok(())
    }

    /// Set the color of the pixel at a row-major pixel index.
    ///
    /// # Panics
    ///
    /// Panics if `pixel >= width * height`.
    #[inline]
    pub fn set_at(&mut self, pixel: usize, color: Rgb) {
        let i = pixel * RGB_CHANNELS;
        self.data[i..i + RGB_CHANNELS].copy_from_slice(&color.channels());
    }

    /// Get raw access to the interleaved channels.
    #[inline]
    pub fn data(&self) -> &[u16] {
        &self.data
    }

    /// Consume the raster and return its interleaved channel buffer.
    pub fn into_vec(self) -> Vec<u16> {
        self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * RGB_CHANNELS
    }
}
