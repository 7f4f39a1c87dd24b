//! Raster - The 2D sample grid
//!
//! `Raster` holds the binary mask handed to the labeling engine.
//!
//! # Sample meaning
//!
//! - `0` is background
//! - `1` is foreground (the marker the labeling pass looks for)
//!
//! Any other value is outside the input contract. The labeling engine does
//! not validate this; see `regioning_region::scan`.
//!
//! # Layout
//!
//! Samples are stored row-major in a single `Vec<u16>`; the sample at
//! `(x, y)` lives at index `y * width + x`. Array-style shapes are reported
//! as `[height, width]`, the order a 2-dimensional array library would use.

mod rgb;

pub use rgb::{RGB_CHANNELS, Rgb, RgbRaster};

use crate::error::{Error, Result};

/// Check that both dimensions fit the `u32` coordinate space.
///
/// A zero dimension is valid and gives an empty grid.
pub(crate) fn checked_dimensions(width: usize, height: usize) -> Result<(u32, u32, usize)> {
    let w = u32::try_from(width).map_err(|_| Error::InvalidDimension { width, height })?;
    let h = u32::try_from(height).map_err(|_| Error::InvalidDimension { width, height })?;
    let len = width
        .checked_mul(height)
        .ok_or(Error::InvalidDimension { width, height })?;
    Ok((w, h, len))
}

/// A 2D grid of `u16` samples
///
/// # Examples
///
/// ```
/// use regioning_core::Raster;
///
/// let rows: [&[u16]; 2] = [&[0, 1, 1], &[0, 0, 1]];
/// let mask = Raster::from_rows(&rows).unwrap();
/// assert_eq!(mask.width(), 3);
/// assert_eq!(mask.height(), 2);
/// assert_eq!(mask.get(2, 1), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u16>,
}

impl Raster {
    /// Create a new all-background raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width * height` overflows `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let (width, height, len) = checked_dimensions(width as usize, height as usize)?;
        Ok(Raster {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Create a raster from a row-major sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width * height` overflows, or
    /// [`Error::DataLengthMismatch`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u16>) -> Result<Self> {
        let (width, height, len) = checked_dimensions(width as usize, height as usize)?;
        if data.len() != len {
            return Err(Error::DataLengthMismatch {
                expected: len,
                actual: data.len(),
            });
        }
        Ok(Raster {
            width,
            height,
            data,
        })
    }

    /// Create a raster from an array shape and its flat buffer.
    ///
    /// This is the boundary constructor for callers that hold n-dimensional
    /// arrays. `shape` must be exactly `[height, width]`; anything else is
    /// rejected before the buffer is inspected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if `shape.len() != 2`, otherwise the
    /// same errors as [`Raster::from_vec`].
    pub fn from_shape(shape: &[usize], data: Vec<u16>) -> Result<Self> {
        let &[height, width] = shape else {
            return Err(Error::InvalidShape { ndim: shape.len() });
        };
        let (width, height, _) = checked_dimensions(width, height)?;
        Self::from_vec(width, height, data)
    }

    /// Create a raster from a slice of equally long rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`] if the rows are ragged. An empty
    /// slice gives a 0 x 0 raster.
    pub fn from_rows<R: AsRef<[u16]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let (w, h, len) = checked_dimensions(width, height)?;

        let mut data = Vec::with_capacity(len);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::DataLengthMismatch {
                    expected: width,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Raster {
            width: w,
            height: h,
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

    /// Get the array shape, `[height, width]`.
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        [self.height as usize, self.width as usize]
    }

    /// Get the number of samples (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the raster has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the sample at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u16> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Set the sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, val: u16) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = val;
        Ok(())
    }

    /// Get raw access to the row-major samples.
    #[inline]
    pub fn data(&self) -> &[u16] {
        &self.data
    }

    /// Get one row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u16] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Count samples that are not background.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Consume the raster and return its sample buffer.
    pub fn into_vec(self) -> Vec<u16> {
        self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
