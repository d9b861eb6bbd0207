//! Raster - the main image container
//!
//! A [`Raster`] is a fixed-size grid of [`Pixel`]s addressed by
//! `(row, col)` with zero-based coordinates. Dimensions are set at
//! construction time and never change.
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership). To
//! modify pixel data, convert to [`RasterMut`] via [`Raster::try_into_mut`]
//! or [`Raster::to_mut`], then convert back with `Into<Raster>`.
//! Transformations build their output in a `RasterMut` and hand out the
//! frozen `Raster`, so a caller never observes a partially written image.

mod access;
mod histogram;
mod orient;
mod rgb;

pub use histogram::ColorHistogram;
pub use rgb::combine_channels;

use crate::error::{Error, Result};
use crate::pixel::Pixel;
use std::sync::Arc;

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Row-major pixel data, `height * width` entries
    pixels: Vec<Pixel>,
}

impl RasterData {
    fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let len = width as usize * height as usize;
        Ok(RasterData {
            width,
            height,
            pixels: vec![Pixel::BLACK; len],
        })
    }
}

/// Raster - main image container
///
/// Uses reference counting via `Arc` for efficient cloning.
///
/// # Examples
///
/// ```
/// use rasterlab_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with the given dimensions, filled with black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Raster {
            inner: Arc::new(RasterData::new(width, height)?),
        })
    }

    /// Create a new raster filled with a single pixel value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is 0.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Result<Self> {
        let mut data = RasterData::new(width, height)?;
        data.pixels.fill(pixel);
        Ok(Raster {
            inner: Arc::new(data),
        })
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the row-major pixel data.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.inner.pixels
    }

    /// Create a black [`RasterMut`] with the same dimensions as this
    /// raster, for building a transformed copy.
    pub fn create_template(&self) -> RasterMut {
        let len = self.inner.pixels.len();
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                pixels: vec![Pixel::BLACK; len],
            },
        }
    }

    /// Check if two rasters have the same width and height.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable deep copy of this raster.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                pixels: self.inner.pixels.clone(),
            },
        }
    }
}

/// Mutable raster
///
/// Holds the pixel data exclusively, so writes need no synchronization.
/// Convert back to an immutable [`Raster`] with `Into<Raster>` once the
/// image is fully built.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }
}

impl From<RasterMut> for Raster {
    fn from(raster: RasterMut) -> Raster {
        Raster {
            inner: Arc::new(raster.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_dimension_fails() {
        assert!(Raster::new(0, 10).is_err());
        assert!(Raster::new(10, 0).is_err());
    }

    #[test]
    fn test_new_is_black() {
        let raster = Raster::new(4, 3).unwrap();
        assert!(raster.pixels().iter().all(|&p| p == Pixel::BLACK));
        assert_eq!(raster.pixels().len(), 12);
    }

    #[test]
    fn test_filled() {
        let pixel = Pixel::new(1, 2, 3);
        let raster = Raster::filled(5, 2, pixel).unwrap();
        assert!(raster.pixels().iter().all(|&p| p == pixel));
    }

    #[test]
    fn test_try_into_mut_shared_fails() {
        let raster = Raster::new(2, 2).unwrap();
        let other = raster.clone();
        let raster = raster.try_into_mut().unwrap_err();
        drop(other);
        assert!(raster.try_into_mut().is_ok());
    }

    #[test]
    fn test_to_mut_is_independent() {
        let raster = Raster::new(2, 2).unwrap();
        let mut copy = raster.to_mut();
        copy.set_pixel(0, 0, Pixel::WHITE).unwrap();
        assert_eq!(raster.get_pixel(0, 0).unwrap(), Pixel::BLACK);
        let copy: Raster = copy.into();
        assert_eq!(copy.get_pixel(0, 0).unwrap(), Pixel::WHITE);
    }

    #[test]
    fn test_sizes_equal() {
        let a = Raster::new(3, 4).unwrap();
        let b = Raster::new(3, 4).unwrap();
        let c = Raster::new(4, 3).unwrap();
        assert!(a.sizes_equal(&b));
        assert!(!a.sizes_equal(&c));
    }
}
