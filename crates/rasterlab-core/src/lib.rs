//! Rasterlab Core - Basic data structures for image manipulation
//!
//! This crate provides the fundamental types used throughout the
//! rasterlab engine:
//!
//! - [`Pixel`] / [`Channel`] - An immutable RGB color value and its
//!   channel selector
//! - [`Raster`] / [`RasterMut`] - The main image container
//!   (immutable / mutable)
//! - [`ColorHistogram`] - Per-channel frequency distributions
//!
//! Every transformation in the workspace consumes a [`Raster`] and
//! returns a new one; inputs are never modified.

pub mod error;
pub mod pixel;
pub mod raster;

pub use error::{Error, Result};
pub use pixel::{Channel, Pixel, quantize_channel};
pub use raster::{ColorHistogram, Raster, RasterMut, combine_channels};
