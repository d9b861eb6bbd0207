//! Rasterlab - Image manipulation engine
//!
//! Rasterlab operates on in-memory RGB rasters addressed by
//! `(row, col)` and provides:
//!
//! - Per-channel histogram computation
//! - Levels adjustment via a quadratic tone curve
//! - Automatic color correction by histogram peak alignment
//! - Lossy compression via a 2D Haar wavelet transform
//! - Brightness, grayscale, sepia, flips, channel split/combine, and
//!   kernel convolution
//!
//! Every operation is a pure function from an input [`Raster`]
//! (plus parameters) to a new output raster; inputs are never
//! modified.
//!
//! # Example
//!
//! ```
//! use rasterlab::{Pixel, Raster};
//! use rasterlab::enhance::adjust_levels;
//!
//! let raster = Raster::filled(16, 16, Pixel::new(50, 100, 150)).unwrap();
//! let adjusted = adjust_levels(&raster, 20, 110, 240).unwrap();
//! assert_eq!(adjusted.width(), 16);
//! assert_eq!(raster.get_pixel(0, 0).unwrap(), Pixel::new(50, 100, 150));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterlab_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterlab_enhance as enhance;
pub use rasterlab_filter as filter;
pub use rasterlab_wavelet as wavelet;
