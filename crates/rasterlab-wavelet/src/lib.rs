//! Rasterlab Wavelet - Haar wavelet compression
//!
//! Lossy raster compression built on a 2D orthonormal Haar transform:
//!
//! - [`haar`] - forward/inverse transform on power-of-two square grids
//! - [`compress`] - percentage-based coefficient thresholding

pub mod compress;
pub mod error;
pub mod haar;

pub use compress::compress;
pub use error::{WaveletError, WaveletResult};
