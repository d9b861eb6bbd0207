//! Rasterlab Filter - Convolution filters
//!
//! Kernel-based filtering with replicate border handling:
//!
//! - [`Kernel`] - odd-sized convolution kernels, plus the stock blur
//!   and sharpen kernels
//! - [`convolve`], [`blur`], [`sharpen`] - whole-raster filtering

pub mod convolve;
pub mod error;
pub mod kernel;

pub use convolve::{blur, convolve, sharpen};
pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;
