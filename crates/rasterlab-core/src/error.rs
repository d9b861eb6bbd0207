//! Error types for rasterlab-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Rasterlab core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Coordinate outside the raster bounds
    #[error("position ({row}, {col}) out of bounds for {height}x{width} raster")]
    OutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },

    /// Channel value outside [0, 255]
    #[error("channel value out of range: {0}")]
    ChannelOutOfRange(i32),

    /// Incompatible raster sizes
    #[error("incompatible raster sizes: {0}x{1} vs {2}x{3}")]
    IncompatibleSizes(u32, u32, u32, u32),
}

/// Result type alias for rasterlab operations
pub type Result<T> = std::result::Result<T, Error>;
