//! Rasterlab Enhance - Tone and color enhancement
//!
//! This crate provides the enhancement operations of the engine:
//!
//! - **Levels adjustment** ([`levels`]): quadratic tone curve through
//!   three control points, applied via a lookup table
//! - **Color correction** ([`correct`]): histogram peak alignment
//! - **Coloring** ([`coloring`]): brighten, grayscale, sepia
//!
//! Every operation consumes a [`rasterlab_core::Raster`] and returns a
//! new one; inputs are never modified.

pub mod coloring;
pub mod correct;
pub mod error;
pub mod levels;

// Re-export core types
pub use rasterlab_core;

// Re-export error types
pub use error::{EnhanceError, EnhanceResult};

// Re-export levels adjustment
pub use levels::{LevelsCurve, TrcLut, adjust_levels};

// Re-export color correction
pub use correct::{color_correct, meaningful_peak};

// Re-export coloring operations
pub use coloring::{GrayscaleMethod, brighten, grayscale, sepia};
