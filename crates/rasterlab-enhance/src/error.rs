//! Error types for rasterlab-enhance

use thiserror::Error;

/// Errors that can occur during enhancement operations
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// Levels control points out of range or not strictly ascending
    #[error(
        "levels must satisfy 0 <= black < mid < white <= 255: got {black}, {mid}, {white}"
    )]
    InvalidLevels { black: i32, mid: i32, white: i32 },

    /// Quadratic fit system is singular
    #[error("singular levels system for control points {black}, {mid}, {white}")]
    SingularLevels { black: i32, mid: i32, white: i32 },
}

/// Result type for enhancement operations
pub type EnhanceResult<T> = Result<T, EnhanceError>;
