//! Error types for rasterlab-filter

use thiserror::Error;

/// Errors that can occur when building convolution kernels
#[derive(Debug, Error)]
pub enum FilterError {
    /// Malformed kernel definition
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
