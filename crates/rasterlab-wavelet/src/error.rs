//! Error types for rasterlab-wavelet

use thiserror::Error;

/// Errors that can occur during wavelet compression
#[derive(Debug, Error)]
pub enum WaveletError {
    /// Compression percentage outside [0, 100]
    #[error("compression percentage must be in [0, 100]: got {0}")]
    InvalidPercentage(i32),
}

/// Result type for wavelet operations
pub type WaveletResult<T> = Result<T, WaveletError>;
