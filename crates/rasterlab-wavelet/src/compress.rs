//! Lossy compression by Haar coefficient thresholding
//!
//! Each channel is padded to a power-of-two square, transformed with
//! the 2D Haar decomposition, stripped of its smallest-magnitude
//! coefficients, inverse-transformed, and cropped back. The threshold
//! is chosen from the distinct coefficient magnitudes so that roughly
//! `percentage`% of them fall strictly below it; coefficients tied with
//! the cutoff are preserved, so a request never discards more than
//! asked for.

use crate::error::{WaveletError, WaveletResult};
use crate::haar;
use rasterlab_core::{Channel, Raster, quantize_channel};

/// Compress a raster by zeroing small Haar coefficients.
///
/// `percentage` selects how much of the coefficient population to
/// discard, per channel independently. At 0 the result round-trips the
/// input up to rounding; at 100 only coefficients tied with the maximum
/// magnitude survive, which for typical images is the DC term alone and
/// flattens the channel to its mean.
/// The output has the same dimensions as the input, which is left
/// unmodified. Deterministic for identical input and percentage.
///
/// # Errors
///
/// Returns [`WaveletError::InvalidPercentage`] unless
/// `0 <= percentage <= 100`; nothing is computed in that case.
pub fn compress(raster: &Raster, percentage: i32) -> WaveletResult<Raster> {
    if !(0..=100).contains(&percentage) {
        return Err(WaveletError::InvalidPercentage(percentage));
    }

    let size = haar::padded_size(raster.width(), raster.height());
    let mut out = raster.create_template();

    for channel in Channel::ALL {
        let mut grid = channel_plane(raster, channel, size);
        haar::forward(&mut grid, size);

        let cutoff = magnitude_cutoff(&grid, percentage);
        for value in grid.iter_mut() {
            if value.abs() < cutoff {
                *value = 0.0;
            }
        }

        haar::inverse(&mut grid, size);

        for row in 0..raster.height() {
            for col in 0..raster.width() {
                let reconstructed = grid[row as usize * size + col as usize];
                let pixel = out
                    .get_pixel_unchecked(row, col)
                    .with_channel(channel, quantize_channel(reconstructed));
                out.set_pixel_unchecked(row, col, pixel);
            }
        }
    }

    Ok(out.into())
}

/// Extract one channel into a zero-padded `size * size` grid.
fn channel_plane(raster: &Raster, channel: Channel, size: usize) -> Vec<f64> {
    let mut grid = vec![0.0f64; size * size];
    for row in 0..raster.height() {
        for col in 0..raster.width() {
            grid[row as usize * size + col as usize] =
                raster.get_pixel_unchecked(row, col).channel(channel) as f64;
        }
    }
    grid
}

/// Pick the magnitude below which coefficients are zeroed.
///
/// The cutoff is the entry at index `count * percentage / 100` (integer
/// division, clamped to the last entry) of the sorted distinct
/// magnitudes. At 0% that is the smallest magnitude, so nothing falls
/// strictly below it; at 100% it is the largest, so only coefficients
/// tied with the maximum survive.
fn magnitude_cutoff(grid: &[f64], percentage: i32) -> f64 {
    let mut magnitudes: Vec<f64> = grid.iter().map(|v| v.abs()).collect();
    magnitudes.sort_unstable_by(f64::total_cmp);
    magnitudes.dedup();

    let index = (magnitudes.len() * percentage as usize / 100).min(magnitudes.len() - 1);
    magnitudes[index]
}
