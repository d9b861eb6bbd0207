//! Automatic color correction by histogram peak alignment
//!
//! Finds each channel's dominant histogram peak inside the meaningful
//! value range, then shifts every channel so the peaks coincide at their
//! common average. Clipped shadows and highlights are excluded from peak
//! detection so a mass of pure black or white pixels cannot drag the
//! correction.

use rasterlab_core::{Channel, Raster};

/// Lowest channel value considered when locating a peak.
const PEAK_MIN: usize = 11;
/// Highest channel value considered when locating a peak.
const PEAK_MAX: usize = 244;

/// Locate the meaningful peak of one channel's histogram bins.
///
/// Returns the value in `[PEAK_MIN, PEAK_MAX]` with the highest
/// frequency; ties resolve to the lowest value.
pub fn meaningful_peak(bins: &[u64; 256]) -> u8 {
    let mut peak = PEAK_MIN;
    for value in PEAK_MIN..=PEAK_MAX {
        if bins[value] > bins[peak] {
            peak = value;
        }
    }
    peak as u8
}

/// Shift a channel value by a signed offset, clamped into [0, 255].
#[inline]
pub(crate) fn shift_channel(value: u8, offset: i32) -> u8 {
    (value as i32 + offset).clamp(0, 255) as u8
}

/// Color-correct a raster by aligning its channel histogram peaks.
///
/// Computes the meaningful peak of each channel, averages the three
/// peaks with integer truncation, and offsets every channel so its peak
/// lands on the average. A uniformly colored raster comes back
/// unchanged. The input raster is unmodified.
pub fn color_correct(raster: &Raster) -> Raster {
    let hist = raster.color_histogram();
    let peaks = Channel::ALL.map(|c| meaningful_peak(hist.channel(c)) as i32);
    let average = peaks.iter().sum::<i32>() / 3;
    let offsets = peaks.map(|peak| average - peak);

    let mut out = raster.create_template();
    for row in 0..raster.height() {
        for col in 0..raster.width() {
            let mut pixel = raster.get_pixel_unchecked(row, col);
            for (channel, offset) in Channel::ALL.into_iter().zip(offsets) {
                pixel = pixel.with_channel(channel, shift_channel(pixel.channel(channel), offset));
            }
            out.set_pixel_unchecked(row, col, pixel);
        }
    }
    out.into()
}
