//! Brightness, grayscale, and sepia operations

use crate::correct::shift_channel;
use rasterlab_core::{Pixel, Raster};

/// Luma weights (BT.709).
const LUMA_R: f64 = 0.2126;
const LUMA_G: f64 = 0.7152;
const LUMA_B: f64 = 0.0722;

/// Sepia tone matrix, applied to the (r, g, b) column vector.
const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Grayscale reduction method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrayscaleMethod {
    /// Maximum of the three channels
    Value,
    /// Mean of the three channels
    Intensity,
    /// Weighted luma (BT.709)
    Luma,
}

/// Add `increment` to every channel of every pixel, clamped into
/// [0, 255]. Negative increments darken.
pub fn brighten(raster: &Raster, increment: i32) -> Raster {
    map_pixels(raster, |p| {
        Pixel::new(
            shift_channel(p.red(), increment),
            shift_channel(p.green(), increment),
            shift_channel(p.blue(), increment),
        )
    })
}

/// Reduce a raster to grayscale; all three output channels carry the
/// computed value.
pub fn grayscale(raster: &Raster, method: GrayscaleMethod) -> Raster {
    map_pixels(raster, |p| {
        let v = match method {
            GrayscaleMethod::Value => p.red().max(p.green()).max(p.blue()),
            GrayscaleMethod::Intensity => {
                let sum = p.red() as u32 + p.green() as u32 + p.blue() as u32;
                rasterlab_core::quantize_channel(sum as f64 / 3.0)
            }
            GrayscaleMethod::Luma => rasterlab_core::quantize_channel(
                LUMA_R * p.red() as f64 + LUMA_G * p.green() as f64 + LUMA_B * p.blue() as f64,
            ),
        };
        Pixel::new(v, v, v)
    })
}

/// Apply the sepia tone transform.
pub fn sepia(raster: &Raster) -> Raster {
    map_pixels(raster, |p| {
        let rgb = [p.red() as f64, p.green() as f64, p.blue() as f64];
        let mixed = SEPIA.map(|row| row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2]);
        Pixel::from_f64(mixed[0], mixed[1], mixed[2])
    })
}

fn map_pixels(raster: &Raster, f: impl Fn(Pixel) -> Pixel) -> Raster {
    let mut out = raster.create_template();
    for row in 0..raster.height() {
        for col in 0..raster.width() {
            out.set_pixel_unchecked(row, col, f(raster.get_pixel_unchecked(row, col)));
        }
    }
    out.into()
}
