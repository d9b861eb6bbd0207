//! Convolution operations
//!
//! Implements raster convolution with arbitrary kernels.

use crate::kernel::Kernel;
use rasterlab_core::{Pixel, Raster};

/// Convolve a raster with a kernel, each channel independently.
///
/// Uses replicate (clamp) border handling: pixels outside the raster
/// boundary are treated as having the same value as the nearest edge
/// pixel. The result is quantized into [0, 255] per channel.
pub fn convolve(raster: &Raster, kernel: &Kernel) -> Raster {
    let w = raster.width();
    let h = raster.height();
    let kcx = kernel.center_x() as i32;
    let kcy = kernel.center_y() as i32;

    let mut out = raster.create_template();
    for row in 0..h {
        for col in 0..w {
            let mut sum_r = 0.0f64;
            let mut sum_g = 0.0f64;
            let mut sum_b = 0.0f64;

            for ky in 0..kernel.height() {
                for kx in 0..kernel.width() {
                    let sc = col as i32 + (kx as i32 - kcx);
                    let sr = row as i32 + (ky as i32 - kcy);

                    // Clamp to raster boundaries (replicate border)
                    let sc = sc.clamp(0, w as i32 - 1) as u32;
                    let sr = sr.clamp(0, h as i32 - 1) as u32;

                    let pixel = raster.get_pixel_unchecked(sr, sc);
                    let k = kernel.get(kx, ky);
                    sum_r += pixel.red() as f64 * k;
                    sum_g += pixel.green() as f64 * k;
                    sum_b += pixel.blue() as f64 * k;
                }
            }

            out.set_pixel_unchecked(row, col, Pixel::from_f64(sum_r, sum_g, sum_b));
        }
    }

    out.into()
}

/// Blur a raster with a 3x3 Gaussian kernel.
pub fn blur(raster: &Raster) -> Raster {
    convolve(raster, &Kernel::gaussian_3x3())
}

/// Sharpen a raster with a 5x5 sharpening kernel.
pub fn sharpen(raster: &Raster) -> Raster {
    convolve(raster, &Kernel::sharpen_5x5())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_kernel() {
        let mut raster = Raster::new(3, 3).unwrap().try_into_mut().unwrap();
        raster.set_pixel(1, 1, Pixel::new(200, 100, 50)).unwrap();
        raster.set_pixel(0, 2, Pixel::new(9, 9, 9)).unwrap();
        let raster: Raster = raster.into();

        let identity = Kernel::from_slice(1, 1, &[1.0]).unwrap();
        let out = convolve(&raster, &identity);
        assert_eq!(out.pixels(), raster.pixels());
    }

    #[test]
    fn test_blur_preserves_uniform() {
        let raster = Raster::filled(4, 4, Pixel::new(77, 88, 99)).unwrap();
        let out = blur(&raster);
        assert_eq!(out.pixels(), raster.pixels());
    }

    #[test]
    fn test_sharpen_preserves_uniform() {
        let raster = Raster::filled(6, 6, Pixel::new(40, 40, 40)).unwrap();
        let out = sharpen(&raster);
        assert_eq!(out.pixels(), raster.pixels());
    }

    #[test]
    fn test_blur_spreads_point() {
        let mut raster = Raster::new(3, 3).unwrap().try_into_mut().unwrap();
        raster.set_pixel(1, 1, Pixel::new(160, 0, 0)).unwrap();
        let raster: Raster = raster.into();

        let out = blur(&raster);
        // center keeps 4/16 of the point, edge neighbors get 2/16
        assert_eq!(out.get_pixel(1, 1).unwrap().red(), 40);
        assert_eq!(out.get_pixel(0, 1).unwrap().red(), 20);
        assert_eq!(out.get_pixel(0, 0).unwrap().red(), 10);
    }
}
