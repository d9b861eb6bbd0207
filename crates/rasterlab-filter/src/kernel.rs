//! Convolution kernels

use crate::error::{FilterError, FilterResult};

/// A 2D convolution kernel with odd dimensions and an implicit center.
#[derive(Debug, Clone)]
pub struct Kernel {
    width: u32,
    height: u32,
    /// Kernel weights in row-major order
    data: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from a slice of row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if either dimension is
    /// even or zero, or if `data` does not hold `width * height`
    /// weights.
    pub fn from_slice(width: u32, height: u32, data: &[f64]) -> FilterResult<Self> {
        if width == 0 || height == 0 || width % 2 == 0 || height % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "dimensions must be odd and nonzero: {width}x{height}"
            )));
        }
        if data.len() != (width * height) as usize {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} weights for a {width}x{height} kernel, got {}",
                width * height,
                data.len()
            )));
        }
        Ok(Kernel {
            width,
            height,
            data: data.to_vec(),
        })
    }

    /// 3x3 Gaussian blur kernel.
    pub fn gaussian_3x3() -> Kernel {
        let s = 1.0 / 16.0;
        Kernel {
            width: 3,
            height: 3,
            data: vec![
                s, 2.0 * s, s, //
                2.0 * s, 4.0 * s, 2.0 * s, //
                s, 2.0 * s, s,
            ],
        }
    }

    /// 5x5 sharpening kernel: a unit center reinforced by its inner
    /// ring, with a negative outer ring.
    pub fn sharpen_5x5() -> Kernel {
        let outer = -1.0 / 8.0;
        let inner = 1.0 / 4.0;
        let mut data = vec![outer; 25];
        for ky in 1..4 {
            for kx in 1..4 {
                data[ky * 5 + kx] = inner;
            }
        }
        data[12] = 1.0;
        Kernel {
            width: 5,
            height: 5,
            data,
        }
    }

    /// Kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Center column index.
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.width / 2
    }

    /// Center row index.
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.height / 2
    }

    /// Weight at `(kx, ky)`.
    ///
    /// # Panics
    ///
    /// Panics if the index lies outside the kernel.
    #[inline]
    pub fn get(&self, kx: u32, ky: u32) -> f64 {
        self.data[(ky * self.width + kx) as usize]
    }
}
