//! Orientation operations
//!
//! Horizontal and vertical mirroring. Both are self-inverse and preserve
//! dimensions.

use super::Raster;

impl Raster {
    /// Mirror the raster left-to-right.
    pub fn flip_horizontal(&self) -> Raster {
        let w = self.width();
        let h = self.height();
        let mut out = self.create_template();
        for row in 0..h {
            for col in 0..w {
                let pixel = self.get_pixel_unchecked(row, w - 1 - col);
                out.set_pixel_unchecked(row, col, pixel);
            }
        }
        out.into()
    }

    /// Mirror the raster top-to-bottom.
    pub fn flip_vertical(&self) -> Raster {
        let w = self.width();
        let h = self.height();
        let mut out = self.create_template();
        for row in 0..h {
            for col in 0..w {
                let pixel = self.get_pixel_unchecked(h - 1 - row, col);
                out.set_pixel_unchecked(row, col, pixel);
            }
        }
        out.into()
    }
}
