//! Channel extraction and recombination

use super::Raster;
use crate::error::{Error, Result};
use crate::pixel::{Channel, Pixel};

impl Raster {
    /// Visualize a single channel as a grayscale raster.
    ///
    /// The selected component is replicated to all three channels of the
    /// output, so the result renders as a gray image of that channel's
    /// intensities.
    pub fn extract_channel(&self, channel: Channel) -> Raster {
        let mut out = self.create_template();
        for row in 0..self.height() {
            for col in 0..self.width() {
                let v = self.get_pixel_unchecked(row, col).channel(channel);
                out.set_pixel_unchecked(row, col, Pixel::new(v, v, v));
            }
        }
        out.into()
    }
}

/// Combine three rasters into one, taking the red channel from the
/// first, green from the second, and blue from the third.
///
/// # Errors
///
/// Returns [`Error::IncompatibleSizes`] if the rasters do not all have
/// the same dimensions.
pub fn combine_channels(red: &Raster, green: &Raster, blue: &Raster) -> Result<Raster> {
    for other in [green, blue] {
        if !red.sizes_equal(other) {
            return Err(Error::IncompatibleSizes(
                red.width(),
                red.height(),
                other.width(),
                other.height(),
            ));
        }
    }

    let mut out = red.create_template();
    for row in 0..red.height() {
        for col in 0..red.width() {
            out.set_pixel_unchecked(
                row,
                col,
                Pixel::new(
                    red.get_pixel_unchecked(row, col).red(),
                    green.get_pixel_unchecked(row, col).green(),
                    blue.get_pixel_unchecked(row, col).blue(),
                ),
            );
        }
    }
    Ok(out.into())
}
