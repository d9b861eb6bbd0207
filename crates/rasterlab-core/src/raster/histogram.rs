//! Histogram generation
//!
//! Computes per-channel pixel value distributions from a raster.

use super::Raster;
use crate::pixel::Channel;

/// RGB channel histograms
///
/// Contains separate 256-bin frequency counts for the red, green, and
/// blue channels. A histogram is a derived snapshot: it is built fresh
/// per call and holds no reference back to the raster it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorHistogram {
    /// Red channel frequencies, one bin per value
    pub red: [u64; 256],
    /// Green channel frequencies, one bin per value
    pub green: [u64; 256],
    /// Blue channel frequencies, one bin per value
    pub blue: [u64; 256],
}

impl ColorHistogram {
    /// Get the bins for one channel.
    pub fn channel(&self, channel: Channel) -> &[u64; 256] {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }
}

impl Raster {
    /// Compute per-channel histograms over every pixel.
    ///
    /// For each pixel, the bin at index `pixel.channel(c)` is incremented
    /// for each of red, green, and blue independently. No normalization
    /// is applied; each channel's bins sum to `width * height`.
    pub fn color_histogram(&self) -> ColorHistogram {
        let mut red = [0u64; 256];
        let mut green = [0u64; 256];
        let mut blue = [0u64; 256];

        for pixel in self.pixels() {
            red[pixel.red() as usize] += 1;
            green[pixel.green() as usize] += 1;
            blue[pixel.blue() as usize] += 1;
        }

        ColorHistogram { red, green, blue }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;

    #[test]
    fn test_histogram_all_black() {
        let raster = Raster::new(10, 10).unwrap();
        let hist = raster.color_histogram();
        for channel in Channel::ALL {
            assert_eq!(hist.channel(channel)[0], 100);
            assert_eq!(hist.channel(channel)[1..].iter().sum::<u64>(), 0);
        }
    }

    #[test]
    fn test_histogram_counts_channels_independently() {
        let mut raster = Raster::new(3, 3).unwrap().try_into_mut().unwrap();
        raster.set_pixel(0, 0, Pixel::new(100, 150, 200)).unwrap();
        raster.set_pixel(0, 1, Pixel::new(200, 150, 100)).unwrap();
        let raster: Raster = raster.into();

        let hist = raster.color_histogram();
        assert_eq!(hist.red[100], 1);
        assert_eq!(hist.red[200], 1);
        assert_eq!(hist.green[150], 2);
        assert_eq!(hist.blue[100], 1);
        assert_eq!(hist.blue[200], 1);
        // remaining seven pixels are black
        assert_eq!(hist.red[0], 7);
    }

    #[test]
    fn test_histogram_bins_sum_to_pixel_count() {
        let mut raster = Raster::new(4, 5).unwrap().try_into_mut().unwrap();
        for row in 0..5 {
            for col in 0..4 {
                let v = (row * 37 + col * 11) as u8;
                raster
                    .set_pixel(row, col, Pixel::new(v, v.wrapping_add(3), v.wrapping_mul(7)))
                    .unwrap();
            }
        }
        let raster: Raster = raster.into();

        let hist = raster.color_histogram();
        for channel in Channel::ALL {
            assert_eq!(hist.channel(channel).iter().sum::<u64>(), 20);
        }
    }
}
