//! Histogram regression test
//!
//! Checks per-channel counting and the bin-sum invariant: for every
//! raster, each channel's 256 bins sum to `width * height`.

use rasterlab_core::{Channel, Pixel, Raster};
use rasterlab_test::{RegParams, random_raster, uniform_raster};

#[test]
fn histogram_reg() {
    let mut rp = RegParams::new("histogram");

    // Known per-channel counts
    let mut raster = Raster::new(3, 3).unwrap().try_into_mut().unwrap();
    raster.set_pixel(0, 0, Pixel::new(100, 150, 200)).unwrap();
    raster.set_pixel(0, 1, Pixel::new(200, 150, 100)).unwrap();
    let raster: Raster = raster.into();

    let hist = raster.color_histogram();
    rp.compare_values(1.0, hist.red[100] as f64, 0.0);
    rp.compare_values(1.0, hist.red[200] as f64, 0.0);
    rp.compare_values(2.0, hist.green[150] as f64, 0.0);
    rp.compare_values(1.0, hist.blue[200] as f64, 0.0);
    rp.compare_values(7.0, hist.blue[0] as f64, 0.0);

    // Bin-sum invariant on a random raster
    let noise = random_raster(31, 17, 1234);
    let hist = noise.color_histogram();
    for channel in Channel::ALL {
        let total: u64 = hist.channel(channel).iter().sum();
        rp.compare_values((31 * 17) as f64, total as f64, 0.0);
    }

    // A uniform raster concentrates all mass in one bin per channel
    let flat = uniform_raster(8, 8, Pixel::new(40, 80, 120));
    let hist = flat.color_histogram();
    rp.compare_values(64.0, hist.red[40] as f64, 0.0);
    rp.compare_values(64.0, hist.green[80] as f64, 0.0);
    rp.compare_values(64.0, hist.blue[120] as f64, 0.0);

    // Histograms are snapshots: recomputing gives identical counts
    let again = flat.color_histogram();
    rp.compare_values(1.0, (hist == again) as u8 as f64, 0.0);

    assert!(rp.cleanup(), "histogram regression test failed");
}
