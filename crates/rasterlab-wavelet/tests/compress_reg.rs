//! Wavelet compression regression test
//!
//! Pins the 3x3 three-channel scenario at 50%, the lossless 0% and
//! fully flattened 100% endpoints, and parameter validation.

use rasterlab_core::{Pixel, Raster};
use rasterlab_test::{RegParams, max_channel_diff, random_raster, raster_from_fn};
use rasterlab_wavelet::compress;

const RED: [[u8; 3]; 3] = [[50, 30, 60], [40, 100, 50], [20, 60, 80]];
const GREEN: [[u8; 3]; 3] = [[10, 20, 50], [20, 150, 70], [80, 60, 100]];
const BLUE: [[u8; 3]; 3] = [[70, 90, 20], [30, 120, 60], [40, 30, 40]];

fn sample_raster() -> Raster {
    raster_from_fn(3, 3, |row, col| {
        Pixel::new(
            RED[row as usize][col as usize],
            GREEN[row as usize][col as usize],
            BLUE[row as usize][col as usize],
        )
    })
}

#[test]
fn compress_reg() {
    let mut rp = RegParams::new("compress");

    // Pinned 50% scenario: each channel reconstructs to a grid that is
    // a direct function of the transform and the distinct-magnitude
    // threshold rule.
    let red_50 = [[46, 6, 69], [36, 76, 69], [40, 40, 80]];
    let green_50 = [[2, 12, 57], [12, 142, 57], [77, 77, 102]];
    let blue_50 = [[50, 105, 40], [50, 105, 40], [17, 17, 10]];
    let expected = raster_from_fn(3, 3, |row, col| {
        Pixel::new(
            red_50[row as usize][col as usize],
            green_50[row as usize][col as usize],
            blue_50[row as usize][col as usize],
        )
    });

    let compressed = compress(&sample_raster(), 50).unwrap();
    rp.compare_rasters(&expected, &compressed);

    // Determinism: a second run is bit-identical
    let again = compress(&sample_raster(), 50).unwrap();
    rp.compare_rasters(&compressed, &again);

    // 0% is lossless up to rounding
    let original = sample_raster();
    let identity = compress(&original, 0).unwrap();
    rp.compare_rasters_within(&original, &identity, 1);
    rp.compare_rasters(&original, &sample_raster()); // input unmodified

    let noise = random_raster(17, 11, 2026);
    let identity = compress(&noise, 0).unwrap();
    rp.compare_values(1.0, (max_channel_diff(&noise, &identity) <= 1) as u8 as f64, 0.0);

    // 100% flattens each channel to a single value
    let flat = compress(&sample_raster(), 100).unwrap();
    rp.compare_rasters(
        &raster_from_fn(3, 3, |_, _| Pixel::new(31, 35, 31)),
        &flat,
    );

    let flat_noise = compress(&random_raster(16, 16, 7), 100).unwrap();
    let first = flat_noise.get_pixel(0, 0).unwrap();
    let uniform = flat_noise.pixels().iter().all(|&p| p == first);
    rp.compare_values(1.0, uniform as u8 as f64, 0.0);

    assert!(rp.cleanup(), "compress regression test failed");
}

#[test]
fn compress_rejects_out_of_range_percentage() {
    let raster = sample_raster();
    assert!(compress(&raster, -1).is_err());
    assert!(compress(&raster, 101).is_err());
    assert!(compress(&raster, i32::MIN).is_err());
    assert!(compress(&raster, 100).is_ok());
    assert!(compress(&raster, 0).is_ok());
}
