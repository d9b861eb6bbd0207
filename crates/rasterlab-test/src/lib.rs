//! rasterlab-test - Regression test support for rasterlab
//!
//! Provides deterministic raster builders and a small regression
//! framework ([`RegParams`]) that accumulates comparison failures and
//! reports them at cleanup.
//!
//! # Usage
//!
//! ```
//! use rasterlab_test::{RegParams, random_raster};
//!
//! let mut rp = RegParams::new("histogram");
//! let raster = random_raster(16, 16, 42);
//! rp.compare_values(256.0, (raster.width() * raster.height()) as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use rasterlab_core::{Pixel, Raster};

/// Build a raster from a function of `(row, col)`.
///
/// # Panics
///
/// Panics if `width` or `height` is 0.
pub fn raster_from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Pixel) -> Raster {
    let mut raster = Raster::new(width, height)
        .expect("test raster dimensions")
        .try_into_mut()
        .expect("fresh raster is unshared");
    for row in 0..height {
        for col in 0..width {
            raster.set_pixel_unchecked(row, col, f(row, col));
        }
    }
    raster.into()
}

/// Build a raster filled with one pixel value.
pub fn uniform_raster(width: u32, height: u32, pixel: Pixel) -> Raster {
    Raster::filled(width, height, pixel).expect("test raster dimensions")
}

/// Build a raster of reproducible random pixels from a seed.
pub fn random_raster(width: u32, height: u32, seed: u64) -> Raster {
    let mut rng = StdRng::seed_from_u64(seed);
    raster_from_fn(width, height, |_, _| {
        Pixel::new(rng.random(), rng.random(), rng.random())
    })
}

/// Largest per-channel absolute difference between two rasters.
///
/// # Panics
///
/// Panics if the rasters differ in size.
pub fn max_channel_diff(a: &Raster, b: &Raster) -> u32 {
    assert!(a.sizes_equal(b), "rasters must have equal dimensions");
    a.pixels()
        .iter()
        .zip(b.pixels())
        .map(|(pa, pb)| {
            let dr = (pa.red() as i32 - pb.red() as i32).unsigned_abs();
            let dg = (pa.green() as i32 - pb.green() as i32).unsigned_abs();
            let db = (pa.blue() as i32 - pb.blue() as i32).unsigned_abs();
            dr.max(dg).max(db)
        })
        .max()
        .unwrap_or(0)
}
