//! Haar transform regression test
//!
//! Round-trip checks for the forward/inverse pair, including the
//! padding path used by compression: pad -> forward -> inverse -> crop
//! must be the identity before any thresholding happens.

use approx::assert_abs_diff_eq;
use rasterlab_wavelet::haar::{forward, inverse, padded_size};

#[test]
fn haar_roundtrip_reg() {
    // 3x3 content padded into a 4x4 grid, as compression does it
    let content = [
        [50.0, 30.0, 60.0],
        [40.0, 100.0, 50.0],
        [20.0, 60.0, 80.0],
    ];
    let size = padded_size(3, 3);
    assert_eq!(size, 4);

    let mut grid = vec![0.0f64; size * size];
    for (row, values) in content.iter().enumerate() {
        grid[row * size..row * size + 3].copy_from_slice(values);
    }

    let original = grid.clone();
    forward(&mut grid, size);
    inverse(&mut grid, size);
    for (v, e) in grid.iter().zip(&original) {
        assert_abs_diff_eq!(*v, *e, epsilon = 1e-9);
    }

    // Forward coefficients of the padded grid, level by level, are
    // fully determined; spot-check the corners of the decomposition.
    let mut grid = original.clone();
    forward(&mut grid, size);
    assert_abs_diff_eq!(grid[0], 122.5, epsilon = 1e-9); // DC = sum / 4
    assert_abs_diff_eq!(grid[3], 55.0, epsilon = 1e-9);
    assert_abs_diff_eq!(grid[size], 42.5, epsilon = 1e-9);

    // An orthonormal transform preserves energy
    let energy_in: f64 = original.iter().map(|v| v * v).sum();
    let energy_out: f64 = grid.iter().map(|v| v * v).sum();
    assert_abs_diff_eq!(energy_in, energy_out, epsilon = 1e-6);
}

#[test]
fn haar_larger_grid_roundtrip_reg() {
    let size = 16;
    let original: Vec<f64> = (0..size * size)
        .map(|i| ((i * 97 + 13) % 256) as f64)
        .collect();
    let mut grid = original.clone();
    forward(&mut grid, size);
    inverse(&mut grid, size);
    for (v, e) in grid.iter().zip(&original) {
        assert_abs_diff_eq!(*v, *e, epsilon = 1e-9);
    }
}
