//! 2D Haar wavelet transform
//!
//! Multi-level orthonormal Haar decomposition on square power-of-two
//! grids, in the square (Mallat) ordering: each level runs one
//! averaging/differencing pass over the rows and then the columns of
//! the active region, halving the region until a single coefficient
//! remains at the top level. Both passes scale by `1/sqrt(2)`, so the
//! transform preserves energy and [`inverse`] undoes [`forward`]
//! exactly up to floating-point rounding.
//!
//! Grids are row-major `size * size` slices; `size` must be a power of
//! two. A `size` of 1 is a no-op in both directions.

use std::f64::consts::SQRT_2;

/// Grid side length needed to transform a `width x height` raster:
/// the next power of two at or above the larger dimension.
pub fn padded_size(width: u32, height: u32) -> usize {
    width.max(height).next_power_of_two() as usize
}

/// Forward 2D Haar transform, in place.
///
/// # Panics
///
/// Panics if `size` is not a power of two or `grid.len() != size * size`.
pub fn forward(grid: &mut [f64], size: usize) {
    check_grid(grid, size);

    let mut buf = vec![0.0f64; size];
    let mut scratch = vec![0.0f64; size];
    let mut active = size;
    while active > 1 {
        for row in 0..active {
            forward_step(&mut grid[row * size..row * size + active], &mut scratch);
        }
        for col in 0..active {
            gather_column(grid, size, col, &mut buf[..active]);
            forward_step(&mut buf[..active], &mut scratch);
            scatter_column(grid, size, col, &buf[..active]);
        }
        active /= 2;
    }
}

/// Inverse 2D Haar transform, in place.
///
/// # Panics
///
/// Panics if `size` is not a power of two or `grid.len() != size * size`.
pub fn inverse(grid: &mut [f64], size: usize) {
    check_grid(grid, size);

    let mut buf = vec![0.0f64; size];
    let mut scratch = vec![0.0f64; size];
    let mut active = 2;
    while active <= size {
        for col in 0..active {
            gather_column(grid, size, col, &mut buf[..active]);
            inverse_step(&mut buf[..active], &mut scratch);
            scatter_column(grid, size, col, &buf[..active]);
        }
        for row in 0..active {
            inverse_step(&mut grid[row * size..row * size + active], &mut scratch);
        }
        active *= 2;
    }
}

fn check_grid(grid: &[f64], size: usize) {
    assert!(size.is_power_of_two(), "grid side must be a power of two");
    assert_eq!(grid.len(), size * size, "grid must be square");
}

/// One averaging/differencing pass over a sequence: pairs become
/// `(a + b) / sqrt(2)` in the first half and `(a - b) / sqrt(2)` in the
/// second half.
fn forward_step(values: &mut [f64], scratch: &mut [f64]) {
    let half = values.len() / 2;
    for i in 0..half {
        let a = values[2 * i];
        let b = values[2 * i + 1];
        scratch[i] = (a + b) / SQRT_2;
        scratch[half + i] = (a - b) / SQRT_2;
    }
    values.copy_from_slice(&scratch[..values.len()]);
}

/// Undo one pass: interleave `(s + d) / sqrt(2)` and `(s - d) / sqrt(2)`.
fn inverse_step(values: &mut [f64], scratch: &mut [f64]) {
    let half = values.len() / 2;
    for i in 0..half {
        let s = values[i];
        let d = values[half + i];
        scratch[2 * i] = (s + d) / SQRT_2;
        scratch[2 * i + 1] = (s - d) / SQRT_2;
    }
    values.copy_from_slice(&scratch[..values.len()]);
}

fn gather_column(grid: &[f64], size: usize, col: usize, buf: &mut [f64]) {
    for (row, slot) in buf.iter_mut().enumerate() {
        *slot = grid[row * size + col];
    }
}

fn scatter_column(grid: &mut [f64], size: usize, col: usize, buf: &[f64]) {
    for (row, value) in buf.iter().enumerate() {
        grid[row * size + col] = *value;
    }
}
