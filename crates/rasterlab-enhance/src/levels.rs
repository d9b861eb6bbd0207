//! Levels adjustment through a quadratic tone curve
//!
//! Remaps pixel intensities through a curve anchored at three control
//! points: `black` maps to 0, `mid` to 128, and `white` to 255. The
//! curve is the quadratic `y = a*x^2 + b*x + c` interpolating the three
//! anchors, solved once per call and materialized as a 256-entry lookup
//! table that is shared by every channel of every pixel.

use crate::error::{EnhanceError, EnhanceResult};
use rasterlab_core::{Pixel, Raster, quantize_channel};

/// A 256-entry lookup table mapping input channel values to output
/// channel values.
pub type TrcLut = [u8; 256];

/// Output anchor for the mid control point.
const MID_TARGET: f64 = 128.0;
/// Output anchor for the white control point.
const WHITE_TARGET: f64 = 255.0;
/// Determinants with magnitude below this are treated as singular.
const SINGULAR_EPS: f64 = 1e-9;

/// Coefficients of the quadratic fitted through `(black, 0)`,
/// `(mid, 128)`, `(white, 255)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelsCurve {
    a: f64,
    b: f64,
    c: f64,
}

impl LevelsCurve {
    /// Fit the quadratic through the three control points.
    ///
    /// # Errors
    ///
    /// - [`EnhanceError::InvalidLevels`] unless
    ///   `0 <= black < mid < white <= 255`.
    /// - [`EnhanceError::SingularLevels`] if the interpolation system is
    ///   numerically singular. The ordering check makes the control
    ///   points distinct, so this indicates a degenerate configuration
    ///   rather than a normal input.
    pub fn fit(black: i32, mid: i32, white: i32) -> EnhanceResult<Self> {
        let valid_range = 0..=255;
        if !valid_range.contains(&black)
            || !valid_range.contains(&mid)
            || !valid_range.contains(&white)
            || !(black < mid && mid < white)
        {
            return Err(EnhanceError::InvalidLevels { black, mid, white });
        }

        let (xb, xm, xw) = (black as f64, mid as f64, white as f64);
        let det = det3([
            [xb * xb, xb, 1.0],
            [xm * xm, xm, 1.0],
            [xw * xw, xw, 1.0],
        ]);
        if det.abs() < SINGULAR_EPS {
            return Err(EnhanceError::SingularLevels { black, mid, white });
        }

        let a = det3([
            [0.0, xb, 1.0],
            [MID_TARGET, xm, 1.0],
            [WHITE_TARGET, xw, 1.0],
        ]) / det;
        let b = det3([
            [xb * xb, 0.0, 1.0],
            [xm * xm, MID_TARGET, 1.0],
            [xw * xw, WHITE_TARGET, 1.0],
        ]) / det;
        let c = det3([
            [xb * xb, xb, 0.0],
            [xm * xm, xm, MID_TARGET],
            [xw * xw, xw, WHITE_TARGET],
        ]) / det;

        Ok(LevelsCurve { a, b, c })
    }

    /// The fitted `(a, b, c)` coefficients.
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Evaluate the curve at a channel value, without quantization.
    pub fn eval(&self, value: u8) -> f64 {
        let x = value as f64;
        self.a * x * x + self.b * x + self.c
    }

    /// Materialize the curve as a quantized lookup table.
    pub fn lut(&self) -> TrcLut {
        let mut lut = [0u8; 256];
        for (value, entry) in lut.iter_mut().enumerate() {
            *entry = quantize_channel(self.eval(value as u8));
        }
        lut
    }
}

/// Determinant of a 3x3 matrix.
fn det3(m: [[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Remap every channel of every pixel through a lookup table.
pub(crate) fn map_with_lut(raster: &Raster, lut: &TrcLut) -> Raster {
    let mut out = raster.create_template();
    for row in 0..raster.height() {
        for col in 0..raster.width() {
            let p = raster.get_pixel_unchecked(row, col);
            out.set_pixel_unchecked(
                row,
                col,
                Pixel::new(
                    lut[p.red() as usize],
                    lut[p.green() as usize],
                    lut[p.blue() as usize],
                ),
            );
        }
    }
    out.into()
}

/// Adjust the levels of a raster.
///
/// Fits a quadratic through `(black, 0)`, `(mid, 128)`, `(white, 255)`
/// and remaps every channel of every pixel through it, quantizing into
/// [0, 255]. The input raster is unmodified.
///
/// # Errors
///
/// See [`LevelsCurve::fit`]. Validation runs on every invocation,
/// before any output pixel is produced.
pub fn adjust_levels(
    raster: &Raster,
    black: i32,
    mid: i32,
    white: i32,
) -> EnhanceResult<Raster> {
    let curve = LevelsCurve::fit(black, mid, white)?;
    Ok(map_with_lut(raster, &curve.lut()))
}
