//! Regression test parameters and comparisons

use rasterlab_core::Raster;

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, a running
/// comparison index, and the recorded failures. Individual comparisons
/// return `bool` so a test can branch, but the intended pattern is to
/// run every comparison and assert on [`RegParams::cleanup`] at the end.
pub struct RegParams {
    /// Name of the test (e.g., "compress")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters.
    pub fn new(test_name: &str) -> Self {
        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index.
    pub fn index(&self) -> usize {
        self.index
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{msg}");
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values.
    ///
    /// Returns `true` if `actual` is within `delta` of `expected`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        if diff > delta {
            self.record_failure(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {diff} but allowed delta = {delta}\n\
                 expected = {expected}, actual = {actual}",
                self.test_name, self.index
            ));
            false
        } else {
            true
        }
    }

    /// Compare two rasters for exact equality.
    pub fn compare_rasters(&mut self, expected: &Raster, actual: &Raster) -> bool {
        self.compare_rasters_within(expected, actual, 0)
    }

    /// Compare two rasters, allowing a per-channel difference up to
    /// `delta`.
    pub fn compare_rasters_within(
        &mut self,
        expected: &Raster,
        actual: &Raster,
        delta: u32,
    ) -> bool {
        self.index += 1;

        if !expected.sizes_equal(actual) {
            self.record_failure(format!(
                "Failure in {}_reg: raster comparison for index {} - dimension mismatch",
                self.test_name, self.index
            ));
            return false;
        }

        for row in 0..expected.height() {
            for col in 0..expected.width() {
                let pe = expected.get_pixel_unchecked(row, col);
                let pa = actual.get_pixel_unchecked(row, col);
                let diff = [
                    (pe.red() as i32 - pa.red() as i32).unsigned_abs(),
                    (pe.green() as i32 - pa.green() as i32).unsigned_abs(),
                    (pe.blue() as i32 - pa.blue() as i32).unsigned_abs(),
                ]
                .into_iter()
                .max()
                .unwrap_or(0);
                if diff > delta {
                    self.record_failure(format!(
                        "Failure in {}_reg: raster comparison for index {} - \
                         mismatch at ({row}, {col}): expected {pe:?}, got {pa:?}",
                        self.test_name, self.index
                    ));
                    return false;
                }
            }
        }

        true
    }

    /// Check if all comparisons have passed so far.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the list of failures.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Report results.
    ///
    /// Returns `true` if every comparison passed, `false` otherwise.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {failure}");
            }
        }
        self.success
    }
}
