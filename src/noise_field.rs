//! 2-D coherent noise sampling for cloud density.
//!
//! Wraps open-simplex noise behind the two-octave sampling scheme the cloud
//! synthesizer uses: a coarse field (frequency divisor 100) and a fine field
//! (divisor 50), both shifted by a per-face spatial offset.

use noise::{NoiseFn, OpenSimplex};

/// Frequency divisor of the coarse cloud octave.
pub const COARSE_DIVISOR: f64 = 100.0;
/// Frequency divisor of the fine detail octave.
pub const FINE_DIVISOR: f64 = 50.0;

/// Seeded open-simplex sampler with a fixed per-face spatial offset.
pub struct NoiseField {
    simplex: OpenSimplex,
    offset_x: f64,
    offset_y: f64,
}

impl NoiseField {
    /// Creates a field from a noise seed and a per-face offset.
    pub fn new(seed: u32, offset_x: f64, offset_y: f64) -> Self {
        Self {
            simplex: OpenSimplex::new(seed),
            offset_x,
            offset_y,
        }
    }

    /// Samples the field at pixel (x, y) with the given frequency divisor.
    ///
    /// Pure function of the constructor inputs and arguments; returns a
    /// value in [-1, 1].
    pub fn sample(&self, x: u32, y: u32, divisor: f64) -> f64 {
        self.simplex.get([
            x as f64 / divisor + self.offset_x,
            y as f64 / divisor + self.offset_y,
        ])
    }
}
