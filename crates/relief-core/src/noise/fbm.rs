//! Fractional Brownian Motion over seeded Perlin noise.
//!
//! fBm: sum of octaves with amplitude = gain^i and frequency = lacunarity^i,
//! divided by the total amplitude so the result stays in [-1, 1] no matter
//! how many octaves are summed.

use noise::{NoiseFn, Perlin};

use super::NoiseSource;

/// Permutation seed used when the configuration does not pick one.
pub const DEFAULT_SEED: u32 = 42;

const LACUNARITY: f64 = 2.0;
const GAIN: f64 = 0.5;

pub struct Fbm {
    noise: Perlin,
}

impl Fbm {
    /// Construct an fBm source over a Perlin permutation table derived from
    /// `seed`. The same seed always builds the same table.
    pub fn new(seed: u32) -> Self {
        Self { noise: Perlin::new(seed) }
    }
}

impl NoiseSource for Fbm {
    fn sample(&self, x: f64, y: f64, octaves: u32) -> f64 {
        debug_assert!(octaves > 0, "octave count is validated at configuration time");
        let mut value = 0.0f64;
        let mut amp = 1.0f64;
        let mut freq = 1.0f64;
        let mut total_amp = 0.0f64;
        for _ in 0..octaves {
            value += amp * self.noise.get([x * freq, y * freq]);
            total_amp += amp;
            amp *= GAIN;
            freq *= LACUNARITY;
        }
        value / total_amp
    }
}
