//! Simulated sensor readings.
//!
//! There is no real hardware anywhere in this system: the simulator is the
//! device. Each draw produces a timestamped temperature/humidity pair within
//! the ranges the original station reported.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use time::OffsetDateTime;

use meteo_types::Reading;

/// Lower bound of the simulated temperature range in °C.
pub const TEMPERATURE_MIN: f64 = -10.0;
/// Upper bound of the simulated temperature range in °C.
pub const TEMPERATURE_MAX: f64 = 40.0;
/// Lower bound of the simulated humidity range in percent (inclusive).
pub const HUMIDITY_MIN: u8 = 20;
/// Upper bound of the simulated humidity draw in percent (exclusive).
pub const HUMIDITY_MAX_EXCLUSIVE: u8 = 95;

/// Pseudo-random reading generator standing in for a weather sensor.
///
/// Seedable for deterministic tests; OS-seeded otherwise.
#[derive(Debug)]
pub struct ReadingSimulator {
    rng: StdRng,
}

impl ReadingSimulator {
    /// Create a simulator seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic simulator from a seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate one reading timestamped at `now`.
    ///
    /// Temperature is a uniform draw over [-10.0, 40.0] rounded to one
    /// decimal place. Humidity is a uniform integer draw over [20, 95);
    /// the upper bound is exclusive, so 94 is the largest value ever
    /// produced. The asymmetry against the inclusive temperature range is
    /// deliberate: it matches the hardware this simulator mimics.
    pub fn generate(&mut self, now: OffsetDateTime) -> Reading {
        let temperature = self.rng.random::<f64>() * 50.0 + TEMPERATURE_MIN;
        let humidity = self.rng.random_range(HUMIDITY_MIN..HUMIDITY_MAX_EXCLUSIVE);

        Reading {
            timestamp: now,
            temperature: round_to_tenth(temperature),
            humidity,
        }
    }
}

impl Default for ReadingSimulator {
    fn default() -> Self {
        Self::new()
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
