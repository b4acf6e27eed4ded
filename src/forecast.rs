//! Weather value generators
//!
//! Each query kind maps to a pseudo-random value uniform over a fixed
//! inclusive range. The generator state lives in one explicitly-constructed
//! [`Forecaster`] seeded exactly once, so tests can substitute a fixed seed
//! instead of fighting process-global RNG state. No cryptographic quality
//! implied.

use std::ops::RangeInclusive;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::protocol::QueryKind;

/// Temperature range, degrees Celsius.
pub const TEMPERATURE_RANGE: RangeInclusive<f32> = -10.0..=40.0;

/// Relative humidity range, percent.
pub const HUMIDITY_RANGE: RangeInclusive<f32> = 20.0..=100.0;

/// Wind speed range, km/h.
pub const WIND_RANGE: RangeInclusive<f32> = 0.0..=100.0;

/// Atmospheric pressure range, hPa.
pub const PRESSURE_RANGE: RangeInclusive<f32> = 950.0..=1050.0;

/// Source of the generated weather values.
///
/// Holds its RNG behind a mutex so the service can draw samples through
/// `&self`; draws are independent and the generator is never reseeded.
pub struct Forecaster {
    rng: Mutex<StdRng>,
}

impl Forecaster {
    /// A forecaster seeded once from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// A deterministic forecaster for tests and reproducible demos.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Draw the value for a query kind.
    pub fn sample(&self, kind: QueryKind) -> f32 {
        match kind {
            QueryKind::Temperature => self.temperature(),
            QueryKind::Humidity => self.humidity(),
            QueryKind::Wind => self.wind(),
            QueryKind::Pressure => self.pressure(),
        }
    }

    /// Temperature in [`TEMPERATURE_RANGE`].
    pub fn temperature(&self) -> f32 {
        self.rng.lock().gen_range(TEMPERATURE_RANGE)
    }

    /// Humidity in [`HUMIDITY_RANGE`].
    pub fn humidity(&self) -> f32 {
        self.rng.lock().gen_range(HUMIDITY_RANGE)
    }

    /// Wind speed in [`WIND_RANGE`].
    pub fn wind(&self) -> f32 {
        self.rng.lock().gen_range(WIND_RANGE)
    }

    /// Pressure in [`PRESSURE_RANGE`].
    pub fn pressure(&self) -> f32 {
        self.rng.lock().gen_range(PRESSURE_RANGE)
    }
}

impl Default for Forecaster {
    fn default() -> Self {
        Self::new()
    }
}
