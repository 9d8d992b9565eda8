//! Critical-section workloads. Each function assumes the caller already holds the
//! appropriate lock over the [`SharedState`]; none of them lock anything themselves.

use crate::shared_state::{SharedState, KEYS};
use std::fmt::{Display, Formatter};
use std::hint::black_box;

/// Number of `sin` evaluations performed by [`heavy_read`].
pub const HEAVY_READ_SAMPLES: u32 = 50;

/// The key looked up by [`light_read`].
pub const LIGHT_READ_KEY: u32 = 500;

/// The key mutated by [`write`].
pub const WRITE_KEY: u32 = 0;

/// The amount added to [`WRITE_KEY`] by each [`write`].
pub const WRITE_INCREMENT: f64 = 1.1;

/// The cost of a reader's critical section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadProfile {
    /// Compute-bound: [`HEAVY_READ_SAMPLES`] trigonometric evaluations.
    Heavy,

    /// A single lookup. The critical section is dominated by the lock itself.
    Light,
}

impl ReadProfile {
    pub const VARIANTS: [ReadProfile; 2] = [ReadProfile::Heavy, ReadProfile::Light];

    #[inline(always)]
    pub fn read(self, state: &SharedState) -> f64 {
        match self {
            ReadProfile::Heavy => heavy_read(state),
            ReadProfile::Light => light_read(state),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ReadProfile::Heavy => "heavy_read",
            ReadProfile::Light => "light_read",
        }
    }
}

impl Display for ReadProfile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sums the sines of the values at keys `0, 1, ..., HEAVY_READ_SAMPLES - 1`, cycling
/// through the key space.
#[inline]
pub fn heavy_read(state: &SharedState) -> f64 {
    let mut total = 0.0;
    for i in 0..HEAVY_READ_SAMPLES {
        total += state.value(i % KEYS).sin();
    }
    black_box(total)
}

#[inline]
pub fn light_read(state: &SharedState) -> f64 {
    black_box(state.value(LIGHT_READ_KEY))
}

/// Adds [`WRITE_INCREMENT`] to the value at [`WRITE_KEY`], returning the new value.
#[inline]
pub fn write(state: &mut SharedState) -> f64 {
    let value = state.value_mut(WRITE_KEY);
    *value += WRITE_INCREMENT;
    black_box(*value)
}
