//! Random Source
//!
//! The single randomness seam of the core. Everything the engine draws -
//! orbit, planet, moon, cost - derives from uniform reals in [0, 1), so a
//! substituted source makes an entire run deterministic.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// A source of uniform random reals in [0, 1).
pub trait RandomSource {
    /// Returns the next uniform value in [0, 1).
    fn next_uniform(&mut self) -> f64;

    /// Picks a uniform index into a collection of `len` elements.
    ///
    /// `len` must be greater than zero.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let idx = (self.next_uniform() * len as f64) as usize;
        // next_uniform() < 1.0 keeps idx < len; min guards float edge cases
        idx.min(len - 1)
    }

    /// Draws a uniform integer in [min, max] inclusive.
    ///
    /// `min` must not exceed `max`.
    fn roll_cost(&mut self, min: u32, max: u32) -> u32 {
        debug_assert!(min <= max);
        let span = f64::from(max - min + 1);
        min + (self.next_uniform() * span) as u32
    }
}

/// Random source backed by a [`SmallRng`], optionally seeded for
/// reproducible runs.
pub struct SeededSource(SmallRng);

impl SeededSource {
    /// Creates a source seeded for deterministic replay.
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    /// Creates a source seeded from system entropy.
    pub fn from_entropy() -> Self {
        Self(SmallRng::from_entropy())
    }
}

impl RandomSource for SeededSource {
    fn next_uniform(&mut self) -> f64 {
        self.0.gen()
    }
}

/// Random source that replays a fixed sequence of uniform values, cycling
/// back to the start when exhausted. Used to force exact paths and costs in
/// tests.
pub struct ScriptedSource {
    values: VecDeque<f64>,
}

impl ScriptedSource {
    /// Creates a source from a non-empty sequence of values in [0, 1).
    pub fn from_values(values: &[f64]) -> Self {
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Self {
            values: values.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values.pop_front().unwrap_or(0.0);
        self.values.push_back(value);
        value
    }
}
