//! Injectable randomness.
//!
//! Rating synthesis and template selection draw from a [`RandomSource`] so tests
//! can replay fixed values instead of the thread RNG.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// A source of uniform values in `[0, 1)`.
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f64;

    /// Uniform index into a collection of `len` items. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        let index = (self.next_unit() * len as f64).floor() as usize;
        index.min(len.saturating_sub(1))
    }
}

/// Production source backed by a `StdRng` seeded from the OS.
#[derive(Debug)]
pub struct SystemRandom {
    rng: StdRng,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Synthesized rating: uniform in `[3.5, 5.0]`, rounded to one decimal.
pub fn synthesize_rating(source: &mut dyn RandomSource) -> f64 {
    ((3.5 + source.next_unit() * 1.5) * 10.0).round() / 10.0
}

/// Synthesized review count: uniform integer in `[50, 549]`.
pub fn synthesize_reviews(source: &mut dyn RandomSource) -> i32 {
    (50.0 + source.next_unit() * 500.0).floor() as i32
}

/// Replays a fixed sequence of values, cycling when exhausted.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    position: usize,
}

#[cfg(test)]
impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty());
        Self {
            values,
            position: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}
