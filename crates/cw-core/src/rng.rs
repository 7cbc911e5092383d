//! The engine-owned random stream.
//!
//! # Continuation across runs
//!
//! A `SimRng` is created once per engine and advanced by every run.  A sweep
//! of runs at 30, 60, 120, … minutes therefore keeps drawing from one stream
//! instead of reseeding for each duration.  Two engines built from the same
//! seed and given the same sequence of durations produce identical results.
//!
//! The type is handed to arrival models as `&mut SimRng`; it is never global.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts.  A parallel extension would give
/// each worker its own `SimRng` seeded independently.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Deterministic stream from a fixed seed.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Stream seeded from operating-system entropy.  Output differs between
    /// processes.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
