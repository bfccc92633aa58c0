//! Deterministic random number generation.
//!
//! Wraps PCG (Permuted Congruential Generator) so that every batch drawn
//! from a given master seed is bitwise-identical across runs and
//! platforms.

use rand::prelude::*;
use rand_pcg::Pcg64;

/// Deterministic, reproducible random number generator.
///
/// Based on PCG which provides:
/// - Excellent statistical properties
/// - Fast generation
/// - Predictable sequences from seed
#[derive(Debug, Clone)]
pub struct SimRng {
    /// Master seed for reproducibility.
    master_seed: u64,
    /// Number of values drawn since seeding.
    draws: u64,
    /// Internal PCG state.
    rng: Pcg64,
}

impl SimRng {
    /// Create a new RNG with the given master seed.
    #[must_use]
    pub fn new(master_seed: u64) -> Self {
        Self {
            master_seed,
            draws: 0,
            rng: Pcg64::seed_from_u64(master_seed),
        }
    }

    /// Create an RNG seeded from operating-system entropy.
    ///
    /// The chosen seed is still recorded so a run can be replayed with
    /// [`SimRng::new`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Get the master seed.
    #[must_use]
    pub const fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Number of values drawn since seeding.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }

    /// Generate a random f64 in [0, 1).
    pub fn gen_f64(&mut self) -> f64 {
        self.draws += 1;
        self.rng.gen()
    }

    /// Generate an integer uniformly from the inclusive range `[min, max]`.
    ///
    /// Both endpoints are reachable.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn gen_range_i64_inclusive(&mut self, min: i64, max: i64) -> i64 {
        assert!(min <= max, "Invalid range: min > max");
        self.draws += 1;
        self.rng.gen_range(min..=max)
    }

    /// Generate a random u64.
    pub fn gen_u64(&mut self) -> u64 {
        self.draws += 1;
        self.rng.gen()
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self::new(42)
    }
}
