//! Deterministic RNG wrapper for the tour optimizer.
//!
//! The optimizer's local search is randomized; routing and planning results
//! are only reproducible when every random draw flows through a generator
//! the caller seeded.  `CourierRng` wraps a `SmallRng` so call sites never
//! touch `rand`'s trait soup directly, and tests pin a seed while the CLI
//! defaults to entropy.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seedable random source for tour optimization.
pub struct CourierRng(SmallRng);

impl CourierRng {
    /// Deterministic generator from a 64-bit seed.
    pub fn new(seed: u64) -> CourierRng {
        CourierRng(SmallRng::seed_from_u64(seed))
    }

    /// Non-deterministic generator for production runs.
    pub fn from_entropy() -> CourierRng {
        CourierRng(SmallRng::from_entropy())
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
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

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
