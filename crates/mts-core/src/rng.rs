//! Deterministic manifest generation.
//!
//! `ManifestRng` wraps a `SmallRng` seeded from a single `u64`, so the same
//! seed always produces the same manifest.  Only the `generate` subcommand
//! and tests use it; the dispatcher itself never draws random numbers.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Direction, Priority, TrainSpec};

pub struct ManifestRng(SmallRng);

impl ManifestRng {
    pub fn new(seed: u64) -> Self {
        ManifestRng(SmallRng::seed_from_u64(seed))
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

    /// Draw one train with uniform direction and priority and durations in
    /// `1..=max_loading` / `1..=max_crossing` (maxima below 1 act as 1).
    pub fn train_spec(&mut self, max_loading: u32, max_crossing: u32) -> TrainSpec {
        let direction = if self.0.gen_bool(0.5) { Direction::East } else { Direction::West };
        let priority = if self.0.gen_bool(0.5) { Priority::High } else { Priority::Low };
        TrainSpec {
            direction,
            priority,
            loading_units:  self.gen_range(1..=max_loading.max(1)),
            crossing_units: self.gen_range(1..=max_crossing.max(1)),
        }
    }

    /// Draw `count` trains.
    pub fn manifest(&mut self, count: usize, max_loading: u32, max_crossing: u32) -> Vec<TrainSpec> {
        (0..count).map(|_| self.train_spec(max_loading, max_crossing)).collect()
    }
}
