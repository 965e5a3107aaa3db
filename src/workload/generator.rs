//! Synthetic workload generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::source::{ProcessSource, SourceError};
use crate::models::ProcessSpec;

/// Parameters for a random process set.
///
/// IDs run from `"1"` to `count`. Arrival and burst times are drawn uniformly
/// from the inclusive ranges. Generated sets are sorted by arrival time
/// (ties by ID) so they are also valid FCFS input.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::workload::RandomWorkload;
///
/// let specs = RandomWorkload::new(5).with_seed(7).specs();
/// assert_eq!(specs.len(), 5);
/// assert!(specs.iter().all(|s| s.burst_time >= 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomWorkload {
    /// Number of processes.
    pub count: usize,
    /// Inclusive arrival time range.
    pub arrival_range: (i64, i64),
    /// Inclusive burst time range. The lower bound is clamped to 1.
    pub burst_range: (i64, i64),
    /// Seed used by [`ProcessSource::load`] and [`RandomWorkload::specs`].
    pub seed: u64,
}

impl RandomWorkload {
    /// Creates a workload of `count` processes with default ranges
    /// (arrivals 0..=10, bursts 1..=8, seed 0).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival_range: (0, 10),
            burst_range: (1, 8),
            seed: 0,
        }
    }

    /// Sets the arrival time range.
    pub fn with_arrivals(mut self, min: i64, max: i64) -> Self {
        self.arrival_range = (min, max);
        self
    }

    /// Sets the burst time range.
    pub fn with_bursts(mut self, min: i64, max: i64) -> Self {
        self.burst_range = (min, max);
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates specs from the configured seed.
    pub fn specs(&self) -> Vec<ProcessSpec> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.generate(&mut rng)
    }

    /// Generates specs from a caller-supplied RNG.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessSpec> {
        let (a_lo, a_hi) = ordered(self.arrival_range.0.max(0), self.arrival_range.1.max(0));
        let (b_lo, b_hi) = ordered(self.burst_range.0.max(1), self.burst_range.1.max(1));

        let mut specs: Vec<ProcessSpec> = (1..=self.count)
            .map(|i| ProcessSpec {
                id: i.to_string(),
                arrival_time: rng.random_range(a_lo..=a_hi),
                burst_time: rng.random_range(b_lo..=b_hi),
            })
            .collect();
        specs.sort_by_key(|s| s.arrival_time);
        specs
    }
}

impl ProcessSource for RandomWorkload {
    fn load(&mut self) -> Result<Vec<ProcessSpec>, SourceError> {
        Ok(self.specs())
    }
}

fn ordered(a: i64, b: i64) -> (i64, i64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
