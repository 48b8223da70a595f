//! Random workload generation.
//!
//! Builds synthetic process sets for demos, benchmarks, and stress
//! tests: ids are sequential, arrivals and bursts are drawn uniformly
//! from configurable ranges. Pass a seeded RNG for reproducible sets.

use rand::Rng;

use crate::models::Process;

/// A random workload description.
///
/// # Example
///
/// ```
/// use cpu_schedule::workload::Workload;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let processes = Workload::new(10)
///     .with_arrival_span(20)
///     .with_burst_range(1, 8)
///     .generate(&mut rng);
/// assert_eq!(processes.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Workload {
    count: usize,
    arrival_span: i64,
    min_burst: i64,
    max_burst: i64,
}

impl Workload {
    /// Describes a workload of `count` processes with default ranges:
    /// arrivals in `[0, 10]`, bursts in `[1, 10]`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival_span: 10,
            min_burst: 1,
            max_burst: 10,
        }
    }

    /// Sets the arrival window: arrivals are drawn from `[0, span]`.
    pub fn with_arrival_span(mut self, span: i64) -> Self {
        self.arrival_span = span.max(0);
        self
    }

    /// Sets the burst range (inclusive). Bounds are clamped to ≥ 1 so
    /// generated processes always satisfy the engine's precondition.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.min_burst = min.max(1);
        self.max_burst = max.max(self.min_burst);
        self
    }

    /// Draws a process set, ids numbered from 1 in generation order.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Process> {
        (1..=self.count)
            .map(|id| {
                Process::new(
                    id as u32,
                    rng.random_range(0..=self.arrival_span),
                    rng.random_range(self.min_burst..=self.max_burst),
                )
            })
            .collect()
    }
}
