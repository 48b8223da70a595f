//! Process model.
//!
//! A process is the unit of work dispatched by the simulator: it arrives
//! at a fixed time, requires a fixed amount of CPU time, and accumulates
//! timing metrics as it runs.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 3.1

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Fields fall into three groups: identity (fixed at creation), simulation
/// state (mutated by a policy run), and output metrics (populated once by
/// [`finalize`](Process::finalize) when the process finishes).
///
/// # Time Representation
/// All times are integer ticks on a simulated clock starting at t=0.
/// The consumer defines the tick length (e.g., 1 ms of CPU time).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: u32,
    /// Time at which the process becomes ready (≥ 0).
    pub arrival_time: i64,
    /// Total CPU time required (> 0).
    pub burst_time: i64,
    /// CPU time left to execute. Starts at `burst_time`.
    pub remaining_time: i64,
    /// Whether the process has finished all required execution.
    pub completed: bool,
    /// Time at which the process finished. `None` until finalized.
    pub completion_time: Option<i64>,
    /// Completion − arrival. `None` until finalized.
    pub turnaround_time: Option<i64>,
    /// Turnaround − burst. `None` until finalized.
    pub waiting_time: Option<i64>,
}

impl Process {
    /// Creates a new process with the given identity.
    pub fn new(id: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            completed: false,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
        }
    }

    /// Returns a fresh-state clone: identity copied, simulation state
    /// reset, output metrics cleared.
    ///
    /// Each policy run works on fresh clones so state mutated by one
    /// run never leaks into another.
    pub fn fresh_clone(&self) -> Self {
        Self::new(self.id, self.arrival_time, self.burst_time)
    }

    /// Records completion at the given time and derives the output metrics:
    /// turnaround = completion − arrival, waiting = turnaround − burst.
    ///
    /// Called exactly once per process per run, at the moment the process
    /// finishes its last execution slice.
    pub fn finalize(&mut self, completion: i64) {
        debug_assert!(!self.completed, "process P{} finalized twice", self.id);
        let turnaround = completion - self.arrival_time;
        self.completion_time = Some(completion);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
        self.completed = true;
    }
}
