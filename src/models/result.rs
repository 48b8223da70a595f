//! Simulation result model.
//!
//! The value returned by one policy run: the final process list with
//! output metrics populated, plus the run's execution timeline.

use serde::{Deserialize, Serialize};

use super::{Process, Timeline};

/// The outcome of running one scheduling policy over a process set.
///
/// Owned by the caller; the engine keeps no reference to it after the
/// run returns. Processes are ordered by id ascending for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Final process states, output metrics populated, sorted by id.
    pub processes: Vec<Process>,
    /// CPU occupancy over the whole run.
    pub timeline: Timeline,
}

impl SimulationResult {
    /// Bundles a finished run, sorting processes by id for display.
    pub fn new(mut processes: Vec<Process>, timeline: Timeline) -> Self {
        processes.sort_by_key(|p| p.id);
        Self {
            processes,
            timeline,
        }
    }

    /// Looks up a process by id.
    pub fn process(&self, id: u32) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Total simulated time (end of the last timeline block).
    pub fn makespan(&self) -> i64 {
        self.timeline.total_time()
    }

    /// Number of processes in the result.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }
}
