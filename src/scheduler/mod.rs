//! Scheduling policies and KPI evaluation.
//!
//! Provides the simulation engine — FCFS, non-preemptive SJF, and Round
//! Robin — plus aggregate quality metrics per run.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::models::Process;
//! use cpu_schedule::scheduler::{Policy, Scheduler};
//!
//! let scheduler = Scheduler::new(&[
//!     Process::new(1, 0, 5),
//!     Process::new(2, 1, 3),
//! ]);
//! let result = scheduler.run(Policy::RoundRobin { quantum: 2 });
//! assert_eq!(result.makespan(), 8);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod round_robin;
mod sjf;

pub use kpi::SimulationKpi;

use std::fmt;

use crate::models::{Process, SimulationResult};

/// A scheduling policy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Round Robin with the given time quantum (> 0).
    RoundRobin {
        /// Maximum contiguous slice granted before preemption.
        quantum: i64,
    },
}

impl Policy {
    /// Policy name for display (e.g., "FCFS").
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::RoundRobin { .. } => "RR",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::RoundRobin { quantum } => write!(f, "RR(q={quantum})"),
            other => f.write_str(other.name()),
        }
    }
}

/// The simulation engine.
///
/// Owns a safe copy of the input process set; every run method builds
/// its own fresh working copy, so runs are independent of each other and
/// of the caller's data, and repeating a run yields identical results.
///
/// Input preconditions (unique ids, arrival ≥ 0, burst > 0, quantum > 0)
/// are the caller's responsibility — see [`crate::validation`].
#[derive(Debug, Clone)]
pub struct Scheduler {
    processes: Vec<Process>,
}

impl Scheduler {
    /// Creates a scheduler over its own copy of the given processes.
    pub fn new(processes: &[Process]) -> Self {
        Self {
            processes: processes.iter().map(Process::fresh_clone).collect(),
        }
    }

    /// Runs the given policy.
    pub fn run(&self, policy: Policy) -> SimulationResult {
        match policy {
            Policy::Fcfs => self.run_fcfs(),
            Policy::Sjf => self.run_sjf(),
            Policy::RoundRobin { quantum } => self.run_round_robin(quantum),
        }
    }

    /// Runs First-Come-First-Served.
    pub fn run_fcfs(&self) -> SimulationResult {
        fcfs::run(self.working_set())
    }

    /// Runs non-preemptive Shortest-Job-First.
    pub fn run_sjf(&self) -> SimulationResult {
        sjf::run(self.working_set())
    }

    /// Runs Round Robin with the given quantum.
    ///
    /// # Panics
    /// If `quantum` is not positive (contract violation; validate first).
    pub fn run_round_robin(&self, quantum: i64) -> SimulationResult {
        round_robin::run(self.working_set(), quantum)
    }

    /// Fresh working copy for one run.
    fn working_set(&self) -> Vec<Process> {
        self.processes.iter().map(Process::fresh_clone).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Occupant;

    fn default_set() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
            Process::new(4, 3, 6),
        ]
    }

    fn assert_timeline_contiguous(result: &SimulationResult) {
        let blocks = result.timeline.blocks();
        if let Some(first) = blocks.first() {
            assert_eq!(first.start, 0);
        }
        for pair in blocks.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    fn assert_metrics_consistent(result: &SimulationResult) {
        for p in &result.processes {
            let completion = p.completion_time.unwrap();
            let turnaround = p.turnaround_time.unwrap();
            let waiting = p.waiting_time.unwrap();
            assert_eq!(turnaround, completion - p.arrival_time);
            assert_eq!(waiting, turnaround - p.burst_time);
            assert!(turnaround >= p.burst_time);
            assert!(waiting >= 0);

            // Execution blocks cover the burst exactly
            let executed: i64 = result
                .timeline
                .blocks_for(p.id)
                .iter()
                .map(|b| b.duration())
                .sum();
            assert_eq!(executed, p.burst_time);
        }
    }

    fn all_policies() -> Vec<Policy> {
        vec![
            Policy::Fcfs,
            Policy::Sjf,
            Policy::RoundRobin { quantum: 2 },
        ]
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(Policy::Fcfs.name(), "FCFS");
        assert_eq!(Policy::Sjf.to_string(), "SJF");
        assert_eq!(Policy::RoundRobin { quantum: 3 }.to_string(), "RR(q=3)");
    }

    #[test]
    fn test_all_policies_satisfy_invariants() {
        let scheduler = Scheduler::new(&default_set());
        for policy in all_policies() {
            let result = scheduler.run(policy);
            assert_eq!(result.process_count(), 4);
            assert_timeline_contiguous(&result);
            assert_metrics_consistent(&result);
        }
    }

    #[test]
    fn test_nonpreemptive_policies_single_block() {
        let scheduler = Scheduler::new(&default_set());
        for policy in [Policy::Fcfs, Policy::Sjf] {
            let result = scheduler.run(policy);
            for p in &result.processes {
                assert_eq!(result.timeline.blocks_for(p.id).len(), 1);
            }
        }
    }

    #[test]
    fn test_runs_are_deterministic() {
        let scheduler = Scheduler::new(&default_set());
        for policy in all_policies() {
            assert_eq!(scheduler.run(policy), scheduler.run(policy));
        }
    }

    #[test]
    fn test_runs_do_not_interfere() {
        // A destructive RR run must not change what FCFS sees afterwards.
        let scheduler = Scheduler::new(&default_set());
        let before = scheduler.run_fcfs();
        let _ = scheduler.run_round_robin(2);
        let _ = scheduler.run_sjf();
        let after = scheduler.run_fcfs();
        assert_eq!(before, after);
    }

    #[test]
    fn test_scheduler_copies_input() {
        let mut input = default_set();
        let scheduler = Scheduler::new(&input);
        input[0].burst_time = 999;
        let result = scheduler.run_fcfs();
        assert_eq!(result.process(1).unwrap().burst_time, 5);
    }

    #[test]
    fn test_single_process_boundary() {
        // Single process arriving at 0: zero wait, one block, no idle,
        // under every policy.
        let scheduler = Scheduler::new(&[Process::new(1, 0, 7)]);
        for policy in all_policies() {
            let result = scheduler.run(policy);
            let p = result.process(1).unwrap();
            assert_eq!(p.waiting_time, Some(0));
            assert_eq!(p.completion_time, Some(7));
            assert_eq!(result.timeline.len(), 1);
            assert_eq!(result.timeline.idle_time(), 0);
        }
    }

    #[test]
    fn test_late_arrival_boundary() {
        // Single process arriving at 5: every policy leads with an idle
        // block [0, 5).
        let scheduler = Scheduler::new(&[Process::new(1, 5, 3)]);
        for policy in all_policies() {
            let result = scheduler.run(policy);
            let first = result.timeline.blocks()[0];
            assert_eq!(first.occupant, Occupant::Idle);
            assert_eq!((first.start, first.end), (0, 5));
        }
    }
}
