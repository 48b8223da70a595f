//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Sort the working set by arrival time (stable: input order breaks ties).
//! 2. Walk the sorted processes with a time cursor from 0.
//! 3. Record an idle block over any gap before the next arrival, then run
//!    the process to completion in a single block.
//!
//! Non-preemptive: once dispatched, a process runs uninterrupted.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use crate::models::{Occupant, Process, SimulationResult, Timeline};

/// Runs FCFS over a fresh working set.
pub(super) fn run(mut processes: Vec<Process>) -> SimulationResult {
    let mut timeline = Timeline::new();

    // Stable sort: same-arrival processes keep their input order.
    processes.sort_by_key(|p| p.arrival_time);

    let mut now = 0;
    for p in &mut processes {
        if now < p.arrival_time {
            timeline.record_idle(now, p.arrival_time);
            now = p.arrival_time;
        }

        let completion = now + p.burst_time;
        timeline.record(Occupant::Process(p.id), now, completion);
        p.remaining_time = 0;
        p.finalize(completion);
        now = completion;
    }

    SimulationResult::new(processes, timeline)
}
