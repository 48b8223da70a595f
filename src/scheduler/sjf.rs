//! Shortest-Job-First, non-preemptive.
//!
//! # Algorithm
//!
//! Repeat until every process has completed:
//! 1. Collect the ready set: arrived, not yet completed, scanned in
//!    original input order.
//! 2. If nothing is ready, record an idle block up to the earliest
//!    arrival among the unfinished and fast-forward the cursor.
//! 3. Otherwise dispatch the ready process with the smallest burst time
//!    (strict comparison: the first one encountered wins ties) and run it
//!    to completion.
//!
//! The ready set is rebuilt after every dispatch, so the next choice
//! always considers all currently-ready jobs — but a running process is
//! never interrupted, even if a shorter job arrives mid-burst.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use crate::models::{Occupant, Process, SimulationResult, Timeline};

/// Runs non-preemptive SJF over a fresh working set.
pub(super) fn run(mut processes: Vec<Process>) -> SimulationResult {
    let mut timeline = Timeline::new();
    let total = processes.len();
    let mut completed = 0;
    let mut now = 0;

    while completed < total {
        // Input-order scan keeps the tie-break deterministic.
        let shortest = processes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.arrival_time <= now && !p.completed)
            .min_by_key(|(_, p)| p.burst_time)
            .map(|(idx, _)| idx);

        match shortest {
            None => {
                let next_arrival = processes
                    .iter()
                    .filter(|p| !p.completed)
                    .map(|p| p.arrival_time)
                    .min()
                    .expect("unfinished process exists while completed < total");
                timeline.record_idle(now, next_arrival);
                now = next_arrival;
            }
            Some(idx) => {
                let p = &mut processes[idx];
                let completion = now + p.burst_time;
                timeline.record(Occupant::Process(p.id), now, completion);
                p.remaining_time = 0;
                p.finalize(completion);
                completed += 1;
                now = completion;
            }
        }
    }

    SimulationResult::new(processes, timeline)
}
