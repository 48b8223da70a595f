//! Round Robin.
//!
//! # Algorithm
//!
//! A FIFO ready queue plus an arrival-sorted admission cursor. Per step:
//! 1. Admit every not-yet-admitted process whose arrival time ≤ cursor,
//!    in arrival order (input order breaks same-tick ties).
//! 2. Empty queue: idle up to the next arrival, or terminate if none
//!    remain.
//! 3. Otherwise dequeue the head and run it for
//!    `min(remaining, quantum)`. A preempted process re-enters at the
//!    tail *after* processes that arrived during its slice — arrivals at
//!    the preemption timestamp are admitted first. A finishing process is
//!    finalized at the new cursor, and same-timestamp arrivals are
//!    admitted before the next dispatch.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use crate::models::{Occupant, Process, SimulationResult, Timeline};

/// Runs Round Robin with the given quantum over a fresh working set.
///
/// `quantum` must be positive; the caller validates it before invoking
/// the engine and a violation here is a contract failure.
pub(super) fn run(mut processes: Vec<Process>, quantum: i64) -> SimulationResult {
    assert!(quantum > 0, "Round Robin quantum must be positive");

    let mut timeline = Timeline::new();
    let total = processes.len();

    // Admission view: indices sorted by arrival, input order on ties.
    let mut arrival_order: Vec<usize> = (0..total).collect();
    arrival_order.sort_by_key(|&i| processes[i].arrival_time);

    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut next_arrival = 0;
    let mut completed = 0;
    let mut now = 0;

    // Enqueues every process that has arrived by `now`, in arrival order.
    fn admit(
        ready: &mut VecDeque<usize>,
        arrival_order: &[usize],
        processes: &[Process],
        next_arrival: &mut usize,
        now: i64,
    ) {
        while *next_arrival < arrival_order.len()
            && processes[arrival_order[*next_arrival]].arrival_time <= now
        {
            ready.push_back(arrival_order[*next_arrival]);
            *next_arrival += 1;
        }
    }

    while completed < total {
        admit(&mut ready, &arrival_order, &processes, &mut next_arrival, now);

        let Some(idx) = ready.pop_front() else {
            if next_arrival < total {
                let upcoming = processes[arrival_order[next_arrival]].arrival_time;
                timeline.record_idle(now, upcoming);
                now = upcoming;
                continue;
            }
            break;
        };

        let p = &mut processes[idx];
        if p.remaining_time > quantum {
            timeline.record(Occupant::Process(p.id), now, now + quantum);
            now += quantum;
            p.remaining_time -= quantum;
            // Arrivals during the slice rejoin ahead of the preempted process.
            admit(&mut ready, &arrival_order, &processes, &mut next_arrival, now);
            ready.push_back(idx);
        } else {
            let slice = p.remaining_time;
            timeline.record(Occupant::Process(p.id), now, now + slice);
            now += slice;
            p.remaining_time = 0;
            p.finalize(now);
            completed += 1;
            admit(&mut ready, &arrival_order, &processes, &mut next_arrival, now);
        }
    }

    SimulationResult::new(processes, timeline)
}
