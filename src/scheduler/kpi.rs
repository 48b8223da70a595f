//! Simulation quality metrics (KPIs).
//!
//! Aggregates per-process outputs and the timeline of one policy run
//! into the usual scheduling performance indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | mean(turnaround − burst) |
//! | Avg Turnaround Time | mean(completion − arrival) |
//! | Makespan | End of the last timeline block |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | processes completed per tick |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use crate::models::SimulationResult;

/// Aggregate performance indicators for one policy run.
#[derive(Debug, Clone)]
pub struct SimulationKpi {
    /// Mean waiting time across all finalized processes.
    pub avg_waiting_time: f64,
    /// Mean turnaround time across all finalized processes.
    pub avg_turnaround_time: f64,
    /// Total simulated time.
    pub makespan: i64,
    /// Fraction of the makespan spent executing (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick of simulated time.
    pub throughput: f64,
}

impl SimulationKpi {
    /// Computes KPIs from a finished run.
    ///
    /// Empty results yield all-zero metrics.
    pub fn calculate(result: &SimulationResult) -> Self {
        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut counted: usize = 0;

        for p in &result.processes {
            if let (Some(waiting), Some(turnaround)) = (p.waiting_time, p.turnaround_time) {
                total_waiting += waiting;
                total_turnaround += turnaround;
                counted += 1;
            }
        }

        let makespan = result.makespan();
        let (avg_waiting_time, avg_turnaround_time) = if counted == 0 {
            (0.0, 0.0)
        } else {
            (
                total_waiting as f64 / counted as f64,
                total_turnaround as f64 / counted as f64,
            )
        };

        let (cpu_utilization, throughput) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                result.timeline.busy_time() as f64 / makespan as f64,
                counted as f64 / makespan as f64,
            )
        };

        Self {
            avg_waiting_time,
            avg_turnaround_time,
            makespan,
            cpu_utilization,
            throughput,
        }
    }
}
