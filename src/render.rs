//! Text rendering of simulation results.
//!
//! Presentation helpers over the engine's output: a proportionally
//! scaled Gantt bar per timeline and a per-process comparison table
//! across the three policies with their averages.
//!
//! The engine emits stable occupant identifiers (`P{id}`, `IDLE`);
//! everything visual — scaling, labels, the idle texture — lives here.

use crate::models::{Occupant, SimulationResult, Timeline};
use crate::scheduler::SimulationKpi;

/// Renders a timeline as a proportionally scaled text bar.
///
/// Block width is proportional to block duration relative to total
/// simulated time, scaled cumulatively so rounding never drifts. Blocks
/// that round to zero width are dropped. Idle blocks render as a dotted
/// texture; execution blocks carry their process label when it fits.
/// A ruler line beneath marks the block boundary times.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::render::GanttRenderer;
/// use cpu_schedule::scheduler::Scheduler;
///
/// let result = Scheduler::new(&[Process::new(1, 0, 5)]).run_fcfs();
/// let bar = GanttRenderer::new().with_width(20).render(&result.timeline);
/// assert!(bar.contains("P1"));
/// ```
#[derive(Debug, Clone)]
pub struct GanttRenderer {
    width: usize,
}

impl GanttRenderer {
    /// Creates a renderer with the default bar width (60 columns).
    pub fn new() -> Self {
        Self { width: 60 }
    }

    /// Sets the bar width in columns.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// Renders the timeline. Empty timelines render as an empty string.
    pub fn render(&self, timeline: &Timeline) -> String {
        if timeline.is_empty() {
            return String::new();
        }

        let total = timeline.total_time();
        let scale =
            |t: i64| -> usize { ((t as f64 / total as f64) * self.width as f64).round() as usize };

        let mut bar = String::with_capacity(self.width);
        for block in timeline.blocks() {
            let w = scale(block.end) - scale(block.start);
            if w == 0 {
                continue;
            }
            match block.occupant {
                Occupant::Idle => bar.push_str(&".".repeat(w)),
                Occupant::Process(_) => bar.push_str(&centered(&block.occupant.to_string(), w)),
            }
        }

        let mut ruler = vec![' '; self.width + 20];
        place_label(&mut ruler, 0, "0");
        for block in timeline.blocks() {
            place_label(&mut ruler, scale(block.end), &block.end.to_string());
        }
        let ruler: String = ruler.into_iter().collect();

        format!("{bar}\n{}", ruler.trim_end())
    }
}

impl Default for GanttRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Centers `label` in a field of `width` columns, truncating if needed.
fn centered(label: &str, width: usize) -> String {
    if label.len() >= width {
        return label[..width].to_string();
    }
    let left = (width - label.len()) / 2;
    let right = width - label.len() - left;
    format!("{}{label}{}", " ".repeat(left), " ".repeat(right))
}

/// Writes `label` into the ruler at column `x` unless it would collide
/// with a label already placed.
fn place_label(ruler: &mut [char], x: usize, label: &str) {
    let end = x + label.len();
    if end > ruler.len() {
        return;
    }
    let free = ruler[x.saturating_sub(1)..end].iter().all(|&c| c == ' ');
    if free {
        for (i, c) in label.chars().enumerate() {
            ruler[x + i] = c;
        }
    }
}

/// Renders the per-process comparison table across the three policies,
/// one row per process (id, arrival, burst, then waiting and turnaround
/// under each policy), with the per-policy averages beneath — the layout
/// of the simulator's results view.
pub fn comparison_table(
    fcfs: &SimulationResult,
    sjf: &SimulationResult,
    rr: &SimulationResult,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>4} {:>4} {:>4} | {:>8} {:>9} | {:>8} {:>9} | {:>8} {:>9}\n",
        "PID", "AT", "BT", "FCFS WT", "FCFS TAT", "SJF WT", "SJF TAT", "RR WT", "RR TAT"
    ));
    out.push_str(&"-".repeat(77));
    out.push('\n');

    for p in &fcfs.processes {
        let s = sjf.process(p.id);
        let r = rr.process(p.id);
        out.push_str(&format!(
            "{:>4} {:>4} {:>4} | {:>8} {:>9} | {:>8} {:>9} | {:>8} {:>9}\n",
            p.id,
            p.arrival_time,
            p.burst_time,
            p.waiting_time.unwrap_or(0),
            p.turnaround_time.unwrap_or(0),
            s.and_then(|p| p.waiting_time).unwrap_or(0),
            s.and_then(|p| p.turnaround_time).unwrap_or(0),
            r.and_then(|p| p.waiting_time).unwrap_or(0),
            r.and_then(|p| p.turnaround_time).unwrap_or(0),
        ));
    }

    out.push('\n');
    for (name, result) in [("FCFS", fcfs), ("SJF", sjf), ("RR", rr)] {
        let kpi = SimulationKpi::calculate(result);
        out.push_str(&format!(
            "{name}: Avg WT={:.2}, Avg TAT={:.2}\n",
            kpi.avg_waiting_time, kpi.avg_turnaround_time
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{Policy, Scheduler};

    fn default_scheduler() -> Scheduler {
        Scheduler::new(&[
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
            Process::new(4, 3, 6),
        ])
    }

    #[test]
    fn test_gantt_bar_is_proportional() {
        let result = default_scheduler().run_fcfs();
        // Makespan 22 at width 44: two columns per tick
        let rendered = GanttRenderer::new().with_width(44).render(&result.timeline);
        let bar = rendered.lines().next().unwrap();

        assert_eq!(bar.len(), 44);
        // P3 runs [8, 16): centered label inside columns 16..32
        assert_eq!(bar[16..32].trim(), "P3");
    }

    #[test]
    fn test_gantt_idle_texture() {
        let result = Scheduler::new(&[Process::new(1, 5, 5)]).run_fcfs();
        let rendered = GanttRenderer::new().with_width(20).render(&result.timeline);
        let bar = rendered.lines().next().unwrap();

        // Leading idle half renders dotted, execution half carries the label
        assert_eq!(&bar[..10], "..........");
        assert_eq!(bar[10..].trim(), "P1");
    }

    #[test]
    fn test_gantt_ruler_marks_boundaries() {
        let result = default_scheduler().run_fcfs();
        let rendered = GanttRenderer::new().with_width(44).render(&result.timeline);
        let ruler = rendered.lines().nth(1).unwrap();

        assert!(ruler.starts_with('0'));
        // Block boundaries at t=5, 8, 16, 22 → columns 10, 16, 32, 44
        assert_eq!(&ruler[10..11], "5");
        assert_eq!(&ruler[16..17], "8");
        assert_eq!(&ruler[32..34], "16");
        assert_eq!(&ruler[44..46], "22");
    }

    #[test]
    fn test_gantt_zero_width_block_dropped() {
        // One tick out of 100 rounds to zero columns at width 10
        let result = Scheduler::new(&[Process::new(1, 0, 1), Process::new(2, 0, 99)]).run_fcfs();
        let rendered = GanttRenderer::new().with_width(10).render(&result.timeline);
        let bar = rendered.lines().next().unwrap();

        assert!(!bar.contains("P1"));
        assert!(bar.contains("P2"));
    }

    #[test]
    fn test_gantt_empty_timeline() {
        let rendered = GanttRenderer::new().render(&Timeline::new());
        assert!(rendered.is_empty());
    }

    #[test]
    fn test_comparison_table_rows_and_averages() {
        let scheduler = default_scheduler();
        let table = comparison_table(
            &scheduler.run(Policy::Fcfs),
            &scheduler.run(Policy::Sjf),
            &scheduler.run(Policy::RoundRobin { quantum: 2 }),
        );

        let p4_row = table.lines().find(|l| l.trim_start().starts_with('4')).unwrap();
        // FCFS: WT=13 TAT=19; SJF: WT=5 TAT=11; RR(q=2): WT=11 TAT=17
        for value in ["13", "19", "5", "11", "17"] {
            assert!(p4_row.contains(value), "missing {value} in: {p4_row}");
        }

        assert!(table.contains("FCFS: Avg WT=5.75, Avg TAT=11.25"));
        assert!(table.contains("SJF: Avg WT=5.25, Avg TAT=10.75"));
    }
}
