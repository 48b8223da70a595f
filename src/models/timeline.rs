//! Execution timeline (Gantt chart) model.
//!
//! A timeline is an ordered sequence of contiguous, non-overlapping
//! blocks recording who occupied the CPU during each interval — a
//! process, or nobody.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who occupies the CPU during a timeline block.
///
/// Occupant identifiers are stable across runs so the presentation layer
/// can key colors and labels on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupant {
    /// A process, by id.
    Process(u32),
    /// Nobody: the CPU sits idle waiting for the next arrival.
    Idle,
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occupant::Process(id) => write!(f, "P{id}"),
            Occupant::Idle => write!(f, "IDLE"),
        }
    }
}

/// One interval of CPU occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBlock {
    /// Who held the CPU.
    pub occupant: Occupant,
    /// Interval start (inclusive).
    pub start: i64,
    /// Interval end (exclusive). Always > start.
    pub end: i64,
}

impl TimelineBlock {
    /// Interval length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Append-only recorder of CPU occupancy.
///
/// The engine guarantees blocks are recorded in time order with no gaps
/// or overlaps; the recorder debug-asserts that as a debugging aid.
/// Adjacent blocks are never merged, even for the same occupant — each
/// dispatch decision produces exactly one block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    blocks: Vec<TimelineBlock>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a block for the given occupant over `[start, end)`.
    pub fn record(&mut self, occupant: Occupant, start: i64, end: i64) {
        debug_assert!(end > start, "empty timeline block [{start}, {end})");
        debug_assert_eq!(
            start,
            self.total_time(),
            "timeline block [{start}, {end}) leaves a gap or overlaps"
        );
        self.blocks.push(TimelineBlock {
            occupant,
            start,
            end,
        });
    }

    /// Appends an idle block over `[start, end)`.
    pub fn record_idle(&mut self, start: i64, end: i64) {
        self.record(Occupant::Idle, start, end);
    }

    /// All blocks in time order.
    pub fn blocks(&self) -> &[TimelineBlock] {
        &self.blocks
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Total simulated time: end of the last block, or 0 when empty.
    pub fn total_time(&self) -> i64 {
        self.blocks.last().map(|b| b.end).unwrap_or(0)
    }

    /// Ticks spent executing processes.
    pub fn busy_time(&self) -> i64 {
        self.blocks
            .iter()
            .filter(|b| matches!(b.occupant, Occupant::Process(_)))
            .map(|b| b.duration())
            .sum()
    }

    /// Ticks spent idle.
    pub fn idle_time(&self) -> i64 {
        self.total_time() - self.busy_time()
    }

    /// All execution blocks for a given process, in time order.
    pub fn blocks_for(&self, id: u32) -> Vec<&TimelineBlock> {
        self.blocks
            .iter()
            .filter(|b| b.occupant == Occupant::Process(id))
            .collect()
    }
}
