//! Simulation domain models.
//!
//! Core data types for describing a process set and the outcome of a
//! scheduling run: the [`Process`] entity, the [`Timeline`] of CPU
//! occupancy, and the [`SimulationResult`] bundle returned per policy.

mod process;
mod result;
mod timeline;

pub use process::Process;
pub use result::SimulationResult;
pub use timeline::{Occupant, Timeline, TimelineBlock};
