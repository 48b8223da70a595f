//! CPU scheduling simulator.
//!
//! Simulates classic single-CPU scheduling policies — First-Come-First-
//! Served, non-preemptive Shortest-Job-First, and Round Robin — over a
//! fixed process set, producing per-process timing metrics and a
//! contiguous execution timeline (Gantt chart) per run.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Timeline`, `TimelineBlock`,
//!   `Occupant`, `SimulationResult`
//! - **`scheduler`**: The engine — `Scheduler`, `Policy`, `SimulationKpi`
//! - **`validation`**: Engine precondition checks (unique ids, value ranges)
//! - **`input`**: `id arrival burst` text parsing
//! - **`render`**: Text Gantt bars and the policy comparison table
//! - **`workload`**: Random process-set generation
//!
//! # Architecture
//!
//! The engine is a pure function per policy: each run takes a read-only
//! view of the input, works on its own fresh copies, and returns an
//! owned result. Runs share no state, so policies can be compared on
//! one input in any order. Parsing, validation, and rendering sit
//! outside the engine as thin collaborators.
//!
//! # Example
//!
//! ```
//! use cpu_schedule::input::parse_processes;
//! use cpu_schedule::scheduler::{Policy, Scheduler};
//! use cpu_schedule::validation::validate_processes;
//!
//! let processes = parse_processes("1 0 5\n2 1 3\n3 2 8\n4 3 6")?;
//! validate_processes(&processes).expect("preconditions hold");
//!
//! let scheduler = Scheduler::new(&processes);
//! let fcfs = scheduler.run(Policy::Fcfs);
//! assert_eq!(fcfs.process(2).unwrap().waiting_time, Some(4));
//! # Ok::<(), cpu_schedule::input::ParseError>(())
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod input;
pub mod models;
pub mod render;
pub mod scheduler;
pub mod validation;
pub mod workload;
