//! schedsim - Batch simulator for classical single-core CPU scheduling.
//!
//! Given a fixed set of process descriptions and a policy, the engine
//! computes the full execution timeline that policy produces and the
//! aggregate performance figures it implies. Everything is simulated time;
//! there is no I/O, no real concurrency, and each call is an independent
//! pure function over an owned clone of its input.
//!
//! # Architecture
//!
//! - **Core**: the shared time-advancement driver, the owned process state
//!   table, and a per-step invariant observer
//! - **Schedulers**: the six policies (FCFS, SJF, SRTF, priority in both
//!   flavors, round robin, MLFQ), each a `Scheduler` implementation that
//!   owns its ready structure
//! - **Timeline**: dispatch-interval accumulator that compacts contiguous
//!   same-process intervals into Gantt segments
//! - **Metrics**: waiting/turnaround/response means, makespan, utilization,
//!   throughput
//!
//! # Usage
//!
//! ```rust
//! use schedsim::{round_robin, ProcessSpec};
//!
//! let procs = vec![
//!     ProcessSpec::new("P1", 0, 5, 1),
//!     ProcessSpec::new("P2", 1, 3, 2),
//! ];
//! let result = round_robin(&procs, 2).unwrap();
//! assert_eq!(result.metrics.makespan, 8);
//! ```

pub mod core;
pub mod metrics;
pub mod scheduler;
pub mod sim;
pub mod timeline;

// Re-export the main public types for convenience.
pub use crate::core::{ProcState, Ticks};
pub use metrics::Metrics;
pub use scheduler::{Quantum, Scheduler};
pub use sim::{
    fcfs, mlfq, priority_non_preemptive, priority_preemptive, round_robin, simulate,
    sjf_non_preemptive, sjf_preemptive, Policy, ProcessReport, ProcessSpec, SimulationResult,
    SpecError,
};
pub use timeline::{GanttInterval, Timeline};
