//! Simulation driver, metrics and traces.
//!
//! Runs configured policies over a process set and derives what is
//! reported for each run.
//!
//! # Metrics
//!
//! `RunMetrics` computes total turnaround, total waiting and CPU
//! utilization from a finished record list.
//!
//! # Traces
//!
//! `build_trace` renders the record-order Gantt line. The true
//! per-slice chart lives on [`Timeline`](crate::models::Timeline).

mod gantt;
mod metrics;
mod simulation;

pub use gantt::{build_trace, trace_ids};
pub use metrics::{compute_metrics, RunMetrics};
pub use simulation::{
    run_fcfs, run_round_robin, run_srt, simulate, PolicyConfig, PolicyOutcome, SimulationConfig,
    DEFAULT_QUANTUM,
};
