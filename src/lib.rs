//! CPU process scheduling simulator.
//!
//! Simulates a single processor running a fixed set of processes under
//! three classic disciplines and reports per-process timing (start,
//! finish, waiting, turnaround), aggregate metrics and an execution
//! trace for each.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessSpec`, `ProcessRecord`,
//!   `ExecutionSlice`, `Timeline`
//! - **`policies`**: `Fcfs`, `Srt`, `RoundRobin` behind the
//!   `SchedulingPolicy` trait
//! - **`scheduler`**: Multi-policy driver, `RunMetrics`, Gantt traces
//! - **`workload`**: Process-spec sources and result sinks
//! - **`validation`**: Input integrity checks
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::{simulate, SimulationConfig};
//! use cpu_sched_sim::workload::{parse_process_list, report_all, TableReport};
//!
//! let specs = parse_process_list("1,0,5\n2,1,3\n3,2,1").unwrap();
//! let outcomes = simulate(&specs, &SimulationConfig::default()).unwrap();
//! assert_eq!(outcomes[1].trace, "| 3 | 2 | 1 |");
//!
//! let mut report = TableReport::new();
//! report_all(&outcomes, &mut report);
//! assert!(report.as_str().contains("SRT Results:"));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod models;
pub mod policies;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use models::{ExecutionSlice, ProcessRecord, ProcessSpec, Timeline};
pub use policies::{Fcfs, PolicyRun, RoundRobin, SchedulingPolicy, Srt, StartTimeMode};
pub use scheduler::{
    build_trace, compute_metrics, run_fcfs, run_round_robin, run_srt, simulate, PolicyConfig,
    PolicyOutcome, RunMetrics, SimulationConfig,
};
pub use validation::{ValidationError, ValidationErrorKind};
