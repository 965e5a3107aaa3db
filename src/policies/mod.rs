//! CPU scheduling policies.
//!
//! Provides the three supported disciplines behind one trait:
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | [`Fcfs`] | no | input order |
//! | [`Srt`] | yes | shortest remaining time, ties by ready-queue entry |
//! | [`RoundRobin`] | yes | FIFO with a fixed quantum |
//!
//! # Simulation Model
//!
//! Every run owns private copies of its processes and advances a logical
//! clock. The clock jumps between relevant instants (arrivals, completions,
//! quantum expiries) instead of stepping one tick at a time; selection
//! results are the same as a tick-by-tick simulation.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod queue;
mod round_robin;
mod srt;

pub use fcfs::Fcfs;
pub use round_robin::RoundRobin;
pub use srt::Srt;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::models::{ProcessRecord, ProcessSpec, Timeline};

/// Which dispatch the stored `start_time` reflects for preemptive policies.
///
/// A preemptively scheduled process may be dispatched many times. The
/// legacy behavior overwrites `start_time` on every dispatch, so waiting
/// time is measured up to the final dispatch. `FirstDispatch` keeps the
/// conventional response-time definition instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartTimeMode {
    /// `start_time` is the time of the last dispatch.
    #[default]
    LastDispatch,
    /// `start_time` is the time of the first dispatch.
    FirstDispatch,
}

impl StartTimeMode {
    /// Records a dispatch of `record` at time `at`.
    pub(crate) fn record_dispatch(self, record: &mut ProcessRecord, at: i64) {
        match self {
            StartTimeMode::LastDispatch => record.start_time = Some(at),
            StartTimeMode::FirstDispatch => {
                record.start_time.get_or_insert(at);
            }
        }
    }
}

/// The finished output of one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRun {
    /// Display label of the policy (e.g. `"RR (q=3)"`).
    pub policy: String,
    /// Finished records in policy output order: input order for FCFS,
    /// completion order for SRT and Round Robin.
    pub records: Vec<ProcessRecord>,
    /// Actual execution slices, in execution order.
    pub timeline: Timeline,
}

impl PolicyRun {
    /// Creates a run result.
    pub fn new(policy: impl Into<String>, records: Vec<ProcessRecord>, timeline: Timeline) -> Self {
        Self {
            policy: policy.into(),
            records,
            timeline,
        }
    }

    /// Finds the record for a process.
    pub fn record(&self, process_id: &str) -> Option<&ProcessRecord> {
        self.records.iter().find(|r| r.id == process_id)
    }

    /// Process IDs in output order.
    pub fn completion_order(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.id.as_str()).collect()
    }

    /// Consumes the run, returning its records.
    pub fn into_records(self) -> Vec<ProcessRecord> {
        self.records
    }
}

/// A CPU scheduling policy.
///
/// # Preconditions
/// `run` expects specs that pass
/// [`validate_specs`](crate::validation::validate_specs). A spec that
/// fails [`ProcessSpec::check`] panics when its record is created, and
/// other violations panic from the record invariants, never as silently
/// corrupted output. The `run_*` free functions and
/// [`simulate`](crate::scheduler::simulate) validate instead of panicking.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Short policy name (e.g., "FCFS", "SRT").
    fn name(&self) -> &'static str;

    /// Label including parameters, used in reports.
    fn label(&self) -> String {
        self.name().to_string()
    }

    /// Runs the policy over a private copy of `specs`.
    fn run(&self, specs: &[ProcessSpec]) -> PolicyRun;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Moves records out of `records` in the order given by `order`.
fn take_in_order(records: Vec<ProcessRecord>, order: &[usize]) -> Vec<ProcessRecord> {
    let mut slots: Vec<Option<ProcessRecord>> = records.into_iter().map(Some).collect();
    order.iter().filter_map(|&i| slots[i].take()).collect()
}

#[cfg(test)]
mod properties;
