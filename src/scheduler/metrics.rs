//! Aggregate run metrics.
//!
//! Computes the three totals reported for every policy run from its
//! finished records.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Turnaround | Sum of `finish - arrival` |
//! | Total Waiting | Sum of `start - arrival` |
//! | CPU Utilization | Sum of bursts / `finish_time` of the **last record** |
//!
//! Utilization divides by the last record's finish time, not the maximum
//! finish time. Every policy here emits records in non-decreasing finish
//! order (FCFS runs in input order; SRT and RR emit completion order),
//! so the two coincide. A hand-reordered record list does not get that
//! guarantee.

use serde::{Deserialize, Serialize};

use crate::models::ProcessRecord;

/// Aggregate metrics of one policy run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Sum of turnaround times.
    pub total_turnaround_time: i64,
    /// Sum of waiting times.
    pub total_waiting_time: i64,
    /// Busy time over elapsed time (0.0..=1.0 for well-formed runs).
    pub cpu_utilization: f64,
    /// Number of records the totals cover.
    pub process_count: usize,
}

impl RunMetrics {
    /// Computes metrics over records in policy output order.
    ///
    /// Empty input yields all zeros.
    pub fn calculate(records: &[ProcessRecord]) -> Self {
        let Some(last) = records.last() else {
            return Self::default();
        };

        let total_turnaround_time = records.iter().map(|r| r.turnaround_time).sum();
        let total_waiting_time = records.iter().map(|r| r.waiting_time).sum();
        let total_cpu_time: i64 = records.iter().map(|r| r.burst_time).sum();

        let cpu_utilization = match last.finish_time {
            Some(end) if end > 0 => total_cpu_time as f64 / end as f64,
            _ => 0.0,
        };

        Self {
            total_turnaround_time,
            total_waiting_time,
            cpu_utilization,
            process_count: records.len(),
        }
    }

    /// Mean turnaround time (0.0 when empty).
    pub fn average_turnaround(&self) -> f64 {
        if self.process_count == 0 {
            0.0
        } else {
            self.total_turnaround_time as f64 / self.process_count as f64
        }
    }

    /// Mean waiting time (0.0 when empty).
    pub fn average_waiting(&self) -> f64 {
        if self.process_count == 0 {
            0.0
        } else {
            self.total_waiting_time as f64 / self.process_count as f64
        }
    }

    /// The `(total_turnaround, total_waiting, cpu_utilization)` triple.
    pub fn as_triple(&self) -> (i64, i64, f64) {
        (
            self.total_turnaround_time,
            self.total_waiting_time,
            self.cpu_utilization,
        )
    }
}

/// Computes `(total_turnaround, total_waiting, cpu_utilization)`.
pub fn compute_metrics(records: &[ProcessRecord]) -> (i64, i64, f64) {
    RunMetrics::calculate(records).as_triple()
}
