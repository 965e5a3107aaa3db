//! Execution timeline (per-slice trace).
//!
//! A timeline is the ordered list of intervals during which the simulated
//! processor ran some process. Unlike the record-order trace built by
//! [`build_trace`](crate::scheduler::build_trace), it reflects actual
//! execution order, including preemptions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One contiguous interval of execution on the processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process that held the processor.
    pub process_id: String,
    /// Slice start (inclusive).
    pub start: i64,
    /// Slice end (exclusive).
    pub end: i64,
}

impl ExecutionSlice {
    /// Creates a new slice.
    pub fn new(process_id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Slice length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Ordered sequence of execution slices produced by one policy run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in execution order. Non-overlapping, non-decreasing start.
    pub slices: Vec<ExecutionSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice, merging it into the previous one when the same
    /// process continues without a gap.
    ///
    /// # Panics
    /// If the slice is empty or starts before the previous slice ends.
    pub fn push(&mut self, slice: ExecutionSlice) {
        assert!(slice.end > slice.start, "empty slice for '{}'", slice.process_id);
        if let Some(last) = self.slices.last_mut() {
            assert!(
                slice.start >= last.end,
                "slice for '{}' at {} overlaps previous ending at {}",
                slice.process_id,
                slice.start,
                last.end
            );
            if last.process_id == slice.process_id && last.end == slice.start {
                last.end = slice.end;
                return;
            }
        }
        self.slices.push(slice);
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether no slice was recorded.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// End of the last slice (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.slices.last().map(|s| s.end).unwrap_or(0)
    }

    /// Total time the processor was busy.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(ExecutionSlice::duration).sum()
    }

    /// Slices belonging to one process.
    pub fn slices_for(&self, process_id: &str) -> Vec<&ExecutionSlice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Total execution time received by one process.
    pub fn executed_time(&self, process_id: &str) -> i64 {
        self.slices_for(process_id)
            .iter()
            .map(|s| s.duration())
            .sum()
    }

    /// Execution time per process.
    pub fn executed_by_process(&self) -> HashMap<String, i64> {
        let mut totals: HashMap<String, i64> = HashMap::new();
        for s in &self.slices {
            *totals.entry(s.process_id.clone()).or_insert(0) += s.duration();
        }
        totals
    }

    /// Intervals `[start, end)` where the processor was idle, from t=0 to
    /// the makespan.
    pub fn idle_gaps(&self) -> Vec<(i64, i64)> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for s in &self.slices {
            if s.start > cursor {
                gaps.push((cursor, s.start));
            }
            cursor = s.end;
        }
        gaps
    }

    /// Renders a textual chart with boundary times, e.g.
    /// `0 | P1 | 1 | P2 | 3 | idle | 5 | P1 | 9`.
    pub fn render_chart(&self) -> String {
        if self.slices.is_empty() {
            return String::from("|");
        }
        let mut out = String::new();
        let mut cursor = 0;
        for s in &self.slices {
            if s.start > cursor {
                out.push_str(&format!("{cursor} | idle | "));
            }
            out.push_str(&format!("{} | {} | ", s.start, s.process_id));
            cursor = s.end;
        }
        out.push_str(&cursor.to_string());
        out
    }
}
