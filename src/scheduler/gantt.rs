//! Record-order Gantt trace.
//!
//! Renders process identifiers in the order of a finished record list,
//! e.g. `| 3 | 2 | 1 |`. For SRT and Round Robin the records are in
//! completion order, so this is an approximation; the per-slice chart is
//! [`Timeline::render_chart`](crate::models::Timeline::render_chart).

use crate::models::ProcessRecord;

/// Builds the record-order trace. Empty input renders `"|"`.
pub fn build_trace(records: &[ProcessRecord]) -> String {
    let mut out: String = records.iter().map(|r| format!("| {} ", r.id)).collect();
    out.push('|');
    out
}

/// Process identifiers in record order.
pub fn trace_ids(records: &[ProcessRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}
