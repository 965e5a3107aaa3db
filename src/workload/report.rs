//! Result consumers.
//!
//! A [`ResultSink`] receives each finished [`PolicyOutcome`]. The library
//! never prints; [`TableReport`] renders the classic text table into a
//! `String` for the caller to print or store.

use std::fmt;

use crate::scheduler::PolicyOutcome;

/// Consumer of finished policy outcomes.
pub trait ResultSink {
    /// Receives one outcome.
    fn accept(&mut self, outcome: &PolicyOutcome);
}

impl ResultSink for Vec<PolicyOutcome> {
    fn accept(&mut self, outcome: &PolicyOutcome) {
        self.push(outcome.clone());
    }
}

/// Feeds every outcome to `sink`, in order.
pub fn report_all<S: ResultSink + ?Sized>(outcomes: &[PolicyOutcome], sink: &mut S) {
    for outcome in outcomes {
        sink.accept(outcome);
    }
}

/// Plain-text results table.
///
/// Per outcome: a header, one row per process (start, finish,
/// turnaround, waiting), the Gantt line and the three totals.
///
/// ```text
/// FCFS Results:
/// Process   Start Time  Finish Time  Turnaround Time  Waiting Time
/// 1         0           5            5                0
/// ...
/// Gantt Chart:
/// | 1 | 2 | 3 |
///
/// Total Turnaround Time: 19
/// Total Waiting Time: 10
/// CPU Utilization: 1
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableReport {
    out: String,
    show_timeline: bool,
}

impl TableReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also prints the per-slice timeline chart under the Gantt line.
    pub fn with_timeline(mut self, show: bool) -> Self {
        self.show_timeline = show;
        self
    }

    /// Rendered text so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consumes the report, returning the rendered text.
    pub fn into_string(self) -> String {
        self.out
    }
}

impl ResultSink for TableReport {
    fn accept(&mut self, outcome: &PolicyOutcome) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        let table = OutcomeTable {
            outcome,
            show_timeline: self.show_timeline,
        };
        self.out.push_str(&table.to_string());
    }
}

/// Text table for a single outcome.
struct OutcomeTable<'a> {
    outcome: &'a PolicyOutcome,
    show_timeline: bool,
}

impl fmt::Display for OutcomeTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.outcome;
        writeln!(f, "{} Results:", outcome.run.policy)?;
        writeln!(
            f,
            "{:<10}{:<12}{:<13}{:<17}{}",
            "Process", "Start Time", "Finish Time", "Turnaround Time", "Waiting Time"
        )?;
        for r in &outcome.run.records {
            writeln!(
                f,
                "{:<10}{:<12}{:<13}{:<17}{}",
                r.id,
                opt(r.start_time),
                opt(r.finish_time),
                r.turnaround_time,
                r.waiting_time
            )?;
        }

        writeln!(f, "\nGantt Chart:")?;
        writeln!(f, "{}", outcome.trace)?;
        if self.show_timeline {
            writeln!(f, "Timeline: {}", outcome.run.timeline.render_chart())?;
        }

        let m = &outcome.metrics;
        writeln!(f, "\nTotal Turnaround Time: {}", m.total_turnaround_time)?;
        writeln!(f, "Total Waiting Time: {}", m.total_waiting_time)?;
        writeln!(f, "CPU Utilization: {}", m.cpu_utilization)
    }
}

fn opt(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
