//! Round Robin.
//!
//! # Algorithm
//!
//! 1. Admit every process that has arrived, in input order.
//! 2. Pop the front of the ready queue and run it for
//!    `min(quantum, remaining)` ticks.
//! 3. If work remains, append it to the back of the queue. Processes that
//!    arrived during the slice are admitted after it, at the next
//!    dispatch point.
//! 4. With an empty ready queue, jump to the next arrival.
//!
//! # Complexity
//! O(total_burst / quantum + n).

use log::{debug, trace};
use std::collections::VecDeque;

use super::queue::PendingPool;
use super::{take_in_order, PolicyRun, SchedulingPolicy, StartTimeMode};
use crate::models::{ExecutionSlice, ProcessRecord, ProcessSpec, Timeline};
use crate::validation::{validate_quantum, ValidationError};

/// Preemptive fixed-quantum FIFO rotation policy.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::ProcessSpec;
/// use cpu_sched_sim::policies::{RoundRobin, SchedulingPolicy};
///
/// let specs = vec![
///     ProcessSpec::new("1", 0, 5).unwrap(),
///     ProcessSpec::new("2", 1, 3).unwrap(),
/// ];
/// let rr = RoundRobin::new(2).unwrap();
/// let run = rr.run(&specs);
/// assert_eq!(run.completion_order(), vec!["1", "2"]);
///
/// assert!(RoundRobin::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
    start_time_mode: StartTimeMode,
}

impl RoundRobin {
    /// Creates a Round Robin policy. Rejects `quantum <= 0`.
    pub fn new(quantum: i64) -> Result<Self, ValidationError> {
        validate_quantum(quantum)?;
        Ok(Self {
            quantum,
            start_time_mode: StartTimeMode::default(),
        })
    }

    /// Sets the start-time semantics.
    pub fn with_start_time_mode(mut self, mode: StartTimeMode) -> Self {
        self.start_time_mode = mode;
        self
    }

    /// Time slice per dispatch.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Current start-time semantics.
    pub fn start_time_mode(&self) -> StartTimeMode {
        self.start_time_mode
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn label(&self) -> String {
        format!("RR (q={})", self.quantum)
    }

    fn run(&self, specs: &[ProcessSpec]) -> PolicyRun {
        let mut records: Vec<ProcessRecord> = specs.iter().map(ProcessRecord::from_spec).collect();
        let mut pending = PendingPool::new(&records);
        let mut ready: VecDeque<usize> = VecDeque::new();
        let mut completed: Vec<usize> = Vec::with_capacity(records.len());
        let mut timeline = Timeline::new();
        let mut now = 0;

        loop {
            pending.admit(now, |idx| ready.push_back(idx));

            let Some(idx) = ready.pop_front() else {
                match pending.next_arrival() {
                    Some(arrival) => {
                        now = now.max(arrival);
                        continue;
                    }
                    None => break,
                }
            };

            let record = &mut records[idx];
            self.start_time_mode.record_dispatch(record, now);

            let slice = record.remaining_time.min(self.quantum);
            record.execute(slice);
            timeline.push(ExecutionSlice::new(&record.id, now, now + slice));
            trace!(
                "RR ran '{}' over [{now}, {}), {} remaining",
                record.id,
                now + slice,
                record.remaining_time
            );
            now += slice;

            if record.remaining_time == 0 {
                record.complete(now);
                completed.push(idx);
            } else {
                ready.push_back(idx);
            }
        }

        debug!(
            "{} finished {} processes at t={now}",
            self.label(),
            completed.len()
        );
        PolicyRun::new(self.label(), take_in_order(records, &completed), timeline)
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}
