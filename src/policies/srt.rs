//! Shortest Remaining Time (preemptive SJF).
//!
//! # Algorithm
//!
//! At every tick the ready process with the least remaining work runs.
//! Ties go to the process that entered the ready queue first; a process
//! that just ran re-enters the queue after each tick, ahead of processes
//! arriving at that same instant.
//!
//! Between arrivals the selected process keeps the processor (its
//! remaining time only shrinks), so the simulation runs it straight to
//! the next arrival or its completion, whichever comes first.
//!
//! # Start Time
//! Each tick counts as a dispatch. Under
//! [`StartTimeMode::LastDispatch`] the stored `start_time` is therefore
//! the start of a process's final tick (`finish_time - 1`).
//!
//! # Complexity
//! O(e * n) where e = arrivals + completions, n = ready queue length.

use log::{debug, trace};

use super::queue::PendingPool;
use super::{take_in_order, PolicyRun, SchedulingPolicy, StartTimeMode};
use crate::models::{ExecutionSlice, ProcessRecord, ProcessSpec, Timeline};

/// Ready-queue entry. `seq` orders entries by time of (re-)entry.
#[derive(Debug, Clone, Copy)]
struct ReadyEntry {
    idx: usize,
    seq: u64,
}

/// Preemptive shortest-remaining-time-first policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srt {
    start_time_mode: StartTimeMode,
}

impl Srt {
    /// Creates an SRT policy with legacy (last-dispatch) start times.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start-time semantics.
    pub fn with_start_time_mode(mut self, mode: StartTimeMode) -> Self {
        self.start_time_mode = mode;
        self
    }

    /// Current start-time semantics.
    pub fn start_time_mode(&self) -> StartTimeMode {
        self.start_time_mode
    }
}

impl SchedulingPolicy for Srt {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn run(&self, specs: &[ProcessSpec]) -> PolicyRun {
        let mut records: Vec<ProcessRecord> = specs.iter().map(ProcessRecord::from_spec).collect();
        let mut pending = PendingPool::new(&records);
        let mut ready: Vec<ReadyEntry> = Vec::new();
        let mut next_seq: u64 = 0;
        let mut completed: Vec<usize> = Vec::with_capacity(records.len());
        let mut timeline = Timeline::new();
        let mut now = 0;

        loop {
            pending.admit(now, |idx| {
                ready.push(ReadyEntry { idx, seq: next_seq });
                next_seq += 1;
            });

            let selected = ready
                .iter()
                .enumerate()
                .min_by_key(|(_, e)| (records[e.idx].remaining_time, e.seq))
                .map(|(pos, _)| pos);

            let Some(pos) = selected else {
                match pending.next_arrival() {
                    Some(arrival) => {
                        now = now.max(arrival);
                        continue;
                    }
                    None => break,
                }
            };

            let entry = ready.swap_remove(pos);
            let record = &mut records[entry.idx];

            let run_until = match pending.next_arrival() {
                Some(arrival) if arrival < now + record.remaining_time => arrival,
                _ => now + record.remaining_time,
            };

            self.start_time_mode.record_dispatch(record, now);
            self.start_time_mode.record_dispatch(record, run_until - 1);
            record.execute(run_until - now);
            timeline.push(ExecutionSlice::new(&record.id, now, run_until));
            trace!(
                "SRT ran '{}' over [{now}, {run_until}), {} remaining",
                record.id,
                record.remaining_time
            );
            now = run_until;

            if record.remaining_time == 0 {
                record.complete(now);
                completed.push(entry.idx);
            } else {
                ready.push(ReadyEntry {
                    idx: entry.idx,
                    seq: next_seq,
                });
                next_seq += 1;
            }
        }

        debug_assert!(pending.is_empty() && ready.is_empty());
        debug!("SRT finished {} processes at t={now}", completed.len());
        PolicyRun::new(self.label(), take_in_order(records, &completed), timeline)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}
