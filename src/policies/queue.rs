//! Pending pool shared by the preemptive policies.

use crate::models::ProcessRecord;

/// Processes that have not arrived yet, in input order.
///
/// At each dispatch point every process found to have arrived is admitted
/// in input order, regardless of how their arrival times compare.
#[derive(Debug)]
pub(crate) struct PendingPool {
    /// `(arrival_time, record index)` in input order.
    entries: Vec<(i64, usize)>,
}

impl PendingPool {
    /// Builds the pool from every record of a run.
    pub(crate) fn new(records: &[ProcessRecord]) -> Self {
        Self {
            entries: records
                .iter()
                .enumerate()
                .map(|(i, r)| (r.arrival_time, i))
                .collect(),
        }
    }

    /// Admits every process with `arrival_time <= now`, in input order.
    pub(crate) fn admit(&mut self, now: i64, mut admit: impl FnMut(usize)) {
        self.entries.retain(|&(arrival, idx)| {
            if arrival <= now {
                admit(idx);
                false
            } else {
                true
            }
        });
    }

    /// Earliest arrival time among processes still pending.
    pub(crate) fn next_arrival(&self) -> Option<i64> {
        self.entries.iter().map(|&(arrival, _)| arrival).min()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
