//! First-Come, First-Served.
//!
//! # Algorithm
//!
//! Processes run to completion, one after another, in the order given.
//! The processor idles until the next process arrives when needed.
//! The input order is trusted to be arrival order; it is not re-sorted.
//!
//! # Complexity
//! O(n).

use log::{debug, trace};

use super::{PolicyRun, SchedulingPolicy};
use crate::models::{ExecutionSlice, ProcessRecord, ProcessSpec, Timeline};

/// Non-preemptive first-come, first-served policy.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::ProcessSpec;
/// use cpu_sched_sim::policies::{Fcfs, SchedulingPolicy};
///
/// let specs = vec![
///     ProcessSpec::new("1", 0, 5).unwrap(),
///     ProcessSpec::new("2", 1, 3).unwrap(),
/// ];
/// let run = Fcfs.run(&specs);
/// assert_eq!(run.records[1].start_time, Some(5));
/// assert_eq!(run.records[1].waiting_time, 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, specs: &[ProcessSpec]) -> PolicyRun {
        let mut records: Vec<ProcessRecord> = specs.iter().map(ProcessRecord::from_spec).collect();
        let mut timeline = Timeline::new();
        let mut current_time = 0;

        for record in &mut records {
            current_time = current_time.max(record.arrival_time);
            record.start_time = Some(current_time);

            let finish = current_time + record.burst_time;
            record.execute(record.burst_time);
            timeline.push(ExecutionSlice::new(&record.id, current_time, finish));
            record.complete(finish);
            trace!("FCFS ran '{}' over [{current_time}, {finish})", record.id);

            current_time = finish;
        }

        debug!(
            "FCFS finished {} processes at t={current_time}",
            records.len()
        );
        PolicyRun::new(self.label(), records, timeline)
    }

    fn description(&self) -> &'static str {
        "First-Come, First-Served"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(items: &[(&str, i64, i64)]) -> Vec<ProcessSpec> {
        items
            .iter()
            .map(|&(id, a, b)| ProcessSpec::new(id, a, b).unwrap())
            .collect()
    }

    #[test]
    fn test_fcfs_reference_scenario() {
        let run = Fcfs.run(&specs(&[("1", 0, 5), ("2", 1, 3), ("3", 2, 1)]));

        let starts: Vec<_> = run.records.iter().map(|r| r.start_time).collect();
        let finishes: Vec<_> = run.records.iter().map(|r| r.finish_time).collect();
        let waits: Vec<_> = run.records.iter().map(|r| r.waiting_time).collect();
        let turnarounds: Vec<_> = run.records.iter().map(|r| r.turnaround_time).collect();

        assert_eq!(starts, vec![Some(0), Some(5), Some(8)]);
        assert_eq!(finishes, vec![Some(5), Some(8), Some(9)]);
        assert_eq!(waits, vec![0, 4, 6]);
        assert_eq!(turnarounds, vec![5, 7, 7]);
        assert_eq!(run.completion_order(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let run = Fcfs.run(&specs(&[("A", 0, 2), ("B", 5, 1)]));
        let b = run.record("B").unwrap();
        assert_eq!(b.start_time, Some(5));
        assert_eq!(b.finish_time, Some(6));
        assert_eq!(b.waiting_time, 0);
        assert_eq!(run.timeline.idle_gaps(), vec![(2, 5)]);
    }

    #[test]
    fn test_fcfs_keeps_input_order() {
        // Out-of-order input is honored as given.
        let run = Fcfs.run(&specs(&[("late", 4, 1), ("early", 0, 2)]));
        assert_eq!(run.completion_order(), vec!["late", "early"]);
        let early = run.record("early").unwrap();
        assert_eq!(early.start_time, Some(5));
        assert_eq!(early.waiting_time, 5);
    }

    #[test]
    fn test_fcfs_empty() {
        let run = Fcfs.run(&[]);
        assert!(run.records.is_empty());
        assert!(run.timeline.is_empty());
    }

    #[test]
    fn test_fcfs_one_slice_per_process() {
        let run = Fcfs.run(&specs(&[("1", 0, 5), ("2", 1, 3), ("3", 2, 1)]));
        assert_eq!(run.timeline.len(), 3);
        assert_eq!(run.timeline.busy_time(), 9);
    }

    #[test]
    fn test_fcfs_does_not_touch_input() {
        let input = specs(&[("1", 0, 2)]);
        let before = input.clone();
        let _ = Fcfs.run(&input);
        assert_eq!(input, before);
    }

    #[test]
    #[should_panic(expected = "negative arrival time")]
    fn test_fcfs_unchecked_negative_arrival_panics() {
        let input = vec![ProcessSpec {
            id: "1".into(),
            arrival_time: -3,
            burst_time: 2,
        }];
        let _ = Fcfs.run(&input);
    }
}
