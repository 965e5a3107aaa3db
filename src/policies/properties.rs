//! Cross-policy properties over generated workloads.
//!
//! The event-driven policies are checked against straightforward
//! tick-by-tick (SRT) and quantum-by-quantum (RR) simulations.

use super::*;
use crate::models::ProcessRecord;
use crate::scheduler::RunMetrics;
use crate::workload::RandomWorkload;

/// Seeded workloads, each also in reversed input order.
fn workloads() -> Vec<Vec<ProcessSpec>> {
    (0..40)
        .flat_map(|seed| {
            let specs = RandomWorkload::new(1 + (seed as usize % 9))
                .with_arrivals(0, 12)
                .with_bursts(1, 7)
                .with_seed(seed)
                .specs();
            let reversed: Vec<ProcessSpec> = specs.iter().rev().cloned().collect();
            [specs, reversed]
        })
        .collect()
}

fn finish(p: &mut ProcessRecord, now: i64) {
    p.finish_time = Some(now);
    p.turnaround_time = now - p.arrival_time;
    p.waiting_time = p.start_time.unwrap_or(now) - p.arrival_time;
}

fn admit(pending: &mut Vec<ProcessRecord>, ready: &mut Vec<ProcessRecord>, now: i64) {
    let (arrived, rest): (Vec<_>, Vec<_>) =
        std::mem::take(pending).into_iter().partition(|p| p.arrival_time <= now);
    *pending = rest;
    ready.extend(arrived);
}

fn tick_srt(specs: &[ProcessSpec]) -> Vec<ProcessRecord> {
    let mut pending: Vec<ProcessRecord> = specs.iter().map(ProcessRecord::from_spec).collect();
    let mut ready = Vec::new();
    let mut done = Vec::new();
    let mut now = 0;
    while !pending.is_empty() || !ready.is_empty() {
        admit(&mut pending, &mut ready, now);
        if ready.is_empty() {
            now += 1;
            continue;
        }
        ready.sort_by_key(|p: &ProcessRecord| p.remaining_time);
        let mut p = ready.remove(0);
        p.start_time = Some(now);
        p.remaining_time -= 1;
        now += 1;
        if p.remaining_time == 0 {
            finish(&mut p, now);
            done.push(p);
        } else {
            ready.push(p);
        }
    }
    done
}

fn quantum_rr(specs: &[ProcessSpec], quantum: i64) -> Vec<ProcessRecord> {
    quantum_rr_with_requeues(specs, quantum).0
}

/// Quantum-by-quantum RR that also reports every re-queue as
/// `(id, time, processes queued ahead of it)`.
fn quantum_rr_with_requeues(
    specs: &[ProcessSpec],
    quantum: i64,
) -> (Vec<ProcessRecord>, Vec<(String, i64, usize)>) {
    let mut pending: Vec<ProcessRecord> = specs.iter().map(ProcessRecord::from_spec).collect();
    let mut ready = Vec::new();
    let mut done = Vec::new();
    let mut requeues = Vec::new();
    let mut now = 0;
    while !pending.is_empty() || !ready.is_empty() {
        admit(&mut pending, &mut ready, now);
        if ready.is_empty() {
            now += 1;
            continue;
        }
        let mut p = ready.remove(0);
        p.start_time = Some(now);
        if p.remaining_time > quantum {
            now += quantum;
            p.remaining_time -= quantum;
            requeues.push((p.id.clone(), now, ready.len()));
            ready.push(p);
        } else {
            now += p.remaining_time;
            p.remaining_time = 0;
            finish(&mut p, now);
            done.push(p);
        }
    }
    (done, requeues)
}

fn all_policies() -> Vec<Box<dyn SchedulingPolicy>> {
    let mut policies: Vec<Box<dyn SchedulingPolicy>> = vec![Box::new(Fcfs)];
    for mode in [StartTimeMode::LastDispatch, StartTimeMode::FirstDispatch] {
        policies.push(Box::new(Srt::new().with_start_time_mode(mode)));
        for q in [1, 2, 3, 5] {
            if let Ok(rr) = RoundRobin::new(q) {
                policies.push(Box::new(rr.with_start_time_mode(mode)));
            }
        }
    }
    policies
}

#[test]
fn test_srt_matches_tick_simulation() {
    for specs in workloads() {
        let run = Srt::new().run(&specs);
        assert_eq!(run.records, tick_srt(&specs), "specs: {specs:?}");
    }
}

#[test]
fn test_rr_matches_quantum_simulation() {
    for specs in workloads() {
        for q in [1, 2, 3, 4, 10] {
            let run = RoundRobin::new(q).unwrap().run(&specs);
            assert_eq!(run.records, quantum_rr(&specs, q), "q={q} specs: {specs:?}");
        }
    }
}

#[test]
fn test_conservation() {
    for specs in workloads() {
        for policy in all_policies() {
            let run = policy.run(&specs);
            assert_eq!(run.records.len(), specs.len());

            let total_burst: i64 = specs.iter().map(|s| s.burst_time).sum();
            assert_eq!(run.timeline.busy_time(), total_burst);

            for r in &run.records {
                assert_eq!(r.remaining_time, 0);
                assert_eq!(run.timeline.executed_time(&r.id), r.burst_time);

                let start = r.start_time.unwrap();
                let finish = r.finish_time.unwrap();
                assert!(r.arrival_time <= start && start <= finish);
                assert_eq!(r.turnaround_time, finish - r.arrival_time);
                assert_eq!(r.waiting_time, start - r.arrival_time);

                let first = run.timeline.slices_for(&r.id)[0].start;
                assert!(first >= r.arrival_time);
            }
        }
    }
}

#[test]
fn test_determinism() {
    for specs in workloads() {
        for policy in all_policies() {
            let a = policy.run(&specs);
            let b = policy.run(&specs);
            assert_eq!(a, b);
            assert_eq!(
                RunMetrics::calculate(&a.records),
                RunMetrics::calculate(&b.records)
            );
        }
    }
}

#[test]
fn test_output_finish_times_non_decreasing() {
    // Keeps the last-record utilization rule equal to max-finish.
    for specs in workloads() {
        for policy in all_policies() {
            let run = policy.run(&specs);
            assert!(run
                .records
                .windows(2)
                .all(|w| w[0].finish_time <= w[1].finish_time));
        }
    }
}

#[test]
fn test_rr_fairness_between_dispatches() {
    // A re-queued process waits at most one quantum per process ahead of
    // it; later arrivals join behind it.
    for specs in workloads() {
        for q in [1, 2, 3] {
            let run = RoundRobin::new(q).unwrap().run(&specs);
            let (_, requeues) = quantum_rr_with_requeues(&specs, q);
            for r in &run.records {
                let slices = run.timeline.slices_for(&r.id);
                for pair in slices.windows(2) {
                    let preempted_at = pair[0].end;
                    let ahead = requeues
                        .iter()
                        .find(|(id, t, _)| *id == r.id && *t == preempted_at)
                        .map(|&(_, _, ahead)| ahead)
                        .unwrap();
                    let gap = pair[1].start - preempted_at;
                    assert!(
                        gap <= ahead as i64 * q,
                        "'{}' waited {gap} behind {ahead} with q={q}",
                        r.id
                    );
                }
            }
        }
    }
}

#[test]
fn test_rr_fairness_ignores_processes_not_yet_arrived() {
    // Three processes exist, but only A and B are ready when A is first
    // preempted, so A waits one quantum, not two.
    let specs = vec![
        ProcessSpec::new("A", 0, 4).unwrap(),
        ProcessSpec::new("B", 0, 4).unwrap(),
        ProcessSpec::new("C", 50, 1).unwrap(),
    ];
    let run = RoundRobin::new(2).unwrap().run(&specs);
    let a = run.timeline.slices_for("A");
    assert_eq!(a[1].start - a[0].end, 2);

    let (_, requeues) = quantum_rr_with_requeues(&specs, 2);
    assert_eq!(requeues[0], ("A".to_string(), 2, 1));
}

#[test]
fn test_srt_simultaneous_shorter_finishes_first() {
    for seed in 0..20 {
        let specs = RandomWorkload::new(6)
            .with_arrivals(0, 0)
            .with_bursts(1, 9)
            .with_seed(seed)
            .specs();
        let run = Srt::new().run(&specs);
        assert!(run
            .records
            .windows(2)
            .all(|w| w[0].burst_time <= w[1].burst_time));
    }
}

#[test]
fn test_first_dispatch_never_later_than_last() {
    for specs in workloads() {
        let last = Srt::new().run(&specs);
        let first = Srt::new()
            .with_start_time_mode(StartTimeMode::FirstDispatch)
            .run(&specs);
        for r in &first.records {
            let l = last.record(&r.id).unwrap();
            assert!(r.start_time <= l.start_time);
            assert_eq!(r.finish_time, l.finish_time);
        }
    }
}
