/*!
 * Property Tests
 * Invariants every policy must hold on arbitrary workloads
 */

use cpu_sched_sim::scheduler::{Feedback, QuantumGrowth, QueueEvent, Run};
use cpu_sched_sim::{Algorithm, Mark, Process, ProcessTable, RunReport, Simulation, Timeline};
use proptest::prelude::*;

fn workload() -> impl Strategy<Value = Vec<(u64, u64)>> {
    prop::collection::vec((0u64..12, 1u64..7), 1..7)
}

fn algorithm() -> impl Strategy<Value = Algorithm> {
    (0usize..8, 1u32..5, 1usize..5).prop_map(|(kind, quantum, queues)| match kind {
        0 => Algorithm::Fcfs,
        1 => Algorithm::RoundRobin { quantum },
        2 => Algorithm::Spn,
        3 => Algorithm::Srt,
        4 => Algorithm::Hrrn,
        5 => Algorithm::FeedbackUnit { queues },
        6 => Algorithm::FeedbackExponential { queues },
        _ => Algorithm::Aging { quantum },
    })
}

fn table(workload: &[(u64, u64)]) -> ProcessTable {
    workload
        .iter()
        .enumerate()
        .map(|(i, &(arrival, service))| {
            Process::new(format!("P{i}"), arrival, service).with_priority(service)
        })
        .collect()
}

fn simulate(workload: &[(u64, u64)], algorithm: Algorithm, last_instant: u64) -> RunReport {
    Simulation::new(table(workload), last_instant).run(algorithm)
}

proptest! {
    #[test]
    fn at_most_one_process_executes_per_tick(
        workload in workload(),
        algorithm in algorithm(),
        last_instant in 1u64..60,
    ) {
        let report = simulate(&workload, algorithm, last_instant);
        for at in 0..last_instant {
            prop_assert!(report.timeline.executing_at(at).len() <= 1);
        }
    }

    #[test]
    fn finished_processes_account_for_their_service(
        workload in workload(),
        algorithm in algorithm(),
        last_instant in 1u64..60,
    ) {
        let report = simulate(&workload, algorithm, last_instant);
        for (id, stats) in report.stats.iter().enumerate() {
            let executed = report.timeline.executed_ticks(id) as u64;
            match stats.finish_time {
                Some(finish) => {
                    prop_assert_eq!(executed, stats.service_time);
                    prop_assert!(finish >= stats.arrival_time + stats.service_time);
                    prop_assert!(finish <= last_instant);
                    let turnaround = finish - stats.arrival_time;
                    prop_assert_eq!(stats.turnaround_time, Some(turnaround));
                    let normalized = turnaround as f64 / stats.service_time as f64;
                    prop_assert_eq!(stats.normalized_turnaround, Some(normalized));
                    // Nothing is marked after completion
                    for at in finish..last_instant {
                        prop_assert_eq!(report.timeline.mark(id, at), Mark::Idle);
                    }
                }
                None => {
                    prop_assert!(executed < stats.service_time);
                    prop_assert_eq!(stats.turnaround_time, None);
                }
            }
            // Nothing is marked before arrival
            for at in 0..stats.arrival_time.min(last_instant) {
                prop_assert_eq!(report.timeline.mark(id, at), Mark::Idle);
            }
        }
    }

    #[test]
    fn everything_finishes_with_enough_time(
        workload in workload(),
        algorithm in algorithm(),
    ) {
        let total: u64 = workload.iter().map(|&(_, service)| service).sum();
        let latest = workload.iter().map(|&(arrival, _)| arrival).max().unwrap_or(0);
        let report = simulate(&workload, algorithm, latest + total);
        prop_assert_eq!(report.finished_count(), workload.len());
    }

    #[test]
    fn fcfs_runs_contiguously_in_arrival_order(
        workload in workload(),
        last_instant in 1u64..60,
    ) {
        let report = simulate(&workload, Algorithm::Fcfs, last_instant);
        let mut starts = Vec::new();
        for id in 0..workload.len() {
            let blocks = report.timeline.executing_blocks(id);
            prop_assert!(blocks.len() <= 1);
            if let Some(&(start, _)) = blocks.first() {
                starts.push((start, workload[id].0, id));
            }
        }
        starts.sort();
        for pair in starts.windows(2) {
            let (_, earlier_arrival, earlier_id) = pair[0];
            let (_, later_arrival, later_id) = pair[1];
            prop_assert!(
                (earlier_arrival, earlier_id) < (later_arrival, later_id),
                "{:?} ran before {:?}", pair[0], pair[1]
            );
        }
    }

    #[test]
    fn round_robin_blocks_fit_the_quantum(
        services in prop::collection::vec(1u64..7, 2..6),
        quantum in 1u32..5,
    ) {
        // With everyone present from the start, the queue only ever leaves a
        // process alone once the others are done, so only its last block can
        // span several slices
        let workload: Vec<(u64, u64)> = services.iter().map(|&s| (0, s)).collect();
        let total: u64 = services.iter().sum();
        let report = simulate(&workload, Algorithm::RoundRobin { quantum }, total);

        for id in 0..workload.len() {
            let blocks = report.timeline.executing_blocks(id);
            if let Some((_, earlier)) = blocks.split_last() {
                for &(_, len) in earlier {
                    prop_assert!(len <= u64::from(quantum));
                }
            }
        }
    }

    #[test]
    fn feedback_levels_only_descend_and_queues_stay_unique(
        workload in workload(),
        queues in 1usize..5,
        exponential in any::<bool>(),
    ) {
        let growth = if exponential { QuantumGrowth::Exponential } else { QuantumGrowth::Unit };
        let mut processes = table(&workload);
        let mut timeline = Timeline::new(processes.len(), 80);
        let mut policy = Feedback::new(growth, queues);
        Run::new(&mut processes, &mut timeline).run(&mut policy);

        let mut queued = vec![false; workload.len()];
        let mut last_level: Vec<Option<usize>> = vec![None; workload.len()];
        for &event in policy.history() {
            match event {
                QueueEvent::Enqueued { id, level } => {
                    prop_assert!(!queued[id], "P{} queued twice", id);
                    prop_assert!(level < queues);
                    prop_assert!(last_level[id].map_or(true, |previous| previous <= level));
                    queued[id] = true;
                    last_level[id] = Some(level);
                }
                QueueEvent::Dispatched { id, level } => {
                    prop_assert!(queued[id]);
                    prop_assert_eq!(last_level[id], Some(level));
                    queued[id] = false;
                }
            }
        }

        for id in 0..workload.len() {
            prop_assert!(policy.level_of(id).is_some());
            prop_assert_eq!(policy.level_of(id), last_level[id]);
        }
    }
}
