/*!
 * Scheduler Benchmarks
 * Every policy over seeded random workloads of increasing size
 */

use cpu_sched_sim::{Algorithm, Process, ProcessTable, Simulation};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALGORITHMS: [Algorithm; 8] = [
    Algorithm::Fcfs,
    Algorithm::RoundRobin { quantum: 4 },
    Algorithm::Spn,
    Algorithm::Srt,
    Algorithm::Hrrn,
    Algorithm::FeedbackUnit { queues: 3 },
    Algorithm::FeedbackExponential { queues: 3 },
    Algorithm::Aging { quantum: 2 },
];

/// Random arrivals and bursts, with a horizon past the last arrival
fn workload(processes: usize, seed: u64) -> (ProcessTable, u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut horizon: u64 = 0;
    let table = (0..processes)
        .map(|i| {
            let arrival = rng.gen_range(0..processes as u64 * 2);
            let service = rng.gen_range(1..=10);
            horizon = horizon.max(arrival) + service;
            Process::new(format!("P{i}"), arrival, service).with_priority(rng.gen_range(0..10))
        })
        .collect();
    (table, horizon)
}

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("policies");

    for size in [8usize, 64, 256] {
        let (table, horizon) = workload(size, 0x5eed);
        group.throughput(Throughput::Elements(horizon));

        for algorithm in ALGORITHMS {
            group.bench_with_input(
                BenchmarkId::new(algorithm.as_str(), size),
                &algorithm,
                |b, &algorithm| {
                    let mut simulation = Simulation::new(table.clone(), horizon);
                    b.iter(|| black_box(simulation.run(black_box(algorithm))));
                },
            );
        }
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let (table, horizon) = workload(64, 42);

    c.bench_function("session_all_policies", |b| {
        let mut simulation = Simulation::new(table.clone(), horizon);
        b.iter(|| {
            for algorithm in ALGORITHMS {
                black_box(simulation.run(algorithm));
            }
        });
    });
}

criterion_group!(benches, bench_policies, bench_session);
criterion_main!(benches);
