/*!
 * Highest Response Ratio Next
 * Non-preemptive; favors long waits relative to service demand
 */

use super::run::Run;
use super::traits::Discipline;
use crate::core::types::{ProcessId, Tick};
use std::cmp::Ordering;

/// `(wait + service) / service`, compared exactly by cross-multiplication
///
/// Equal to `1 + wait / service`, so only `wait / service` is compared.
/// Both cross products fit in a `u128` for any pair of `u64` operands.
#[derive(Debug, Clone, Copy)]
pub struct ResponseRatio {
    wait: Tick,
    service: Tick,
}

impl ResponseRatio {
    pub fn new(now: Tick, arrival_time: Tick, service_time: Tick) -> Self {
        Self {
            wait: now.saturating_sub(arrival_time),
            service: service_time.max(1),
        }
    }

    pub fn as_f64(&self) -> f64 {
        1.0 + self.wait as f64 / self.service as f64
    }
}

impl PartialEq for ResponseRatio {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ResponseRatio {}

impl Ord for ResponseRatio {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = u128::from(self.wait) * u128::from(other.service);
        let rhs = u128::from(other.wait) * u128::from(self.service);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for ResponseRatio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Hrrn;

impl Hrrn {
    /// Strict maximum; an equal ratio later in input order does not win
    fn select(run: &Run<'_>) -> Option<ProcessId> {
        let now = run.now();
        let mut best: Option<(ProcessId, ResponseRatio)> = None;

        for id in run.ready() {
            let process = run.process(id);
            let ratio = ResponseRatio::new(now, process.arrival_time, process.service_time);
            if best.map_or(true, |(_, current)| ratio > current) {
                best = Some((id, ratio));
            }
        }
        best.map(|(id, _)| id)
    }
}

impl Discipline for Hrrn {
    fn schedule(&mut self, run: &mut Run<'_>) {
        while !run.is_finished() {
            match Self::select(run) {
                Some(id) => {
                    let remaining = run.process(id).remaining_time();
                    run.dispatch(id, remaining);
                    run.run_to_completion(id);
                }
                None => {
                    if !run.idle_until_next_arrival() {
                        break;
                    }
                }
            }
        }
    }
}
