/*!
 * Priority Aging
 * Highest current priority runs; waiting processes age at each reselection
 *
 * Aging is quantized: priorities only change at reselection instants
 * (no current process, quantum exhausted, or current process finished),
 * never on the ticks in between.
 */

use super::run::Run;
use super::traits::Discipline;
use crate::core::types::{Priority, ProcessId, Quantum, Tick};
use std::cmp::Reverse;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Aging {
    quantum: Quantum,
    initial_priority: Vec<Priority>,
    current_priority: Vec<Priority>,
}

impl Aging {
    pub fn new(quantum: Quantum) -> Self {
        Self {
            quantum: quantum.max(1),
            initial_priority: Vec::new(),
            current_priority: Vec::new(),
        }
    }

    pub const fn quantum(&self) -> Quantum {
        self.quantum
    }

    /// Aged priority of `id` as of the last reselection
    pub fn current_priority(&self, id: ProcessId) -> Option<Priority> {
        self.current_priority.get(id).copied()
    }

    /// Reset the outgoing process, age everyone else that is ready, pick the winner
    fn reselect(
        &mut self,
        run: &Run<'_>,
        outgoing: Option<ProcessId>,
        ready: &[ProcessId],
    ) -> ProcessId {
        if let Some(id) = outgoing.filter(|&id| !run.process(id).is_complete()) {
            self.current_priority[id] = self.initial_priority[id];
        }

        for &id in ready {
            if Some(id) != outgoing {
                self.current_priority[id] = self.current_priority[id].saturating_add(1);
            }
        }

        // Strict comparison keeps the first of equal keys in input order
        let key = |id: ProcessId| {
            (
                self.current_priority[id],
                Reverse(run.process(id).arrival_time),
            )
        };
        let mut best = ready[0];
        for &id in &ready[1..] {
            if key(id) > key(best) {
                best = id;
            }
        }

        debug!(
            at = run.now(),
            process = %run.process(best).name,
            priority = self.current_priority[best],
            "Aging reselection"
        );
        best
    }
}

impl Discipline for Aging {
    fn schedule(&mut self, run: &mut Run<'_>) {
        self.initial_priority = run.ids().map(|id| run.process(id).priority).collect();
        self.current_priority = self.initial_priority.clone();

        let quantum = Tick::from(self.quantum);
        let mut running: Option<ProcessId> = None;
        let mut used: Tick = 0;

        while !run.is_finished() {
            let ready = run.ready();
            if ready.is_empty() {
                if !run.idle_until_next_arrival() {
                    break;
                }
                continue;
            }

            let id = match running {
                Some(id) if used < quantum => id,
                outgoing => {
                    let next = self.reselect(run, outgoing, &ready);
                    if let Some(previous) = outgoing {
                        if previous != next {
                            run.preempt(previous);
                        }
                    }
                    if outgoing != Some(next) {
                        run.dispatch(next, quantum);
                    }
                    used = 0;
                    next
                }
            };

            used += 1;
            running = if run.execute(id) { None } else { Some(id) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Timeline;
    use crate::process::{Process, ProcessTable};

    #[test]
    fn test_low_priority_eventually_runs() {
        let mut processes: ProcessTable = [
            Process::new("Hi", 0, 6).with_priority(3),
            Process::new("Lo", 0, 2).with_priority(1),
        ]
        .into_iter()
        .collect();
        let mut timeline = Timeline::new(2, 8);
        Run::new(&mut processes, &mut timeline).run(&mut Aging::new(1));

        // t0: Hi 4 vs Lo 2 -> Hi; t1: Hi reset 3, Lo 3 -> Hi (equal arrival, input
        // order); t2: Lo 4 -> Lo; t3: Lo reset 1, Hi 4 -> Hi; Lo climbs back by t6
        assert_eq!(timeline.row_symbols(0), "**.***.*");
        assert_eq!(timeline.row_symbols(1), "..*...* ");
        assert_eq!(processes.get(1).finish_time(), Some(7));
        assert_eq!(processes.get(0).finish_time(), Some(8));
    }

    #[test]
    fn test_priorities_only_age_at_reselection() {
        let mut processes: ProcessTable = [
            Process::new("A", 0, 4).with_priority(5),
            Process::new("B", 0, 1).with_priority(0),
        ]
        .into_iter()
        .collect();
        let mut timeline = Timeline::new(2, 3);
        let mut policy = Aging::new(4);
        Run::new(&mut processes, &mut timeline).run(&mut policy);

        // One reselection at t0 over the three simulated ticks: B aged once, not three times
        assert_eq!(timeline.row_symbols(0), "***");
        assert_eq!(policy.current_priority(1), Some(1));
    }

    #[test]
    fn test_priority_saturates_at_the_maximum() {
        let mut processes: ProcessTable = [
            Process::new("A", 0, u64::MAX).with_priority(u64::MAX),
            Process::new("B", 0, u64::MAX).with_priority(u64::MAX),
        ]
        .into_iter()
        .collect();
        let mut timeline = Timeline::new(2, 8);
        let mut policy = Aging::new(1);
        Run::new(&mut processes, &mut timeline).run(&mut policy);

        // B cannot climb past A, so the tie keeps A on the CPU
        assert_eq!(timeline.row_symbols(0), "********");
        assert_eq!(timeline.row_symbols(1), "........");
        assert_eq!(policy.current_priority(1), Some(u64::MAX));
    }
}
