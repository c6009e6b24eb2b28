/*!
 * Round Robin
 * Preemptive FIFO rotation with a fixed quantum
 */

use super::run::{Arrivals, Run};
use super::traits::Discipline;
use crate::core::types::{ProcessId, Quantum};
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct RoundRobin {
    quantum: Quantum,
    ready_queue: VecDeque<ProcessId>,
}

impl RoundRobin {
    pub fn new(quantum: Quantum) -> Self {
        Self {
            quantum: quantum.max(1),
            ready_queue: VecDeque::new(),
        }
    }

    pub const fn quantum(&self) -> Quantum {
        self.quantum
    }

    fn enqueue(&mut self, id: ProcessId) {
        if !self.ready_queue.contains(&id) {
            self.ready_queue.push_back(id);
        }
    }
}

impl Discipline for RoundRobin {
    fn schedule(&mut self, run: &mut Run<'_>) {
        self.ready_queue.clear();
        let mut arrivals = Arrivals::new(run);

        while !run.is_finished() {
            for id in arrivals.admit_through(run, run.now()) {
                self.enqueue(id);
            }

            let Some(id) = self.ready_queue.pop_front() else {
                match arrivals.peek(run) {
                    Some(at) if run.advance_to(at) => continue,
                    _ => break,
                }
            };

            let slice = run.process(id).remaining_time().min(self.quantum.into());
            run.dispatch(id, slice);
            run.execute_for(id, slice);

            // Arrivals during the slice queue up ahead of the preempted process
            for arrived in arrivals.admit_before(run, run.now()) {
                self.enqueue(arrived);
            }

            if !run.process(id).is_complete() {
                run.preempt(id);
                self.enqueue(id);
            }
        }
    }
}
