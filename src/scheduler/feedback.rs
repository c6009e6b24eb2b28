/*!
 * Multilevel Feedback
 * FB-1 and FB-2i: arrivals enter the top level, unfinished slices demote
 */

use super::run::{Arrivals, Run};
use super::traits::Discipline;
use super::types::QuantumGrowth;
use crate::core::types::{ProcessId, Tick};
use std::collections::VecDeque;
use tracing::trace;

/// One queue movement, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueEvent {
    Enqueued { id: ProcessId, level: usize },
    Dispatched { id: ProcessId, level: usize },
}

/// Feedback queues, level 0 being the most urgent
#[derive(Debug, Clone)]
pub struct Feedback {
    growth: QuantumGrowth,
    queues: Vec<VecDeque<ProcessId>>,
    /// Current level of every admitted process
    levels: Vec<Option<usize>>,
    history: Vec<QueueEvent>,
}

impl Feedback {
    pub fn new(growth: QuantumGrowth, num_queues: usize) -> Self {
        Self {
            growth,
            queues: vec![VecDeque::new(); num_queues.max(1)],
            levels: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn num_queues(&self) -> usize {
        self.queues.len()
    }

    /// Time slice granted at `level`
    pub fn quantum(&self, level: usize) -> Tick {
        Tick::from(self.growth.quantum(level))
    }

    /// Level a process was last queued at; `None` if it never arrived
    pub fn level_of(&self, id: ProcessId) -> Option<usize> {
        self.levels.get(id).copied().flatten()
    }

    /// Every enqueue and dispatch of the last run
    pub fn history(&self) -> &[QueueEvent] {
        &self.history
    }

    fn enqueue(&mut self, id: ProcessId, level: usize) {
        debug_assert!(
            self.queues.iter().all(|q| !q.contains(&id)),
            "Process {id} already queued"
        );
        debug_assert!(
            self.level_of(id).map_or(true, |previous| previous <= level),
            "Process {id} promoted"
        );

        self.levels[id] = Some(level);
        self.queues[level].push_back(id);
        self.history.push(QueueEvent::Enqueued { id, level });
    }

    /// Head of the most urgent non-empty queue
    fn pop(&mut self) -> Option<(ProcessId, usize)> {
        let (id, level) = self
            .queues
            .iter_mut()
            .enumerate()
            .find_map(|(level, queue)| queue.pop_front().map(|id| (id, level)))?;
        self.history.push(QueueEvent::Dispatched { id, level });
        Some((id, level))
    }
}

impl Discipline for Feedback {
    fn schedule(&mut self, run: &mut Run<'_>) {
        self.queues.iter_mut().for_each(VecDeque::clear);
        self.levels = vec![None; run.process_count()];
        self.history.clear();
        let bottom = self.queues.len() - 1;
        let mut arrivals = Arrivals::new(run);

        while !run.is_finished() {
            for id in arrivals.admit_through(run, run.now()) {
                self.enqueue(id, 0);
            }

            let Some((id, level)) = self.pop() else {
                match arrivals.peek(run) {
                    Some(at) if run.advance_to(at) => continue,
                    _ => break,
                }
            };

            let slice = run.process(id).remaining_time().min(self.quantum(level));
            run.dispatch(id, slice);
            run.execute_for(id, slice);

            for arrived in arrivals.admit_before(run, run.now()) {
                self.enqueue(arrived, 0);
            }

            if !run.process(id).is_complete() {
                let next_level = (level + 1).min(bottom);
                trace!(process = id, from = level, to = next_level, "Demoted");
                run.preempt(id);
                self.enqueue(id, next_level);
            }
        }
    }
}
