/*!
 * Run Scaffold
 * Clock, horizon and bookkeeping shared by every scheduling discipline
 */

use super::traits::Discipline;
use crate::core::types::{ProcessId, Tick};
use crate::output::Timeline;
use crate::process::{Process, ProcessTable};
use serde::Serialize;
use tracing::{debug, trace};

/// Counters collected while a run advances
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunCounters {
    /// Times a process was handed the CPU for a slice
    pub dispatches: u64,
    /// Slices that ended with the process still incomplete
    pub preemptions: u64,
    /// Ticks whose executing process differs from the previous tick's
    pub context_switches: u64,
    /// Ticks skipped while no process was ready
    pub idle_ticks: Tick,
}

/// One policy invocation over a shared process table
///
/// Creating a `Run` resets every process. The run owns no process state;
/// it only moves the clock, writes marks into the timeline and forwards
/// ticks to the processes.
pub struct Run<'a> {
    processes: &'a mut ProcessTable,
    timeline: &'a mut Timeline,
    last_instant: Tick,
    now: Tick,
    last_executed: Option<ProcessId>,
    counters: RunCounters,
}

impl<'a> Run<'a> {
    pub fn new(processes: &'a mut ProcessTable, timeline: &'a mut Timeline) -> Self {
        debug_assert_eq!(
            processes.len(),
            timeline.process_count(),
            "Timeline rows must match the process table"
        );

        processes.reset();
        let last_instant = timeline.last_instant();
        Self {
            processes,
            timeline,
            last_instant,
            now: 0,
            last_executed: None,
            counters: RunCounters::default(),
        }
    }

    /// Schedule with `policy`, then derive statistics for every process once
    pub fn run<D: Discipline + ?Sized>(mut self, policy: &mut D) -> RunCounters {
        policy.schedule(&mut self);
        self.processes.calculate_stats();

        debug!(
            now = self.now,
            complete = self.all_complete(),
            dispatches = self.counters.dispatches,
            preemptions = self.counters.preemptions,
            "Run finished"
        );
        self.counters
    }

    #[inline(always)]
    pub const fn now(&self) -> Tick {
        self.now
    }

    #[inline(always)]
    pub const fn last_instant(&self) -> Tick {
        self.last_instant
    }

    #[inline]
    pub const fn counters(&self) -> &RunCounters {
        &self.counters
    }

    #[inline(always)]
    pub fn process(&self, id: ProcessId) -> &Process {
        self.processes.get(id)
    }

    #[inline]
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// All ids in input order
    pub fn ids(&self) -> std::ops::Range<ProcessId> {
        self.processes.ids()
    }

    pub fn arrival_order(&self) -> Vec<ProcessId> {
        self.processes.arrival_order()
    }

    #[inline]
    pub const fn horizon_reached(&self) -> bool {
        self.now >= self.last_instant
    }

    pub fn all_complete(&self) -> bool {
        self.processes.iter().all(Process::is_complete)
    }

    /// Nothing more to simulate
    pub fn is_finished(&self) -> bool {
        self.horizon_reached() || self.all_complete()
    }

    /// Arrived, incomplete processes at the current instant, in input order
    pub fn ready(&self) -> Vec<ProcessId> {
        let now = self.now;
        self.ids()
            .filter(|&id| self.processes.get(id).is_ready(now))
            .collect()
    }

    /// Earliest arrival still in the future among incomplete processes
    pub fn next_arrival(&self) -> Option<Tick> {
        self.processes
            .iter()
            .filter(|p| !p.is_complete() && p.arrival_time > self.now)
            .map(|p| p.arrival_time)
            .min()
    }

    /// Move the clock forward to `at` without emitting marks
    ///
    /// Returns false, leaving the clock alone, if `at` is not before the horizon.
    pub fn advance_to(&mut self, at: Tick) -> bool {
        if at >= self.last_instant {
            return false;
        }
        if at > self.now {
            trace!(from = self.now, to = at, "CPU idle");
            self.counters.idle_ticks += at - self.now;
            self.now = at;
            self.last_executed = None;
        }
        true
    }

    /// Idle until the next arrival; false if none arrives before the horizon
    pub fn idle_until_next_arrival(&mut self) -> bool {
        match self.next_arrival() {
            Some(at) => self.advance_to(at),
            None => false,
        }
    }

    /// Record that `id` is handed the CPU for up to `slice` ticks
    pub fn dispatch(&mut self, id: ProcessId, slice: Tick) {
        self.counters.dispatches += 1;
        debug!(
            process = %self.processes.get(id).name,
            at = self.now,
            slice,
            remaining = self.processes.get(id).remaining_time(),
            "Dispatch"
        );
    }

    /// Record that `id` left the CPU before completing
    pub fn preempt(&mut self, id: ProcessId) {
        debug_assert!(!self.processes.get(id).is_complete());
        self.counters.preemptions += 1;
        trace!(process = %self.processes.get(id).name, at = self.now, "Preempted");
    }

    /// Mark every arrived, incomplete process other than `running` as waiting now
    pub fn mark_waiting_except(&mut self, running: ProcessId) {
        let now = self.now;
        for id in self.processes.ids() {
            if id != running && self.processes.get(id).is_ready(now) {
                self.timeline.mark_waiting(id, now);
                self.processes.get_mut(id).record_wait();
            }
        }
    }

    /// Execute `id` for one tick; returns true if it completed
    ///
    /// Must not be called at or past the horizon.
    pub fn execute(&mut self, id: ProcessId) -> bool {
        debug_assert!(!self.horizon_reached(), "Executing past the horizon");

        let now = self.now;
        self.timeline.mark_executing(id, now);
        self.mark_waiting_except(id);

        if self.last_executed != Some(id) {
            if self.last_executed.is_some() {
                self.counters.context_switches += 1;
            }
            self.last_executed = Some(id);
        }

        let completed = self.processes.get_mut(id).execute_tick(now);
        self.now += 1;
        trace!(
            process = id,
            at = now,
            remaining = self.processes.get(id).remaining_time(),
            "Tick"
        );

        if completed {
            debug!(process = %self.processes.get(id).name, at = self.now, "Completed");
        }
        completed
    }

    /// Execute `id` for up to `max_ticks`, stopping early on completion or at
    /// the horizon; returns the number of ticks executed
    pub fn execute_for(&mut self, id: ProcessId, max_ticks: Tick) -> Tick {
        let mut executed = 0;
        while executed < max_ticks && !self.horizon_reached() {
            executed += 1;
            if self.execute(id) {
                break;
            }
        }
        executed
    }

    /// Execute `id` until it completes or the horizon is reached
    pub fn run_to_completion(&mut self, id: ProcessId) -> Tick {
        let remaining = self.processes.get(id).remaining_time();
        self.execute_for(id, remaining)
    }
}

/// Admits processes into a policy's queues in arrival order
///
/// Each process is handed out exactly once, which keeps queue membership
/// unique without scanning the queues.
#[derive(Debug, Clone)]
pub struct Arrivals {
    order: Vec<ProcessId>,
    cursor: usize,
}

impl Arrivals {
    pub fn new(run: &Run<'_>) -> Self {
        Self {
            order: run.arrival_order(),
            cursor: 0,
        }
    }

    /// Processes with `arrival_time <= at` not yet admitted
    pub fn admit_through(&mut self, run: &Run<'_>, at: Tick) -> Vec<ProcessId> {
        self.admit_while(|arrival| arrival <= at, run)
    }

    /// Processes with `arrival_time < at` not yet admitted
    pub fn admit_before(&mut self, run: &Run<'_>, at: Tick) -> Vec<ProcessId> {
        self.admit_while(|arrival| arrival < at, run)
    }

    fn admit_while<F>(&mut self, admit: F, run: &Run<'_>) -> Vec<ProcessId>
    where
        F: Fn(Tick) -> bool,
    {
        let start = self.cursor;
        while let Some(&id) = self.order.get(self.cursor) {
            if !admit(run.process(id).arrival_time) {
                break;
            }
            self.cursor += 1;
        }
        self.order[start..self.cursor]
            .iter()
            .copied()
            .filter(|&id| !run.process(id).is_complete())
            .collect()
    }

    /// Arrival time of the next process not yet admitted
    pub fn peek(&self, run: &Run<'_>) -> Option<Tick> {
        self.order
            .get(self.cursor)
            .map(|&id| run.process(id).arrival_time)
    }
}
