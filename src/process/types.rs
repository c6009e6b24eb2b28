/*!
 * Process Types
 * The schedulable unit and its per-run statistics
 */

use crate::core::types::{Priority, ProcessName, Tick};
use serde::Serialize;

/// Where a process ended up once a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CompletionStatus {
    /// Remaining time reached zero at `finish_time`
    Finished { finish_time: Tick },
    /// The horizon was reached first
    IncompleteAtHorizon { remaining_time: Tick },
}

impl CompletionStatus {
    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }
}

/// A single CPU burst competing for the simulated processor
///
/// Static configuration is set once from the input. Everything else is
/// run-scoped and must be cleared with [`Process::reset`] before each run;
/// the [`Run`](crate::scheduler::Run) scaffold does this itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Process {
    pub name: ProcessName,
    pub arrival_time: Tick,
    pub service_time: Tick,
    /// Base priority, only meaningful to Aging
    pub priority: Priority,

    remaining_time: Tick,
    finish_time: Option<Tick>,
    start_time: Option<Tick>,
    wait_time: Tick,
    turnaround_time: Option<Tick>,
    normalized_turnaround: Option<f64>,
}

impl Process {
    #[must_use]
    pub fn new(name: impl Into<ProcessName>, arrival_time: Tick, service_time: Tick) -> Self {
        Self {
            name: name.into(),
            arrival_time,
            service_time,
            priority: 0,
            remaining_time: service_time,
            finish_time: None,
            start_time: None,
            wait_time: 0,
            turnaround_time: None,
            normalized_turnaround: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Clear all run-scoped state
    pub fn reset(&mut self) {
        self.remaining_time = self.service_time;
        self.finish_time = None;
        self.start_time = None;
        self.wait_time = 0;
        self.turnaround_time = None;
        self.normalized_turnaround = None;
    }

    #[inline(always)]
    #[must_use]
    pub const fn remaining_time(&self) -> Tick {
        self.remaining_time
    }

    #[inline(always)]
    #[must_use]
    pub const fn finish_time(&self) -> Option<Tick> {
        self.finish_time
    }

    /// First tick this process executed in the current run
    #[inline]
    #[must_use]
    pub const fn start_time(&self) -> Option<Tick> {
        self.start_time
    }

    /// Ticks spent marked as waiting in the current run
    #[inline]
    #[must_use]
    pub const fn wait_time(&self) -> Tick {
        self.wait_time
    }

    #[inline]
    #[must_use]
    pub const fn turnaround_time(&self) -> Option<Tick> {
        self.turnaround_time
    }

    #[inline]
    #[must_use]
    pub const fn normalized_turnaround(&self) -> Option<f64> {
        self.normalized_turnaround
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    #[inline(always)]
    #[must_use]
    pub const fn has_arrived(&self, at: Tick) -> bool {
        self.arrival_time <= at
    }

    /// Arrived by `at` and still has CPU demand left
    #[inline(always)]
    #[must_use]
    pub const fn is_ready(&self, at: Tick) -> bool {
        self.has_arrived(at) && !self.is_complete()
    }

    #[must_use]
    pub fn status(&self) -> CompletionStatus {
        match self.finish_time {
            Some(finish_time) => CompletionStatus::Finished { finish_time },
            None => CompletionStatus::IncompleteAtHorizon {
                remaining_time: self.remaining_time,
            },
        }
    }

    /// Consume the tick `[at, at + 1)`; returns true if this completed the process
    pub(crate) fn execute_tick(&mut self, at: Tick) -> bool {
        debug_assert!(
            self.is_ready(at),
            "Process {} executed at {} while not ready",
            self.name,
            at
        );

        self.start_time.get_or_insert(at);
        self.remaining_time -= 1;
        if self.remaining_time == 0 {
            debug_assert!(self.finish_time.is_none(), "finish_time set twice");
            self.finish_time = Some(at + 1);
            return true;
        }
        false
    }

    pub(crate) fn record_wait(&mut self) {
        self.wait_time += 1;
    }

    /// Derive turnaround statistics; incomplete processes get none
    pub fn calculate_stats(&mut self) {
        self.turnaround_time = self
            .finish_time
            .map(|finish| finish.saturating_sub(self.arrival_time));
        self.normalized_turnaround = self.turnaround_time.map(|turnaround| {
            if self.service_time > 0 {
                turnaround as f64 / self.service_time as f64
            } else {
                0.0
            }
        });
    }

    /// Snapshot of the statistics for reporting
    #[must_use]
    pub fn stats(&self) -> ProcessStats {
        ProcessStats {
            name: self.name.clone(),
            arrival_time: self.arrival_time,
            service_time: self.service_time,
            priority: self.priority,
            status: self.status(),
            finish_time: self.finish_time,
            turnaround_time: self.turnaround_time,
            normalized_turnaround: self.normalized_turnaround,
            start_time: self.start_time,
            wait_time: self.wait_time,
        }
    }
}

/// Terminal per-process statistics of one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessStats {
    pub name: ProcessName,
    pub arrival_time: Tick,
    pub service_time: Tick,
    pub priority: Priority,
    pub status: CompletionStatus,
    pub finish_time: Option<Tick>,
    pub turnaround_time: Option<Tick>,
    pub normalized_turnaround: Option<f64>,
    pub start_time: Option<Tick>,
    pub wait_time: Tick,
}

impl ProcessStats {
    /// Delay between arrival and first execution
    #[must_use]
    pub fn response_time(&self) -> Option<Tick> {
        self.start_time
            .map(|start| start.saturating_sub(self.arrival_time))
    }
}
