/*!
 * Execution Timeline
 * Per-tick state of every process over one run
 */

use crate::core::types::{ProcessId, Tick};
use serde::Serialize;

/// What a process was doing during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    /// Not arrived yet, already finished, or the CPU idled
    #[default]
    Idle,
    Executing,
    Waiting,
}

impl Mark {
    #[inline(always)]
    pub const fn symbol(self) -> char {
        match self {
            Self::Idle => ' ',
            Self::Executing => '*',
            Self::Waiting => '.',
        }
    }
}

/// Grid of marks, one row per process, one column per tick in `[0, last_instant)`
///
/// Marks outside the horizon are dropped. Waiting never overwrites
/// executing, so the two stay mutually exclusive per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    last_instant: Tick,
    rows: Vec<Vec<Mark>>,
}

impl Timeline {
    pub fn new(process_count: usize, last_instant: Tick) -> Self {
        let width = usize::try_from(last_instant).unwrap_or(usize::MAX);
        Self {
            last_instant,
            rows: vec![vec![Mark::Idle; width]; process_count],
        }
    }

    #[inline]
    pub const fn last_instant(&self) -> Tick {
        self.last_instant
    }

    #[inline]
    pub fn process_count(&self) -> usize {
        self.rows.len()
    }

    fn cell_mut(&mut self, id: ProcessId, at: Tick) -> Option<&mut Mark> {
        let column = usize::try_from(at).ok()?;
        self.rows.get_mut(id)?.get_mut(column)
    }

    pub fn mark_executing(&mut self, id: ProcessId, at: Tick) {
        if let Some(cell) = self.cell_mut(id, at) {
            *cell = Mark::Executing;
        }
    }

    pub fn mark_waiting(&mut self, id: ProcessId, at: Tick) {
        if let Some(cell) = self.cell_mut(id, at) {
            if *cell == Mark::Idle {
                *cell = Mark::Waiting;
            }
        }
    }

    pub fn mark(&self, id: ProcessId, at: Tick) -> Mark {
        usize::try_from(at)
            .ok()
            .and_then(|column| self.rows.get(id)?.get(column).copied())
            .unwrap_or_default()
    }

    pub fn row(&self, id: ProcessId) -> &[Mark] {
        &self.rows[id]
    }

    /// Row rendered as its mark symbols
    pub fn row_symbols(&self, id: ProcessId) -> String {
        self.rows[id].iter().map(|m| m.symbol()).collect()
    }

    /// Processes marked executing at `at`
    pub fn executing_at(&self, at: Tick) -> Vec<ProcessId> {
        (0..self.rows.len())
            .filter(|&id| self.mark(id, at) == Mark::Executing)
            .collect()
    }

    /// Number of ticks `id` spent executing
    pub fn executed_ticks(&self, id: ProcessId) -> usize {
        self.rows[id]
            .iter()
            .filter(|&&m| m == Mark::Executing)
            .count()
    }

    /// Maximal runs of consecutive executing ticks as `(start, len)`
    pub fn executing_blocks(&self, id: ProcessId) -> Vec<(Tick, Tick)> {
        let mut blocks = Vec::new();
        let mut current: Option<(Tick, Tick)> = None;

        for (column, mark) in self.rows[id].iter().enumerate() {
            let at = column as Tick;
            match (mark, current.as_mut()) {
                (Mark::Executing, Some((_, len))) => *len += 1,
                (Mark::Executing, None) => current = Some((at, 1)),
                (_, Some(_)) => blocks.extend(current.take()),
                (_, None) => {}
            }
        }
        blocks.extend(current);
        blocks
    }
}
