/*!
 * Process Table
 * Arena of processes indexed by position, with a by-name index
 */

use super::types::Process;
use crate::core::types::ProcessId;
use ahash::AHashMap;

/// The process set shared by every run of a session
///
/// Positions are stable and double as [`ProcessId`]s, so input order is
/// the tie-breaking order for every policy.
#[derive(Debug, Clone, Default)]
pub struct ProcessTable {
    processes: Vec<Process>,
    by_name: AHashMap<String, ProcessId>,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a process; returns `None` if the name is already taken
    pub fn insert(&mut self, process: Process) -> Option<ProcessId> {
        let id = self.processes.len();
        let name = process.name.to_string();
        if self.by_name.contains_key(&name) {
            return None;
        }
        self.by_name.insert(name, id);
        self.processes.push(process);
        Some(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    #[inline(always)]
    pub fn get(&self, id: ProcessId) -> &Process {
        &self.processes[id]
    }

    #[inline(always)]
    pub fn get_mut(&mut self, id: ProcessId) -> &mut Process {
        &mut self.processes[id]
    }

    pub fn id_of(&self, name: &str) -> Option<ProcessId> {
        self.by_name.get(name).copied()
    }

    pub fn by_name(&self, name: &str) -> Option<&Process> {
        self.id_of(name).map(|id| self.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    pub fn ids(&self) -> std::ops::Range<ProcessId> {
        0..self.processes.len()
    }

    /// Reset every process ahead of a new run
    pub fn reset(&mut self) {
        self.processes.iter_mut().for_each(Process::reset);
    }

    /// Ids sorted by arrival time; equal arrivals keep input order
    pub fn arrival_order(&self) -> Vec<ProcessId> {
        let mut ids: Vec<ProcessId> = self.ids().collect();
        ids.sort_by_key(|&id| self.processes[id].arrival_time);
        ids
    }

    pub fn calculate_stats(&mut self) {
        self.processes.iter_mut().for_each(Process::calculate_stats);
    }
}

impl FromIterator<Process> for ProcessTable {
    /// Collects a set with unique names; a duplicate is a caller bug
    ///
    /// Use [`ProcessTable::insert`] where duplicates must be reported.
    fn from_iter<I: IntoIterator<Item = Process>>(iter: I) -> Self {
        let mut table = Self::new();
        for process in iter {
            let name = process.name.clone();
            let inserted = table.insert(process);
            debug_assert!(inserted.is_some(), "Duplicate process name: {name}");
        }
        table
    }
}
