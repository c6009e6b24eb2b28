/*!
 * Simulation Session
 * Runs each requested algorithm against the same process set
 */

use crate::core::config::RuntimeConfig;
use crate::core::errors::SchedulerResult;
use crate::core::types::Tick;
use crate::input::SimulationInput;
use crate::output::Timeline;
use crate::process::{ProcessStats, ProcessTable};
use crate::scheduler::{Algorithm, AlgorithmSpec, Policy, Run, RunCounters};
use tracing::{debug, info};

/// Result of one algorithm over the session's processes
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Name shown in report headers
    pub algorithm: String,
    pub timeline: Timeline,
    /// Per-process statistics in input order
    pub stats: Vec<ProcessStats>,
    pub counters: RunCounters,
}

impl RunReport {
    pub fn finished_count(&self) -> usize {
        self.stats.iter().filter(|s| s.status.is_finished()).count()
    }

    pub fn stats_of(&self, name: &str) -> Option<&ProcessStats> {
        self.stats.iter().find(|s| s.name.as_str() == name)
    }

    /// Mean turnaround over finished processes
    pub fn mean_turnaround(&self) -> Option<f64> {
        mean(self.stats.iter().filter_map(|s| s.turnaround_time.map(|t| t as f64)))
    }

    /// Mean normalized turnaround over finished processes
    pub fn mean_normalized_turnaround(&self) -> Option<f64> {
        mean(self.stats.iter().filter_map(|s| s.normalized_turnaround))
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

/// The process set and horizon shared by every run of a session
///
/// Each run resets the processes first, so runs never observe each
/// other's state and the order of algorithms does not matter.
#[derive(Debug, Clone)]
pub struct Simulation {
    processes: ProcessTable,
    last_instant: Tick,
    config: RuntimeConfig,
}

impl Simulation {
    pub fn new(processes: ProcessTable, last_instant: Tick) -> Self {
        Self {
            processes,
            last_instant,
            config: RuntimeConfig::default(),
        }
    }

    /// Take the processes and horizon from parsed input
    pub fn from_input(input: SimulationInput) -> Self {
        Self::new(input.processes, input.last_instant)
    }

    pub fn with_config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn processes(&self) -> &ProcessTable {
        &self.processes
    }

    pub const fn last_instant(&self) -> Tick {
        self.last_instant
    }

    /// Run a resolved algorithm, reporting it under its canonical name
    pub fn run(&mut self, algorithm: Algorithm) -> RunReport {
        self.run_named(algorithm.to_string(), algorithm)
    }

    /// Resolve and run one selection as written in the input
    pub fn run_spec(&mut self, spec: &AlgorithmSpec) -> SchedulerResult<RunReport> {
        let algorithm = spec.resolve(self.config.feedback_queues).map_err(|e| {
            debug!(id = %spec.id, error = %e, "Skipping algorithm");
            e
        })?;
        Ok(self.run_named(spec.display_name(), algorithm))
    }

    /// Run every selection in order; failures only affect their own entry
    pub fn run_all(&mut self, specs: &[AlgorithmSpec]) -> Vec<SchedulerResult<RunReport>> {
        specs.iter().map(|spec| self.run_spec(spec)).collect()
    }

    fn run_named(&mut self, name: String, algorithm: Algorithm) -> RunReport {
        info!(
            algorithm = %name,
            processes = self.processes.len(),
            last_instant = self.last_instant,
            "Starting run"
        );

        let mut timeline = Timeline::new(self.processes.len(), self.last_instant);
        let mut policy = Policy::from(algorithm);
        let counters = Run::new(&mut self.processes, &mut timeline).run(&mut policy);
        let stats: Vec<ProcessStats> = self.processes.iter().map(|p| p.stats()).collect();

        let report = RunReport {
            algorithm: name,
            timeline,
            stats,
            counters,
        };
        info!(
            algorithm = %report.algorithm,
            finished = report.finished_count(),
            dispatches = counters.dispatches,
            mean_turnaround = ?report.mean_turnaround(),
            "Run complete"
        );
        report
    }
}
