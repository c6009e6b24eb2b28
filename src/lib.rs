/*!
 * CPU Scheduling Simulator Library
 * Discrete-time simulation of single-CPU scheduling disciplines
 */

pub mod core;
pub mod input;
pub mod monitoring;
pub mod output;
pub mod process;
pub mod scheduler;
pub mod simulation;

// Re-exports
pub use self::core::{ParseError, ReportFormat, RuntimeConfig, SchedulerError, SimError, SimResult};
pub use input::{parse_input, OutputMode, SimulationInput};
pub use monitoring::init_tracing;
pub use output::{render, Mark, Timeline};
pub use process::{CompletionStatus, Process, ProcessStats, ProcessTable};
pub use scheduler::{Algorithm, AlgorithmSpec, Discipline, Policy, Run, RunCounters};
pub use simulation::{RunReport, Simulation};
