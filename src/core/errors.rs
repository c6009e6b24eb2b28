/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// Input parsing result
pub type ParseResult<T> = Result<T, ParseError>;

/// Policy resolution result
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Errors raised while reading the line-oriented input
///
/// Any of these aborts the session before a single tick is simulated.
#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ParseError {
    #[error("Invalid input format: expected at least {expected} lines, found {found}")]
    #[diagnostic(
        code(parse::too_few_lines),
        help("Input needs mode, algorithms, horizon and process count lines.")
    )]
    TooFewLines { expected: usize, found: usize },

    #[error("Invalid operation: {0}")]
    #[diagnostic(code(parse::invalid_operation), help("Use `trace` or `stats`."))]
    InvalidOperation(String),

    #[error("Malformed algorithm token: {0:?}")]
    #[diagnostic(
        code(parse::malformed_algorithm),
        help("Use an algorithm ID optionally followed by `-quantum`, e.g. `2-4`.")
    )]
    MalformedAlgorithm(String),

    #[error("Invalid {field}: {value:?} is not a non-negative integer")]
    #[diagnostic(code(parse::invalid_integer))]
    InvalidInteger { field: &'static str, value: String },

    #[error("Invalid last instant: {last_instant} exceeds the limit of {max}")]
    #[diagnostic(
        code(parse::horizon_too_large),
        help("The timeline keeps one column per tick; use a shorter horizon.")
    )]
    HorizonTooLarge { last_instant: u64, max: u64 },

    #[error(
        "Invalid input: {processes} processes over {last_instant} ticks exceeds {max} timeline cells"
    )]
    #[diagnostic(
        code(parse::timeline_too_large),
        help("Reduce the process count or the last instant.")
    )]
    TimelineTooLarge {
        processes: usize,
        last_instant: u64,
        max: u64,
    },

    #[error("Invalid input: expected {expected} process definitions, found {found}")]
    #[diagnostic(
        code(parse::missing_processes),
        help("The process count line must match the number of process lines.")
    )]
    MissingProcesses { expected: usize, found: usize },

    #[error("Invalid process definition: {0:?}")]
    #[diagnostic(
        code(parse::malformed_process),
        help("Process lines look like `name,arrival,service`.")
    )]
    MalformedProcess(String),

    #[error("Duplicate process name: {0}")]
    #[diagnostic(code(parse::duplicate_process), help("Process names must be unique."))]
    DuplicateProcess(String),

    #[error("Process {0} has a zero service time")]
    #[diagnostic(
        code(parse::zero_service),
        help("Every process needs at least one tick of CPU demand.")
    )]
    ZeroService(String),
}

/// Errors raised while turning an algorithm selection into a runnable policy
///
/// These only affect the offending selection; the rest of the session runs.
#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Unknown algorithm ID: {0}")]
    #[diagnostic(
        code(scheduler::unknown_algorithm),
        help("Valid IDs are 1 (FCFS) through 8 (Aging).")
    )]
    UnknownAlgorithm(String),

    #[error("Invalid quantum for {algorithm}: {quantum}")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("Quanta must be at least one tick.")
    )]
    InvalidQuantum { algorithm: String, quantum: u32 },
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("I/O error: {0}")]
    #[diagnostic(code(sim::io))]
    Io(#[from] std::io::Error),

    #[error("Failed to render report: {0}")]
    #[diagnostic(code(sim::render))]
    Render(#[from] std::fmt::Error),

    #[error("Failed to encode report: {0}")]
    #[diagnostic(code(sim::encode))]
    Encode(#[from] serde_json::Error),
}
