/*!
 * Simulator Limits and Defaults
 *
 * Centralized location for the defaults applied when the input leaves a
 * setting out. Resolved once, at construction time.
 */

use super::types::{Quantum, Tick};

// =============================================================================
// POLICY DEFAULTS
// =============================================================================

/// Quantum used by Round Robin and Aging when the token has no `-q` suffix
pub const DEFAULT_QUANTUM: Quantum = 1;

/// Number of multilevel feedback queues
pub const DEFAULT_FEEDBACK_QUEUES: usize = 3;

/// Upper bound on feedback levels; FB-2i quanta grow as 2^level
/// and must stay representable as a [`Quantum`]
pub const MAX_FEEDBACK_QUEUES: usize = 16;

// =============================================================================
// INPUT FORMAT
// =============================================================================

/// Header lines before the process list: mode, algorithms, horizon, count
pub const HEADER_LINES: usize = 4;

/// Fields per process line: name, arrival, service-or-priority
pub const PROCESS_FIELDS: usize = 3;

/// Largest accepted last instant; the timeline holds one column per tick
pub const MAX_LAST_INSTANT: Tick = 1_000_000;

/// Largest timeline grid (processes x ticks) a run may allocate
pub const MAX_TIMELINE_CELLS: u64 = 64 * 1024 * 1024;

// =============================================================================
// RENDERING
// =============================================================================

/// Width of the label column in the trace grid
pub const TRACE_LABEL_WIDTH: usize = 6;

/// Width of the label column in the statistics table
pub const STATS_LABEL_WIDTH: usize = 12;

/// Width of each process column in the statistics table
pub const STATS_COLUMN_WIDTH: usize = 5;

// =============================================================================
// LOGGING
// =============================================================================

/// Filter used when `RUST_LOG` is unset. Kept quiet so stderr only carries errors.
pub const DEFAULT_LOG_FILTER: &str = "warn";
