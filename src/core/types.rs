/*!
 * Core Types
 * Common types used across the simulator
 */

use smartstring::alias::String as SmartString;

/// Index of a process inside a [`ProcessTable`](crate::process::ProcessTable)
pub type ProcessId = usize;

/// Simulated time, in whole ticks
pub type Tick = u64;

/// Base or aged priority (higher is more urgent)
pub type Priority = u64;

/// Round-robin style time slice, in ticks
pub type Quantum = u32;

/// Process names are short, keep them inline
pub type ProcessName = SmartString;

/// Common result type for a whole simulation session
pub type SimResult<T> = Result<T, super::errors::SimError>;
