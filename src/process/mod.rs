/*!
 * Process Module
 * Process entities and the table they live in
 */

pub mod table;
pub mod types;

// Re-export for convenience
pub use table::ProcessTable;
pub use types::{CompletionStatus, Process, ProcessStats};
