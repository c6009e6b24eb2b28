/*!
 * Core Module
 * Fundamental simulator types, defaults, configuration and error handling
 */

pub mod config;
pub mod errors;
pub mod limits;
pub mod types;

// Re-export for convenience
pub use config::{ReportFormat, RuntimeConfig};
pub use errors::*;
pub use types::*;
