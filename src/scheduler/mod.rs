/*!
 * Scheduler Module
 * Scheduling disciplines and the run scaffold they share
 */

pub mod aging;
pub mod fcfs;
pub mod feedback;
pub mod hrrn;
pub mod policy;
pub mod round_robin;
pub mod run;
pub mod spn;
pub mod srt;
pub mod traits;
pub mod types;

// Re-export public API
pub use aging::Aging;
pub use fcfs::Fcfs;
pub use feedback::{Feedback, QueueEvent};
pub use hrrn::{Hrrn, ResponseRatio};
pub use policy::Policy;
pub use round_robin::RoundRobin;
pub use run::{Arrivals, Run, RunCounters};
pub use spn::Spn;
pub use srt::Srt;
pub use traits::Discipline;
pub use types::{Algorithm, AlgorithmSpec, QuantumGrowth};
