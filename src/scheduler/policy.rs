/*!
 * Scheduler Policy Dispatch
 * Closed set of disciplines selected by tag
 */

use super::aging::Aging;
use super::fcfs::Fcfs;
use super::feedback::Feedback;
use super::hrrn::Hrrn;
use super::round_robin::RoundRobin;
use super::run::Run;
use super::spn::Spn;
use super::srt::Srt;
use super::traits::Discipline;
use super::types::{Algorithm, QuantumGrowth};

/// A ready-to-run discipline owning its policy-local state
#[derive(Debug, Clone)]
pub enum Policy {
    Fcfs(Fcfs),
    RoundRobin(RoundRobin),
    Spn(Spn),
    Srt(Srt),
    Hrrn(Hrrn),
    Feedback(Feedback),
    Aging(Aging),
}

impl From<Algorithm> for Policy {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Fcfs => Self::Fcfs(Fcfs),
            Algorithm::RoundRobin { quantum } => Self::RoundRobin(RoundRobin::new(quantum)),
            Algorithm::Spn => Self::Spn(Spn),
            Algorithm::Srt => Self::Srt(Srt),
            Algorithm::Hrrn => Self::Hrrn(Hrrn),
            Algorithm::FeedbackUnit { queues } => {
                Self::Feedback(Feedback::new(QuantumGrowth::Unit, queues))
            }
            Algorithm::FeedbackExponential { queues } => {
                Self::Feedback(Feedback::new(QuantumGrowth::Exponential, queues))
            }
            Algorithm::Aging { quantum } => Self::Aging(Aging::new(quantum)),
        }
    }
}

impl Discipline for Policy {
    fn schedule(&mut self, run: &mut Run<'_>) {
        match self {
            Self::Fcfs(policy) => policy.schedule(run),
            Self::RoundRobin(policy) => policy.schedule(run),
            Self::Spn(policy) => policy.schedule(run),
            Self::Srt(policy) => policy.schedule(run),
            Self::Hrrn(policy) => policy.schedule(run),
            Self::Feedback(policy) => policy.schedule(run),
            Self::Aging(policy) => policy.schedule(run),
        }
    }
}
