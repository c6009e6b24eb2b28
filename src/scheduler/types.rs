/*!
 * Scheduler Types
 * Algorithm selection, quantum resolution and display names
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::limits::{DEFAULT_FEEDBACK_QUEUES, DEFAULT_QUANTUM};
use crate::core::types::Quantum;
use serde::{Serialize, Serializer};
use std::fmt;

/// How a feedback queue level maps to its time slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantumGrowth {
    /// Every level runs one tick (FB-1)
    Unit,
    /// Level `i` runs `2^i` ticks (FB-2i)
    Exponential,
}

impl QuantumGrowth {
    #[inline]
    pub const fn quantum(self, level: usize) -> Quantum {
        match self {
            Self::Unit => 1,
            Self::Exponential => match Quantum::checked_shl(1, level as u32) {
                Some(quantum) => quantum,
                None => Quantum::MAX,
            },
        }
    }
}

/// The eight scheduling disciplines with their resolved configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First come, first served
    Fcfs,
    /// Fixed-quantum round robin
    RoundRobin { quantum: Quantum },
    /// Shortest process next
    Spn,
    /// Shortest remaining time
    Srt,
    /// Highest response ratio next
    Hrrn,
    /// Multilevel feedback with a one-tick quantum at every level
    FeedbackUnit { queues: usize },
    /// Multilevel feedback with quantum `2^level`
    FeedbackExponential { queues: usize },
    /// Priority scheduling with aging
    Aging { quantum: Quantum },
}

impl Algorithm {
    /// Numeric ID used by the input format
    pub const fn id(&self) -> u8 {
        match self {
            Self::Fcfs => 1,
            Self::RoundRobin { .. } => 2,
            Self::Spn => 3,
            Self::Srt => 4,
            Self::Hrrn => 5,
            Self::FeedbackUnit { .. } => 6,
            Self::FeedbackExponential { .. } => 7,
            Self::Aging { .. } => 8,
        }
    }

    /// Short label without configuration
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::RoundRobin { .. } => "RR",
            Self::Spn => "SPN",
            Self::Srt => "SRT",
            Self::Hrrn => "HRRN",
            Self::FeedbackUnit { .. } => "FB-1",
            Self::FeedbackExponential { .. } => "FB-2i",
            Self::Aging { .. } => "Aging",
        }
    }

    pub const fn is_preemptive(&self) -> bool {
        !matches!(self, Self::Fcfs | Self::Spn | Self::Hrrn)
    }

    /// Resolve an ID and optional quantum, applying defaults
    pub fn resolve(
        id: &str,
        quantum: Option<Quantum>,
        feedback_queues: usize,
    ) -> SchedulerResult<Self> {
        let quantum_or_default = |algorithm: &str| match quantum.unwrap_or(DEFAULT_QUANTUM) {
            0 => Err(SchedulerError::InvalidQuantum {
                algorithm: algorithm.to_string(),
                quantum: 0,
            }),
            q => Ok(q),
        };

        let algorithm = match id.trim() {
            "1" => Self::Fcfs,
            "2" => Self::RoundRobin {
                quantum: quantum_or_default("RR")?,
            },
            "3" => Self::Spn,
            "4" => Self::Srt,
            "5" => Self::Hrrn,
            "6" => Self::FeedbackUnit {
                queues: feedback_queues.max(1),
            },
            "7" => Self::FeedbackExponential {
                queues: feedback_queues.max(1),
            },
            "8" => Self::Aging {
                quantum: quantum_or_default("Aging")?,
            },
            other => return Err(SchedulerError::UnknownAlgorithm(other.to_string())),
        };
        Ok(algorithm)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "RR-{}", quantum),
            Self::Aging { quantum } => write!(f, "Aging-{}", quantum),
            other => f.write_str(other.as_str()),
        }
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// One algorithm selection as written in the input, before resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmSpec {
    pub id: String,
    pub quantum: Option<Quantum>,
}

impl AlgorithmSpec {
    pub fn new(id: impl Into<String>, quantum: Option<Quantum>) -> Self {
        Self {
            id: id.into(),
            quantum,
        }
    }

    pub fn resolve(&self, feedback_queues: usize) -> SchedulerResult<Algorithm> {
        Algorithm::resolve(&self.id, self.quantum, feedback_queues)
    }

    /// Name shown in report headers
    ///
    /// The quantum only appears when the input spelled it out.
    pub fn display_name(&self) -> String {
        match (self.id.trim(), self.quantum) {
            ("2", Some(q)) => format!("RR-{}", q),
            ("2", None) => "RR".to_string(),
            ("8", Some(q)) => format!("Aging-{}", q),
            (id, _) => match Algorithm::resolve(id, Some(DEFAULT_QUANTUM), DEFAULT_FEEDBACK_QUEUES)
            {
                Ok(algorithm) => algorithm.as_str().to_string(),
                Err(_) => format!("Unknown-{}", id),
            },
        }
    }
}
