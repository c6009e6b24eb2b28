/*!
 * Runtime Configuration
 * Environment-driven settings resolved once at startup
 */

use super::limits::{DEFAULT_FEEDBACK_QUEUES, MAX_FEEDBACK_QUEUES};
use serde::Serialize;
use tracing::warn;

/// How each run's results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Trace grid or statistics table, as selected by the input
    #[default]
    Text,
    /// One JSON document per run
    Json,
}

impl ReportFormat {
    /// Parse from string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Settings that do not come from the simulation input itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuntimeConfig {
    pub report_format: ReportFormat,
    pub feedback_queues: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            report_format: ReportFormat::Text,
            feedback_queues: DEFAULT_FEEDBACK_QUEUES,
        }
    }
}

impl RuntimeConfig {
    /// Load from the process environment
    ///
    /// Environment variables:
    /// - SCHED_REPORT_FORMAT: `text` or `json` (default: text)
    /// - SCHED_FEEDBACK_QUEUES: number of feedback levels (default: 3)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve from an arbitrary key lookup; unusable values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("SCHED_REPORT_FORMAT") {
            match ReportFormat::parse(&raw) {
                Some(format) => config.report_format = format,
                None => warn!(value = %raw, "Ignoring unknown SCHED_REPORT_FORMAT"),
            }
        }

        if let Some(raw) = lookup("SCHED_FEEDBACK_QUEUES") {
            match raw.trim().parse::<usize>() {
                Ok(n) if (1..=MAX_FEEDBACK_QUEUES).contains(&n) => config.feedback_queues = n,
                _ => warn!(value = %raw, "Ignoring out-of-range SCHED_FEEDBACK_QUEUES"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = RuntimeConfig::from_lookup(|_| None);
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.feedback_queues, 3);
    }

    #[test]
    fn test_overrides() {
        let config = RuntimeConfig::from_lookup(|key| match key {
            "SCHED_REPORT_FORMAT" => Some("JSON".into()),
            "SCHED_FEEDBACK_QUEUES" => Some("5".into()),
            _ => None,
        });
        assert_eq!(config.report_format, ReportFormat::Json);
        assert_eq!(config.feedback_queues, 5);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = RuntimeConfig::from_lookup(|key| match key {
            "SCHED_REPORT_FORMAT" => Some("xml".into()),
            "SCHED_FEEDBACK_QUEUES" => Some("0".into()),
            _ => None,
        });
        assert_eq!(config, RuntimeConfig::default());
    }
}
