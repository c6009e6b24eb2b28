/*!
 * Input Parser
 * Line-oriented simulation input
 *
 * Format:
 *
 * ```text
 * trace                 # or `stats`
 * 1,2-4,8               # algorithm IDs, optionally `ID-quantum`
 * 20                    # last instant (exclusive horizon)
 * 3                     # process count N
 * A,0,3                 # N lines of name,arrival,service
 * B,2,6
 * C,4,4
 * ```
 *
 * The third process field is both the service time and the base priority
 * used by Aging.
 */

use crate::core::errors::{ParseError, ParseResult};
use crate::core::limits::{
    HEADER_LINES, MAX_LAST_INSTANT, MAX_TIMELINE_CELLS, PROCESS_FIELDS,
};
use crate::core::types::{Quantum, Tick};
use crate::process::{Process, ProcessTable};
use crate::scheduler::AlgorithmSpec;
use serde::Serialize;
use std::str::FromStr;
use tracing::debug;

/// What each run reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    Trace,
    Stats,
}

impl FromStr for OutputMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode = s.trim().to_ascii_lowercase();
        match mode.as_str() {
            "trace" => Ok(Self::Trace),
            "stats" => Ok(Self::Stats),
            _ => Err(ParseError::InvalidOperation(mode)),
        }
    }
}

/// Everything a session needs, in input order
#[derive(Debug, Clone)]
pub struct SimulationInput {
    pub mode: OutputMode,
    pub algorithms: Vec<AlgorithmSpec>,
    pub last_instant: Tick,
    pub processes: ProcessTable,
}

/// Parse a complete input document
///
/// Surrounding blank lines are ignored; lines after the declared process
/// count are ignored as well.
pub fn parse_input(text: &str) -> ParseResult<SimulationInput> {
    let lines: Vec<&str> = text.trim().lines().collect();
    parse_lines(&lines)
}

pub fn parse_lines(lines: &[&str]) -> ParseResult<SimulationInput> {
    if lines.len() < HEADER_LINES {
        return Err(ParseError::TooFewLines {
            expected: HEADER_LINES,
            found: lines.len(),
        });
    }

    let mode: OutputMode = lines[0].parse()?;
    let algorithms = parse_algorithms(lines[1])?;
    let last_instant: Tick = parse_integer("last instant", lines[2])?;
    if last_instant > MAX_LAST_INSTANT {
        return Err(ParseError::HorizonTooLarge {
            last_instant,
            max: MAX_LAST_INSTANT,
        });
    }
    let count: usize = parse_integer("process count", lines[3])?;
    let cells = (count as u128) * u128::from(last_instant);
    if cells > u128::from(MAX_TIMELINE_CELLS) {
        return Err(ParseError::TimelineTooLarge {
            processes: count,
            last_instant,
            max: MAX_TIMELINE_CELLS,
        });
    }

    let process_lines = &lines[HEADER_LINES..];
    if process_lines.len() < count {
        return Err(ParseError::MissingProcesses {
            expected: count,
            found: process_lines.len(),
        });
    }

    let mut processes = ProcessTable::new();
    for line in &process_lines[..count] {
        let process = parse_process(line)?;
        let name = process.name.to_string();
        if processes.insert(process).is_none() {
            return Err(ParseError::DuplicateProcess(name));
        }
    }

    debug!(
        ?mode,
        algorithms = algorithms.len(),
        last_instant,
        processes = processes.len(),
        "Parsed simulation input"
    );

    Ok(SimulationInput {
        mode,
        algorithms,
        last_instant,
        processes,
    })
}

/// Comma-separated `ID` or `ID-quantum` tokens
///
/// IDs are not validated here; an unknown ID only fails its own run.
pub fn parse_algorithms(line: &str) -> ParseResult<Vec<AlgorithmSpec>> {
    line.split(',').map(parse_algorithm).collect()
}

fn parse_algorithm(token: &str) -> ParseResult<AlgorithmSpec> {
    let token = token.trim();
    let malformed = || ParseError::MalformedAlgorithm(token.to_string());

    match token.split_once('-') {
        None if token.is_empty() => Err(malformed()),
        None => Ok(AlgorithmSpec::new(token, None)),
        Some((id, quantum)) => {
            let id = id.trim();
            if id.is_empty() {
                return Err(malformed());
            }
            let quantum: Quantum = quantum.trim().parse().map_err(|_| malformed())?;
            Ok(AlgorithmSpec::new(id, Some(quantum)))
        }
    }
}

/// `name,arrival,service`; extra fields are ignored
pub fn parse_process(line: &str) -> ParseResult<Process> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < PROCESS_FIELDS || fields[0].is_empty() {
        return Err(ParseError::MalformedProcess(line.trim().to_string()));
    }

    let name = fields[0];
    let arrival_time: Tick = parse_integer("arrival time", fields[1])?;
    let service_or_priority: Tick = parse_integer("service time", fields[2])?;
    if service_or_priority == 0 {
        return Err(ParseError::ZeroService(name.to_string()));
    }

    Ok(Process::new(name, arrival_time, service_or_priority).with_priority(service_or_priority))
}

fn parse_integer<T: FromStr>(field: &'static str, raw: &str) -> ParseResult<T> {
    raw.trim().parse().map_err(|_| ParseError::InvalidInteger {
        field,
        value: raw.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_input() {
        let input = parse_input("Stats\n1,2-4,8\n20\n2\nA,0,3\nB, 2, 6\n\n").unwrap();

        assert_eq!(input.mode, OutputMode::Stats);
        assert_eq!(
            input.algorithms,
            vec![
                AlgorithmSpec::new("1", None),
                AlgorithmSpec::new("2", Some(4)),
                AlgorithmSpec::new("8", None),
            ]
        );
        assert_eq!(input.last_instant, 20);
        assert_eq!(input.processes.len(), 2);

        let b = input.processes.by_name("B").unwrap();
        assert_eq!(b.arrival_time, 2);
        assert_eq!(b.service_time, 6);
        assert_eq!(b.priority, 6);
    }

    #[test]
    fn test_header_errors() {
        assert_eq!(
            parse_input("trace\n1\n20").unwrap_err(),
            ParseError::TooFewLines {
                expected: 4,
                found: 3
            }
        );
        assert_eq!(
            parse_input("graph\n1\n20\n0").unwrap_err(),
            ParseError::InvalidOperation("graph".into())
        );
        assert!(matches!(
            parse_input("trace\n1\nsoon\n0").unwrap_err(),
            ParseError::InvalidInteger { field: "last instant", .. }
        ));
    }

    #[test]
    fn test_oversized_timelines_are_rejected() {
        assert_eq!(
            parse_input("stats\n1\n18446744073709551615\n1\nA,0,1").unwrap_err(),
            ParseError::HorizonTooLarge {
                last_instant: u64::MAX,
                max: MAX_LAST_INSTANT,
            }
        );
        assert!(parse_input(&format!("stats\n1\n{MAX_LAST_INSTANT}\n1\nA,0,1")).is_ok());

        // Checked before any process line is read
        assert_eq!(
            parse_input("stats\n1\n1000000\n100000").unwrap_err(),
            ParseError::TimelineTooLarge {
                processes: 100_000,
                last_instant: 1_000_000,
                max: MAX_TIMELINE_CELLS,
            }
        );
    }

    #[test]
    fn test_algorithm_tokens() {
        assert_eq!(
            parse_algorithm(" 2 - 3 ").unwrap(),
            AlgorithmSpec::new("2", Some(3))
        );
        // Unknown IDs pass through; they fail at dispatch
        assert_eq!(parse_algorithm("9").unwrap(), AlgorithmSpec::new("9", None));
        assert!(matches!(
            parse_algorithm("2-x"),
            Err(ParseError::MalformedAlgorithm(_))
        ));
        assert!(matches!(
            parse_algorithm("2-1-1"),
            Err(ParseError::MalformedAlgorithm(_))
        ));
        assert!(matches!(parse_algorithm(""), Err(ParseError::MalformedAlgorithm(_))));
    }

    #[test]
    fn test_process_errors() {
        assert_eq!(
            parse_input("trace\n1\n10\n2\nA,0,3").unwrap_err(),
            ParseError::MissingProcesses {
                expected: 2,
                found: 1
            }
        );
        assert_eq!(
            parse_process("A,0").unwrap_err(),
            ParseError::MalformedProcess("A,0".into())
        );
        assert_eq!(
            parse_process("A,0,0").unwrap_err(),
            ParseError::ZeroService("A".into())
        );
        assert!(matches!(
            parse_process("A,-1,2"),
            Err(ParseError::InvalidInteger { field: "arrival time", .. })
        ));
        assert_eq!(
            parse_input("trace\n1\n10\n2\nA,0,3\nA,1,1").unwrap_err(),
            ParseError::DuplicateProcess("A".into())
        );
    }
}
