/*!
 * Report Rendering
 * Trace grid, statistics table and JSON views of a finished run
 */

use super::timeline::Timeline;
use crate::core::config::ReportFormat;
use crate::core::limits::{STATS_COLUMN_WIDTH, STATS_LABEL_WIDTH, TRACE_LABEL_WIDTH};
use crate::core::types::{SimResult, Tick};
use crate::input::OutputMode;
use crate::process::ProcessStats;
use crate::scheduler::RunCounters;
use crate::simulation::RunReport;
use serde::Serialize;
use std::fmt::{self, Write};

/// Render one run the way the session asked for it; always ends with a newline
pub fn render(report: &RunReport, mode: OutputMode, format: ReportFormat) -> SimResult<String> {
    let rendered = match (format, mode) {
        (ReportFormat::Json, _) => render_json(report)?,
        (ReportFormat::Text, OutputMode::Trace) => render_trace(report)?,
        (ReportFormat::Text, OutputMode::Stats) => render_stats(report)?,
    };
    Ok(rendered)
}

/// Per-tick grid with a time ruler, one row per process
pub fn render_trace(report: &RunReport) -> Result<String, fmt::Error> {
    let timeline = &report.timeline;
    let ticks = timeline.last_instant();
    let rule = "-".repeat(TRACE_LABEL_WIDTH + 2 * tick_count(ticks) + 1);
    let mut out = String::new();

    write!(out, "{:<width$}", report.algorithm, width = TRACE_LABEL_WIDTH)?;
    for at in 0..ticks {
        write!(out, "{:>2}", at % 10)?;
    }
    out.push_str(" \n");
    writeln!(out, "{rule}")?;

    for (id, stats) in report.stats.iter().enumerate() {
        write!(out, "{:<width$}|", stats.name.as_str(), width = TRACE_LABEL_WIDTH)?;
        for mark in timeline.row(id) {
            write!(out, "{}|", mark.symbol())?;
        }
        out.push_str(" \n");
    }
    writeln!(out, "{rule}")?;

    Ok(out)
}

/// Column per process, one row per statistic
///
/// Finish, turnaround and normalized turnaround show `-` for processes the
/// horizon cut off.
pub fn render_stats(report: &RunReport) -> Result<String, fmt::Error> {
    let mut out = String::new();

    stats_row(&mut out, &report.algorithm, &report.stats, |out, s| {
        write!(out, "{:<w$}", s.name.as_str(), w = STATS_COLUMN_WIDTH)
    })?;
    stats_row(&mut out, "Arrival", &report.stats, |out, s| {
        write!(out, "{:>w$}", s.arrival_time, w = STATS_COLUMN_WIDTH)
    })?;
    stats_row(&mut out, "Service", &report.stats, |out, s| {
        write!(out, "{:>w$}", s.service_time, w = STATS_COLUMN_WIDTH)
    })?;
    stats_row(&mut out, "Finish", &report.stats, |out, s| {
        optional_cell(out, s.finish_time)
    })?;
    stats_row(&mut out, "Turnaround", &report.stats, |out, s| {
        optional_cell(out, s.turnaround_time)
    })?;
    stats_row(&mut out, "NormTurn", &report.stats, |out, s| {
        match s.normalized_turnaround {
            Some(value) => write!(out, "{:>w$.2}", value, w = STATS_COLUMN_WIDTH),
            None => write!(out, "{:>w$}", "-", w = STATS_COLUMN_WIDTH),
        }
    })?;

    Ok(out)
}

fn stats_row<F>(out: &mut String, label: &str, stats: &[ProcessStats], cell: F) -> fmt::Result
where
    F: Fn(&mut String, &ProcessStats) -> fmt::Result,
{
    write!(out, "{:<w$}", label, w = STATS_LABEL_WIDTH)?;
    for s in stats {
        cell(out, s)?;
    }
    out.push('\n');
    Ok(())
}

fn optional_cell(out: &mut String, value: Option<Tick>) -> fmt::Result {
    match value {
        Some(v) => write!(out, "{:>w$}", v, w = STATS_COLUMN_WIDTH),
        None => write!(out, "{:>w$}", "-", w = STATS_COLUMN_WIDTH),
    }
}

fn tick_count(ticks: Tick) -> usize {
    usize::try_from(ticks).unwrap_or(usize::MAX / 4)
}

#[derive(Serialize)]
struct JsonProcess<'a> {
    #[serde(flatten)]
    stats: &'a ProcessStats,
    marks: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    algorithm: &'a str,
    last_instant: Tick,
    processes: Vec<JsonProcess<'a>>,
    counters: &'a RunCounters,
    finished: usize,
    mean_turnaround: Option<f64>,
    mean_normalized_turnaround: Option<f64>,
}

/// Single-line JSON document for the run
pub fn render_json(report: &RunReport) -> serde_json::Result<String> {
    let processes = report
        .stats
        .iter()
        .enumerate()
        .map(|(id, stats)| JsonProcess {
            stats,
            marks: marks_of(&report.timeline, id),
        })
        .collect();

    let view = JsonReport {
        algorithm: &report.algorithm,
        last_instant: report.timeline.last_instant(),
        processes,
        counters: &report.counters,
        finished: report.finished_count(),
        mean_turnaround: report.mean_turnaround(),
        mean_normalized_turnaround: report.mean_normalized_turnaround(),
    };

    let mut json = serde_json::to_string(&view)?;
    json.push('\n');
    Ok(json)
}

fn marks_of(timeline: &Timeline, id: usize) -> String {
    timeline.row_symbols(id)
}
