/*!
 * CPU Scheduling Simulator - Main Entry Point
 *
 * Reads a simulation description from stdin and writes one report per
 * requested algorithm to stdout, each followed by a blank line.
 */

use std::io::{self, Read, Write};
use std::process::ExitCode;
use tracing::info;

use cpu_sched_sim::{init_tracing, parse_input, render, RuntimeConfig, SimResult, Simulation};

fn main() -> ExitCode {
    // Initialize structured tracing
    init_tracing();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns false if any algorithm had to be skipped
fn run() -> SimResult<bool> {
    let config = RuntimeConfig::from_env();

    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    let input = parse_input(&text)?;

    let mode = input.mode;
    let algorithms = input.algorithms.clone();
    let mut simulation = Simulation::from_input(input).with_config(config);
    info!(
        ?mode,
        algorithms = algorithms.len(),
        processes = simulation.processes().len(),
        last_instant = simulation.last_instant(),
        "Session starting"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut all_ran = true;

    for spec in &algorithms {
        match simulation.run_spec(spec) {
            Ok(report) => {
                out.write_all(render(&report, mode, config.report_format)?.as_bytes())?;
                writeln!(out)?;
            }
            Err(e) => {
                out.flush()?;
                eprintln!("Error: {e}");
                all_ran = false;
            }
        }
    }

    out.flush()?;
    Ok(all_ran)
}
