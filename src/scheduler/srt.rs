/*!
 * Shortest Remaining Time
 * Preemptive; re-evaluated every tick
 */

use super::run::Run;
use super::traits::Discipline;
use crate::core::types::ProcessId;

#[derive(Debug, Clone, Copy, Default)]
pub struct Srt;

impl Discipline for Srt {
    fn schedule(&mut self, run: &mut Run<'_>) {
        let mut running: Option<ProcessId> = None;

        while !run.is_finished() {
            let next = run
                .ready()
                .into_iter()
                .min_by_key(|&id| run.process(id).remaining_time());

            let Some(id) = next else {
                running = None;
                if !run.idle_until_next_arrival() {
                    break;
                }
                continue;
            };

            if running != Some(id) {
                if let Some(previous) = running {
                    if !run.process(previous).is_complete() {
                        run.preempt(previous);
                    }
                }
                let remaining = run.process(id).remaining_time();
                run.dispatch(id, remaining);
            }

            running = if run.execute(id) { None } else { Some(id) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Timeline;
    use crate::process::{Process, ProcessTable};

    #[test]
    fn test_shorter_arrival_preempts() {
        let mut processes: ProcessTable = [Process::new("P1", 0, 5), Process::new("P2", 2, 2)]
            .into_iter()
            .collect();
        let mut timeline = Timeline::new(2, 8);
        let counters = Run::new(&mut processes, &mut timeline).run(&mut Srt);

        assert_eq!(timeline.row_symbols(0), "**..*** ");
        assert_eq!(timeline.row_symbols(1), "  **    ");
        assert_eq!(processes.get(1).finish_time(), Some(4));
        assert_eq!(processes.get(0).finish_time(), Some(7));
        assert_eq!(counters.preemptions, 1);
    }

    #[test]
    fn test_equal_remaining_keeps_input_order() {
        let mut processes: ProcessTable = [Process::new("A", 0, 3), Process::new("B", 1, 2)]
            .into_iter()
            .collect();
        let mut timeline = Timeline::new(2, 5);
        Run::new(&mut processes, &mut timeline).run(&mut Srt);

        // At tick 1 both have 2 left; A comes first in input order
        assert_eq!(timeline.row_symbols(0), "***  ");
        assert_eq!(timeline.row_symbols(1), " ..**");
    }
}
