/*!
 * First Come, First Served
 * Non-preemptive, strictly in arrival order
 */

use super::run::Run;
use super::traits::Discipline;

#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Discipline for Fcfs {
    fn schedule(&mut self, run: &mut Run<'_>) {
        for id in run.arrival_order() {
            let arrival = run.process(id).arrival_time;
            if run.now() < arrival && !run.advance_to(arrival) {
                break;
            }
            if run.horizon_reached() {
                break;
            }

            let remaining = run.process(id).remaining_time();
            run.dispatch(id, remaining);
            run.run_to_completion(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Timeline;
    use crate::process::{Process, ProcessTable};

    #[test]
    fn test_ties_keep_input_order() {
        let mut processes: ProcessTable = [
            Process::new("A", 2, 1),
            Process::new("B", 0, 2),
            Process::new("C", 2, 1),
        ]
        .into_iter()
        .collect();
        let mut timeline = Timeline::new(3, 6);
        Run::new(&mut processes, &mut timeline).run(&mut Fcfs);

        assert_eq!(timeline.row_symbols(1), "**    ");
        assert_eq!(timeline.row_symbols(0), "  *   ");
        assert_eq!(timeline.row_symbols(2), "  .*  ");
        assert_eq!(processes.get(2).finish_time(), Some(4));
    }

    #[test]
    fn test_idle_gap_has_no_marks() {
        let mut processes: ProcessTable = [Process::new("A", 0, 1), Process::new("B", 3, 1)]
            .into_iter()
            .collect();
        let mut timeline = Timeline::new(2, 5);
        let counters = Run::new(&mut processes, &mut timeline).run(&mut Fcfs);

        assert_eq!(timeline.row_symbols(0), "*    ");
        assert_eq!(timeline.row_symbols(1), "   * ");
        assert_eq!(counters.idle_ticks, 2);
    }
}
