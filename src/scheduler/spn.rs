/*!
 * Shortest Process Next
 * Non-preemptive; picks the smallest total service time
 */

use super::run::Run;
use super::traits::Discipline;

#[derive(Debug, Clone, Copy, Default)]
pub struct Spn;

impl Discipline for Spn {
    fn schedule(&mut self, run: &mut Run<'_>) {
        while !run.is_finished() {
            // min_by_key keeps the first of equal keys, i.e. input order
            let next = run
                .ready()
                .into_iter()
                .min_by_key(|&id| run.process(id).service_time);

            match next {
                Some(id) => {
                    let remaining = run.process(id).remaining_time();
                    run.dispatch(id, remaining);
                    run.run_to_completion(id);
                }
                None => {
                    if !run.idle_until_next_arrival() {
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Timeline;
    use crate::process::{Process, ProcessTable};

    #[test]
    fn test_shortest_first_without_preemption() {
        let mut processes: ProcessTable = [
            Process::new("A", 0, 3),
            Process::new("B", 1, 4),
            Process::new("C", 2, 1),
            Process::new("D", 2, 1),
        ]
        .into_iter()
        .collect();
        let mut timeline = Timeline::new(4, 10);
        Run::new(&mut processes, &mut timeline).run(&mut Spn);

        // A holds the CPU; then C and D (ties by input order) before B
        assert_eq!(timeline.row_symbols(0), "***       ");
        assert_eq!(timeline.row_symbols(2), "  .*      ");
        assert_eq!(timeline.row_symbols(3), "  ..*     ");
        assert_eq!(timeline.row_symbols(1), " ....**** ");
        assert_eq!(processes.get(1).finish_time(), Some(9));
    }
}
