/*!
 * Scheduler Traits
 * The single capability every scheduling discipline provides
 */

use super::run::Run;

/// A scheduling decision procedure
///
/// Implementations drive the [`Run`] clock from 0 until every process is
/// complete or the horizon is reached, using [`Run::execute`] and friends so
/// that timeline marks and completion times stay consistent. Any
/// policy-local state (queues, aged priorities) is owned by the implementor
/// and reinitialized at the start of each call.
pub trait Discipline {
    fn schedule(&mut self, run: &mut Run<'_>);
}
