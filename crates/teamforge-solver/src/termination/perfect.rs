//! Perfect score termination.

use super::Termination;
use crate::scope::BalancerScope;

/// Terminates once a split with zero imbalance and zero total difference
/// has been scored. No later candidate can beat it; ties found later are
/// lost.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerfectScoreTermination;

impl Termination for PerfectScoreTermination {
    fn is_terminated(&self, scope: &BalancerScope) -> bool {
        scope.best_score().is_some_and(|s| s.is_perfect())
    }
}
