//! Time-based termination.

use std::time::Duration;

use super::Termination;
use crate::scope::BalancerScope;

/// Terminates after a time limit.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use teamforge_solver::termination::TimeTermination;
///
/// let term = TimeTermination::new(Duration::from_secs(2));
///
/// // Or use convenience constructors
/// let term = TimeTermination::seconds(2);
/// let term = TimeTermination::millis(500);
/// ```
#[derive(Debug, Clone)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }
}

impl Termination for TimeTermination {
    fn is_terminated(&self, scope: &BalancerScope) -> bool {
        scope.elapsed() >= self.limit
    }
}
