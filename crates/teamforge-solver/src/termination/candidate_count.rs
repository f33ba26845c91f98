//! Candidate count termination.

use super::Termination;
use crate::scope::BalancerScope;

/// Terminates after a number of scored candidates.
///
/// # Example
///
/// ```
/// use teamforge_solver::termination::CandidateCountTermination;
///
/// // Stop after 100,000 candidates
/// let term = CandidateCountTermination::new(100_000);
/// ```
#[derive(Debug, Clone)]
pub struct CandidateCountTermination {
    limit: u64,
}

impl CandidateCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for CandidateCountTermination {
    fn is_terminated(&self, scope: &BalancerScope) -> bool {
        scope.candidates_evaluated() >= self.limit
    }
}
