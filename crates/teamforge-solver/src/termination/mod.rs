//! Termination conditions for the candidate scan.
//!
//! The enumeration cost grows as `C(n, n/2)`. Terminations let a caller
//! bound a solve by candidate count, wall-clock time, an external flag, or
//! stop once a perfect split is found. A terminated solve returns the best
//! results found so far.

mod candidate_count;
mod composite;
mod external;
mod perfect;
mod time;

use std::fmt::Debug;

use crate::scope::BalancerScope;

pub use candidate_count::CandidateCountTermination;
pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use perfect::PerfectScoreTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop scanning.
///
/// Checked after each candidate is recorded, so at least one candidate is
/// always scored.
pub trait Termination: Send + Sync + Debug {
    /// Returns true if the scan should stop.
    fn is_terminated(&self, scope: &BalancerScope) -> bool;
}
