//! Domain model for balanced team partitioning
//!
//! - [`AttributeSchema`] and [`RatingScale`] describe what a score vector means
//! - [`ScoreVector`], [`RosterEntry`] and [`Roster`] carry validated input
//! - [`PartitionCandidate`] and [`ScoredPartition`] describe a two-team split

mod attribute;
mod partition;
mod roster;


pub use attribute::{AttributeSchema, RatingScale};
pub use partition::{FieldFormat, IndexSet, PartitionCandidate, ScoredPartition};
pub use roster::{Roster, RosterEntry, ScoreVector, MIN_ROSTER_SIZE};
