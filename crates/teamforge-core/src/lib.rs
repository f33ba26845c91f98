//! TeamForge Core - Core types for balanced team partitioning
//!
//! This crate provides the fundamental abstractions for TeamForge:
//! - Validated roster input (score vectors, attribute schemas, rating scales)
//! - Two-team partition candidates
//! - The two-level balance score used to compare partitions
//! - The error taxonomy shared by every crate in the workspace

pub mod domain;
pub mod error;
pub mod score;

pub use domain::{
    AttributeSchema, FieldFormat, IndexSet, PartitionCandidate, RatingScale, Roster, RosterEntry,
    ScoreVector, ScoredPartition, MIN_ROSTER_SIZE,
};
pub use error::{Result, TeamForgeError};
pub use score::{BalanceScore, ScoreParseError};
