//! TeamForge Solver Engine
//!
//! This crate provides the balanced two-team partition engine:
//! - Lexicographic enumeration of half-roster combinations with mirror pruning
//! - Per-attribute and total-skill scoring
//! - Single-pass best-partition selection under a configurable policy
//! - Termination conditions and statistics for bounded solves
//! - Team aggregates for display
//! - Off-thread execution for async callers

pub mod aggregate;
pub mod balancer;
pub mod enumerator;
pub mod manager;
pub mod result;
pub mod scope;
pub mod scorer;
pub mod selector;
pub mod statistics;
pub mod termination;

#[cfg(test)]
mod balancer_tests;

pub use aggregate::{AttributeAggregate, PartitionReport, TeamAggregate};
pub use balancer::{evaluate_partition, Balancer};
pub use enumerator::{binomial, candidate_count, CombinationEnumerator};
pub use manager::{BalancerManager, SolveHandle};
pub use result::{BalanceOutcome, ResultSet};
pub use scope::BalancerScope;
pub use scorer::PartitionScorer;
pub use selector::{BestPartitionSelector, ScanStep};
pub use statistics::{BalancerStatistics, ScoreImprovement};
pub use termination::Termination;
