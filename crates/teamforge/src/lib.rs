//! TeamForge - Balanced Two-Team Partitioning in Rust
//!
//! Hand over a roster of rated players, get back the most evenly matched
//! splits into two teams.
//!
//! # Example
//!
//! ```rust
//! use teamforge::prelude::*;
//!
//! let roster = vec![
//!     ("ana", vec![1, 1, 1]),
//!     ("bruno", vec![2, 2, 2]),
//!     ("carla", vec![3, 3, 3]),
//!     ("diego", vec![4, 4, 4]),
//! ];
//!
//! let outcome = teamforge::balance_teams(roster, &BalancerConfig::default()).unwrap();
//! assert_eq!(outcome.best_imbalance, 0);
//! assert_eq!(
//!     outcome.partitions,
//!     vec![(
//!         vec!["ana".to_string(), "diego".to_string()],
//!         vec!["bruno".to_string(), "carla".to_string()],
//!     )]
//! );
//! ```

// Core types
pub use teamforge_core::{
    AttributeSchema, BalanceScore, FieldFormat, IndexSet, PartitionCandidate, RatingScale, Result,
    Roster, RosterEntry, ScoreParseError, ScoreVector, ScoredPartition,
    TeamForgeError, MIN_ROSTER_SIZE,
};

// Configuration
pub use teamforge_config::{
    BalancerConfig, ConfigError, ScoringThreadCount, SelectionPolicy, TerminationConfig,
};

// Engine
pub use teamforge_solver::{
    evaluate_partition, AttributeAggregate, BalanceOutcome, Balancer, BalancerManager,
    BalancerStatistics, PartitionReport, ResultSet, SolveHandle, TeamAggregate,
};

/// Lower-level engine building blocks.
pub mod engine {
    pub use teamforge_solver::{
        binomial, candidate_count, BalancerScope, BestPartitionSelector, CombinationEnumerator,
        PartitionScorer, ScanStep, ScoreImprovement, Termination,
    };
    pub use teamforge_solver::termination;
}

#[cfg(feature = "console")]
pub use teamforge_console as console;

mod balance;
pub use balance::{balance_roster, balance_teams, balance_teams_with_reports};

pub mod prelude {
    pub use super::{
        balance_roster, balance_teams, BalanceOutcome, BalanceScore, Balancer, BalancerConfig,
        PartitionCandidate, RatingScale, Roster, RosterEntry, SelectionPolicy,
    };
}

#[cfg(test)]
mod tests;
