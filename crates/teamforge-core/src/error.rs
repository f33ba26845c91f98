//! Error types for TeamForge

use thiserror::Error;

use crate::domain::RatingScale;

/// Main error type for TeamForge operations.
///
/// Every variant is an input-validation failure: none are transient, and a
/// call that returns one has produced no partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamForgeError {
    /// Fewer entries than the engine needs to form two teams.
    #[error("At least {min} players are required to form teams, got {len}")]
    InsufficientRoster { len: usize, min: usize },

    /// Roster exceeds the configured size cap.
    #[error("Roster of {len} players exceeds the configured maximum of {max}")]
    RosterTooLarge { len: usize, max: usize },

    /// Score vectors of differing lengths within one roster.
    #[error("Score vector at index {index} has {found} attributes, expected {expected}")]
    InconsistentVectorLength {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A roster entry carries no attributes at all.
    #[error("Score vector at index {index} is empty")]
    EmptyVector { index: usize },

    /// The attribute schema does not match the vector length.
    #[error("Attribute schema has {expected} attributes, score vectors have {found}")]
    SchemaMismatch { expected: usize, found: usize },

    /// A rating falls outside the configured scale.
    #[error("Rating {value} for attribute {attribute} at index {index} is outside the {scale} scale")]
    RatingOutOfRange {
        index: usize,
        attribute: usize,
        value: u32,
        scale: RatingScale,
    },

    /// A group has no members, so averages are undefined.
    #[error("Cannot aggregate an empty group")]
    EmptyGroup,

    /// A caller-supplied partition does not cover the roster exactly once.
    #[error("Invalid partition: {0}")]
    InvalidPartition(String),

    /// The index is not a member of the expected group.
    #[error("Index {index} is not a member of the expected group")]
    NotInGroup { index: usize },

    /// Error in balancer configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The worker running the solve went away before reporting a result.
    #[error("Balancer was cancelled")]
    Cancelled,
}

/// Result type alias for TeamForge operations
pub type Result<T> = std::result::Result<T, TeamForgeError>;
