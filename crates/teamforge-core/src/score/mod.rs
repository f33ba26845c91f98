//! Score types for representing partition quality
//!
//! A partition is scored on two levels: per-attribute imbalance first,
//! total-skill difference second. Lower is better on both.

mod balance;


pub use balance::BalanceScore;

/// Error when parsing a score from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreParseError {
    pub message: String,
}

impl std::fmt::Display for ScoreParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Score parse error: {}", self.message)
    }
}

impl std::error::Error for ScoreParseError {}
