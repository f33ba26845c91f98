//! Balancer statistics collection and reporting.
//!
//! Tracks how much of the candidate space a solve covered, how long it
//! took, and when the best score improved.

use std::time::Duration;

use teamforge_core::BalanceScore;

/// Record of a best-score improvement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreImprovement {
    /// Time since solving started when improvement occurred.
    pub time_offset: Duration,
    /// Zero-based position of the improving candidate in scan order.
    pub candidate_index: u64,
    /// The new (improved) score.
    pub score: BalanceScore,
}

/// Complete statistics for a balancer run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalancerStatistics {
    /// Total time spent solving.
    pub total_duration: Duration,
    /// Candidates the enumerator would produce without termination.
    pub candidate_total: u64,
    /// Candidates actually scored and fed to the selector.
    pub candidates_evaluated: u64,
    /// History of best-score improvements, in scan order.
    pub score_history: Vec<ScoreImprovement>,
}

impl BalancerStatistics {
    /// Creates empty statistics for a scan of `candidate_total` candidates.
    pub fn new(candidate_total: u64) -> Self {
        Self {
            candidate_total,
            ..Self::default()
        }
    }

    /// Number of times the best score improved.
    pub fn improvement_count(&self) -> usize {
        self.score_history.len()
    }

    /// Fraction of the candidate space covered, in `[0, 1]`.
    pub fn coverage(&self) -> f64 {
        if self.candidate_total == 0 {
            0.0
        } else {
            self.candidates_evaluated as f64 / self.candidate_total as f64
        }
    }

    /// Candidates scored per second.
    pub fn candidates_per_second(&self) -> u64 {
        let secs = self.total_duration.as_secs_f64();
        if secs > 0.0 {
            (self.candidates_evaluated as f64 / secs) as u64
        } else {
            0
        }
    }

    /// Returns the final best score, if any candidate was scored.
    pub fn final_score(&self) -> Option<BalanceScore> {
        self.score_history.last().map(|i| i.score)
    }
}
