//! Per-solve scope.

use std::time::{Duration, Instant};

use teamforge_core::BalanceScore;

use crate::statistics::{BalancerStatistics, ScoreImprovement};

/// State of one solve, visible to termination conditions.
///
/// `best_score` is the lexicographic best seen so far, regardless of the
/// selection policy in use.
#[derive(Debug)]
pub struct BalancerScope {
    start_time: Instant,
    roster_len: usize,
    best_score: Option<BalanceScore>,
    statistics: BalancerStatistics,
}

impl BalancerScope {
    pub fn new(roster_len: usize, candidate_total: u64) -> Self {
        Self {
            start_time: Instant::now(),
            roster_len,
            best_score: None,
            statistics: BalancerStatistics::new(candidate_total),
        }
    }

    pub fn roster_len(&self) -> usize {
        self.roster_len
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn candidates_evaluated(&self) -> u64 {
        self.statistics.candidates_evaluated
    }

    pub fn candidate_total(&self) -> u64 {
        self.statistics.candidate_total
    }

    pub fn best_score(&self) -> Option<BalanceScore> {
        self.best_score
    }

    /// Records one scored candidate. Returns true if it improved the best.
    pub fn record_candidate(&mut self, score: BalanceScore) -> bool {
        let index = self.statistics.candidates_evaluated;
        self.statistics.candidates_evaluated += 1;

        let improved = self.best_score.map_or(true, |best| score.is_better_than(&best));
        if improved {
            self.best_score = Some(score);
            self.statistics.score_history.push(ScoreImprovement {
                time_offset: self.elapsed(),
                candidate_index: index,
                score,
            });
        }
        improved
    }

    /// Stops the clock and returns the collected statistics.
    pub fn into_statistics(mut self) -> BalancerStatistics {
        self.statistics.total_duration = self.elapsed();
        self.statistics
    }
}
