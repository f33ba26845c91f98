//! Best-partition selection over a single linear scan.
//!
//! The selector sees candidates in enumeration order and keeps every
//! candidate tied for best. There is no sorting and no second pass, so the
//! enumeration order decides which ties are captured first.

use teamforge_config::SelectionPolicy;
use teamforge_core::{BalanceScore, PartitionCandidate, ScoredPartition};

/// What a single candidate did to the selector state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStep {
    /// New best on both levels; results reset to this candidate.
    Improved,
    /// New best imbalance without a better total difference. Under
    /// [`SelectionPolicy::Legacy`] the results are left untouched.
    ImprovedPrimaryOnly,
    /// Equal to the current best; appended to results.
    Tied,
    /// Worse than the current best.
    Discarded,
}

/// Scan state: best imbalance and total difference seen, plus results.
///
/// # Examples
///
/// ```
/// use teamforge_config::SelectionPolicy;
/// use teamforge_core::{BalanceScore, PartitionCandidate};
/// use teamforge_solver::{BestPartitionSelector, ScanStep};
///
/// let mut selector = BestPartitionSelector::new(SelectionPolicy::Legacy);
/// let a = PartitionCandidate::from_combination(4, &[0, 1]);
/// let b = PartitionCandidate::from_combination(4, &[0, 2]);
///
/// assert_eq!(selector.consider(a, BalanceScore::of(10, 2)), ScanStep::Improved);
/// assert_eq!(selector.consider(b, BalanceScore::of(4, 4)), ScanStep::ImprovedPrimaryOnly);
///
/// let (results, total_difference) = selector.finish();
/// assert_eq!(results.len(), 1);
/// assert_eq!(total_difference, 2);
/// ```
#[derive(Debug, Clone)]
pub struct BestPartitionSelector {
    policy: SelectionPolicy,
    best: BalanceScore,
    results: Vec<ScoredPartition>,
}

impl BestPartitionSelector {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            best: BalanceScore::WORST,
            results: Vec::new(),
        }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Best imbalance seen so far.
    pub fn best_imbalance(&self) -> u64 {
        self.best.imbalance()
    }

    /// Best total difference tracked so far.
    pub fn best_total_diff(&self) -> u64 {
        self.best.total_diff()
    }

    /// The score pair the selector currently regards as best
    /// ([`BalanceScore::WORST`] before the first candidate).
    pub fn best_score(&self) -> BalanceScore {
        self.best
    }

    pub fn results(&self) -> &[ScoredPartition] {
        &self.results
    }

    /// Feeds the next candidate in enumeration order.
    pub fn consider(&mut self, candidate: PartitionCandidate, score: BalanceScore) -> ScanStep {
        match self.policy {
            SelectionPolicy::Legacy => self.consider_legacy(candidate, score),
            SelectionPolicy::Lexicographic => self.consider_lexicographic(candidate, score),
        }
    }

    // A new best imbalance only replaces results when the total difference
    // also improves on the same candidate; otherwise results keep partitions
    // whose imbalance is no longer the minimum.
    fn consider_legacy(&mut self, candidate: PartitionCandidate, score: BalanceScore) -> ScanStep {
        let (imb, tot) = (score.imbalance(), score.total_diff());

        if imb < self.best.imbalance() {
            if tot < self.best.total_diff() {
                self.best = score;
                self.results.clear();
                self.results.push(ScoredPartition::new(candidate, score));
                ScanStep::Improved
            } else {
                self.best = BalanceScore::of(imb, self.best.total_diff());
                ScanStep::ImprovedPrimaryOnly
            }
        } else if score == self.best {
            self.results.push(ScoredPartition::new(candidate, score));
            ScanStep::Tied
        } else {
            ScanStep::Discarded
        }
    }

    fn consider_lexicographic(
        &mut self,
        candidate: PartitionCandidate,
        score: BalanceScore,
    ) -> ScanStep {
        if score.is_better_than(&self.best) {
            self.best = score;
            self.results.clear();
            self.results.push(ScoredPartition::new(candidate, score));
            ScanStep::Improved
        } else if score == self.best {
            self.results.push(ScoredPartition::new(candidate, score));
            ScanStep::Tied
        } else {
            ScanStep::Discarded
        }
    }

    /// Ends the scan, returning the tied-best candidates and the best total
    /// difference.
    pub fn finish(self) -> (Vec<ScoredPartition>, u64) {
        (self.results, self.best.total_diff())
    }
}
