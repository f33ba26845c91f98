//! Partition scoring.

use teamforge_core::{BalanceScore, PartitionCandidate, Roster};

/// Scores candidates against one roster.
///
/// Per-attribute sums are accumulated independently for each group. The
/// imbalance is the L1 distance between the two sum vectors; the total
/// difference compares the groups' grand totals.
///
/// # Examples
///
/// ```
/// use teamforge_core::{BalanceScore, PartitionCandidate, Roster};
/// use teamforge_solver::PartitionScorer;
///
/// let roster = Roster::from_scores(vec![[1u32, 4], [2, 2], [3, 1], [4, 3]]).unwrap();
/// let scorer = PartitionScorer::new(&roster);
///
/// // {0, 3}: (5, 7) vs {1, 2}: (5, 3)
/// let split = PartitionCandidate::from_combination(4, &[0, 3]);
/// assert_eq!(scorer.score(&split), BalanceScore::of(4, 4));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PartitionScorer<'r> {
    roster: &'r Roster,
}

impl<'r> PartitionScorer<'r> {
    pub fn new(roster: &'r Roster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &'r Roster {
        self.roster
    }

    /// Sum of one attribute over the given roster positions.
    pub fn attribute_sum(&self, group: &[usize], attribute: usize) -> i64 {
        group
            .iter()
            .map(|&i| i64::from(self.roster.scores(i)[attribute]))
            .sum()
    }

    /// Per-attribute sums over the given roster positions.
    pub fn group_sums(&self, group: &[usize]) -> Vec<i64> {
        (0..self.roster.attribute_count())
            .map(|attr| self.attribute_sum(group, attr))
            .collect()
    }

    /// Returns `(imbalance, total_diff)` for the candidate.
    pub fn score(&self, candidate: &PartitionCandidate) -> BalanceScore {
        let mut imbalance: u64 = 0;
        let mut total_a: i64 = 0;
        let mut total_b: i64 = 0;

        for attr in 0..self.roster.attribute_count() {
            let a = self.attribute_sum(candidate.group_a(), attr);
            let b = self.attribute_sum(candidate.group_b(), attr);
            imbalance += a.abs_diff(b);
            total_a += a;
            total_b += b;
        }

        BalanceScore::of(imbalance, total_a.abs_diff(total_b))
    }
}
