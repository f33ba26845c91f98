//! The balancer: validate, enumerate, score, select.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use teamforge_config::{BalancerConfig, ScoringThreadCount};
use teamforge_core::{
    BalanceScore, PartitionCandidate, Result, Roster, ScoredPartition, TeamForgeError,
};
use tracing::{debug, info, trace};

use crate::enumerator::CombinationEnumerator;
use crate::result::ResultSet;
use crate::scope::BalancerScope;
use crate::scorer::PartitionScorer;
use crate::selector::BestPartitionSelector;
use crate::termination::{
    CandidateCountTermination, ExternalTermination, OrTermination, PerfectScoreTermination,
    Termination, TimeTermination,
};

/// Splits a roster into the two most evenly matched teams.
///
/// A solve is a pure, synchronous computation. For rosters beyond a few
/// dozen candidates inside an async service, run it through
/// [`BalancerManager`](crate::BalancerManager) instead of on the runtime.
///
/// # Examples
///
/// ```
/// use teamforge_config::BalancerConfig;
/// use teamforge_core::Roster;
/// use teamforge_solver::Balancer;
///
/// let roster = Roster::from_scores((1..=4u32).map(|v| vec![v; 9])).unwrap();
/// let result = Balancer::new(BalancerConfig::default()).solve(&roster).unwrap();
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result.total_difference, 0);
/// assert_eq!(result.partitions[0].partition.group_a(), &[0, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Balancer {
    config: BalancerConfig,
    terminate_flag: Option<Arc<AtomicBool>>,
}

impl Balancer {
    pub fn new(config: BalancerConfig) -> Self {
        Self {
            config,
            terminate_flag: None,
        }
    }

    /// Stops the scan early once `flag` is set.
    pub fn with_terminate_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.terminate_flag = Some(flag);
        self
    }

    pub fn config(&self) -> &BalancerConfig {
        &self.config
    }

    /// Checks the roster against the configured bounds and rating scale.
    pub fn validate(&self, roster: &Roster) -> Result<()> {
        if roster.len() > self.config.max_roster_size {
            return Err(TeamForgeError::RosterTooLarge {
                len: roster.len(),
                max: self.config.max_roster_size,
            });
        }
        roster.validate_scale(self.config.rating_scale)
    }

    /// Finds the tied-best partitions of `roster`.
    ///
    /// # Errors
    ///
    /// Validation errors from [`validate`](Self::validate), or
    /// [`TeamForgeError::Config`] if the scoring thread pool cannot be built.
    pub fn solve(&self, roster: &Roster) -> Result<ResultSet> {
        self.config.validate()?;
        self.validate(roster)?;

        let enumerator = CombinationEnumerator::new(roster.len());
        let mut scope = BalancerScope::new(roster.len(), enumerator.remaining());
        let mut selector = BestPartitionSelector::new(self.config.selection_policy);
        let termination = self.build_termination();
        let scorer = PartitionScorer::new(roster);
        let parallel = self.config.scoring_threads.is_parallel();

        info!(
            event = "solve_start",
            roster_size = roster.len() as u64,
            attribute_count = roster.attribute_count() as u64,
            candidate_count = scope.candidate_total(),
            policy = ?self.config.selection_policy,
            parallel = parallel,
        );

        if parallel {
            self.scan_parallel(&scorer, enumerator, &mut selector, &mut scope, &termination)?;
        } else {
            for candidate in enumerator {
                let score = scorer.score(&candidate);
                if record(&mut selector, &mut scope, &termination, candidate, score) {
                    break;
                }
            }
        }

        let best_imbalance = selector.best_imbalance();
        let policy = selector.policy();
        let (partitions, total_difference) = selector.finish();
        let statistics = scope.into_statistics();
        let terminated_early = statistics.candidates_evaluated < statistics.candidate_total;

        info!(
            event = "solve_end",
            duration_ms = statistics.total_duration.as_millis() as u64,
            candidates = statistics.candidates_evaluated,
            speed = statistics.candidates_per_second(),
            partitions = partitions.len() as u64,
            best_imbalance = best_imbalance,
            total_difference = total_difference,
            terminated_early = terminated_early,
        );

        Ok(ResultSet {
            partitions,
            total_difference,
            best_imbalance,
            policy,
            terminated_early,
            statistics,
        })
    }

    fn build_termination(&self) -> OrTermination {
        let mut termination = OrTermination::default();
        if let Some(config) = &self.config.termination {
            if let Some(limit) = config.candidate_limit {
                termination.push(CandidateCountTermination::new(limit));
            }
            if let Some(limit) = config.time_limit() {
                termination.push(TimeTermination::new(limit));
            }
            if config.stop_on_perfect {
                termination.push(PerfectScoreTermination);
            }
        }
        if let Some(flag) = &self.terminate_flag {
            termination.push(ExternalTermination::new(Arc::clone(flag)));
        }
        termination
    }

    // Scores fixed-size batches on the rayon pool; the selector still sees
    // candidates one at a time in enumeration order.
    fn scan_parallel(
        &self,
        scorer: &PartitionScorer<'_>,
        mut enumerator: CombinationEnumerator,
        selector: &mut BestPartitionSelector,
        scope: &mut BalancerScope,
        termination: &OrTermination,
    ) -> Result<()> {
        let pool = match self.config.scoring_threads {
            ScoringThreadCount::Count(threads) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| TeamForgeError::Config(e.to_string()))?,
            ),
            _ => None,
        };

        loop {
            let batch: Vec<PartitionCandidate> =
                enumerator.by_ref().take(self.config.batch_size).collect();
            if batch.is_empty() {
                return Ok(());
            }

            let score_batch = || batch.par_iter().map(|c| scorer.score(c)).collect::<Vec<_>>();
            let scores = match &pool {
                Some(pool) => pool.install(score_batch),
                None => score_batch(),
            };

            for (candidate, score) in batch.into_iter().zip(scores) {
                if record(selector, scope, termination, candidate, score) {
                    return Ok(());
                }
            }
        }
    }
}

// Feeds one scored candidate through scope and selector. Returns true when
// the scan should stop.
fn record(
    selector: &mut BestPartitionSelector,
    scope: &mut BalancerScope,
    termination: &OrTermination,
    candidate: PartitionCandidate,
    score: BalanceScore,
) -> bool {
    let index = scope.candidates_evaluated();
    if scope.record_candidate(score) {
        debug!(
            event = "best_improved",
            candidate_index = index,
            score = %score,
        );
    }

    trace!(event = "candidate", candidate = %candidate, score = %score);
    let step = selector.consider(candidate, score);
    trace!(event = "scan_step", candidate_index = index, step = ?step);

    termination.is_terminated(scope)
}

/// Scores a caller-supplied partition, e.g. after a manual swap.
///
/// # Errors
///
/// [`TeamForgeError::InvalidPartition`] if the partition does not cover
/// exactly the roster's positions.
///
/// # Examples
///
/// ```
/// use teamforge_core::{BalanceScore, PartitionCandidate, Roster};
/// use teamforge_solver::evaluate_partition;
///
/// let roster = Roster::from_scores((1..=4u32).map(|v| vec![v; 9])).unwrap();
/// let mut split = PartitionCandidate::from_combination(4, &[0, 3]);
/// split.swap(3, 2).unwrap();
///
/// let scored = evaluate_partition(&roster, split).unwrap();
/// assert_eq!(scored.partition.group_a(), &[0, 2]);
/// assert_eq!(scored.score, BalanceScore::of(18, 18));
/// ```
pub fn evaluate_partition(roster: &Roster, partition: PartitionCandidate) -> Result<ScoredPartition> {
    if partition.roster_len() != roster.len() {
        return Err(TeamForgeError::InvalidPartition(format!(
            "partition covers {} players, roster has {}",
            partition.roster_len(),
            roster.len()
        )));
    }
    let partition =
        PartitionCandidate::from_groups(roster.len(), partition.group_a(), partition.group_b())?;
    let score = PartitionScorer::new(roster).score(&partition);
    Ok(ScoredPartition::new(partition, score))
}
