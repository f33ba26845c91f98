//! Solve results and their caller-facing form.

use teamforge_config::SelectionPolicy;
use teamforge_core::{Result, Roster, ScoredPartition};

use crate::aggregate::PartitionReport;
use crate::statistics::BalancerStatistics;

/// Everything a solve produced.
///
/// `partitions` are in enumeration order. Under
/// [`SelectionPolicy::Legacy`] a partition's own score may be worse than
/// `best_imbalance`; see [`BestPartitionSelector`](crate::BestPartitionSelector).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultSet {
    pub partitions: Vec<ScoredPartition>,
    /// Best total difference tracked by the scan.
    pub total_difference: u64,
    /// Best imbalance tracked by the scan.
    pub best_imbalance: u64,
    pub policy: SelectionPolicy,
    /// True if a termination condition stopped the scan before the last
    /// candidate.
    pub terminated_early: bool,
    pub statistics: BalancerStatistics,
}

impl ResultSet {
    /// The first tied-best partition in enumeration order.
    pub fn best(&self) -> Option<&ScoredPartition> {
        self.partitions.first()
    }

    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    /// Builds a [`PartitionReport`] for every returned partition.
    pub fn reports(&self, roster: &Roster) -> Result<Vec<PartitionReport>> {
        self.partitions
            .iter()
            .map(|p| PartitionReport::build(roster, &p.partition))
            .collect()
    }

    /// Maps indices back to identifiers for the calling layer.
    pub fn outcome(&self, roster: &Roster, with_reports: bool) -> Result<BalanceOutcome> {
        let partitions = self
            .partitions
            .iter()
            .map(|p| {
                (
                    roster.ids_of(p.partition.group_a()),
                    roster.ids_of(p.partition.group_b()),
                )
            })
            .collect();

        let reports = if with_reports {
            Some(self.reports(roster)?)
        } else {
            None
        };

        Ok(BalanceOutcome {
            partitions,
            total_difference: self.total_difference,
            best_imbalance: self.best_imbalance,
            reports,
        })
    }
}

/// Identifier-level result handed to the surrounding application.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalanceOutcome {
    /// `(team_a, team_b)` identifiers, all tied for best balance.
    pub partitions: Vec<(Vec<String>, Vec<String>)>,
    pub total_difference: u64,
    pub best_imbalance: u64,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub reports: Option<Vec<PartitionReport>>,
}
