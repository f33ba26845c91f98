//! One-call entry points that hide roster construction and engine wiring.

use teamforge_config::BalancerConfig;
use teamforge_core::{Result, Roster, RosterEntry};
use teamforge_solver::{BalanceOutcome, Balancer, ResultSet};

/// Splits `(identifier, scores)` pairs into the best-balanced teams.
///
/// Partitions come back as identifier lists in enumeration order.
pub fn balance_teams<I, S>(players: I, config: &BalancerConfig) -> Result<BalanceOutcome>
where
    I: IntoIterator<Item = (S, Vec<u32>)>,
    S: Into<String>,
{
    run(players, config, false)
}

/// Like [`balance_teams`], with a [`PartitionReport`](crate::PartitionReport)
/// attached to every returned partition.
pub fn balance_teams_with_reports<I, S>(
    players: I,
    config: &BalancerConfig,
) -> Result<BalanceOutcome>
where
    I: IntoIterator<Item = (S, Vec<u32>)>,
    S: Into<String>,
{
    run(players, config, true)
}

/// Solves an already-built roster.
pub fn balance_roster(roster: &Roster, config: &BalancerConfig) -> Result<ResultSet> {
    #[cfg(feature = "console")]
    teamforge_console::init();

    Balancer::new(config.clone()).solve(roster)
}

fn run<I, S>(players: I, config: &BalancerConfig, with_reports: bool) -> Result<BalanceOutcome>
where
    I: IntoIterator<Item = (S, Vec<u32>)>,
    S: Into<String>,
{
    let entries = players
        .into_iter()
        .map(|(id, scores)| RosterEntry::new(id, scores))
        .collect();
    let roster = Roster::new(entries)?;

    balance_roster(&roster, config)?.outcome(&roster, with_reports)
}
