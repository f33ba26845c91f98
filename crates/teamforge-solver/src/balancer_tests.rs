//! Tests for the balancer.

use std::collections::HashSet;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use teamforge_config::{BalancerConfig, ScoringThreadCount, SelectionPolicy, TerminationConfig};
use teamforge_core::{
    BalanceScore, PartitionCandidate, RatingScale, Roster, TeamForgeError,
};
use teamforge_test::{
    all_splits, club_roster, gradient_four, odd_five, stale_primary_four, uniform_four,
    varied_six,
};

use crate::{evaluate_partition, Balancer, ResultSet};

fn solve(roster: &Roster) -> ResultSet {
    Balancer::default().solve(roster).unwrap()
}

fn solve_lexicographic(roster: &Roster) -> ResultSet {
    let config = BalancerConfig::new().with_selection_policy(SelectionPolicy::Lexicographic);
    Balancer::new(config).solve(roster).unwrap()
}

fn group_a_list(result: &ResultSet) -> Vec<Vec<usize>> {
    result
        .partitions
        .iter()
        .map(|p| p.partition.group_a().to_vec())
        .collect()
}

fn assert_well_formed(result: &ResultSet, n: usize) {
    for scored in &result.partitions {
        let p = &scored.partition;
        assert_eq!(p.group_a().len(), n / 2);
        assert_eq!(p.group_b().len(), n - n / 2);
        let mut all: Vec<usize> = p.group_a().iter().chain(p.group_b()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..n).collect::<Vec<_>>());
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn test_uniform_roster() {
        let result = solve(&uniform_four());

        assert_eq!(result.best_imbalance, 0);
        assert_eq!(result.total_difference, 0);
        assert_eq!(group_a_list(&result), vec![vec![0, 1], vec![0, 2], vec![0, 3]]);
        assert!(result.partitions.iter().all(|p| p.score.is_perfect()));
        assert_well_formed(&result, 4);
    }

    #[test]
    fn test_linear_gradient() {
        let result = solve(&gradient_four());

        assert_eq!(result.len(), 1);
        assert_eq!(result.total_difference, 0);
        let best = result.best().unwrap();
        assert_eq!(best.partition.group_a(), &[0, 3]);
        assert_eq!(best.partition.group_b(), &[1, 2]);
        assert_eq!(best.score, BalanceScore::ZERO);
        assert_eq!(result.statistics.candidates_evaluated, 3);
    }

    #[test]
    fn test_odd_roster_scans_every_split() {
        let result = solve(&odd_five());

        assert_eq!(result.statistics.candidate_total, 10);
        assert_eq!(result.statistics.candidates_evaluated, 10);
        assert!(!result.terminated_early);
        assert_well_formed(&result, 5);
        assert_eq!(group_a_list(&result), vec![vec![2, 3]]);
        assert_eq!(result.total_difference, 6);
        assert_eq!(result.best_imbalance, 6);
    }

    #[test]
    fn test_roster_below_minimum() {
        let err = Roster::from_scores(vec![vec![1u32; 9]; 2]).unwrap_err();
        assert_eq!(err, TeamForgeError::InsufficientRoster { len: 2, min: 3 });
    }

    #[test]
    fn test_three_players() {
        let roster = Roster::from_scores(vec![[4u32], [1], [3]]).unwrap();
        let result = solve(&roster);

        assert_eq!(result.statistics.candidates_evaluated, 3);
        assert_eq!(group_a_list(&result), vec![vec![0]]);
        assert_eq!(result.total_difference, 0);
    }
}

mod selection_policy {
    use super::*;

    #[test]
    fn test_legacy_keeps_stale_partition() {
        let result = solve(&stale_primary_four());

        assert_eq!(result.policy, SelectionPolicy::Legacy);
        assert_eq!(group_a_list(&result), vec![vec![0, 1]]);
        assert_eq!(result.partitions[0].score, BalanceScore::of(10, 2));
        assert_eq!(result.best_imbalance, 4);
        assert_eq!(result.total_difference, 2);
    }

    #[test]
    fn test_lexicographic_reports_true_optimum() {
        let result = solve_lexicographic(&stale_primary_four());

        assert_eq!(group_a_list(&result), vec![vec![0, 2]]);
        assert_eq!(result.best_imbalance, 4);
        assert_eq!(result.total_difference, 4);
    }

    #[test]
    fn test_policies_on_odd_roster() {
        let lex = solve_lexicographic(&odd_five());
        assert_eq!(group_a_list(&lex), vec![vec![3, 4]]);
        assert_eq!(lex.best().unwrap().score, BalanceScore::of(6, 4));
    }

    #[test]
    fn test_policies_on_named_roster() {
        let roster = varied_six();

        let legacy = solve(&roster);
        assert_eq!(group_a_list(&legacy), vec![vec![0, 1, 2]]);
        assert_eq!(legacy.best_imbalance, 16);
        assert_eq!(legacy.total_difference, 2);

        let lex = solve_lexicographic(&roster);
        assert_eq!(group_a_list(&lex), vec![vec![0, 1, 4]]);
        assert_eq!(lex.best().unwrap().score, BalanceScore::of(16, 4));
    }

    #[test]
    fn test_policies_agree_on_perfect_rosters() {
        for roster in [uniform_four(), gradient_four()] {
            assert_eq!(group_a_list(&solve(&roster)), group_a_list(&solve_lexicographic(&roster)));
        }
    }
}

mod properties {
    use super::*;

    #[test]
    fn test_lexicographic_matches_exhaustive_reference() {
        for n in 3..=10 {
            for seed in 1..=3 {
                let roster = club_roster(n, seed);
                let result = solve_lexicographic(&roster);
                let reference = all_splits(&roster);

                let best = reference.iter().map(|(_, _, s)| *s).min().unwrap();
                assert_eq!(result.best_imbalance, best.imbalance(), "n={n} seed={seed}");
                assert_eq!(result.total_difference, best.total_diff(), "n={n} seed={seed}");

                // Even rosters count each unordered split once: the orientation
                // holding index 0 in group A.
                let expected: HashSet<Vec<usize>> = reference
                    .into_iter()
                    .filter(|(a, _, s)| *s == best && (n % 2 == 1 || a.contains(&0)))
                    .map(|(a, _, _)| a)
                    .collect();
                let found: HashSet<Vec<usize>> = group_a_list(&result).into_iter().collect();
                assert_eq!(found, expected, "n={n} seed={seed}");
                assert_well_formed(&result, n);
            }
        }
    }

    #[test]
    fn test_legacy_tracks_minimum_imbalance() {
        for n in 3..=10 {
            let roster = club_roster(n, 11);
            let result = solve(&roster);
            let min_imbalance = all_splits(&roster)
                .iter()
                .map(|(_, _, s)| s.imbalance())
                .min()
                .unwrap();

            assert_eq!(result.best_imbalance, min_imbalance, "n={n}");
            assert!(!result.is_empty());
            assert!(result
                .partitions
                .iter()
                .all(|p| p.score.total_diff() == result.total_difference));
            assert_well_formed(&result, n);
        }
    }

    #[test]
    fn test_even_results_have_no_mirrors() {
        for n in [4, 6, 8, 10] {
            let result = solve(&club_roster(n, 5));
            for (i, a) in result.partitions.iter().enumerate() {
                for b in &result.partitions[i + 1..] {
                    assert!(!a.partition.is_mirror_of(&b.partition));
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let roster = club_roster(12, 42);
        let first = solve(&roster);
        let second = solve(&roster);

        assert_eq!(first.partitions, second.partitions);
        assert_eq!(first.total_difference, second.total_difference);
        assert_eq!(first.best_imbalance, second.best_imbalance);
    }

    #[test]
    fn test_parallel_scoring_matches_sequential() {
        let roster = club_roster(12, 7);
        let sequential = solve(&roster);

        for threads in [ScoringThreadCount::Auto, ScoringThreadCount::Count(3)] {
            let mut config = BalancerConfig::new().with_scoring_threads(threads);
            config.batch_size = 37;
            let parallel = Balancer::new(config).solve(&roster).unwrap();

            assert_eq!(parallel.partitions, sequential.partitions);
            assert_eq!(parallel.total_difference, sequential.total_difference);
            assert_eq!(parallel.best_imbalance, sequential.best_imbalance);
            assert_eq!(
                parallel.statistics.candidates_evaluated,
                sequential.statistics.candidates_evaluated
            );
        }
    }
}

mod bounds {
    use super::*;

    #[test]
    fn test_roster_too_large() {
        let config = BalancerConfig::new().with_max_roster_size(6);
        let err = Balancer::new(config).solve(&club_roster(8, 1)).unwrap_err();
        assert_eq!(err, TeamForgeError::RosterTooLarge { len: 8, max: 6 });
    }

    #[test]
    fn test_rating_scale_enforced() {
        let config = BalancerConfig::new().with_rating_scale(RatingScale::OneToFive);
        let balancer = Balancer::new(config);

        assert!(balancer.solve(&gradient_four()).is_ok());

        let roster = Roster::from_scores(vec![[1u32, 2], [7, 3], [2, 2]]).unwrap();
        assert!(matches!(
            balancer.solve(&roster),
            Err(TeamForgeError::RatingOutOfRange { index: 1, value: 7, .. })
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = BalancerConfig::new();
        config.batch_size = 0;
        assert!(matches!(
            Balancer::new(config).solve(&gradient_four()),
            Err(TeamForgeError::Config(_))
        ));
    }

    #[test]
    fn test_candidate_limit_returns_best_so_far() {
        let config = BalancerConfig::new().with_candidate_limit(5);
        let result = Balancer::new(config).solve(&club_roster(10, 3)).unwrap();

        assert!(result.terminated_early);
        assert_eq!(result.statistics.candidates_evaluated, 5);
        assert_eq!(result.statistics.candidate_total, 126);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_candidate_limit_at_total_is_not_early() {
        let config = BalancerConfig::new().with_candidate_limit(3);
        let result = Balancer::new(config).solve(&gradient_four()).unwrap();

        assert!(!result.terminated_early);
        assert_eq!(result.statistics.candidates_evaluated, 3);
    }

    #[test]
    fn test_huge_time_limit_runs_to_completion() {
        let config = BalancerConfig::new().with_termination_seconds(u64::MAX);
        let result = Balancer::new(config).solve(&gradient_four()).unwrap();

        assert!(!result.terminated_early);
        assert_eq!(group_a_list(&result), vec![vec![0, 3]]);
    }

    #[test]
    fn test_stop_on_perfect() {
        let mut config = BalancerConfig::new();
        config.termination = Some(TerminationConfig {
            stop_on_perfect: true,
            ..TerminationConfig::default()
        });
        let result = Balancer::new(config).solve(&uniform_four()).unwrap();

        assert!(result.terminated_early);
        assert_eq!(group_a_list(&result), vec![vec![0, 1]]);
    }

    #[test]
    fn test_external_flag() {
        let flag = Arc::new(AtomicBool::new(true));
        let result = Balancer::default()
            .with_terminate_flag(flag)
            .solve(&club_roster(8, 2))
            .unwrap();

        assert!(result.terminated_early);
        assert_eq!(result.statistics.candidates_evaluated, 1);
        assert_eq!(result.len(), 1);
    }
}

mod output {
    use super::*;

    #[test]
    fn test_outcome_maps_identifiers() {
        let roster = varied_six();
        let outcome = solve(&roster).outcome(&roster, true).unwrap();

        assert_eq!(
            outcome.partitions,
            vec![(
                vec!["Ana".to_string(), "Bruno".into(), "Carla".into()],
                vec!["Diego".to_string(), "Elena".into(), "Facundo".into()],
            )]
        );
        assert_eq!(outcome.total_difference, 2);
        assert_eq!(outcome.best_imbalance, 16);

        let reports = outcome.reports.unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(
            reports[0].team_a.grand_total.abs_diff(reports[0].team_b.grand_total),
            2
        );
    }

    #[test]
    fn test_outcome_without_reports() {
        let roster = gradient_four();
        let outcome = solve(&roster).outcome(&roster, false).unwrap();
        assert!(outcome.reports.is_none());
        assert_eq!(outcome.partitions[0].0, vec!["0", "3"]);
    }

    #[test]
    fn test_aggregates_sum_to_roster() {
        let roster = club_roster(9, 4);
        let result = solve(&roster);
        let totals = roster.attribute_totals();

        for report in result.reports(&roster).unwrap() {
            for (attr, expected) in totals.iter().enumerate() {
                assert_eq!(
                    report.team_a.attributes[attr].total + report.team_b.attributes[attr].total,
                    *expected
                );
            }
        }
    }

    #[test]
    fn test_evaluate_manual_swap() {
        let roster = gradient_four();
        let mut split = solve(&roster).best().unwrap().partition.clone();
        split.swap(0, 1).unwrap();

        let scored = evaluate_partition(&roster, split).unwrap();
        assert_eq!(scored.partition.group_a(), &[1, 3]);
        assert_eq!(scored.score, BalanceScore::of(18, 18));
    }

    #[test]
    fn test_evaluate_rejects_foreign_partition() {
        let roster = gradient_four();
        let split = PartitionCandidate::from_combination(6, &[0, 1, 2]);
        assert!(matches!(
            evaluate_partition(&roster, split),
            Err(TeamForgeError::InvalidPartition(_))
        ));
    }
}
