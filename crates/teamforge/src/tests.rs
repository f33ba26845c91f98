use super::prelude::*;
use super::*;

fn players(rows: &[(&str, u32)]) -> Vec<(String, Vec<u32>)> {
    rows.iter()
        .map(|(name, rating)| (name.to_string(), vec![*rating; 9]))
        .collect()
}

#[test]
fn test_gradient_roster_single_split() {
    let roster = players(&[("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
    let outcome = balance_teams(roster, &BalancerConfig::default()).unwrap();

    assert_eq!(outcome.partitions.len(), 1);
    assert_eq!(outcome.total_difference, 0);
    let (team_a, team_b) = &outcome.partitions[0];
    assert_eq!(team_a, &vec!["a".to_string(), "d".to_string()]);
    assert_eq!(team_b, &vec!["b".to_string(), "c".to_string()]);
    assert!(outcome.reports.is_none());
}

#[test]
fn test_two_players_rejected() {
    let roster = players(&[("a", 1), ("b", 2)]);
    let err = balance_teams(roster, &BalancerConfig::default()).unwrap_err();
    assert_eq!(err, TeamForgeError::InsufficientRoster { len: 2, min: 3 });
}

#[test]
fn test_mismatched_vectors_rejected() {
    let roster = vec![
        ("a".to_string(), vec![1, 2, 3]),
        ("b".to_string(), vec![1, 2, 3]),
        ("c".to_string(), vec![1, 2]),
    ];
    let err = balance_teams(roster, &BalancerConfig::default()).unwrap_err();
    assert_eq!(
        err,
        TeamForgeError::InconsistentVectorLength {
            index: 2,
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn test_odd_roster_sizes() {
    let roster = players(&[("a", 3), ("b", 1), ("c", 4), ("d", 1), ("e", 5)]);
    let outcome = balance_teams(roster, &BalancerConfig::default()).unwrap();

    for (team_a, team_b) in &outcome.partitions {
        assert_eq!(team_a.len(), 2);
        assert_eq!(team_b.len(), 3);
    }
}

#[test]
fn test_reports_attached() {
    let roster = players(&[("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
    let outcome = balance_teams_with_reports(roster, &BalancerConfig::default()).unwrap();

    let reports = outcome.reports.as_ref().unwrap();
    assert_eq!(reports.len(), outcome.partitions.len());
    assert_eq!(reports[0].team_a.grand_total, reports[0].team_b.grand_total);
    assert_eq!(reports[0].combined.grand_total, 90);
}

#[test]
fn test_rating_scale_enforced() {
    let roster = players(&[("a", 1), ("b", 7), ("c", 3), ("d", 4)]);
    let config = BalancerConfig::default().with_rating_scale(RatingScale::OneToFive);
    let err = balance_teams(roster, &config).unwrap_err();
    assert!(matches!(
        err,
        TeamForgeError::RatingOutOfRange { index: 1, value: 7, .. }
    ));
}

#[test]
fn test_balance_roster_matches_fixture() {
    let roster = teamforge_test::varied_six();

    let legacy = balance_roster(&roster, &BalancerConfig::default()).unwrap();
    assert_eq!(legacy.best_imbalance, 16);
    assert_eq!(legacy.total_difference, 2);

    let config =
        BalancerConfig::default().with_selection_policy(SelectionPolicy::Lexicographic);
    let lexicographic = balance_roster(&roster, &config).unwrap();
    let best = lexicographic.best().unwrap();
    assert_eq!(best.partition.group_a(), &[0, 1, 4]);
    assert_eq!(best.score, BalanceScore::of(16, 4));
}

#[test]
fn test_outcome_serializes() {
    let roster = players(&[("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
    let outcome = balance_teams(roster, &BalancerConfig::default()).unwrap();
    let json = serde_json::to_value(&outcome.partitions).unwrap();
    assert_eq!(json[0][0][0], "a");
}

#[tokio::test]
async fn test_manager_from_facade() {
    let manager = BalancerManager::new(BalancerConfig::default());
    let result = manager.solve(teamforge_test::gradient_four()).await.unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result.total_difference, 0);
}
