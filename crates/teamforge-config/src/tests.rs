use super::*;

#[test]
fn test_defaults() {
    let config = BalancerConfig::default();
    assert_eq!(config.max_roster_size, DEFAULT_MAX_ROSTER_SIZE);
    assert_eq!(config.selection_policy, SelectionPolicy::Legacy);
    assert_eq!(config.rating_scale, RatingScale::Unbounded);
    assert_eq!(config.scoring_threads, ScoringThreadCount::None);
    assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
    assert!(config.termination.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = BalancerConfig::from_toml_str("").unwrap();
    assert_eq!(config.max_roster_size, DEFAULT_MAX_ROSTER_SIZE);
    assert_eq!(config.time_limit(), None);
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        max_roster_size = 20
        selection_policy = "lexicographic"
        rating_scale = "1-5"
        batch_size = 512

        [scoring_threads]
        count = 4

        [termination]
        seconds_spent_limit = 2
        millis_spent_limit = 500
        candidate_limit = 10000
        stop_on_perfect = true
    "#;

    let config = BalancerConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.max_roster_size, 20);
    assert_eq!(config.selection_policy, SelectionPolicy::Lexicographic);
    assert_eq!(config.rating_scale, RatingScale::OneToFive);
    assert_eq!(config.scoring_threads, ScoringThreadCount::Count(4));
    assert_eq!(config.batch_size, 512);
    assert_eq!(config.time_limit(), Some(Duration::from_millis(2500)));
    assert_eq!(config.candidate_limit(), Some(10000));
    assert!(config.termination.unwrap().stop_on_perfect);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        max_roster_size: 16
        selection_policy: legacy
        rating_scale: "1-10"
        scoring_threads: auto
        termination:
          candidate_limit: 50
    "#;

    let config = BalancerConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.max_roster_size, 16);
    assert_eq!(config.selection_policy, SelectionPolicy::Legacy);
    assert_eq!(config.rating_scale, RatingScale::OneToTen);
    assert_eq!(config.scoring_threads, ScoringThreadCount::Auto);
    assert_eq!(config.candidate_limit(), Some(50));
}

#[test]
fn test_validation_rejects_tiny_cap() {
    let err = BalancerConfig::from_toml_str("max_roster_size = 2").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_validation_rejects_zero_batch() {
    let err = BalancerConfig::from_toml_str("batch_size = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_unknown_policy_is_parse_error() {
    let err = BalancerConfig::from_toml_str(r#"selection_policy = "random""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = BalancerConfig::load("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = BalancerConfig::new()
        .with_max_roster_size(12)
        .with_selection_policy(SelectionPolicy::Lexicographic)
        .with_rating_scale(RatingScale::OneToFive)
        .with_scoring_threads(ScoringThreadCount::Count(2))
        .with_termination_seconds(3)
        .with_candidate_limit(100);

    assert_eq!(config.max_roster_size, 12);
    assert_eq!(config.time_limit(), Some(Duration::from_secs(3)));
    assert_eq!(config.candidate_limit(), Some(100));
    assert!(config.scoring_threads.is_parallel());
}

#[test]
fn test_thread_count_parallelism() {
    assert!(ScoringThreadCount::Auto.is_parallel());
    assert!(!ScoringThreadCount::None.is_parallel());
    assert!(!ScoringThreadCount::Count(1).is_parallel());
}

#[test]
fn test_config_error_converts() {
    let err: TeamForgeError = ConfigError::Invalid("bad".into()).into();
    assert_eq!(err, TeamForgeError::Config("Invalid configuration: bad".into()));
}

#[test]
fn test_huge_time_limit_saturates() {
    let config = BalancerConfig::from_toml_str(
        "[termination]\nseconds_spent_limit = 9000000000000000000\nmillis_spent_limit = 9000000000000000000",
    )
    .unwrap();

    let limit = config.time_limit().unwrap();
    assert!(limit >= Duration::from_secs(9_000_000_000_000_000_000));
}

#[test]
fn test_seconds_and_millis_add_up() {
    let termination = TerminationConfig {
        seconds_spent_limit: Some(2),
        millis_spent_limit: Some(500),
        ..TerminationConfig::default()
    };
    assert_eq!(termination.time_limit(), Some(Duration::from_millis(2500)));
    assert_eq!(TerminationConfig::default().time_limit(), None);
}
