//! Configuration system for TeamForge.
//!
//! Load balancer configuration from TOML or YAML files to control roster
//! bounds, the selection policy and early termination without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use teamforge_config::{BalancerConfig, SelectionPolicy};
//! use std::time::Duration;
//!
//! let config = BalancerConfig::from_toml_str(r#"
//!     max_roster_size = 22
//!     selection_policy = "lexicographic"
//!     rating_scale = "1-10"
//!
//!     [termination]
//!     seconds_spent_limit = 5
//! "#).unwrap();
//!
//! assert_eq!(config.max_roster_size, 22);
//! assert_eq!(config.selection_policy, SelectionPolicy::Lexicographic);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(5)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use teamforge_config::BalancerConfig;
//!
//! let config = BalancerConfig::load("balancer.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use teamforge_core::{RatingScale, TeamForgeError, MIN_ROSTER_SIZE};
use thiserror::Error;

/// Default cap on roster size; `C(24, 12) / 2` is about 1.35M candidates.
pub const DEFAULT_MAX_ROSTER_SIZE: usize = 24;

/// Default number of candidates scored per parallel batch.
pub const DEFAULT_BATCH_SIZE: usize = 4096;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for TeamForgeError {
    fn from(err: ConfigError) -> Self {
        TeamForgeError::Config(err.to_string())
    }
}

/// Main balancer configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BalancerConfig {
    /// Largest roster accepted before enumeration starts.
    #[serde(default = "default_max_roster_size")]
    pub max_roster_size: usize,

    /// How tied and improving candidates update the result set.
    #[serde(default)]
    pub selection_policy: SelectionPolicy,

    /// Allowed rating range, checked before solving.
    #[serde(default)]
    pub rating_scale: RatingScale,

    /// Number of threads used to score candidates.
    #[serde(default)]
    pub scoring_threads: ScoringThreadCount,

    /// Candidates enumerated per parallel scoring batch.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Early termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,
}

fn default_max_roster_size() -> usize {
    DEFAULT_MAX_ROSTER_SIZE
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

impl Default for BalancerConfig {
    fn default() -> Self {
        Self {
            max_roster_size: DEFAULT_MAX_ROSTER_SIZE,
            selection_policy: SelectionPolicy::default(),
            rating_scale: RatingScale::default(),
            scoring_threads: ScoringThreadCount::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            termination: None,
        }
    }
}

impl BalancerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot be honored.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_roster_size < MIN_ROSTER_SIZE {
            return Err(ConfigError::Invalid(format!(
                "max_roster_size must be at least {}, got {}",
                MIN_ROSTER_SIZE, self.max_roster_size
            )));
        }
        if self.batch_size == 0 {
            return Err(ConfigError::Invalid("batch_size must be positive".into()));
        }
        if self.scoring_threads == ScoringThreadCount::Count(0) {
            return Err(ConfigError::Invalid(
                "scoring_threads count must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Sets the roster size cap.
    pub fn with_max_roster_size(mut self, max: usize) -> Self {
        self.max_roster_size = max;
        self
    }

    /// Sets the selection policy.
    pub fn with_selection_policy(mut self, policy: SelectionPolicy) -> Self {
        self.selection_policy = policy;
        self
    }

    /// Sets the rating scale.
    pub fn with_rating_scale(mut self, scale: RatingScale) -> Self {
        self.rating_scale = scale;
        self
    }

    /// Sets the scoring thread count.
    pub fn with_scoring_threads(mut self, threads: ScoringThreadCount) -> Self {
        self.scoring_threads = threads;
        self
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the maximum number of candidates to score.
    pub fn with_candidate_limit(mut self, limit: u64) -> Self {
        self.termination = Some(TerminationConfig {
            candidate_limit: Some(limit),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the candidate limit, if configured.
    pub fn candidate_limit(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|t| t.candidate_limit)
    }
}

/// Result-set update rule applied during the scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Resets results only when imbalance and total difference improve on
    /// the same candidate. Matches the behavior existing fixtures expect.
    #[default]
    Legacy,

    /// Plain two-key minimization over (imbalance, total difference).
    Lexicographic,
}

/// Scoring thread count configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringThreadCount {
    /// Use the global rayon pool.
    Auto,

    /// Score on the calling thread.
    #[default]
    None,

    /// Specific number of threads.
    Count(usize),
}

impl ScoringThreadCount {
    pub fn is_parallel(&self) -> bool {
        match self {
            ScoringThreadCount::Auto => true,
            ScoringThreadCount::None => false,
            ScoringThreadCount::Count(n) => *n > 1,
        }
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend scanning.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend scanning, added to the seconds limit.
    pub millis_spent_limit: Option<u64>,

    /// Maximum number of candidates to score.
    pub candidate_limit: Option<u64>,

    /// Stop as soon as a perfectly balanced partition is found.
    #[serde(default)]
    pub stop_on_perfect: bool,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let limit = Duration::from_secs(self.seconds_spent_limit.unwrap_or(0))
            .saturating_add(Duration::from_millis(self.millis_spent_limit.unwrap_or(0)));
        if limit.is_zero() {
            None
        } else {
            Some(limit)
        }
    }
}

#[cfg(test)]
mod tests;
