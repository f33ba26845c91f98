//! BalanceScore - Two-level minimization score

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::ScoreParseError;

/// Score of one candidate partition.
///
/// `imbalance` is the L1 distance between the two groups' attribute-sum
/// vectors; `total_diff` is the absolute difference of their grand totals.
/// Ordering is lexicographic and **lower is better**.
///
/// # Examples
///
/// ```
/// use teamforge_core::BalanceScore;
///
/// let even = BalanceScore::of(0, 0);
/// let lopsided = BalanceScore::of(4, 0);
/// let tie_broken = BalanceScore::of(0, 2);
///
/// assert!(even.is_better_than(&lopsided));
/// assert!(even.is_better_than(&tie_broken));
/// assert!(tie_broken.is_better_than(&lopsided));
/// assert!(even.is_perfect());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalanceScore {
    imbalance: u64,
    total_diff: u64,
}

impl BalanceScore {
    /// A perfectly balanced partition.
    pub const ZERO: BalanceScore = BalanceScore {
        imbalance: 0,
        total_diff: 0,
    };

    /// Worse than any reachable score; the starting point of a scan.
    pub const WORST: BalanceScore = BalanceScore {
        imbalance: u64::MAX,
        total_diff: u64::MAX,
    };

    #[inline]
    pub const fn of(imbalance: u64, total_diff: u64) -> Self {
        BalanceScore {
            imbalance,
            total_diff,
        }
    }

    /// Returns the per-attribute imbalance (primary objective).
    #[inline]
    pub const fn imbalance(&self) -> u64 {
        self.imbalance
    }

    /// Returns the total-skill difference (secondary objective).
    #[inline]
    pub const fn total_diff(&self) -> u64 {
        self.total_diff
    }

    /// Returns true when both groups match on every attribute.
    #[inline]
    pub const fn is_perfect(&self) -> bool {
        self.imbalance == 0 && self.total_diff == 0
    }

    pub fn is_better_than(&self, other: &Self) -> bool {
        self < other
    }

    /// Parses `"{imbalance}imb/{total}tot"`.
    pub fn parse(s: &str) -> Result<Self, ScoreParseError> {
        let s = s.trim();
        let (imb, tot) = s.split_once('/').ok_or_else(|| ScoreParseError {
            message: format!("Invalid BalanceScore '{}': expected 'Nimb/Ntot'", s),
        })?;

        let level = |part: &str, suffix: &str| -> Result<u64, ScoreParseError> {
            let digits = part.trim().strip_suffix(suffix).ok_or_else(|| ScoreParseError {
                message: format!("Invalid BalanceScore '{}': missing '{}' suffix", s, suffix),
            })?;
            digits.parse::<u64>().map_err(|e| ScoreParseError {
                message: format!("Invalid BalanceScore '{}': {}", s, e),
            })
        };

        Ok(BalanceScore::of(level(imb, "imb")?, level(tot, "tot")?))
    }
}

impl Ord for BalanceScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.imbalance
            .cmp(&other.imbalance)
            .then_with(|| self.total_diff.cmp(&other.total_diff))
    }
}

impl PartialOrd for BalanceScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for BalanceScore {
    type Err = ScoreParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BalanceScore::parse(s)
    }
}

impl fmt::Debug for BalanceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BalanceScore(imbalance: {}, total_diff: {})",
            self.imbalance, self.total_diff
        )
    }
}

impl fmt::Display for BalanceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}imb/{}tot", self.imbalance, self.total_diff)
    }
}
