//! Two-team partitions of a roster.

use std::fmt;

use smallvec::SmallVec;

use crate::error::{Result, TeamForgeError};
use crate::score::BalanceScore;

/// Sorted roster positions of one group, stored inline for typical squads.
pub type IndexSet = SmallVec<[usize; 16]>;

/// A split of `[0, n)` into two disjoint, covering, sorted index sets.
///
/// Candidates produced by enumeration always have `|group_a| = n / 2`.
/// Manual edits through [`move_member`](Self::move_member) may change sizes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartitionCandidate {
    group_a: IndexSet,
    group_b: IndexSet,
}

impl PartitionCandidate {
    /// Builds the candidate whose `group_a` is `combination`.
    ///
    /// For caller-supplied groups use [`from_groups`](Self::from_groups),
    /// which reports bad input as an error.
    ///
    /// # Panics
    ///
    /// Panics if `combination` is not strictly ascending or holds an index
    /// outside `[0, n)`.
    pub fn from_combination(n: usize, combination: &[usize]) -> Self {
        assert!(
            combination.windows(2).all(|w| w[0] < w[1]),
            "combination must be strictly ascending"
        );
        assert!(
            combination.last().map_or(true, |&last| last < n),
            "combination index out of range for {n} players"
        );

        let mut group_b = IndexSet::with_capacity(n - combination.len());
        let mut chosen = combination.iter().peekable();
        for i in 0..n {
            if chosen.peek() == Some(&&i) {
                chosen.next();
            } else {
                group_b.push(i);
            }
        }

        Self {
            group_a: IndexSet::from_slice(combination),
            group_b,
        }
    }

    /// Validates a caller-supplied split of `[0, n)`.
    ///
    /// Both groups are sorted; every index must appear exactly once.
    pub fn from_groups(n: usize, group_a: &[usize], group_b: &[usize]) -> Result<Self> {
        let mut seen = vec![false; n];
        for &i in group_a.iter().chain(group_b) {
            if i >= n {
                return Err(TeamForgeError::InvalidPartition(format!(
                    "index {i} is out of range for {n} players"
                )));
            }
            if seen[i] {
                return Err(TeamForgeError::InvalidPartition(format!(
                    "index {i} appears more than once"
                )));
            }
            seen[i] = true;
        }
        if let Some(missing) = seen.iter().position(|&s| !s) {
            return Err(TeamForgeError::InvalidPartition(format!(
                "index {missing} is not assigned to either group"
            )));
        }

        let mut a = IndexSet::from_slice(group_a);
        let mut b = IndexSet::from_slice(group_b);
        a.sort_unstable();
        b.sort_unstable();
        Ok(Self {
            group_a: a,
            group_b: b,
        })
    }

    pub fn group_a(&self) -> &[usize] {
        &self.group_a
    }

    pub fn group_b(&self) -> &[usize] {
        &self.group_b
    }

    /// Total number of players across both groups.
    pub fn roster_len(&self) -> usize {
        self.group_a.len() + self.group_b.len()
    }

    pub fn in_group_a(&self, index: usize) -> bool {
        self.group_a.binary_search(&index).is_ok()
    }

    pub fn in_group_b(&self, index: usize) -> bool {
        self.group_b.binary_search(&index).is_ok()
    }

    /// Returns the same split with group labels exchanged.
    pub fn mirrored(&self) -> Self {
        Self {
            group_a: self.group_b.clone(),
            group_b: self.group_a.clone(),
        }
    }

    /// True if `other` is this split with the labels exchanged.
    pub fn is_mirror_of(&self, other: &Self) -> bool {
        self.group_a == other.group_b && self.group_b == other.group_a
    }

    /// Exchanges `a_index` (in group A) with `b_index` (in group B).
    pub fn swap(&mut self, a_index: usize, b_index: usize) -> Result<()> {
        let a_pos = self
            .group_a
            .binary_search(&a_index)
            .map_err(|_| TeamForgeError::NotInGroup { index: a_index })?;
        let b_pos = self
            .group_b
            .binary_search(&b_index)
            .map_err(|_| TeamForgeError::NotInGroup { index: b_index })?;

        self.group_a.remove(a_pos);
        self.group_b.remove(b_pos);
        insert_sorted(&mut self.group_a, b_index);
        insert_sorted(&mut self.group_b, a_index);
        Ok(())
    }

    /// Moves `index` to the other group.
    ///
    /// Fails if the index is in neither group or its group would be left
    /// empty.
    pub fn move_member(&mut self, index: usize) -> Result<()> {
        let (from, to) = if self.in_group_a(index) {
            (&mut self.group_a, &mut self.group_b)
        } else if self.in_group_b(index) {
            (&mut self.group_b, &mut self.group_a)
        } else {
            return Err(TeamForgeError::NotInGroup { index });
        };

        if from.len() == 1 {
            return Err(TeamForgeError::EmptyGroup);
        }
        if let Ok(pos) = from.binary_search(&index) {
            from.remove(pos);
        }
        insert_sorted(to, index);
        Ok(())
    }
}

fn insert_sorted(set: &mut IndexSet, index: usize) {
    let pos = set.binary_search(&index).unwrap_or_else(|p| p);
    set.insert(pos, index);
}

impl fmt::Display for PartitionCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} vs {:?}", self.group_a.as_slice(), self.group_b.as_slice())
    }
}

/// A candidate together with the score it was selected on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredPartition {
    pub partition: PartitionCandidate,
    pub score: BalanceScore,
}

impl ScoredPartition {
    pub fn new(partition: PartitionCandidate, score: BalanceScore) -> Self {
        Self { partition, score }
    }

    /// The match format both teams can line up in, if any.
    pub fn field_format(&self) -> Option<FieldFormat> {
        let a = self.partition.group_a().len();
        if a != self.partition.group_b().len() {
            return None;
        }
        FieldFormat::from_team_size(a)
    }
}

/// Team sizes the formation step knows how to arrange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldFormat {
    /// Five a side.
    Futsal,
    NineASide,
    ElevenASide,
}

impl FieldFormat {
    pub fn from_team_size(size: usize) -> Option<Self> {
        match size {
            5 => Some(FieldFormat::Futsal),
            9 => Some(FieldFormat::NineASide),
            11 => Some(FieldFormat::ElevenASide),
            _ => None,
        }
    }

    pub const fn team_size(&self) -> usize {
        match self {
            FieldFormat::Futsal => 5,
            FieldFormat::NineASide => 9,
            FieldFormat::ElevenASide => 11,
        }
    }
}
