//! Validated roster input.

use std::ops::Index;

use super::{AttributeSchema, RatingScale};
use crate::error::{Result, TeamForgeError};

/// Smallest roster the engine will split into two teams.
pub const MIN_ROSTER_SIZE: usize = 3;

/// Fixed-order skill ratings of one player. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ScoreVector(Box<[u32]>);

impl ScoreVector {
    pub fn new(scores: impl Into<Vec<u32>>) -> Self {
        Self(scores.into().into_boxed_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Sum across all attributes.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&v| u64::from(v)).sum()
    }
}

impl From<Vec<u32>> for ScoreVector {
    fn from(scores: Vec<u32>) -> Self {
        Self::new(scores)
    }
}

impl<const N: usize> From<[u32; N]> for ScoreVector {
    fn from(scores: [u32; N]) -> Self {
        Self::new(scores.to_vec())
    }
}

impl Index<usize> for ScoreVector {
    type Output = u32;

    fn index(&self, attribute: usize) -> &u32 {
        &self.0[attribute]
    }
}

/// A player identifier together with its ratings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterEntry {
    pub id: String,
    pub scores: ScoreVector,
}

impl RosterEntry {
    pub fn new(id: impl Into<String>, scores: impl Into<ScoreVector>) -> Self {
        Self {
            id: id.into(),
            scores: scores.into(),
        }
    }
}

/// Ordered, validated set of roster entries for one invocation.
///
/// Construction guarantees at least [`MIN_ROSTER_SIZE`] entries, all with
/// the same non-zero number of attributes.
///
/// # Examples
///
/// ```
/// use teamforge_core::{Roster, TeamForgeError};
///
/// let roster = Roster::from_scores(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
/// assert_eq!(roster.len(), 3);
/// assert_eq!(roster.attribute_count(), 2);
///
/// let err = Roster::from_scores(vec![vec![1], vec![2]]).unwrap_err();
/// assert_eq!(err, TeamForgeError::InsufficientRoster { len: 2, min: 3 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
    attribute_count: usize,
    schema: Option<AttributeSchema>,
}

impl Roster {
    /// Validates and wraps the given entries.
    ///
    /// # Errors
    ///
    /// [`TeamForgeError::InsufficientRoster`] for fewer than three entries,
    /// [`TeamForgeError::EmptyVector`] or
    /// [`TeamForgeError::InconsistentVectorLength`] for malformed vectors.
    pub fn new(entries: Vec<RosterEntry>) -> Result<Self> {
        if entries.len() < MIN_ROSTER_SIZE {
            return Err(TeamForgeError::InsufficientRoster {
                len: entries.len(),
                min: MIN_ROSTER_SIZE,
            });
        }

        let attribute_count = entries[0].scores.len();
        for (index, entry) in entries.iter().enumerate() {
            if entry.scores.is_empty() {
                return Err(TeamForgeError::EmptyVector { index });
            }
            if entry.scores.len() != attribute_count {
                return Err(TeamForgeError::InconsistentVectorLength {
                    index,
                    expected: attribute_count,
                    found: entry.scores.len(),
                });
            }
        }

        Ok(Self {
            entries,
            attribute_count,
            schema: None,
        })
    }

    /// Builds a roster from bare score vectors; identifiers are positions.
    pub fn from_scores<V>(scores: impl IntoIterator<Item = V>) -> Result<Self>
    where
        V: Into<ScoreVector>,
    {
        let entries = scores
            .into_iter()
            .enumerate()
            .map(|(i, s)| RosterEntry::new(i.to_string(), s))
            .collect();
        Self::new(entries)
    }

    /// Attaches attribute names, checking they match the vector length.
    pub fn with_schema(mut self, schema: AttributeSchema) -> Result<Self> {
        if schema.len() != self.attribute_count {
            return Err(TeamForgeError::SchemaMismatch {
                expected: schema.len(),
                found: self.attribute_count,
            });
        }
        self.schema = Some(schema);
        Ok(self)
    }

    /// Checks every rating against the scale.
    pub fn validate_scale(&self, scale: RatingScale) -> Result<()> {
        for (index, entry) in self.entries.iter().enumerate() {
            for (attribute, &value) in entry.scores.as_slice().iter().enumerate() {
                if !scale.contains(value) {
                    return Err(TeamForgeError::RatingOutOfRange {
                        index,
                        attribute,
                        value,
                        scale,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn attribute_count(&self) -> usize {
        self.attribute_count
    }

    pub fn schema(&self) -> Option<&AttributeSchema> {
        self.schema.as_ref()
    }

    /// Returns the attached schema or positional names.
    pub fn schema_or_positional(&self) -> AttributeSchema {
        self.schema
            .clone()
            .unwrap_or_else(|| AttributeSchema::positional(self.attribute_count))
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> &RosterEntry {
        &self.entries[index]
    }

    pub fn scores(&self, index: usize) -> &ScoreVector {
        &self.entries[index].scores
    }

    pub fn id(&self, index: usize) -> &str {
        &self.entries[index].id
    }

    /// Maps positions back to identifiers.
    pub fn ids_of(&self, indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| self.entries[i].id.clone()).collect()
    }

    /// Per-attribute sums over the whole roster.
    pub fn attribute_totals(&self) -> Vec<u64> {
        let mut totals = vec![0u64; self.attribute_count];
        for entry in &self.entries {
            for (total, &v) in totals.iter_mut().zip(entry.scores.as_slice()) {
                *total += u64::from(v);
            }
        }
        totals
    }
}
