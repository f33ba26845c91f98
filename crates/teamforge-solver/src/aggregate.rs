//! Per-team totals and averages for display.
//!
//! Values are exact: averages are plain `f64` divisions and nothing is
//! rounded. Formatting is left to the caller.

use teamforge_core::{AttributeSchema, PartitionCandidate, Result, Roster, TeamForgeError};

/// Total and average of one attribute over one group.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeAggregate {
    pub name: String,
    pub total: u64,
    pub average: f64,
}

/// Aggregates of one group.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamAggregate {
    pub size: usize,
    pub attributes: Vec<AttributeAggregate>,
    pub grand_total: u64,
    pub grand_average: f64,
}

impl TeamAggregate {
    /// Aggregates the given roster positions.
    ///
    /// # Errors
    ///
    /// [`TeamForgeError::EmptyGroup`] when `members` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use teamforge_core::Roster;
    /// use teamforge_solver::TeamAggregate;
    ///
    /// let roster = Roster::from_scores(vec![[1u32, 4], [2, 2], [3, 1]]).unwrap();
    /// let team = TeamAggregate::compute(&roster, &[0, 2]).unwrap();
    ///
    /// assert_eq!(team.attributes[0].total, 4);
    /// assert_eq!(team.attributes[1].average, 2.5);
    /// assert_eq!(team.grand_total, 9);
    /// assert_eq!(team.grand_average, 4.5);
    /// ```
    pub fn compute(roster: &Roster, members: &[usize]) -> Result<Self> {
        let schema = roster.schema_or_positional();
        Self::compute_named(roster, &schema, members)
    }

    fn compute_named(roster: &Roster, schema: &AttributeSchema, members: &[usize]) -> Result<Self> {
        if members.is_empty() {
            return Err(TeamForgeError::EmptyGroup);
        }
        let size = members.len();
        let divisor = size as f64;

        let attributes: Vec<AttributeAggregate> = schema
            .names()
            .iter()
            .enumerate()
            .map(|(attr, name)| {
                let total: u64 = members
                    .iter()
                    .map(|&i| u64::from(roster.scores(i)[attr]))
                    .sum();
                AttributeAggregate {
                    name: name.clone(),
                    total,
                    average: total as f64 / divisor,
                }
            })
            .collect();

        let grand_total = attributes.iter().map(|a| a.total).sum();
        Ok(Self {
            size,
            attributes,
            grand_total,
            grand_average: grand_total as f64 / divisor,
        })
    }

    /// Looks up an attribute aggregate by name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeAggregate> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// Side-by-side comparison of the two teams of one partition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartitionReport {
    pub team_a_ids: Vec<String>,
    pub team_b_ids: Vec<String>,
    pub team_a: TeamAggregate,
    pub team_b: TeamAggregate,
    /// Aggregate over the whole roster.
    pub combined: TeamAggregate,
}

impl PartitionReport {
    pub fn build(roster: &Roster, partition: &PartitionCandidate) -> Result<Self> {
        let schema = roster.schema_or_positional();
        let everyone: Vec<usize> = (0..roster.len()).collect();

        Ok(Self {
            team_a_ids: roster.ids_of(partition.group_a()),
            team_b_ids: roster.ids_of(partition.group_b()),
            team_a: TeamAggregate::compute_named(roster, &schema, partition.group_a())?,
            team_b: TeamAggregate::compute_named(roster, &schema, partition.group_b())?,
            combined: TeamAggregate::compute_named(roster, &schema, &everyone)?,
        })
    }

    /// Per-attribute `(name, team_a_total, team_b_total)` rows followed by
    /// a `"total"` row, in schema order.
    pub fn comparison_rows(&self) -> Vec<(String, u64, u64)> {
        self.team_a
            .attributes
            .iter()
            .zip(&self.team_b.attributes)
            .map(|(a, b)| (a.name.clone(), a.total, b.total))
            .chain(std::iter::once((
                "total".to_string(),
                self.team_a.grand_total,
                self.team_b.grand_total,
            )))
            .collect()
    }
}
