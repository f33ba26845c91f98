//! Attribute naming and rating scales.

use std::fmt;

/// Ordered names of the attributes in every score vector of a roster.
///
/// The engine itself only needs the count; names are carried through to
/// aggregates so callers can render them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeSchema {
    names: Vec<String>,
}

impl AttributeSchema {
    pub fn new<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The nine field-player ratings used by the club roster.
    pub fn football() -> Self {
        Self::new([
            "speed",
            "stamina",
            "ball_control",
            "passing",
            "shooting",
            "defense",
            "goalkeeping",
            "strength",
            "vision",
        ])
    }

    /// Positional names (`attr_0`, `attr_1`, ...) for unnamed vectors.
    pub fn positional(count: usize) -> Self {
        Self::new((0..count).map(|i| format!("attr_{i}")))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the position of the named attribute.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

/// Allowed range for individual ratings.
///
/// Players are rated either on a 1-5 or a 1-10 scale; `Unbounded` accepts
/// any non-negative value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RatingScale {
    #[cfg_attr(feature = "serde", serde(rename = "1-5"))]
    OneToFive,
    #[cfg_attr(feature = "serde", serde(rename = "1-10"))]
    OneToTen,
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "unbounded"))]
    Unbounded,
}

impl RatingScale {
    /// Inclusive bounds, or `None` when unbounded.
    pub const fn bounds(&self) -> Option<(u32, u32)> {
        match self {
            RatingScale::OneToFive => Some((1, 5)),
            RatingScale::OneToTen => Some((1, 10)),
            RatingScale::Unbounded => None,
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        self.bounds()
            .map_or(true, |(lo, hi)| (lo..=hi).contains(&value))
    }
}

impl fmt::Display for RatingScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bounds() {
            Some((lo, hi)) => write!(f, "{lo}-{hi}"),
            None => write!(f, "unbounded"),
        }
    }
}
