//! Roster fixtures.
//!
//! The hand-built rosters carry their expected outcomes in the doc comment
//! of each constructor.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use teamforge_core::{AttributeSchema, Roster, RosterEntry};

/// Four players rated 1 on all nine attributes.
///
/// Every split is perfect; three unordered splits exist.
pub fn uniform_four() -> Roster {
    Roster::from_scores(vec![vec![1u32; 9]; 4]).expect("valid fixture")
}

/// Players rated 1, 2, 3 and 4 on all nine attributes.
///
/// The only perfect split is `{0, 3}` vs `{1, 2}`.
pub fn gradient_four() -> Roster {
    Roster::from_scores((1..=4u32).map(|v| vec![v; 9])).expect("valid fixture")
}

/// Five players, three attributes.
///
/// Legacy selection keeps `{2, 3}` (6imb/6tot); lexicographic selection
/// finds `{3, 4}` (6imb/4tot).
pub fn odd_five() -> Roster {
    Roster::from_scores(vec![
        [3u32, 1, 2],
        [1, 4, 2],
        [2, 2, 5],
        [4, 3, 1],
        [2, 5, 3],
    ])
    .expect("valid fixture")
}

/// Two attributes, chosen so that the second candidate improves imbalance
/// without improving total difference.
///
/// Candidates in scan order: `{0,1}` 10imb/2tot, `{0,2}` 4imb/4tot,
/// `{0,3}` 10imb/6tot. Legacy selection returns `{0,1}` with best
/// imbalance 4 and total difference 2.
pub fn stale_primary_four() -> Roster {
    Roster::from_scores(vec![[5u32, 5], [5, 0], [3, 3], [1, 6]]).expect("valid fixture")
}

/// Six players on the nine football attributes.
///
/// Legacy: `{0,1,2}` (18imb/2tot), best imbalance 16.
/// Lexicographic: `{0,1,4}` (16imb/4tot).
pub fn varied_six() -> Roster {
    let entries = [
        ("Ana", [3u32, 4, 2, 5, 1, 3, 2, 4, 3]),
        ("Bruno", [5, 2, 4, 3, 3, 1, 4, 2, 5]),
        ("Carla", [2, 5, 3, 4, 4, 2, 1, 3, 2]),
        ("Diego", [4, 3, 5, 2, 2, 4, 3, 5, 1]),
        ("Elena", [1, 4, 2, 3, 5, 3, 2, 1, 4]),
        ("Facundo", [3, 2, 4, 5, 3, 2, 5, 3, 3]),
    ]
    .into_iter()
    .map(|(name, scores)| RosterEntry::new(name, scores))
    .collect();

    Roster::new(entries)
        .and_then(|r| r.with_schema(AttributeSchema::football()))
        .expect("valid fixture")
}

/// Deterministic roster of `n` players rated 1-10 on nine attributes.
///
/// Ratings come from a `StdRng` seeded with `seed`, so the same arguments
/// always produce the same roster.
pub fn club_roster(n: usize, seed: u64) -> Roster {
    let mut rng = StdRng::seed_from_u64(seed);

    let entries = (0..n)
        .map(|i| {
            let scores: Vec<u32> = (0..9).map(|_| rng.random_range(1..=10)).collect();
            RosterEntry::new(format!("player-{i:02}"), scores)
        })
        .collect();

    Roster::new(entries)
        .and_then(|r| r.with_schema(AttributeSchema::football()))
        .expect("club_roster requires n >= 3")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_club_roster_is_seeded() {
        let roster = club_roster(8, 42);
        assert_eq!(roster, club_roster(8, 42));
        assert_eq!(roster.attribute_count(), 9);
        assert!(roster.validate_scale(teamforge_core::RatingScale::OneToTen).is_ok());
        assert_ne!(roster, club_roster(8, 43));
    }
}
