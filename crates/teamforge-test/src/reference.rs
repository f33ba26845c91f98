//! Exhaustive reference scoring.
//!
//! Deliberately naive: enumerates every subset by bitmask, with no symmetry
//! pruning, so solver results can be checked against it.

use teamforge_core::{BalanceScore, Roster};

/// Scores a split given as two index lists.
pub fn score_split(roster: &Roster, group_a: &[usize], group_b: &[usize]) -> BalanceScore {
    let sums = |group: &[usize]| -> Vec<i64> {
        (0..roster.attribute_count())
            .map(|attr| {
                group
                    .iter()
                    .map(|&i| i64::from(roster.scores(i)[attr]))
                    .sum()
            })
            .collect()
    };
    let a = sums(group_a);
    let b = sums(group_b);

    let imbalance: i64 = a.iter().zip(&b).map(|(x, y)| (x - y).abs()).sum();
    let total = (a.iter().sum::<i64>() - b.iter().sum::<i64>()).abs();
    BalanceScore::of(imbalance as u64, total as u64)
}

/// Every ordered split with `|group_a| = n / 2`, with its score.
///
/// Only usable for small rosters (`n <= 20`).
pub fn all_splits(roster: &Roster) -> Vec<(Vec<usize>, Vec<usize>, BalanceScore)> {
    let n = roster.len();
    assert!(n <= 20, "reference enumeration is exponential");
    let k = n / 2;

    (0u32..(1 << n))
        .filter(|mask| mask.count_ones() as usize == k)
        .map(|mask| {
            let (a, b): (Vec<usize>, Vec<usize>) = (0..n).partition(|&i| mask & (1 << i) != 0);
            let score = score_split(roster, &a, &b);
            (a, b, score)
        })
        .collect()
}
