//! Lexicographic enumeration of half-roster combinations.
//!
//! For a roster of `n` players, every combination of `k = n / 2` indices is
//! a candidate `group_a`; its complement is `group_b`. When `n` is even the
//! combination at rank `r` and the one at rank `C(n, k) - 1 - r` are
//! complements of each other, so only the first half of the sequence is
//! produced. Odd rosters split into groups of different sizes and are
//! enumerated in full.

use std::iter::FusedIterator;

use smallvec::SmallVec;
use teamforge_core::PartitionCandidate;

/// Binomial coefficient `C(n, k)`, saturating at `u64::MAX`.
///
/// # Examples
///
/// ```
/// use teamforge_solver::enumerator::binomial;
///
/// assert_eq!(binomial(4, 2), 6);
/// assert_eq!(binomial(10, 5), 252);
/// assert_eq!(binomial(3, 5), 0);
/// ```
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result * (n - i) as u128 / (i + 1) as u128;
        if result > u64::MAX as u128 {
            return u64::MAX;
        }
    }
    result as u64
}

/// Number of candidates enumerated for a roster of `n` players.
///
/// `C(n, n/2)` for odd `n`; half of it, rounded up, for even `n`.
pub fn candidate_count(n: usize) -> u64 {
    let all = binomial(n, n / 2);
    if n % 2 == 0 {
        all / 2 + all % 2
    } else {
        all
    }
}

/// Iterator over [`PartitionCandidate`]s in lexicographic order of `group_a`.
///
/// # Examples
///
/// ```
/// use teamforge_solver::CombinationEnumerator;
///
/// let groups: Vec<Vec<usize>> = CombinationEnumerator::new(4)
///     .map(|c| c.group_a().to_vec())
///     .collect();
///
/// // {1,2}, {1,3} and {2,3} are mirrors of the three below.
/// assert_eq!(groups, vec![vec![0, 1], vec![0, 2], vec![0, 3]]);
/// ```
#[derive(Debug, Clone)]
pub struct CombinationEnumerator {
    n: usize,
    k: usize,
    current: SmallVec<[usize; 16]>,
    remaining: u64,
}

impl CombinationEnumerator {
    pub fn new(n: usize) -> Self {
        let k = n / 2;
        Self {
            n,
            k,
            current: (0..k).collect(),
            remaining: candidate_count(n),
        }
    }

    /// Roster size being enumerated.
    pub fn roster_len(&self) -> usize {
        self.n
    }

    /// Size of every `group_a` produced.
    pub fn group_size(&self) -> usize {
        self.k
    }

    /// Candidates not yet produced.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    // Advances `current` to its lexicographic successor.
    fn advance(&mut self) {
        let (n, k) = (self.n, self.k);
        let Some(i) = (0..k).rev().find(|&i| self.current[i] < n - k + i) else {
            return;
        };
        self.current[i] += 1;
        for j in i + 1..k {
            self.current[j] = self.current[j - 1] + 1;
        }
    }
}

impl Iterator for CombinationEnumerator {
    type Item = PartitionCandidate;

    fn next(&mut self) -> Option<PartitionCandidate> {
        if self.remaining == 0 {
            return None;
        }
        let candidate = PartitionCandidate::from_combination(self.n, &self.current);
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(r) => (r, Some(r)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for CombinationEnumerator {}
