//! Worst-case recovery failure metrics.
//!
//! Both searches walk loss patterns (bitmasks of lost positions) and test
//! the complementary delivery pattern against the reachable set: a loss
//! pattern defeats recovery exactly when its delivery pattern is absent
//! from the set. Searching upward from weight one finds the minimum by
//! construction; `-1` marks perfect recovery within the domain.

use std::collections::HashSet;

use crate::combinations::Combinations;

/// Key recovery metrics derived from a reachable-set result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoveryCharacteristics {
    /// Minimum number of lost packets that defeats recovery, or `-1` when
    /// no loss pattern does.
    pub min_lost_for_failure: i32,

    /// Minimum number of consecutive lost packets that defeats recovery,
    /// or `-1` when no consecutive run does.
    pub min_consecutive_lost_for_failure: i32,
}

impl RecoveryCharacteristics {
    /// Computes both metrics for an `n`/`k` configuration from a
    /// reachable-vertex set produced by BFS over the recovery graph.
    ///
    /// # Arguments
    ///
    /// * `n` - Number of data packets
    /// * `k` - Number of parity packets
    /// * `reachable` - Reachable vertices (order irrelevant)
    pub fn from_reachable(n: usize, k: usize, reachable: &[usize]) -> Self {
        let total = n + k;
        let reachable_set: HashSet<usize> = reachable.iter().copied().collect();

        Self {
            min_lost_for_failure: min_lost_for_failure(total, &reachable_set),
            min_consecutive_lost_for_failure: min_consecutive_lost_for_failure(
                total,
                &reachable_set,
            ),
        }
    }
}

fn is_non_recoverable(loss_pattern: usize, total: usize, reachable: &HashSet<usize>) -> bool {
    let delivery_pattern = ((1usize << total) - 1) ^ loss_pattern;
    !reachable.contains(&delivery_pattern)
}

/// Finds the smallest loss count whose patterns include a non-recoverable
/// one, trying each count from one upward and stopping at the first
/// non-recoverable pattern of that weight.
fn min_lost_for_failure(total: usize, reachable: &HashSet<usize>) -> i32 {
    for num_lost in 1..=total {
        let found = Combinations::new(total, num_lost)
            .any(|loss_pattern| is_non_recoverable(loss_pattern, total, reachable));
        if found {
            return num_lost as i32;
        }
    }
    -1
}

/// Finds the shortest consecutive loss run that is non-recoverable at any
/// start offset, trying run lengths from one upward.
fn min_consecutive_lost_for_failure(total: usize, reachable: &HashSet<usize>) -> i32 {
    for run_length in 1..=total {
        for start in 0..=total - run_length {
            let loss_pattern = ((1usize << run_length) - 1) << start;
            if is_non_recoverable(loss_pattern, total, reachable) {
                return run_length as i32;
            }
        }
    }
    -1
}
