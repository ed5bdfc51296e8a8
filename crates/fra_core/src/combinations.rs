//! Same-popcount bit pattern enumeration.

/// Iterator over all `n`-bit integers with exactly `k` bits set, in
/// strictly increasing order.
///
/// Starts at the integer with the `k` lowest bits set and advances with
/// the next-same-popcount bit trick, so state is constant-size no matter
/// how many combinations exist. `k == 0` yields exactly `0`; `k > n`
/// yields nothing. Early-terminating searches fall out of iterator
/// laziness (`.any`, `.find`).
#[derive(Debug, Clone)]
pub struct Combinations {
    current: usize,
    last: usize,
    done: bool,
}

impl Combinations {
    /// Creates the enumeration of `n`-bit integers with `k` bits set.
    pub fn new(n: usize, k: usize) -> Self {
        if k > n {
            return Self {
                current: 0,
                last: 0,
                done: true,
            };
        }
        let first = (1usize << k) - 1;
        Self {
            current: first,
            last: first << (n - k),
            done: false,
        }
    }
}

impl Iterator for Combinations {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.done {
            return None;
        }

        let combination = self.current;
        if combination == self.last {
            self.done = true;
        } else {
            // Smallest next integer with the same popcount: ripple-carry
            // the lowest run of set bits, then drop the displaced bits
            // back to the bottom.
            let lowest = combination & combination.wrapping_neg();
            let ripple = combination + lowest;
            self.current = ripple | (((combination ^ ripple) / lowest) >> 2);
        }

        Some(combination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binomial(n: usize, k: usize) -> usize {
        if k > n {
            return 0;
        }
        let mut result = 1usize;
        for i in 0..k {
            result = result * (n - i) / (i + 1);
        }
        result
    }

    #[test]
    fn yields_binomial_many_distinct_values() {
        for n in 0..=10 {
            for k in 0..=n {
                let values: Vec<usize> = Combinations::new(n, k).collect();
                assert_eq!(values.len(), binomial(n, k), "n={n} k={k}");

                let mut deduplicated = values.clone();
                deduplicated.dedup();
                assert_eq!(deduplicated.len(), values.len());
            }
        }
    }

    #[test]
    fn values_are_strictly_increasing_with_k_bits_in_range() {
        let n = 8;
        for k in 1..=n {
            let mut previous = None;
            for value in Combinations::new(n, k) {
                assert_eq!(value.count_ones() as usize, k);
                assert!(value < 1 << n);
                if let Some(previous) = previous {
                    assert!(value > previous);
                }
                previous = Some(value);
            }
        }
    }

    #[test]
    fn zero_bits_yields_exactly_zero() {
        assert_eq!(Combinations::new(5, 0).collect::<Vec<_>>(), vec![0]);
        assert_eq!(Combinations::new(0, 0).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn more_bits_than_positions_yields_nothing() {
        assert_eq!(Combinations::new(3, 4).count(), 0);
        assert_eq!(Combinations::new(0, 1).count(), 0);
    }

    #[test]
    fn full_width_yields_single_all_ones_value() {
        assert_eq!(Combinations::new(4, 4).collect::<Vec<_>>(), vec![0b1111]);
    }

    #[test]
    fn search_terminates_at_first_match() {
        let mut inspected = 0;
        let found = Combinations::new(6, 2).any(|combination| {
            inspected += 1;
            combination == 0b000101
        });
        assert!(found);
        // 0b000011 then 0b000101: second combination in order.
        assert_eq!(inspected, 2);
    }

    #[test]
    fn exhaustive_search_without_match_reports_none() {
        assert!(!Combinations::new(5, 2).any(|combination| combination.count_ones() == 3));
    }
}
